use serde::{Deserialize, Serialize};

use crate::engine::constants::AUTO_NAME_PREFIX;
use crate::models::item::DinerId;

/// A participant who will pay for some subset of the bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diner {
    pub id: DinerId,
    pub name: String,
}

impl Diner {
    pub fn new(id: DinerId, name: String) -> Self {
        Self { id, name }
    }

    /// The auto-generated name index, if this diner still carries one.
    ///
    /// Matches the exact `Person N` pattern; a renamed diner returns `None`.
    pub fn auto_name_index(&self) -> Option<u32> {
        self.name
            .strip_prefix(AUTO_NAME_PREFIX)
            .and_then(|rest| rest.parse().ok())
    }
}

/// Next auto-generated diner name: max existing `Person N` index + 1.
///
/// Gaps are not refilled, so removing "Person 2" never causes a later
/// add to reuse that name.
pub fn next_auto_name(diners: &[Diner]) -> String {
    let max_index = diners
        .iter()
        .filter_map(Diner::auto_name_index)
        .max()
        .unwrap_or(0);
    format!("{}{}", AUTO_NAME_PREFIX, max_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_name_index() {
        assert_eq!(Diner::new(1, "Person 3".to_string()).auto_name_index(), Some(3));
        assert_eq!(Diner::new(2, "Ana".to_string()).auto_name_index(), None);
        assert_eq!(Diner::new(3, "Person x".to_string()).auto_name_index(), None);
    }

    #[test]
    fn test_next_auto_name_empty() {
        assert_eq!(next_auto_name(&[]), "Person 1");
    }

    #[test]
    fn test_next_auto_name_skips_gaps() {
        let diners = vec![
            Diner::new(1, "Person 1".to_string()),
            Diner::new(2, "Person 3".to_string()),
        ];
        // Max + 1, not gap-fill
        assert_eq!(next_auto_name(&diners), "Person 4");
    }

    #[test]
    fn test_next_auto_name_ignores_custom_names() {
        let diners = vec![
            Diner::new(1, "Ana".to_string()),
            Diner::new(2, "Person 2".to_string()),
        ];
        assert_eq!(next_auto_name(&diners), "Person 3");
    }
}
