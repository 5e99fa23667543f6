use serde::{Deserialize, Serialize};

/// Opaque identifier for an item, stable for the item's lifetime.
pub type ItemId = u64;

/// Opaque identifier for a diner.
pub type DinerId = u64;

/// Who pays for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Assignment {
    /// Nobody owns this item yet; its value sits in the remaining total.
    #[default]
    Unassigned,

    /// One diner owns the full price and calories.
    Diner(DinerId),

    /// Split evenly across every current diner.
    Shared,
}

impl Assignment {
    /// The diner id this assignment references, if any.
    #[inline]
    pub fn diner_id(&self) -> Option<DinerId> {
        match self {
            Assignment::Diner(id) => Some(*id),
            _ => None,
        }
    }
}

/// One priced line entry from the receipt (or manually added).
///
/// `calories == 0.0` means "unknown / not estimated", not literally zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub calories: f64,
    pub description: String,
    pub assignment: Assignment,
}

impl Item {
    pub fn new(id: ItemId, name: String, price: f64, calories: f64, description: String) -> Self {
        Self {
            id,
            name,
            price,
            calories,
            description,
            assignment: Assignment::Unassigned,
        }
    }

    /// Basic validation: finite, non-negative price and calories.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.price.is_finite()
            && self.price >= 0.0
            && self.calories.is_finite()
            && self.calories >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "#{} {}: {} ({} cal, {:?})",
            self.id, self.name, self.price, self.calories, self.assignment
        )
    }
}

/// Check that a candidate price is usable: a finite, non-negative number.
#[inline]
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}
