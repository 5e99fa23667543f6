use crate::engine::constants::SETTLE_EPSILON;
use crate::models::{Assignment, Diner, DinerId, Item};

/// Money and calorie accumulator for one diner.
#[derive(Debug, Clone, Default)]
pub struct DinerTotals {
    pub diner_id: DinerId,
    /// Post-discount amount owed.
    pub total: f64,
    /// Calories are never discounted.
    pub calories: f64,
}

/// Aggregate totals for the whole bill, recomputed from scratch on every
/// state change.
#[derive(Debug, Clone, Default)]
pub struct BillTotals {
    /// Sum of every item price, before discount.
    pub raw_total: f64,
    /// `raw_total * (1 - discount/100)`.
    pub discounted_total: f64,
    /// Sum of all post-discount per-diner totals.
    pub assigned_total: f64,
    /// `discounted_total - assigned_total`; carries the unassigned items' worth.
    pub remaining_total: f64,
    /// One entry per diner, in diner-list order.
    pub per_diner: Vec<DinerTotals>,
}

impl BillTotals {
    /// True once the discounted total is fully distributed among diners.
    ///
    /// Requires a positive bill so an empty session never reads as settled.
    pub fn is_settled(&self) -> bool {
        self.discounted_total > 0.0 && self.remaining_total <= SETTLE_EPSILON
    }

    /// Totals entry for one diner.
    pub fn for_diner(&self, diner_id: DinerId) -> Option<&DinerTotals> {
        self.per_diner.iter().find(|t| t.diner_id == diner_id)
    }
}

/// Compute all bill totals from the current items, diners, and discount.
///
/// Directly assigned items accumulate onto their diner; shared items divide
/// evenly across every current diner (exact float division, no remainder
/// redistribution); unassigned items count only toward the bill total. The
/// discount applies to money, never to calories.
pub fn compute_totals(items: &[Item], diners: &[Diner], discount: u8) -> BillTotals {
    let raw_total: f64 = items.iter().map(|i| i.price).sum();
    let multiplier = discount_multiplier(discount);

    let mut per_diner: Vec<DinerTotals> = diners
        .iter()
        .map(|d| DinerTotals {
            diner_id: d.id,
            ..Default::default()
        })
        .collect();

    let diner_count = diners.len();

    for item in items {
        match item.assignment {
            Assignment::Diner(owner) => {
                if let Some(acc) = per_diner.iter_mut().find(|t| t.diner_id == owner) {
                    acc.total += item.price;
                    acc.calories += item.calories;
                }
            }
            Assignment::Shared => {
                // With zero diners the item still counts toward raw_total
                // but contributes to nobody.
                if diner_count > 0 {
                    let share_price = item.price / diner_count as f64;
                    let share_calories = item.calories / diner_count as f64;
                    for acc in per_diner.iter_mut() {
                        acc.total += share_price;
                        acc.calories += share_calories;
                    }
                }
            }
            Assignment::Unassigned => {}
        }
    }

    for acc in per_diner.iter_mut() {
        acc.total *= multiplier;
    }

    let discounted_total = raw_total * multiplier;
    let assigned_total: f64 = per_diner.iter().map(|t| t.total).sum();
    let remaining_total = discounted_total - assigned_total;

    BillTotals {
        raw_total,
        discounted_total,
        assigned_total,
        remaining_total,
        per_diner,
    }
}

/// `1 - discount/100`, with the discount already clamped to 0..=100.
#[inline]
pub fn discount_multiplier(discount: u8) -> f64 {
    1.0 - f64::from(discount.min(100)) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, price: f64, calories: f64, assignment: Assignment) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            price,
            calories,
            description: String::new(),
            assignment,
        }
    }

    fn diner(id: u64) -> Diner {
        Diner::new(id, format!("Person {}", id))
    }

    #[test]
    fn test_empty_bill() {
        let totals = compute_totals(&[], &[], 0);
        assert_eq!(totals.raw_total, 0.0);
        assert_eq!(totals.remaining_total, 0.0);
        assert!(!totals.is_settled());
    }

    #[test]
    fn test_direct_assignment() {
        let items = vec![
            item(1, 1000.0, 800.0, Assignment::Diner(1)),
            item(2, 500.0, 300.0, Assignment::Unassigned),
        ];
        let diners = vec![diner(1)];

        let totals = compute_totals(&items, &diners, 0);
        assert_eq!(totals.raw_total, 1500.0);
        let t = totals.for_diner(1).unwrap();
        assert_eq!(t.total, 1000.0);
        assert_eq!(t.calories, 800.0);
        assert_eq!(totals.remaining_total, 500.0);
    }

    #[test]
    fn test_shared_split_symmetry() {
        let items = vec![item(1, 100.0, 600.0, Assignment::Shared)];
        let diners = vec![diner(1), diner(2), diner(3)];

        let totals = compute_totals(&items, &diners, 0);
        let mut recombined = 0.0;
        for t in &totals.per_diner {
            assert!((t.total - 100.0 / 3.0).abs() < 1e-9);
            assert!((t.calories - 200.0).abs() < 1e-9);
            recombined += t.total;
        }
        assert!((recombined - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shared_with_no_diners() {
        let items = vec![item(1, 200.0, 0.0, Assignment::Shared)];
        let totals = compute_totals(&items, &[], 0);

        assert_eq!(totals.raw_total, 200.0);
        assert_eq!(totals.assigned_total, 0.0);
        assert_eq!(totals.remaining_total, 200.0);
    }

    #[test]
    fn test_discount_applies_to_money_not_calories() {
        let items = vec![item(1, 1000.0, 500.0, Assignment::Diner(1))];
        let diners = vec![diner(1)];

        let totals = compute_totals(&items, &diners, 25);
        let t = totals.for_diner(1).unwrap();
        assert!((t.total - 750.0).abs() < 1e-9);
        assert_eq!(t.calories, 500.0);
        assert!((totals.discounted_total - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_assignment_to_missing_diner_contributes_nothing() {
        // Stale diner id: the item's value stays in remaining.
        let items = vec![item(1, 100.0, 0.0, Assignment::Diner(42))];
        let diners = vec![diner(1)];

        let totals = compute_totals(&items, &diners, 0);
        assert_eq!(totals.assigned_total, 0.0);
        assert_eq!(totals.remaining_total, 100.0);
    }

    #[test]
    fn test_settled_requires_positive_total() {
        let totals = compute_totals(&[], &[diner(1)], 0);
        assert!(!totals.is_settled());

        let items = vec![item(1, 50.0, 0.0, Assignment::Diner(1))];
        let totals = compute_totals(&items, &[diner(1)], 0);
        assert!(totals.is_settled());
    }

    #[test]
    fn test_discount_multiplier() {
        assert_eq!(discount_multiplier(0), 1.0);
        assert!((discount_multiplier(10) - 0.9).abs() < 1e-12);
        assert_eq!(discount_multiplier(100), 0.0);
    }
}
