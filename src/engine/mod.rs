pub mod constants;
pub mod summary;
pub mod totals;

pub use constants::*;
pub use summary::{build_summary, format_amount};
pub use totals::{compute_totals, discount_multiplier, BillTotals, DinerTotals};
