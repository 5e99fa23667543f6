use crate::engine::summary::format_amount;
use crate::state::{BillState, ExtractionResult};

/// Display the full bill: items, their assignments, and running totals.
pub fn display_bill(state: &BillState) {
    let totals = state.totals();

    if state.items.is_empty() {
        println!("No items on the bill yet.");
        return;
    }

    println!();
    println!("=== Bill ({} items) ===", state.items.len());
    println!();

    let max_name_len = state.items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in state.items.iter().enumerate() {
        let calories = if item.calories > 0.0 {
            format!(" | {:.0} cal", item.calories)
        } else {
            String::new()
        };

        println!(
            "{:>3}. {:<width$} {:>10}{} -> {}",
            i + 1,
            item.name,
            format_amount(item.price, totals.raw_total),
            calories,
            state.assignment_label(item.assignment),
            width = max_name_len
        );
    }

    println!();
    println!("--- Totals ---");
    if state.discount > 0 {
        println!(
            "Bill total: {} (original {}, discount {}%)",
            format_amount(totals.discounted_total, totals.raw_total),
            format_amount(totals.raw_total, totals.raw_total),
            state.discount
        );
    } else {
        println!(
            "Bill total: {}",
            format_amount(totals.discounted_total, totals.raw_total)
        );
    }

    for diner in &state.diners {
        let (total, calories) = totals
            .for_diner(diner.id)
            .map(|t| (t.total, t.calories))
            .unwrap_or((0.0, 0.0));

        let marker = if state.current_diner == Some(diner.id) {
            " *"
        } else {
            ""
        };
        let calories = if calories > 0.0 {
            format!(" ({:.0} cal)", calories)
        } else {
            String::new()
        };

        println!(
            "  {}: {}{}{}",
            diner.name,
            format_amount(total, totals.raw_total),
            calories,
            marker
        );
    }

    println!(
        "Assigned: {} | Remaining: {}",
        format_amount(totals.assigned_total, totals.raw_total),
        format_amount(totals.remaining_total, totals.raw_total)
    );
    println!();
}

/// Celebration banner for the not-settled -> settled transition.
pub fn display_settled_banner() {
    println!();
    println!("=== All Settled Up! ===");
    println!("The bill is fully distributed among diners.");
    println!();
}

/// Display raw extraction entries (inspect mode).
pub fn display_extraction(result: &ExtractionResult) {
    println!();
    println!(
        "=== Extracted entries ({} items, language: {}) ===",
        result.items.len(),
        result.language
    );
    println!();

    for entry in &result.items {
        let calories = if entry.calories > 0.0 {
            format!(", {:.0} cal", entry.calories)
        } else {
            String::new()
        };
        let description = if entry.description.is_empty() {
            String::new()
        } else {
            format!(" - {}", entry.description)
        };

        println!("  {} - {}{}{}", entry.item, entry.price, calories, description);
    }

    println!();
}
