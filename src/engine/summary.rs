use crate::engine::constants::ZERO_DECIMAL_THRESHOLD;
use crate::engine::totals::BillTotals;
use crate::models::Diner;

/// Format a monetary amount for display.
///
/// No currency metadata survives extraction, so the display format is chosen
/// by magnitude: bills whose raw total exceeds the threshold are treated as
/// zero-decimal currency (rounded, `.`-grouped, e.g. `$ 12.500`), anything
/// else as decimal currency with two places (`$12.50`).
pub fn format_amount(amount: f64, raw_total: f64) -> String {
    if raw_total > ZERO_DECIMAL_THRESHOLD {
        format!("$ {}", group_thousands(amount.round() as i64))
    } else {
        format!("${:.2}", amount)
    }
}

/// Insert `.` thousands separators, es-CL style.
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    let leading = digits.len() % 3;
    if leading > 0 {
        grouped.push_str(&digits[..leading]);
    }
    for (i, chunk) in digits[leading..].as_bytes().chunks(3).enumerate() {
        if leading > 0 || i > 0 {
            grouped.push('.');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Build the plain-text bill summary, meant to be pasted into a chat app.
///
/// Header, discounted total (with the original in parentheses when a
/// discount applies), optional discount line, then one line per diner in
/// list order.
pub fn build_summary(
    label: &str,
    date: &str,
    diners: &[Diner],
    discount: u8,
    totals: &BillTotals,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} - {}\n", label, date));

    if discount > 0 {
        out.push_str(&format!(
            "Total: {} (original {})\n",
            format_amount(totals.discounted_total, totals.raw_total),
            format_amount(totals.raw_total, totals.raw_total),
        ));
        out.push_str(&format!("Discount: {}%\n", discount));
    } else {
        out.push_str(&format!(
            "Total: {}\n",
            format_amount(totals.discounted_total, totals.raw_total)
        ));
    }

    for diner in diners {
        let amount = totals.for_diner(diner.id).map(|t| t.total).unwrap_or(0.0);
        out.push_str(&format!(
            "{}: {}\n",
            diner.name,
            format_amount(amount, totals.raw_total)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::totals::compute_totals;
    use crate::models::{Assignment, Item};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(1500), "1.500");
        assert_eq!(group_thousands(12350), "12.350");
        assert_eq!(group_thousands(1234567), "1.234.567");
        assert_eq!(group_thousands(-4200), "-4.200");
    }

    #[test]
    fn test_format_amount_decimal_currency() {
        // Raw total at the threshold stays decimal
        assert_eq!(format_amount(12.5, 1000.0), "$12.50");
        assert_eq!(format_amount(0.0, 100.0), "$0.00");
    }

    #[test]
    fn test_format_amount_zero_decimal_currency() {
        assert_eq!(format_amount(12500.0, 15000.0), "$ 12.500");
        assert_eq!(format_amount(833.333, 2500.0), "$ 833");
    }

    #[test]
    fn test_summary_without_discount() {
        let items = vec![Item {
            id: 1,
            name: "Empanada".to_string(),
            price: 30.0,
            calories: 0.0,
            description: String::new(),
            assignment: Assignment::Diner(1),
        }];
        let diners = vec![Diner::new(1, "Ana".to_string())];
        let totals = compute_totals(&items, &diners, 0);

        let text = build_summary("La Picada", "2026-08-26", &diners, 0, &totals);
        assert_eq!(text, "La Picada - 2026-08-26\nTotal: $30.00\nAna: $30.00\n");
    }

    #[test]
    fn test_summary_with_discount_shows_original() {
        let items = vec![Item {
            id: 1,
            name: "Parrillada".to_string(),
            price: 15000.0,
            calories: 0.0,
            description: String::new(),
            assignment: Assignment::Shared,
        }];
        let diners = vec![
            Diner::new(1, "Ana".to_string()),
            Diner::new(2, "Beto".to_string()),
        ];
        let totals = compute_totals(&items, &diners, 10);

        let text = build_summary("Donde Juan", "2026-08-26", &diners, 10, &totals);
        assert!(text.contains("Total: $ 13.500 (original $ 15.000)"));
        assert!(text.contains("Discount: 10%"));
        assert!(text.contains("Ana: $ 6.750"));
        assert!(text.contains("Beto: $ 6.750"));
    }
}
