//! Human-readable breakdown written onto the summary transaction.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PayrollEntry, PayrollMonth};

/// Formats an amount with two decimals and thousands separators.
///
/// ```
/// use payroll_engine::payroll::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(29_000_000, 2)), "290,000.00");
/// assert_eq!(format_amount(Decimal::new(-12345, 1)), "-1,234.50");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    );
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Renders the summary description listing every included employee.
///
/// ```text
/// Monthly salaries for April 2026 (2 employees)
/// - Ada Obi: NGN 290,000.00
/// - Bola Ade: NGN 210,000.00 (Prorated: 20 of 30 days)
/// ```
pub fn render_breakdown(month: &PayrollMonth, entries: &[PayrollEntry], currency: &str) -> String {
    let noun = if entries.len() == 1 {
        "employee"
    } else {
        "employees"
    };
    let mut lines = vec![format!(
        "Monthly salaries for {} ({} {})",
        month.label(),
        entries.len(),
        noun
    )];

    lines.extend(entries.iter().map(|entry| {
        let mut line = format!(
            "- {}: {} {}",
            entry.employee_name,
            currency,
            format_amount(entry.net_salary)
        );
        if let Some(note) = &entry.proration_note {
            line.push(' ');
            line.push_str(note);
        }
        line
    }));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(name: &str, net: &str, note: Option<&str>) -> PayrollEntry {
        PayrollEntry {
            employee_id: name.to_lowercase(),
            employee_name: name.to_string(),
            prorated_base_salary: dec(net),
            original_base_salary: None,
            days_worked: None,
            total_days_in_month: None,
            proration_note: note.map(str::to_string),
            total_deductions: Decimal::ZERO,
            total_bonuses: Decimal::ZERO,
            net_salary: dec(net),
        }
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(dec("0")), "0.00");
        assert_eq!(format_amount(dec("999")), "999.00");
        assert_eq!(format_amount(dec("1000")), "1,000.00");
        assert_eq!(format_amount(dec("1234567.891")), "1,234,567.89");
        assert_eq!(format_amount(dec("193548.387096774193548387")), "193,548.39");
    }

    #[test]
    fn test_render_breakdown_lists_entries_and_notes() {
        let month = PayrollMonth::new(2026, 4).unwrap();
        let entries = vec![
            entry("Ada Obi", "290000", None),
            entry("Bola Ade", "210000", Some("(Prorated: 20 of 30 days)")),
        ];

        let text = render_breakdown(&month, &entries, "NGN");
        assert_eq!(
            text,
            "Monthly salaries for April 2026 (2 employees)\n\
             - Ada Obi: NGN 290,000.00\n\
             - Bola Ade: NGN 210,000.00 (Prorated: 20 of 30 days)"
        );
    }

    #[test]
    fn test_render_breakdown_singular() {
        let month = PayrollMonth::new(2026, 4).unwrap();
        let text = render_breakdown(&month, &[entry("Ada Obi", "1", None)], "NGN");
        assert!(text.starts_with("Monthly salaries for April 2026 (1 employee)"));
    }
}
