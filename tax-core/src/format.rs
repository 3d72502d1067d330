//! Indian digit grouping for rupee amounts.
//!
//! The last three integer digits form one group and every group above them
//! has two digits: 1500000 renders as `15,00,000`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with two decimals and Indian grouping.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::format::format_inr;
///
/// assert_eq!(format_inr(dec!(150000)), "1,50,000.00");
/// assert_eq!(format_inr(dec!(123456789.5)), "12,34,56,789.50");
/// assert_eq!(format_inr(dec!(999.999)), "1,000.00");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_digits(integer))
}

/// Formats whole rupees with Indian grouping and no decimals.
///
/// ```
/// use tax_core::format::format_inr_whole;
///
/// assert_eq!(format_inr_whole(111_800), "1,11,800");
/// assert_eq!(format_inr_whole(0), "0");
/// ```
pub fn format_inr_whole(amount: u64) -> String {
    group_digits(&amount.to_string())
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = rest.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&rest[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{last_three}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_inr(dec!(0)), "0.00");
        assert_eq!(format_inr(dec!(999)), "999.00");
    }

    #[test]
    fn thousands_use_single_separator() {
        assert_eq!(format_inr(dec!(1000)), "1,000.00");
        assert_eq!(format_inr(dec!(75000)), "75,000.00");
    }

    #[test]
    fn lakhs_and_crores_group_in_pairs() {
        assert_eq!(format_inr(dec!(150000)), "1,50,000.00");
        assert_eq!(format_inr(dec!(5000000)), "50,00,000.00");
        assert_eq!(format_inr(dec!(50000000)), "5,00,00,000.00");
    }

    #[test]
    fn fractions_round_half_up() {
        assert_eq!(format_inr(dec!(1234.565)), "1,234.57");
        assert_eq!(format_inr(dec!(1234.5)), "1,234.50");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_inr(dec!(-150000)), "-1,50,000.00");
    }

    #[test]
    fn whole_rupees() {
        assert_eq!(format_inr_whole(999), "999");
        assert_eq!(format_inr_whole(1_578_720), "15,78,720");
        assert_eq!(format_inr_whole(25_379_250), "2,53,79,250");
    }
}
