//! Statement transactions and the validation step that admits them.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::MAX_AMOUNT_RUPEES;
use thiserror::Error;

/// Direction of money movement as printed on the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// Case-insensitive substring match, so `"CR Credit"` and `"debit card"`
    /// both resolve.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower.contains("credit") {
            Some(Self::Credit)
        } else if lower.contains("debit") {
            Some(Self::Debit)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a transaction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionSource {
    Statement,
    Manual,
}

/// A validated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub source: TransactionSource,
}

/// A statement row exactly as read, every cell still text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    #[serde(alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "Amount")]
    pub amount: Option<String>,
    #[serde(rename = "type", alias = "Type")]
    pub kind: Option<String>,
    #[serde(alias = "Category")]
    pub category: Option<String>,
}

/// Why a raw record was not admitted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordRejection {
    #[error("missing amount")]
    MissingAmount,

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("negative amount {0}")]
    NegativeAmount(Decimal),

    #[error("amount {0} exceeds the supported maximum of {MAX_AMOUNT_RUPEES}")]
    AmountOutOfRange(Decimal),

    #[error("amount {0} overflows the running totals")]
    TotalOverflow(Decimal),

    #[error("unrecognised transaction type '{0}'")]
    UnknownType(String),
}

/// Strips whitespace, rupee signs and thousands separators.
fn normalize_amount(s: &str) -> String {
    s.trim()
        .trim_start_matches('₹')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

/// Parses an amount cell such as `"1,50,000.00"` or `"₹ 2500"`.
///
/// Accepts `0..=MAX_AMOUNT_RUPEES`.
pub fn parse_amount(s: &str) -> Result<Decimal, RecordRejection> {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Err(RecordRejection::MissingAmount);
    }

    let amount: Decimal = normalized
        .parse()
        .map_err(|_| RecordRejection::InvalidAmount(s.trim().to_string()))?;
    if amount < Decimal::ZERO {
        return Err(RecordRejection::NegativeAmount(amount));
    }
    if amount > Decimal::from(MAX_AMOUNT_RUPEES) {
        return Err(RecordRejection::AmountOutOfRange(amount));
    }
    Ok(amount)
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = RecordRejection;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let amount = parse_amount(raw.amount.as_deref().unwrap_or_default())?;

        let kind_text = raw.kind.unwrap_or_default();
        let kind = TransactionKind::parse(&kind_text)
            .ok_or_else(|| RecordRejection::UnknownType(kind_text.trim().to_string()))?;

        Ok(Self {
            description: raw.description.unwrap_or_default().trim().to_string(),
            amount,
            kind,
            category: raw.category.unwrap_or_default().trim().to_string(),
            source: TransactionSource::Statement,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn raw(
        amount: &str,
        kind: &str,
    ) -> RawTransaction {
        RawTransaction {
            description: Some("UPI Zomato".to_string()),
            amount: Some(amount.to_string()),
            kind: Some(kind.to_string()),
            category: Some("Other".to_string()),
        }
    }

    // -----------------------------------------------------------------------
    // parse_amount
    // -----------------------------------------------------------------------

    #[test]
    fn parse_amount_accepts_indian_grouping_and_symbol() {
        assert_eq!(parse_amount("1,50,000.00"), Ok(dec!(150000.00)));
        assert_eq!(parse_amount(" ₹ 2500 "), Ok(dec!(2500)));
    }

    #[test]
    fn parse_amount_rejects_empty() {
        assert_eq!(parse_amount("  "), Err(RecordRejection::MissingAmount));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(
            parse_amount("twelve"),
            Err(RecordRejection::InvalidAmount("twelve".to_string()))
        );
    }

    #[test]
    fn parse_amount_rejects_amounts_above_maximum() {
        assert_eq!(parse_amount("1000000000000000"), Ok(dec!(1000000000000000)));
        assert_eq!(
            parse_amount("79228162514264337593543950335"),
            Err(RecordRejection::AmountOutOfRange(Decimal::MAX))
        );
    }

    #[test]
    fn parse_amount_rejects_negative() {
        assert_eq!(
            parse_amount("-40"),
            Err(RecordRejection::NegativeAmount(dec!(-40)))
        );
    }

    // -----------------------------------------------------------------------
    // TransactionKind::parse
    // -----------------------------------------------------------------------

    #[test]
    fn kind_matches_substrings_case_insensitively() {
        assert_eq!(TransactionKind::parse("CREDIT"), Some(TransactionKind::Credit));
        assert_eq!(TransactionKind::parse("Debit Card"), Some(TransactionKind::Debit));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }

    // -----------------------------------------------------------------------
    // TryFrom<RawTransaction>
    // -----------------------------------------------------------------------

    #[test]
    fn valid_record_is_admitted() {
        let txn = Transaction::try_from(raw("450.50", "Debit")).expect("valid record");

        assert_eq!(txn.description, "UPI Zomato");
        assert_eq!(txn.amount, dec!(450.50));
        assert_eq!(txn.kind, TransactionKind::Debit);
        assert_eq!(txn.category, "Other");
        assert_eq!(txn.source, TransactionSource::Statement);
    }

    #[test]
    fn missing_cells_default_to_empty() {
        let record = RawTransaction {
            amount: Some("100".to_string()),
            kind: Some("credit".to_string()),
            ..RawTransaction::default()
        };

        let txn = Transaction::try_from(record).expect("valid record");

        assert_eq!(txn.description, "");
        assert_eq!(txn.category, "");
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert_eq!(
            Transaction::try_from(raw("100", "Reversal")),
            Err(RecordRejection::UnknownType("Reversal".to_string()))
        );
    }

    #[test]
    fn missing_amount_is_rejected() {
        let record = RawTransaction {
            kind: Some("Debit".to_string()),
            ..RawTransaction::default()
        };

        assert_eq!(
            Transaction::try_from(record),
            Err(RecordRejection::MissingAmount)
        );
    }
}
