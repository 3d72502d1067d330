//! Entries typed in by the user rather than read from a statement.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Transaction, TransactionKind, TransactionSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManualCategory {
    Income,
    Section80C,
    Section80D,
    Expense,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised manual entry category '{0}' (expected income, 80c, 80d or expense)")]
pub struct UnknownManualCategory(pub String);

impl ManualCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Section80C => "80c",
            Self::Section80D => "80d",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for ManualCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManualCategory {
    type Err = UnknownManualCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "80c" => Ok(Self::Section80C),
            "80d" => Ok(Self::Section80D),
            "expense" => Ok(Self::Expense),
            _ => Err(UnknownManualCategory(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub description: String,
    pub amount: Decimal,
    pub category: ManualCategory,
}

impl ManualEntry {
    /// The entry as it appears in the transaction list.
    pub fn to_transaction(&self) -> Transaction {
        let kind = match self.category {
            ManualCategory::Income => TransactionKind::Credit,
            _ => TransactionKind::Debit,
        };

        Transaction {
            description: format!("(Manual) {}", self.description),
            amount: self.amount,
            kind,
            category: format!("Manual-{}", self.category.as_str().to_uppercase()),
            source: TransactionSource::Manual,
        }
    }
}
