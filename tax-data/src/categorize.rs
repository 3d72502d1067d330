//! Keyword rules mapping a debit's category label to a deduction bucket.
//!
//! Labels come from whatever produced the statement (a bank export, an
//! upstream classifier, a person), so matching is loose: case-insensitive
//! regular expressions against the category text.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Transaction, TransactionKind};

/// Default pattern for section 80C investments.
pub const DEFAULT_80C_PATTERN: &str = "80c|lic|ppf";

/// Default pattern for section 80D medical insurance.
pub const DEFAULT_80D_PATTERN: &str = "health|medic";

/// Which deduction total a transaction feeds, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionBucket {
    Section80C,
    Section80D,
    None,
}

#[derive(Debug, Error)]
#[error("invalid {bucket} pattern '{pattern}': {source}")]
pub struct CategoryRuleError {
    bucket: &'static str,
    pattern: String,
    #[source]
    source: regex::Error,
}

/// Compiled categorisation rules. 80C is checked before 80D.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    section_80c: Regex,
    section_80d: Regex,
}

fn compile(
    bucket: &'static str,
    pattern: &str,
) -> Result<Regex, CategoryRuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| CategoryRuleError {
            bucket,
            pattern: pattern.to_string(),
            source,
        })
}

impl CategoryRules {
    pub fn new(
        section_80c: &str,
        section_80d: &str,
    ) -> Result<Self, CategoryRuleError> {
        Ok(Self {
            section_80c: compile("80C", section_80c)?,
            section_80d: compile("80D", section_80d)?,
        })
    }

    /// Rules built from [`DEFAULT_80C_PATTERN`] and [`DEFAULT_80D_PATTERN`].
    pub fn standard() -> Result<Self, CategoryRuleError> {
        Self::new(DEFAULT_80C_PATTERN, DEFAULT_80D_PATTERN)
    }

    /// Bucket for a category label, ignoring direction.
    pub fn bucket_for(
        &self,
        category: &str,
    ) -> DeductionBucket {
        if self.section_80c.is_match(category) {
            DeductionBucket::Section80C
        } else if self.section_80d.is_match(category) {
            DeductionBucket::Section80D
        } else {
            DeductionBucket::None
        }
    }

    /// Bucket for a transaction. Only debits can be deductions.
    pub fn categorize(
        &self,
        txn: &Transaction,
    ) -> DeductionBucket {
        match txn.kind {
            TransactionKind::Debit => self.bucket_for(&txn.category),
            TransactionKind::Credit => DeductionBucket::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::TransactionSource;

    fn rules() -> CategoryRules {
        CategoryRules::standard().expect("default patterns compile")
    }

    fn debit(category: &str) -> Transaction {
        Transaction {
            description: "test".to_string(),
            amount: dec!(1000),
            kind: TransactionKind::Debit,
            category: category.to_string(),
            source: TransactionSource::Statement,
        }
    }

    #[test]
    fn investment_labels_map_to_80c() {
        let rules = rules();

        assert_eq!(rules.bucket_for("80C"), DeductionBucket::Section80C);
        assert_eq!(rules.bucket_for("LIC Premium"), DeductionBucket::Section80C);
        assert_eq!(rules.bucket_for("ppf deposit"), DeductionBucket::Section80C);
    }

    #[test]
    fn medical_labels_map_to_80d() {
        let rules = rules();

        assert_eq!(rules.bucket_for("Health Insurance"), DeductionBucket::Section80D);
        assert_eq!(rules.bucket_for("Mediclaim"), DeductionBucket::Section80D);
    }

    #[test]
    fn other_labels_have_no_bucket() {
        let rules = rules();

        assert_eq!(rules.bucket_for("Rent"), DeductionBucket::None);
        assert_eq!(rules.bucket_for(""), DeductionBucket::None);
    }

    #[test]
    fn eighty_c_wins_over_eighty_d() {
        assert_eq!(
            rules().bucket_for("LIC health plan"),
            DeductionBucket::Section80C
        );
    }

    #[test]
    fn credits_are_never_deductions() {
        let mut txn = debit("80C");
        txn.kind = TransactionKind::Credit;

        assert_eq!(rules().categorize(&txn), DeductionBucket::None);
    }

    #[test]
    fn debits_use_category_label() {
        assert_eq!(rules().categorize(&debit("PPF")), DeductionBucket::Section80C);
    }

    #[test]
    fn custom_patterns_are_honoured() {
        let rules = CategoryRules::new("elss|nps", "hospital").expect("valid patterns");

        assert_eq!(rules.bucket_for("ELSS SIP"), DeductionBucket::Section80C);
        assert_eq!(rules.bucket_for("Apollo Hospital"), DeductionBucket::Section80D);
        assert_eq!(rules.bucket_for("LIC"), DeductionBucket::None);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = CategoryRules::new("(unclosed", "health").unwrap_err();

        assert!(err.to_string().starts_with("invalid 80C pattern '(unclosed'"));
    }
}
