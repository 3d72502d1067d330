//! Aggregation of statement records and manual entries into one snapshot.
//!
//! An [`Analysis`] is a plain value owned by the caller. Nothing here keeps
//! a "last analysis" around; whoever needs it later (advice, a report) is
//! handed the value explicitly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::calculations::common::round_half_up;
use tax_core::{FinancialProfile, Regime, RegimeComparison};
use tracing::{info, warn};

use crate::categorize::{CategoryRules, DeductionBucket};
use crate::{
    ManualCategory, ManualEntry, RawTransaction, RecordRejection, Transaction, TransactionKind,
};

/// Running totals across all admitted transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTotals {
    pub total_income: Decimal,
    pub investments_80c: Decimal,
    pub medical_80d: Decimal,
    pub expenses: Decimal,
}

/// `total + amount`, or a rejection when the sum leaves `Decimal` range.
fn add_to(
    total: Decimal,
    amount: Decimal,
) -> Result<Decimal, RecordRejection> {
    total
        .checked_add(amount)
        .ok_or(RecordRejection::TotalOverflow(amount))
}

impl StatementTotals {
    /// Adds `amount` to income, or to expenses and the deduction `bucket`.
    ///
    /// All or nothing: on overflow the totals are left unchanged.
    fn add(
        &mut self,
        amount: Decimal,
        income: bool,
        bucket: DeductionBucket,
    ) -> Result<(), RecordRejection> {
        let mut next = self.clone();
        if income {
            next.total_income = add_to(next.total_income, amount)?;
        } else {
            next.expenses = add_to(next.expenses, amount)?;
            match bucket {
                DeductionBucket::Section80C => {
                    next.investments_80c = add_to(next.investments_80c, amount)?;
                }
                DeductionBucket::Section80D => {
                    next.medical_80d = add_to(next.medical_80d, amount)?;
                }
                DeductionBucket::None => {}
            }
        }
        *self = next;
        Ok(())
    }

    fn record(
        &mut self,
        txn: &Transaction,
        bucket: DeductionBucket,
    ) -> Result<(), RecordRejection> {
        self.add(txn.amount, txn.kind == TransactionKind::Credit, bucket)
    }

    fn record_manual(
        &mut self,
        entry: &ManualEntry,
    ) -> Result<(), RecordRejection> {
        let bucket = match entry.category {
            ManualCategory::Section80C => DeductionBucket::Section80C,
            ManualCategory::Section80D => DeductionBucket::Section80D,
            ManualCategory::Income | ManualCategory::Expense => DeductionBucket::None,
        };
        self.add(entry.amount, entry.category == ManualCategory::Income, bucket)
    }

    fn rounded(self) -> Self {
        Self {
            total_income: round_half_up(self.total_income),
            investments_80c: round_half_up(self.investments_80c),
            medical_80d: round_half_up(self.medical_80d),
            expenses: round_half_up(self.expenses),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub totals: StatementTotals,

    /// Admitted transactions, manual entries first (most recent at the top),
    /// then statement rows in file order.
    pub transactions: Vec<Transaction>,

    /// Records rejected by validation or because they overflow the totals.
    pub skipped: usize,
}

impl Analysis {
    /// Validates and aggregates raw statement records.
    ///
    /// Malformed records are skipped, logged with their 1-based position and
    /// the reason, and counted in [`Analysis::skipped`].
    pub fn from_records<I>(
        records: I,
        rules: &CategoryRules,
    ) -> Self
    where
        I: IntoIterator<Item = RawTransaction>,
    {
        let mut totals = StatementTotals::default();
        let mut transactions = Vec::new();
        let mut skipped = 0;

        for (idx, raw) in records.into_iter().enumerate() {
            let admitted = Transaction::try_from(raw).and_then(|txn| {
                totals.record(&txn, rules.categorize(&txn))?;
                Ok(txn)
            });
            match admitted {
                Ok(txn) => transactions.push(txn),
                Err(reason) => {
                    warn!(record = idx + 1, %reason, "skipping malformed statement record");
                    skipped += 1;
                }
            }
        }

        info!(
            admitted = transactions.len(),
            skipped, "aggregated statement records"
        );

        Self {
            totals: totals.rounded(),
            transactions,
            skipped,
        }
    }

    /// Folds manual entries into the totals and the transaction list.
    ///
    /// An entry that would overflow the totals is skipped and counted like a
    /// malformed statement record.
    pub fn add_manual_entries(
        &mut self,
        entries: &[ManualEntry],
    ) {
        for (idx, entry) in entries.iter().enumerate() {
            match self.totals.record_manual(entry) {
                Ok(()) => self.transactions.insert(0, entry.to_transaction()),
                Err(reason) => {
                    warn!(entry = idx + 1, %reason, "skipping manual entry");
                    self.skipped += 1;
                }
            }
        }
    }

    /// Advisor input for this analysis.
    pub fn profile(
        &self,
        age: u32,
        regime: Regime,
    ) -> FinancialProfile {
        FinancialProfile {
            total_income: self.totals.total_income,
            age,
            investments_80c: self.totals.investments_80c,
            medical_80d: self.totals.medical_80d,
            regime,
        }
    }

    pub fn comparison(
        &self,
        age: u32,
    ) -> RegimeComparison {
        RegimeComparison::compare(&self.profile(age, Regime::New))
    }
}
