//! Statement ingestion for the tax engine.
//!
//! Reads bank statement and manual-entry CSVs, validates and categorises the
//! records, aggregates them into an [`Analysis`], and writes a CSV report.

pub mod analysis;
pub mod categorize;
pub mod loader;
pub mod manual;
pub mod report;
pub mod transaction;

pub use analysis::{Analysis, StatementTotals};
pub use categorize::{CategoryRuleError, CategoryRules, DeductionBucket};
pub use loader::{StatementLoadError, StatementLoader};
pub use manual::{ManualCategory, ManualEntry, UnknownManualCategory};
pub use report::{ReportError, ReportOptions, write_report};
pub use transaction::{
    RawTransaction, RecordRejection, Transaction, TransactionKind, TransactionSource,
};
