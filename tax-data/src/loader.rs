//! CSV loaders for bank statements and manual entries.
//!
//! ## Statement format
//!
//! Headers are matched by name, lowercase or capitalised; column order does
//! not matter and extra columns are ignored. Cells are trimmed.
//!
//! | Column        | Notes                                           |
//! |---------------|-------------------------------------------------|
//! | `description` | Free text                                       |
//! | `amount`      | Non-negative, e.g. `1,50,000.00` or `2500`      |
//! | `type`        | Contains `credit` or `debit` (any case)         |
//! | `category`    | Label used for 80C / 80D matching               |
//!
//! Statement rows are not validated here: every row comes back as a
//! [`RawTransaction`] and [`Analysis::from_records`](crate::Analysis::from_records)
//! decides what to admit.
//!
//! ## Manual entries format
//!
//! ```csv
//! description,amount,category
//! Freelance project,40000,income
//! PPF top-up,20000,80c
//! ```
//!
//! `category` is one of `income`, `80c`, `80d`, `expense`. Manual entries are
//! typed by a person, so a bad row fails the whole load with its row number
//! instead of being skipped.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::transaction::parse_amount;
use crate::{ManualCategory, ManualEntry, RawTransaction, RecordRejection, UnknownManualCategory};

#[derive(Debug, Error)]
pub enum StatementLoadError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manual entry on row {row}: {reason}")]
    InvalidManualAmount { row: usize, reason: RecordRejection },

    #[error("manual entry on row {row}: {source}")]
    InvalidManualCategory {
        row: usize,
        #[source]
        source: UnknownManualCategory,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ManualRow {
    #[serde(alias = "Description")]
    description: Option<String>,
    #[serde(alias = "Amount")]
    amount: Option<String>,
    #[serde(alias = "Category")]
    category: Option<String>,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File, StatementLoadError> {
    File::open(path).map_err(|source| StatementLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a manual row; `row` is 1-based for error messages.
fn convert_manual_row(
    row: ManualRow,
    row_number: usize,
) -> Result<ManualEntry, StatementLoadError> {
    let amount = parse_amount(row.amount.as_deref().unwrap_or_default()).map_err(|reason| {
        StatementLoadError::InvalidManualAmount {
            row: row_number,
            reason,
        }
    })?;

    let category: ManualCategory = row
        .category
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|source| StatementLoadError::InvalidManualCategory {
            row: row_number,
            source,
        })?;

    Ok(ManualEntry {
        description: row.description.unwrap_or_default(),
        amount,
        category,
    })
}

/// Loader for statement and manual-entry CSV data.
pub struct StatementLoader;

impl StatementLoader {
    /// Reads every statement row, in file order.
    pub fn parse_statement<R: Read>(reader: R) -> Result<Vec<RawTransaction>, StatementLoadError> {
        let records = csv_reader(reader)
            .deserialize::<RawTransaction>()
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = records.len(), "read statement rows");
        Ok(records)
    }

    /// Reads and validates manual entries, in file order.
    pub fn parse_manual_entries<R: Read>(
        reader: R
    ) -> Result<Vec<ManualEntry>, StatementLoadError> {
        csv_reader(reader)
            .deserialize::<ManualRow>()
            .enumerate()
            .map(|(idx, result)| convert_manual_row(result?, idx + 1))
            .collect()
    }

    pub fn load_statement_file(path: &Path) -> Result<Vec<RawTransaction>, StatementLoadError> {
        Self::parse_statement(open(path)?)
    }

    pub fn load_manual_file(path: &Path) -> Result<Vec<ManualEntry>, StatementLoadError> {
        Self::parse_manual_entries(open(path)?)
    }
}
