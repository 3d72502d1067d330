//! CSV report of an [`Analysis`].
//!
//! Sections, separated by a blank row:
//!
//! 1. `--- TAX SUMMARY REPORT ---`: income, expenses, 80C, 80D
//! 2. `--- TAX CALCULATION ---`: tax under each regime and the recommendation
//! 3. `--- SUGGESTIONS ---`: advisor output, one per row
//! 4. `--- DETAILED TRANSACTIONS ---`: every admitted transaction

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tax_core::{Regime, SavingsAdvisor};
use thiserror::Error;
use tracing::debug;

use crate::Analysis;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Context the report needs that the analysis does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub age: u32,
    /// Regime the taxpayer currently files under; drives the advice.
    pub regime: Regime,
    pub generated_on: NaiveDate,
}

/// Writes the report for `analysis` to `out`.
pub fn write_report<W: Write>(
    out: W,
    analysis: &Analysis,
    options: &ReportOptions,
) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
    let totals = &analysis.totals;
    let comparison = analysis.comparison(options.age);
    let advice = SavingsAdvisor::suggest(&analysis.profile(options.age, options.regime));

    writer.write_record(["--- TAX SUMMARY REPORT ---"])?;
    writer.write_record(["Generated", &options.generated_on.format("%Y-%m-%d").to_string()])?;
    writer.write_record(["Age", &options.age.to_string()])?;
    writer.write_record(["Total Income", &amount(totals.total_income)])?;
    writer.write_record(["Total Expenses", &amount(totals.expenses)])?;
    writer.write_record(["Investments (80C)", &amount(totals.investments_80c)])?;
    writer.write_record(["Medical (80D)", &amount(totals.medical_80d)])?;
    writer.write_record(["Skipped Records", &analysis.skipped.to_string()])?;
    blank_row(&mut writer)?;

    writer.write_record(["--- TAX CALCULATION ---"])?;
    writer.write_record(["New Regime Tax", &comparison.new_regime.total.to_string()])?;
    writer.write_record(["Old Regime Tax", &comparison.old_regime.total.to_string()])?;
    writer.write_record(["Recommendation", comparison.recommended.label()])?;
    blank_row(&mut writer)?;

    writer.write_record(["--- SUGGESTIONS ---"])?;
    for line in &advice {
        writer.write_record([line.as_str()])?;
    }
    blank_row(&mut writer)?;

    writer.write_record(["--- DETAILED TRANSACTIONS ---"])?;
    writer.write_record(["Description", "Category", "Amount", "Type"])?;
    for txn in &analysis.transactions {
        writer.write_record([
            txn.description.as_str(),
            txn.category.as_str(),
            &amount(txn.amount),
            txn.kind.as_str(),
        ])?;
    }

    writer.flush()?;
    debug!(
        transactions = analysis.transactions.len(),
        suggestions = advice.len(),
        "wrote report"
    );
    Ok(())
}

fn amount(value: Decimal) -> String {
    format!("{value:.2}")
}

fn blank_row<W: Write>(writer: &mut csv::Writer<W>) -> Result<(), csv::Error> {
    writer.write_record([""])
}
