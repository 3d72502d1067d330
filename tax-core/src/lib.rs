//! Indian personal income tax engine.
//!
//! [`TaxCalculator`] prices a [`TaxInput`] under either regime and
//! [`SavingsAdvisor`] turns a [`FinancialProfile`] into ordered advice. Both
//! are pure: no I/O, no shared state, safe to call from any thread.

pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::{
    RegimeComparison, Relief, SavingsAdvisor, Suggestion, TaxBreakdown, TaxCalculator,
};
pub use models::*;

/// Final tax payable under `input.regime`, in whole rupees.
pub fn compute_tax(input: &TaxInput) -> u64 {
    TaxCalculator::compute_tax(input)
}

/// Ordered savings advice for `profile`. Never empty.
pub fn suggest(profile: &FinancialProfile) -> Vec<String> {
    SavingsAdvisor::suggest(profile)
}
