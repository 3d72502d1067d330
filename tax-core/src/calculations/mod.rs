//! Tax calculation modules for Indian personal income tax.
//!
//! This module provides the slab engine, the per-regime rules, the levies
//! applied on top, and the advice built from them.

pub mod advisor;
pub mod calculator;
pub mod common;
pub mod comparison;
pub mod levies;
pub mod new_regime;
pub mod old_regime;
pub mod slabs;

pub use advisor::{SavingsAdvisor, Suggestion};
pub use calculator::{Relief, TaxBreakdown, TaxCalculator};
pub use comparison::RegimeComparison;
pub use old_regime::AllowedDeductions;
pub use slabs::SlabSchedule;
