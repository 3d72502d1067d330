//! Income tax calculation for FY 2025-26 (AY 2026-27).
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Deductions: 75,000 standard (new) or capped Chapter VI-A claims (old) |
//! | 2    | Taxable income: gross income less deductions, minimum 0 |
//! | 3    | Slab tax from the regime's schedule |
//! | 4    | Section 87A rebate, and marginal relief in the new regime |
//! | 5    | Surcharge on step 4, by taxable income |
//! | 6    | Cess: 4% of step 4 + step 5 |
//! | 7    | Total: step 4 + step 5 + step 6, rounded half-up to the rupee |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{Regime, TaxInput};
//! use tax_core::calculations::TaxCalculator;
//!
//! let input = TaxInput::new(dec!(1200000), Regime::Old)
//!     .with_investments_80c(dec!(150000))
//!     .with_medical_80d(dec!(25000));
//!
//! let breakdown = TaxCalculator::breakdown(&input);
//!
//! assert_eq!(breakdown.taxable_income, dec!(975000));
//! assert_eq!(breakdown.income_tax, dec!(107500));
//! assert_eq!(breakdown.cess, dec!(4300));
//! assert_eq!(breakdown.total, 111_800);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_to_rupee;
use crate::calculations::slabs::SlabSchedule;
use crate::calculations::{levies, new_regime, old_regime};
use crate::{Regime, TaxInput};

/// How the rebate rules changed the slab tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Relief {
    #[default]
    None,
    /// Section 87A rebate: taxable income is within the rebate limit, no tax.
    FullRebate,
    /// Tax capped at the income in excess of the rebate limit.
    MarginalRelief,
}

/// Every intermediate figure of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub regime: Regime,
    pub gross_income: Decimal,

    /// Standard deduction plus allowed claims.
    pub total_deductions: Decimal,

    pub taxable_income: Decimal,

    /// Tax from the slab schedule before any rebate.
    pub slab_tax: Decimal,

    pub relief: Relief,

    /// Slab tax after rebate and marginal relief.
    pub income_tax: Decimal,

    pub surcharge_rate: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,

    /// Final payable tax in whole rupees.
    pub total: u64,
}

/// Stateless income tax calculator.
///
/// Never fails: deductions are clamped into their statutory range and taxable
/// income is floored at zero, so any input produces a (non-negative) result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator;

impl TaxCalculator {
    /// Final tax payable under `input.regime`, in whole rupees.
    pub fn compute_tax(input: &TaxInput) -> u64 {
        Self::breakdown(input).total
    }

    /// Runs the full calculation and returns every intermediate figure.
    pub fn breakdown(input: &TaxInput) -> TaxBreakdown {
        let (total_deductions, taxable_income, slab_tax, (income_tax, relief)) = match input.regime
        {
            Regime::New => {
                let taxable = new_regime::taxable_income(input);
                let slab_tax = SlabSchedule::new_regime().tax_on(taxable);
                (
                    new_regime::deductions(input),
                    taxable,
                    slab_tax,
                    new_regime::apply_rebate(slab_tax, taxable),
                )
            }
            Regime::Old => {
                let taxable = old_regime::taxable_income(input);
                let schedule = SlabSchedule::old_regime(old_regime::basic_exemption(input.age));
                let slab_tax = schedule.tax_on(taxable);
                (
                    old_regime::deductions(input),
                    taxable,
                    slab_tax,
                    old_regime::apply_rebate(slab_tax, taxable),
                )
            }
        };

        let surcharge_rate = levies::surcharge_rate(taxable_income, input.regime);
        let surcharge = levies::surcharge(income_tax, surcharge_rate);
        let cess = levies::cess(income_tax + surcharge);
        let total = to_rupees(income_tax + surcharge + cess);

        debug!(
            regime = input.regime.as_str(),
            %taxable_income,
            %slab_tax,
            ?relief,
            %surcharge,
            %cess,
            total,
            "computed tax"
        );

        TaxBreakdown {
            regime: input.regime,
            gross_income: input.gross_income,
            total_deductions,
            taxable_income,
            slab_tax,
            relief,
            income_tax,
            surcharge_rate,
            surcharge,
            cess,
            total,
        }
    }
}

/// Rounds half-up to a whole rupee. Saturates instead of wrapping.
fn to_rupees(amount: Decimal) -> u64 {
    round_to_rupee(amount).to_u64().unwrap_or(u64::MAX)
}
