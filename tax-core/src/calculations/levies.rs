//! Surcharge and health & education cess.
//!
//! Surcharge is a percentage of income tax chosen by taxable income. There is
//! no marginal relief on surcharge, so the total jumps at every threshold.

use rust_decimal::Decimal;

use crate::Regime;
use crate::calculations::common::{percent, rupees};

/// Health & education cess, as a percentage of tax plus surcharge.
pub const CESS_PERCENT: i64 = 4;

/// Surcharge rate for `taxable_income` under `regime`.
///
/// | Taxable income            | Rate                |
/// |---------------------------|---------------------|
/// | up to 50 lakh             | nil                 |
/// | up to 1 crore             | 10%                 |
/// | up to 2 crore             | 15%                 |
/// | up to 5 crore             | 25%                 |
/// | above 5 crore             | 25% new / 37% old   |
pub fn surcharge_rate(
    taxable_income: Decimal,
    regime: Regime,
) -> Decimal {
    if taxable_income <= rupees(5_000_000) {
        Decimal::ZERO
    } else if taxable_income <= rupees(10_000_000) {
        percent(10)
    } else if taxable_income <= rupees(20_000_000) {
        percent(15)
    } else if regime == Regime::New || taxable_income <= rupees(50_000_000) {
        percent(25)
    } else {
        percent(37)
    }
}

pub fn surcharge(
    income_tax: Decimal,
    rate: Decimal,
) -> Decimal {
    income_tax * rate
}

pub fn cess(tax_with_surcharge: Decimal) -> Decimal {
    tax_with_surcharge * percent(CESS_PERCENT)
}
