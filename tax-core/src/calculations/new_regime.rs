//! New regime (section 115BAC) rules for FY 2025-26.
//!
//! Only the standard deduction is allowed. A full rebate zeroes tax up to
//! 12,00,000 of taxable income, and marginal relief caps the tax just above
//! that line at the excess over it.

use rust_decimal::Decimal;

use crate::TaxInput;
use crate::calculations::Relief;
use crate::calculations::common::{rupees, taxable_after};

/// Flat standard deduction for salaried taxpayers.
pub const STANDARD_DEDUCTION: i64 = 75_000;

/// Section 87A: taxable income at or below this pays nothing.
pub const REBATE_LIMIT: i64 = 1_200_000;

/// Upper edge of the marginal relief band above [`REBATE_LIMIT`].
pub const MARGINAL_RELIEF_LIMIT: i64 = 1_275_000;

/// Total deduction under the new regime; every claimed deduction is ignored.
pub fn deductions(_input: &TaxInput) -> Decimal {
    rupees(STANDARD_DEDUCTION)
}

/// `gross - 75,000`, never below zero.
pub fn taxable_income(input: &TaxInput) -> Decimal {
    taxable_after(input.gross_income, deductions(input))
}

/// Applies the rebate and marginal relief to the slab tax.
pub fn apply_rebate(
    slab_tax: Decimal,
    taxable_income: Decimal,
) -> (Decimal, Relief) {
    let rebate_limit = rupees(REBATE_LIMIT);

    if taxable_income <= rebate_limit {
        return (Decimal::ZERO, Relief::FullRebate);
    }

    if taxable_income <= rupees(MARGINAL_RELIEF_LIMIT) {
        let excess = taxable_income - rebate_limit;
        if excess < slab_tax {
            return (excess, Relief::MarginalRelief);
        }
    }

    (slab_tax, Relief::None)
}
