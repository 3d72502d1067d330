//! Old regime rules.
//!
//! Chapter VI-A deductions are allowed, each clamped to its statutory cap,
//! and the basic exemption rises with age. Section 87A zeroes tax up to
//! 5,00,000 of taxable income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TaxInput;
use crate::calculations::Relief;
use crate::calculations::common::{clamp_deduction, rupees, taxable_after};

pub const STANDARD_DEDUCTION: i64 = 50_000;
pub const REBATE_LIMIT: i64 = 500_000;

pub const SENIOR_CITIZEN_AGE: u32 = 60;
pub const SUPER_SENIOR_CITIZEN_AGE: u32 = 80;

pub const CAP_80C: i64 = 150_000;
pub const CAP_80D: i64 = 25_000;
pub const CAP_80D_SENIOR: i64 = 50_000;
pub const CAP_NPS_80CCD_1B: i64 = 50_000;
pub const CAP_HOME_LOAN_INTEREST: i64 = 200_000;
/// Section 80TTA.
pub const CAP_SAVINGS_INTEREST: i64 = 10_000;
/// Section 80TTB, senior citizens.
pub const CAP_SAVINGS_INTEREST_SENIOR: i64 = 50_000;

/// Deductions actually allowed after clamping each claim to its cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedDeductions {
    pub standard: Decimal,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub nps_80ccd_1b: Decimal,
    pub home_loan_interest: Decimal,
    pub savings_interest: Decimal,
}

impl AllowedDeductions {
    pub fn total(&self) -> Decimal {
        self.standard
            + self.section_80c
            + self.section_80d
            + self.nps_80ccd_1b
            + self.home_loan_interest
            + self.savings_interest
    }
}

fn is_senior(age: u32) -> bool {
    age >= SENIOR_CITIZEN_AGE
}

/// Clamps every claimed deduction in `input` to its cap for the taxpayer's age.
pub fn allowed_deductions(input: &TaxInput) -> AllowedDeductions {
    let senior = is_senior(input.age);
    let cap_80d = if senior { CAP_80D_SENIOR } else { CAP_80D };
    let cap_savings = if senior {
        CAP_SAVINGS_INTEREST_SENIOR
    } else {
        CAP_SAVINGS_INTEREST
    };

    AllowedDeductions {
        standard: rupees(STANDARD_DEDUCTION),
        section_80c: clamp_deduction(input.investments_80c, rupees(CAP_80C)),
        section_80d: clamp_deduction(input.medical_80d, rupees(cap_80d)),
        nps_80ccd_1b: clamp_deduction(input.nps_80ccd_1b, rupees(CAP_NPS_80CCD_1B)),
        home_loan_interest: clamp_deduction(
            input.housing_loan_interest,
            rupees(CAP_HOME_LOAN_INTEREST),
        ),
        savings_interest: clamp_deduction(input.savings_interest, rupees(cap_savings)),
    }
}

pub fn deductions(input: &TaxInput) -> Decimal {
    allowed_deductions(input).total()
}

pub fn taxable_income(input: &TaxInput) -> Decimal {
    taxable_after(input.gross_income, deductions(input))
}

/// Income below which no tax is levied, by age.
pub fn basic_exemption(age: u32) -> Decimal {
    if age >= SUPER_SENIOR_CITIZEN_AGE {
        rupees(500_000)
    } else if is_senior(age) {
        rupees(300_000)
    } else {
        rupees(250_000)
    }
}

/// Applies the section 87A rebate. There is no marginal relief band.
pub fn apply_rebate(
    slab_tax: Decimal,
    taxable_income: Decimal,
) -> (Decimal, Relief) {
    if taxable_income <= rupees(REBATE_LIMIT) {
        (Decimal::ZERO, Relief::FullRebate)
    } else {
        (slab_tax, Relief::None)
    }
}
