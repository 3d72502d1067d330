use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::input_error::check_amount;
use super::{InputError, Regime};

/// Age assumed when the caller does not supply one.
pub const DEFAULT_AGE: u32 = 30;

/// Everything the calculator needs for one computation.
///
/// Deduction fields are raw claimed amounts; statutory caps are applied by
/// the calculator, so callers never need to pre-clamp them. Under the new
/// regime all of them are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInput {
    pub gross_income: Decimal,
    pub age: u32,

    /// Section 80C investments (ELSS, PPF, EPF, LIC premiums).
    pub investments_80c: Decimal,
    /// Section 80D health insurance premiums.
    pub medical_80d: Decimal,
    /// Section 24(b) interest on a self-occupied home loan.
    pub housing_loan_interest: Decimal,
    /// Section 80CCD(1B) additional NPS contribution.
    pub nps_80ccd_1b: Decimal,
    /// Section 80TTA/80TTB savings interest.
    pub savings_interest: Decimal,

    pub regime: Regime,
}

impl Default for TaxInput {
    fn default() -> Self {
        Self {
            gross_income: Decimal::ZERO,
            age: DEFAULT_AGE,
            investments_80c: Decimal::ZERO,
            medical_80d: Decimal::ZERO,
            housing_loan_interest: Decimal::ZERO,
            nps_80ccd_1b: Decimal::ZERO,
            savings_interest: Decimal::ZERO,
            regime: Regime::New,
        }
    }
}

impl TaxInput {
    /// Input with the given income and regime and every other field defaulted.
    pub fn new(
        gross_income: Decimal,
        regime: Regime,
    ) -> Self {
        Self {
            gross_income,
            regime,
            ..Self::default()
        }
    }

    pub fn with_age(
        mut self,
        age: u32,
    ) -> Self {
        self.age = age;
        self
    }

    pub fn with_investments_80c(
        mut self,
        amount: Decimal,
    ) -> Self {
        self.investments_80c = amount;
        self
    }

    pub fn with_medical_80d(
        mut self,
        amount: Decimal,
    ) -> Self {
        self.medical_80d = amount;
        self
    }

    pub fn with_housing_loan_interest(
        mut self,
        amount: Decimal,
    ) -> Self {
        self.housing_loan_interest = amount;
        self
    }

    pub fn with_nps_80ccd_1b(
        mut self,
        amount: Decimal,
    ) -> Self {
        self.nps_80ccd_1b = amount;
        self
    }

    pub fn with_savings_interest(
        mut self,
        amount: Decimal,
    ) -> Self {
        self.savings_interest = amount;
        self
    }

    /// Rejects negative or out-of-range amounts.
    ///
    /// Optional: the calculator accepts any input and clamps deductions into
    /// their statutory range, but a negative figure usually means a data
    /// entry mistake that a caller may prefer to surface.
    pub fn validate(&self) -> Result<(), InputError> {
        check_amount("gross_income", self.gross_income)?;
        check_amount("investments_80c", self.investments_80c)?;
        check_amount("medical_80d", self.medical_80d)?;
        check_amount("housing_loan_interest", self.housing_loan_interest)?;
        check_amount("nps_80ccd_1b", self.nps_80ccd_1b)?;
        check_amount("savings_interest", self.savings_interest)
    }
}
