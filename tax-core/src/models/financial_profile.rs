use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::input_error::check_amount;
use super::{DEFAULT_AGE, InputError, Regime, TaxInput};

/// Aggregated snapshot handed to the savings advisor.
///
/// Built by the caller from every income source it knows about; the advisor
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialProfile {
    pub total_income: Decimal,
    pub age: u32,
    pub investments_80c: Decimal,
    pub medical_80d: Decimal,
    pub regime: Regime,
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            total_income: Decimal::ZERO,
            age: DEFAULT_AGE,
            investments_80c: Decimal::ZERO,
            medical_80d: Decimal::ZERO,
            regime: Regime::New,
        }
    }
}

impl FinancialProfile {
    /// Calculator input for `regime`, carrying the profile's 80C and 80D.
    ///
    /// The deductions are passed through unconditionally; the new regime
    /// ignores them on its own.
    pub fn tax_input(
        &self,
        regime: Regime,
    ) -> TaxInput {
        TaxInput::new(self.total_income, regime)
            .with_age(self.age)
            .with_investments_80c(self.investments_80c)
            .with_medical_80d(self.medical_80d)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        check_amount("total_income", self.total_income)?;
        check_amount("investments_80c", self.investments_80c)?;
        check_amount("medical_80d", self.medical_80d)
    }
}
