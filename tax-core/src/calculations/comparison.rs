//! Side-by-side pricing of both regimes with a recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::{TaxBreakdown, TaxCalculator};
use crate::format::format_inr_whole;
use crate::{FinancialProfile, Regime, TaxInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub new_regime: TaxBreakdown,
    pub old_regime: TaxBreakdown,

    /// The new regime only when strictly cheaper; ties go to the old regime.
    pub recommended: Regime,

    /// Absolute difference between the two totals.
    pub saving: u64,
}

impl RegimeComparison {
    /// Prices `input` under both regimes, ignoring `input.regime`.
    pub fn from_input(input: &TaxInput) -> Self {
        let new_regime = TaxCalculator::breakdown(&TaxInput {
            regime: Regime::New,
            ..input.clone()
        });
        let old_regime = TaxCalculator::breakdown(&TaxInput {
            regime: Regime::Old,
            ..input.clone()
        });

        let recommended = if new_regime.total < old_regime.total {
            Regime::New
        } else {
            Regime::Old
        };
        let saving = new_regime.total.abs_diff(old_regime.total);

        Self {
            new_regime,
            old_regime,
            recommended,
            saving,
        }
    }

    pub fn compare(profile: &FinancialProfile) -> Self {
        Self::from_input(&profile.tax_input(profile.regime))
    }

    pub fn tax_for(
        &self,
        regime: Regime,
    ) -> u64 {
        match regime {
            Regime::New => self.new_regime.total,
            Regime::Old => self.old_regime.total,
        }
    }
}

impl fmt::Display for RegimeComparison {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "Recommendation: Choose {}. Save ₹{}",
            self.recommended,
            format_inr_whole(self.saving)
        )
    }
}
