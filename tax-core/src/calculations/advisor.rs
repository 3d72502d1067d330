//! Savings advice for a [`FinancialProfile`].
//!
//! The advisor prices the profile under both regimes and then looks for the
//! usual gaps: an unused 80C limit, missing or low health cover, and salaries
//! that land just above the new-regime rebate line.
//!
//! Suggestions always come out in the same order:
//!
//! 1. regime switch, when the other regime is strictly cheaper
//! 2. deduction gaps (old regime) or rebate cliff (new regime)
//! 3. the high-income rule of thumb
//! 4. a single "already optimized" note when nothing above applied

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::TaxCalculator;
use crate::calculations::common::{max, rupees, taxable_after};
use crate::calculations::{new_regime, old_regime};
use crate::format::{format_inr, format_inr_whole};
use crate::{FinancialProfile, Regime};

/// Health-cover reference used for 80D advice.
///
/// Deliberately not age-aware, unlike the calculator's own 80D cap.
pub const ADVICE_80D_REFERENCE: i64 = 25_000;

/// Taxable income up to which a new-regime salary counts as "just above"
/// the rebate limit.
pub const REBATE_CLIFF_CEILING: i64 = 1_300_000;

/// Gross income above which the regime rule of thumb is shown.
pub const HIGH_INCOME_THRESHOLD: i64 = 1_500_000;

/// Total deductions at which the old regime usually starts to win.
pub const DEDUCTION_BREAK_EVEN: i64 = 375_000;

/// One piece of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// The other regime costs `saving` rupees less.
    SwitchRegime { to: Regime, saving: u64 },
    /// 80C headroom left under the old regime.
    Invest80c { gap: Decimal },
    /// No health insurance premium recorded.
    BuyHealthInsurance,
    /// 80D headroom left against the advice reference.
    IncreaseHealthCover { gap: Decimal },
    /// New-regime taxable income sits just above the rebate limit.
    RebateCliff,
    /// General regime rule of thumb for high earners.
    HighIncomeRegimeHint,
    AlreadyOptimized,
}

impl fmt::Display for Suggestion {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::SwitchRegime { to, saving } => {
                write!(f, "Switch to the {to} to save ₹{}.", format_inr_whole(*saving))
            }
            Self::Invest80c { gap } => write!(
                f,
                "80C: Invest ₹{} more in ELSS/PPF/EPF to max out the deduction.",
                format_inr(*gap)
            ),
            Self::BuyHealthInsurance => write!(
                f,
                "Health Insurance (80D): No premium found. Buy insurance to save up to ₹{}.",
                format_inr_whole(ADVICE_80D_REFERENCE as u64)
            ),
            Self::IncreaseHealthCover { gap } => write!(
                f,
                "80D: Increase health insurance by ₹{} to max out the benefit.",
                format_inr(*gap)
            ),
            Self::RebateCliff => write!(
                f,
                "Just above the ₹{} rebate limit: consider salary restructuring to reduce taxable income.",
                format_inr_whole(new_regime::REBATE_LIMIT as u64)
            ),
            Self::HighIncomeRegimeHint => write!(
                f,
                "High income (above ₹{}): the New Regime is usually better unless deductions exceed ₹{}.",
                format_inr_whole(HIGH_INCOME_THRESHOLD as u64),
                format_inr_whole(DEDUCTION_BREAK_EVEN as u64)
            ),
            Self::AlreadyOptimized => {
                f.write_str("You're already optimized! Keep up the good tax planning.")
            }
        }
    }
}

/// Stateless savings advisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsAdvisor;

impl SavingsAdvisor {
    /// Advice for `profile` as display strings. Never empty.
    pub fn suggest(profile: &FinancialProfile) -> Vec<String> {
        Self::suggestions(profile)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Advice for `profile` as typed values. Never empty.
    pub fn suggestions(profile: &FinancialProfile) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if let Some(switch) = Self::regime_switch(profile) {
            suggestions.push(switch);
        }

        match profile.regime {
            Regime::Old => suggestions.extend(Self::deduction_gaps(profile)),
            Regime::New => {
                if Self::near_rebate_cliff(profile.total_income) {
                    suggestions.push(Suggestion::RebateCliff);
                }
            }
        }

        if profile.total_income > rupees(HIGH_INCOME_THRESHOLD) {
            suggestions.push(Suggestion::HighIncomeRegimeHint);
        }

        if suggestions.is_empty() {
            suggestions.push(Suggestion::AlreadyOptimized);
        }

        debug!(count = suggestions.len(), regime = profile.regime.as_str(), "generated advice");
        suggestions
    }

    /// Suggests the other regime when it is strictly cheaper.
    fn regime_switch(profile: &FinancialProfile) -> Option<Suggestion> {
        let current = TaxCalculator::compute_tax(&profile.tax_input(profile.regime));
        let alternate_regime = profile.regime.alternate();
        let alternate = TaxCalculator::compute_tax(&profile.tax_input(alternate_regime));

        (alternate < current).then(|| Suggestion::SwitchRegime {
            to: alternate_regime,
            saving: current - alternate,
        })
    }

    fn deduction_gaps(profile: &FinancialProfile) -> Vec<Suggestion> {
        let mut gaps = Vec::new();

        // Negative claims count as nothing, as in the calculator.
        let invested_80c = max(profile.investments_80c, Decimal::ZERO);
        let medical_80d = max(profile.medical_80d, Decimal::ZERO);

        let cap_80c = rupees(old_regime::CAP_80C);
        if invested_80c < cap_80c {
            gaps.push(Suggestion::Invest80c {
                gap: cap_80c - invested_80c,
            });
        }

        let reference_80d = rupees(ADVICE_80D_REFERENCE);
        if medical_80d.is_zero() {
            gaps.push(Suggestion::BuyHealthInsurance);
        } else if medical_80d < reference_80d {
            gaps.push(Suggestion::IncreaseHealthCover {
                gap: reference_80d - medical_80d,
            });
        }

        gaps
    }

    fn near_rebate_cliff(gross_income: Decimal) -> bool {
        let taxable = taxable_after(gross_income, rupees(new_regime::STANDARD_DEDUCTION));
        taxable > rupees(new_regime::REBATE_LIMIT) && taxable <= rupees(REBATE_CLIFF_CEILING)
    }
}
