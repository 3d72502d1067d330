//! Progressive slab schedules.
//!
//! A [`SlabSchedule`] is an ordered, contiguous list of [`TaxSlab`]s. Income at
//! or below the first slab's floor is untaxed; income inside a slab pays the
//! slab's `base_tax` plus its marginal rate on the excess over the floor.

use rust_decimal::Decimal;

use crate::TaxSlab;
use crate::calculations::common::{percent, rupees};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabSchedule {
    slabs: Vec<TaxSlab>,
}

impl SlabSchedule {
    /// Builds a schedule from `(floor, marginal rate %)` steps.
    ///
    /// Each step's ceiling is the next step's floor and the last step is
    /// unbounded. Base tax is accumulated from the lower steps, so a schedule
    /// can never disagree with itself.
    pub fn from_steps(steps: &[(Decimal, i64)]) -> Self {
        let mut slabs = Vec::with_capacity(steps.len());
        let mut base_tax = Decimal::ZERO;

        for (idx, &(floor, rate_pct)) in steps.iter().enumerate() {
            let ceiling = steps.get(idx + 1).map(|&(next, _)| next);
            let tax_rate = percent(rate_pct);
            slabs.push(TaxSlab {
                min_income: floor,
                max_income: ceiling,
                tax_rate,
                base_tax,
            });
            if let Some(ceiling) = ceiling {
                base_tax += (ceiling - floor) * tax_rate;
            }
        }

        Self { slabs }
    }

    /// The new regime (section 115BAC) slabs.
    ///
    /// | Taxable income       | Rate |
    /// |----------------------|------|
    /// | up to 4,00,000       | nil  |
    /// | 4,00,001–8,00,000    | 5%   |
    /// | 8,00,001–12,00,000   | 10%  |
    /// | 12,00,001–16,00,000  | 15%  |
    /// | 16,00,001–20,00,000  | 20%  |
    /// | 20,00,001–24,00,000  | 25%  |
    /// | above 24,00,000      | 30%  |
    pub fn new_regime() -> Self {
        Self::from_steps(&[
            (rupees(400_000), 5),
            (rupees(800_000), 10),
            (rupees(1_200_000), 15),
            (rupees(1_600_000), 20),
            (rupees(2_000_000), 25),
            (rupees(2_400_000), 30),
        ])
    }

    /// The old regime slabs for a given basic exemption.
    ///
    /// 5% from the exemption to 5,00,000, 20% to 10,00,000, 30% above. When
    /// the exemption is itself 5,00,000 the 5% slab is empty.
    pub fn old_regime(basic_exemption: Decimal) -> Self {
        Self::from_steps(&[
            (basic_exemption, 5),
            (rupees(500_000), 20),
            (rupees(1_000_000), 30),
        ])
    }

    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }

    /// Tax on `taxable_income` before any rebate, surcharge or cess.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.slabs
            .iter()
            .rev()
            .find(|slab| slab.contains(taxable_income))
            .map(|slab| slab.base_tax + (taxable_income - slab.min_income) * slab.tax_rate)
            .unwrap_or(Decimal::ZERO)
    }
}
