use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal bracket of a slab schedule.
///
/// Income above `min_income` (and up to `max_income`, when bounded) is taxed
/// at `tax_rate` on top of `base_tax`, the cumulative tax of all lower slabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxSlab {
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }
}
