mod financial_profile;
mod input_error;
mod regime;
mod tax_input;
mod tax_slab;

pub use financial_profile::FinancialProfile;
pub use input_error::{InputError, MAX_AMOUNT_RUPEES};
pub use regime::Regime;
pub use tax_input::{DEFAULT_AGE, TaxInput};
pub use tax_slab::TaxSlab;
