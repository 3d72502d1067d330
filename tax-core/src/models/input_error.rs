use rust_decimal::Decimal;
use thiserror::Error;

/// Largest amount, in rupees, accepted by [`TaxInput::validate`](super::TaxInput::validate).
///
/// Keeps every intermediate product well inside `Decimal` range.
pub const MAX_AMOUNT_RUPEES: u64 = 1_000_000_000_000_000;

/// Reasons a caller-supplied input is rejected.
///
/// The calculator itself never returns these; it clamps. They exist for
/// callers that want to refuse malformed input up front.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} exceeds the supported maximum of {MAX_AMOUNT_RUPEES}, got {value}")]
    AmountOutOfRange { field: &'static str, value: Decimal },

    #[error("unknown tax regime '{0}' (expected 'new' or 'old')")]
    UnknownRegime(String),
}

/// Checks a single named amount against the accepted range.
pub(crate) fn check_amount(
    field: &'static str,
    value: Decimal,
) -> Result<(), InputError> {
    if value < Decimal::ZERO {
        return Err(InputError::NegativeAmount { field, value });
    }
    if value > Decimal::from(MAX_AMOUNT_RUPEES) {
        return Err(InputError::AmountOutOfRange { field, value });
    }
    Ok(())
}
