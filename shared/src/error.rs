//! Validation errors surfaced before submission
//!
//! The totals engine itself never fails: bad numeric input is coerced to
//! zero so the summary card always renders. These errors exist for the
//! pre-submission check the form layer runs (see [`crate::validate`]).

use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("product name must not be empty")]
    EmptyProduct,

    #[error("{field} must be a finite number, got {value}")]
    NonFiniteNumber { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    NegativeNumber { field: &'static str, value: f64 },

    #[error("quantity must be greater than 0")]
    ZeroQuantity,

    #[error("percentage discount must be between 0 and 100, got {0}")]
    DiscountPercentOutOfRange(f64),

    #[error("tax rate must be between 0 and 100, got {0}")]
    TaxRateOutOfRange(f64),

    #[error("document has no line items")]
    NoLineItems,
}
