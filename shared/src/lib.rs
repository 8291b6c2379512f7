//! Shared types for the document billing suite
//!
//! Common types used by the document-editing forms and the totals engine:
//! document kinds, line items, transportation charge, submission payloads,
//! and pre-submission validation.

pub mod error;
pub mod models;
pub mod payload;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{DocumentError, DocumentResult};
pub use models::{
    Discount, DiscountKind, DocumentKind, LineItem, LinePricing, TaxTreatment, TotalsPolicy,
    TransportCharge, Variation,
};
pub use payload::{CustomerRef, DocumentPayload, LineItemPayload, TransportChargePayload};
