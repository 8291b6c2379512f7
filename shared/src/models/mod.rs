//! Data models
//!
//! Shared between the totals engine and the document-editing forms.
//! Monetary fields are `f64` at this boundary; the engine converts to
//! `Decimal` internally for calculation.

pub mod document;
pub mod line_item;
pub mod transport;

// Re-exports
pub use document::*;
pub use line_item::*;
pub use transport::*;
