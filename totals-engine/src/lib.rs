//! Document Totals Engine
//!
//! Pure calculation library behind the invoice, proforma and estimation
//! forms. Recomputed synchronously on every edit to produce the displayable
//! summary; no I/O, no hidden state. Uses rust_decimal internally and `f64`
//! at the boundary.

pub mod aggregate;
pub mod discount;
pub mod line_cost;
pub mod money;
pub mod summary;
pub mod tax;
pub mod transport;

pub use aggregate::*;
pub use discount::*;
pub use line_cost::*;
pub use money::*;
pub use summary::*;
pub use tax::*;
pub use transport::*;
