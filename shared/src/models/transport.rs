//! Transportation charge model

use serde::{Deserialize, Serialize};

/// Optional extra charge on a document, taxed independently of line items
///
/// Tracked separately from the subtotal; it joins the totals only at the
/// grand-total step, as its own summary line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TransportCharge {
    pub amount: f64,
    pub tax_rate_percent: f64,
}

impl TransportCharge {
    pub fn new(amount: f64, tax_rate_percent: f64) -> Self {
        Self {
            amount,
            tax_rate_percent,
        }
    }
}
