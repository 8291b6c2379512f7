//! Transportation Charge Resolver
//!
//! A transportation charge is taxed with its own rate, independent of the
//! line items, and joins the totals only at the grand-total step.

use rust_decimal::prelude::*;
use shared::models::TransportCharge;

use crate::money::to_decimal;
use crate::tax::tax_amount;

/// Computed transportation charge line
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportBreakdown {
    pub amount: Decimal,
    pub tax: Decimal,
}

pub fn transport_breakdown(charge: &TransportCharge) -> TransportBreakdown {
    let amount = to_decimal(charge.amount).max(Decimal::ZERO);
    let tax = tax_amount(amount, charge.tax_rate_percent);
    TransportBreakdown { amount, tax }
}
