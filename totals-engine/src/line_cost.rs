//! Line-Item Cost Resolver
//!
//! Resolves one document row to its cost before discount and tax:
//! Σ(quantity × rate) over the row's variations, plus optional per-unit
//! labor/material add-ons. Negative or non-finite input contributes zero;
//! the resolver never errors and never yields a negative cost.

use rust_decimal::prelude::*;
use shared::models::{LineItem, LinePricing};

use crate::money::to_decimal;

/// Clamp a quantity to non-negative
#[inline]
fn clamp_quantity(quantity: i32) -> i64 {
    i64::from(quantity.max(0))
}

/// Clamp a rate to a non-negative Decimal (NaN coerces to zero)
#[inline]
fn clamp_rate(rate: f64) -> Decimal {
    to_decimal(rate).max(Decimal::ZERO)
}

/// Total quantity across the row's variations
pub fn total_quantity(item: &LineItem) -> i64 {
    match &item.pricing {
        LinePricing::Simple { quantity, .. } => clamp_quantity(*quantity),
        LinePricing::Variated { variations } => variations
            .iter()
            .map(|v| clamp_quantity(v.quantity))
            .sum(),
    }
}

/// Item cost, the taxable base before discount
///
/// Simple rows: quantity × unit price. Variated rows: Σ(quantity × rate).
/// Labor/material per-unit add-ons (estimation forms) are charged once per
/// counted unit on top of the base.
pub fn line_cost(item: &LineItem) -> Decimal {
    let base = match &item.pricing {
        LinePricing::Simple {
            quantity,
            unit_price,
        } => Decimal::from(clamp_quantity(*quantity)) * clamp_rate(*unit_price),
        LinePricing::Variated { variations } => variations
            .iter()
            .map(|v| Decimal::from(clamp_quantity(v.quantity)) * clamp_rate(v.unit_rate))
            .sum(),
    };

    let per_unit_addons = clamp_rate(item.labor_cost_per_unit.unwrap_or(0.0))
        + clamp_rate(item.material_cost_per_unit.unwrap_or(0.0));

    base + Decimal::from(total_quantity(item)) * per_unit_addons
}
