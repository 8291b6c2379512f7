//! Discount Resolver
//!
//! Percentage discounts are taken on the line cost. Fixed discounts are the
//! entered currency amount as-is: they are NOT clamped to the line cost, so
//! a fixed discount larger than the line legitimately drives the taxable
//! base negative. That matches the forms' observed behavior; see DESIGN.md
//! before "fixing" it.

use rust_decimal::prelude::*;
use shared::models::{Discount, DiscountKind};

use crate::money::to_decimal;

/// Discount amount for one line
pub fn discount_amount(line_cost: Decimal, discount: &Discount) -> Decimal {
    let amount = to_decimal(discount.amount).max(Decimal::ZERO);
    match discount.kind {
        DiscountKind::Percentage => line_cost * amount / Decimal::ONE_HUNDRED,
        DiscountKind::Fixed => amount,
    }
}
