//! Tax Resolver
//!
//! Percentage tax on the taxable base (line cost minus discount), with an
//! even CGST/SGST split for GST-style display. A negative taxable base is
//! passed through untouched, so its tax contribution is negative too —
//! the summary reflects exactly what the line items say.

use rust_decimal::prelude::*;

use crate::money::to_decimal;

/// Tax on a taxable base at a percentage rate
///
/// The rate clamps to non-negative; the base does not (see module docs).
pub fn tax_amount(taxable_base: Decimal, rate_percent: f64) -> Decimal {
    let rate = to_decimal(rate_percent).max(Decimal::ZERO);
    taxable_base * rate / Decimal::ONE_HUNDRED
}

/// Two exactly equal halves of a tax amount
///
/// No rounding happens here, so the halves always sum back to the input.
pub fn split_half(tax: Decimal) -> (Decimal, Decimal) {
    let half = tax / Decimal::TWO;
    (half, half)
}
