//! Document Totals Aggregator
//!
//! Folds the form's line items and the optional transportation charge into
//! the `DocumentTotals` the summary card displays. All accumulation happens
//! in `Decimal`; conversion to `f64` (2 decimal places, half-up) happens
//! once at the end so rounding error never compounds across rows.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{LineItem, TaxTreatment, TotalsPolicy, TransportCharge};

use crate::discount::discount_amount;
use crate::line_cost::{line_cost, total_quantity};
use crate::money::{to_f64, to_f64_whole};
use crate::tax::{split_half, tax_amount};
use crate::transport::{TransportBreakdown, transport_breakdown};

/// Two equal halves of a split tax amount
///
/// Halves are kept unrounded so they always sum back to the tax they came
/// from; rounding to 2 decimal places happens at display time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TaxSplit {
    pub cgst: f64,
    pub sgst: f64,
}

/// Computed totals for one document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentTotals {
    /// Sum of line costs (transportation excluded)
    pub subtotal: f64,
    pub total_discount: f64,
    pub total_tax: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_split: Option<TaxSplit>,
    pub transport_amount: f64,
    pub transport_tax: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_tax_split: Option<TaxSplit>,
    /// subtotal − discount + tax + transportation and its tax
    pub grand_total: f64,
    pub total_quantity: i64,
}

fn split_for_policy(policy: &TotalsPolicy, tax: Decimal) -> Option<TaxSplit> {
    match policy.split_tax {
        TaxTreatment::Single => None,
        TaxTreatment::SplitHalf => {
            let (cgst, sgst) = split_half(tax);
            Some(TaxSplit {
                cgst: cgst.to_f64().unwrap_or_default(),
                sgst: sgst.to_f64().unwrap_or_default(),
            })
        }
    }
}

/// Compute the totals for one document
///
/// Per item: cost → discount → tax on (cost − discount) at the item's rate.
/// The transportation charge never enters the subtotal; it appears as its
/// own summary line and joins at the grand-total step only. Pure function,
/// cheap enough to run on every keystroke.
pub fn aggregate(
    items: &[LineItem],
    transport: Option<&TransportCharge>,
    policy: &TotalsPolicy,
) -> DocumentTotals {
    let mut subtotal = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;
    let mut quantity: i64 = 0;

    for item in items {
        let cost = line_cost(item);
        let disc = discount_amount(cost, &item.discount);
        let tax = tax_amount(cost - disc, item.tax_rate_percent);

        subtotal += cost;
        total_discount += disc;
        total_tax += tax;
        quantity += total_quantity(item);
    }

    let transport_line: TransportBreakdown =
        transport.map(transport_breakdown).unwrap_or_default();

    let grand =
        subtotal - total_discount + total_tax + transport_line.amount + transport_line.tax;
    let grand_total = if policy.round_grand_total {
        to_f64_whole(grand)
    } else {
        to_f64(grand)
    };

    DocumentTotals {
        subtotal: to_f64(subtotal),
        total_discount: to_f64(total_discount),
        total_tax: to_f64(total_tax),
        tax_split: split_for_policy(policy, total_tax),
        transport_amount: to_f64(transport_line.amount),
        transport_tax: to_f64(transport_line.tax),
        transport_tax_split: if transport.is_some() {
            split_for_policy(policy, transport_line.tax)
        } else {
            None
        },
        grand_total,
        total_quantity: quantity,
    }
}

#[cfg(test)]
mod tests;
