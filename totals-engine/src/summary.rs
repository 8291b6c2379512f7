//! Summary Builder
//!
//! Ordered label/amount rows for the totals card under each document form.
//! Amounts are formatted to 2 decimal places; a rounding document's grand
//! total is shown as a whole number.

use serde::{Deserialize, Serialize};
use shared::models::TotalsPolicy;

use crate::aggregate::{DocumentTotals, TaxSplit};
use crate::money::format_amount;

/// One row of the totals card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLine {
    pub label: String,
    pub amount: String,
}

impl SummaryLine {
    fn new(label: &str, amount: f64) -> Self {
        Self {
            label: label.to_string(),
            amount: format_amount(amount),
        }
    }
}

fn push_tax_lines(lines: &mut Vec<SummaryLine>, label: &str, total: f64, split: Option<&TaxSplit>) {
    match split {
        Some(split) => {
            lines.push(SummaryLine::new(&format!("{label} CGST"), split.cgst));
            lines.push(SummaryLine::new(&format!("{label} SGST"), split.sgst));
        }
        None => lines.push(SummaryLine::new(&format!("{label} Tax"), total)),
    }
}

/// Build the display rows for one computed totals value
///
/// Zero-valued discount and transportation rows are omitted, matching the
/// forms' summary card.
pub fn summary_lines(totals: &DocumentTotals, policy: &TotalsPolicy) -> Vec<SummaryLine> {
    let mut lines = vec![SummaryLine::new("Subtotal", totals.subtotal)];

    if totals.total_discount != 0.0 {
        lines.push(SummaryLine::new("Discount", totals.total_discount));
    }

    match &totals.tax_split {
        Some(split) => {
            lines.push(SummaryLine::new("CGST", split.cgst));
            lines.push(SummaryLine::new("SGST", split.sgst));
        }
        None => lines.push(SummaryLine::new("Tax", totals.total_tax)),
    }

    if totals.transport_amount != 0.0 || totals.transport_tax != 0.0 {
        lines.push(SummaryLine::new("Transportation", totals.transport_amount));
        push_tax_lines(
            &mut lines,
            "Transportation",
            totals.transport_tax,
            totals.transport_tax_split.as_ref(),
        );
    }

    let grand = if policy.round_grand_total {
        SummaryLine {
            label: "Grand Total".to_string(),
            amount: format!("{:.0}", totals.grand_total),
        }
    } else {
        SummaryLine::new("Grand Total", totals.grand_total)
    };
    lines.push(grand);

    lines
}
