//! Document kinds and totals policy

use serde::{Deserialize, Serialize};

/// Document kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    #[default]
    Invoice,
    Proforma,
    Estimation,
}

impl DocumentKind {
    /// Invoices round the grand total to the nearest whole currency unit.
    /// Proforma and estimation documents keep 2 decimal places.
    pub fn rounds_grand_total(&self) -> bool {
        matches!(self, Self::Invoice)
    }
}

/// How tax is presented on the summary card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxTreatment {
    /// One tax line
    #[default]
    Single,
    /// Two equal CGST/SGST halves
    SplitHalf,
}

/// Totals policy resolved from the document kind plus the GST split toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TotalsPolicy {
    /// Round the grand total to the nearest whole currency unit (half-up)
    pub round_grand_total: bool,
    pub split_tax: TaxTreatment,
}

impl TotalsPolicy {
    pub fn for_kind(kind: DocumentKind, split_tax: TaxTreatment) -> Self {
        Self {
            round_grand_total: kind.rounds_grand_total(),
            split_tax,
        }
    }
}
