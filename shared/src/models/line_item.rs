//! Line item model
//!
//! One row of a document. Pricing is a tagged union: either a single
//! implicit quantity × unit price, or an explicit list of size/color
//! variations each with its own quantity and rate. Both shapes resolve
//! to the same cost formula, Σ(quantity × rate).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discount kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Percentage of the line cost
    #[default]
    Percentage,
    /// Fixed currency amount, independent of the line cost
    Fixed,
}

/// Discount applied to one line item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Discount {
    /// Percentage (10 = 10%) or currency amount, per `kind`
    pub amount: f64,
    pub kind: DiscountKind,
}

impl Discount {
    pub fn percentage(amount: f64) -> Self {
        Self {
            amount,
            kind: DiscountKind::Percentage,
        }
    }

    pub fn fixed(amount: f64) -> Self {
        Self {
            amount,
            kind: DiscountKind::Fixed,
        }
    }
}

/// One size/color sub-row of a variated line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Variation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: i32,
    pub unit_rate: f64,
}

impl Variation {
    pub fn new(quantity: i32, unit_rate: f64) -> Self {
        Self {
            size: None,
            color: None,
            quantity,
            unit_rate,
        }
    }
}

/// Pricing shape of a line item
///
/// Explicit tag instead of probing for field presence: the cost resolver
/// branches on the variant, never on whether a field happens to be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinePricing {
    /// Single implicit variation: quantity × unit price
    Simple { quantity: i32, unit_price: f64 },
    /// Explicit size/color breakdown
    Variated { variations: Vec<Variation> },
}

impl Default for LinePricing {
    fn default() -> Self {
        Self::Simple {
            quantity: 0,
            unit_price: 0.0,
        }
    }
}

/// One row of a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Instance ID (assigned at construction, stable across edits)
    pub instance_id: String,
    /// Name / description / HSN-style classification, opaque free text
    pub product: String,
    pub pricing: LinePricing,
    #[serde(default)]
    pub discount: Discount,
    /// Tax percentage applied to this item's taxable base
    #[serde(default)]
    pub tax_rate_percent: f64,
    /// Per-unit labor add-on (estimation forms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_cost_per_unit: Option<f64>,
    /// Per-unit material add-on (estimation forms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_cost_per_unit: Option<f64>,
}

impl LineItem {
    pub fn new(product: impl Into<String>, pricing: LinePricing) -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            product: product.into(),
            pricing,
            discount: Discount::default(),
            tax_rate_percent: 0.0,
            labor_cost_per_unit: None,
            material_cost_per_unit: None,
        }
    }

    /// Row with a single implicit variation
    pub fn simple(product: impl Into<String>, quantity: i32, unit_price: f64) -> Self {
        Self::new(
            product,
            LinePricing::Simple {
                quantity,
                unit_price,
            },
        )
    }

    /// Row with an explicit size/color breakdown
    pub fn variated(product: impl Into<String>, variations: Vec<Variation>) -> Self {
        Self::new(product, LinePricing::Variated { variations })
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate_percent: f64) -> Self {
        self.tax_rate_percent = tax_rate_percent;
        self
    }
}
