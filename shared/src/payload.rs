//! Submission payload for the external document API
//!
//! JSON camelCase, mirroring what the API persists. Computed totals are
//! deliberately absent: the API derives authoritative totals on its own,
//! the UI never submits the ones it displayed.
//!
//! Payload construction is also where normalization happens: negative and
//! non-finite numerics become 0, and simple quantity/unit-price rows are
//! flattened into a single implicit variation so the API sees one shape.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{Discount, DocumentKind, LineItem, LinePricing, TransportCharge, Variation};

/// Clamp a monetary/quantity field for submission: finite and non-negative
#[inline]
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Buyer/supplier reference on the document header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One normalized variation row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: i32,
    pub unit_rate: f64,
}

impl VariationPayload {
    fn from_variation(variation: &Variation) -> Self {
        Self {
            size: variation.size.clone(),
            color: variation.color.clone(),
            quantity: variation.quantity.max(0),
            unit_rate: sanitize(variation.unit_rate),
        }
    }
}

/// One normalized line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    pub product: String,
    pub variations: Vec<VariationPayload>,
    pub discount: Discount,
    pub tax_rate_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_cost_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_cost_per_unit: Option<f64>,
}

impl LineItem {
    /// Normalized submission form of this row
    pub fn to_payload(&self) -> LineItemPayload {
        let variations = match &self.pricing {
            LinePricing::Simple {
                quantity,
                unit_price,
            } => vec![VariationPayload {
                size: None,
                color: None,
                quantity: (*quantity).max(0),
                unit_rate: sanitize(*unit_price),
            }],
            LinePricing::Variated { variations } => variations
                .iter()
                .map(VariationPayload::from_variation)
                .collect(),
        };

        LineItemPayload {
            product: self.product.clone(),
            variations,
            discount: Discount {
                amount: sanitize(self.discount.amount),
                kind: self.discount.kind,
            },
            tax_rate_percent: sanitize(self.tax_rate_percent),
            labor_cost_per_unit: self.labor_cost_per_unit.map(sanitize),
            material_cost_per_unit: self.material_cost_per_unit.map(sanitize),
        }
    }
}

/// Normalized transportation charge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportChargePayload {
    pub amount: f64,
    pub tax_rate_percent: f64,
}

impl TransportCharge {
    pub fn to_payload(&self) -> TransportChargePayload {
        TransportChargePayload {
            amount: sanitize(self.amount),
            tax_rate_percent: sanitize(self.tax_rate_percent),
        }
    }
}

/// Create/update payload for one document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub kind: DocumentKind,
    /// Document number (assigned by the caller, e.g. "INV-2024-0042")
    pub number: String,
    /// Issue date (Unix millis)
    pub issue_date: i64,
    pub customer: CustomerRef,
    pub items: Vec<LineItemPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportChargePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
    /// Last update timestamp (Unix millis)
    pub updated_at: i64,
}

impl DocumentPayload {
    pub fn from_parts(
        kind: DocumentKind,
        number: impl Into<String>,
        issue_date: i64,
        customer: CustomerRef,
        items: &[LineItem],
        transport: Option<&TransportCharge>,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            kind,
            number: number.into(),
            issue_date,
            customer,
            items: items.iter().map(LineItem::to_payload).collect(),
            transport: transport.map(TransportCharge::to_payload),
            notes,
            created_at: now,
            updated_at: now,
        }
    }
}
