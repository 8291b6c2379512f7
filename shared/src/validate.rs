//! Pre-submission validation
//!
//! The form layer runs these checks before sending a payload to the
//! document API ("quantity must be greater than 0" and friends). The
//! totals engine never calls them; it clamps bad numerics to zero instead
//! so a summary is always available while the user is still typing.

use crate::error::{DocumentError, DocumentResult};
use crate::models::{Discount, DiscountKind, LineItem, LinePricing, TransportCharge};

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &'static str) -> DocumentResult<()> {
    if !value.is_finite() {
        return Err(DocumentError::NonFiniteNumber { field, value });
    }
    Ok(())
}

#[inline]
fn require_non_negative(value: f64, field: &'static str) -> DocumentResult<()> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(DocumentError::NegativeNumber { field, value });
    }
    Ok(())
}

pub fn validate_discount(discount: &Discount) -> DocumentResult<()> {
    require_non_negative(discount.amount, "discount amount")?;
    if discount.kind == DiscountKind::Percentage && discount.amount > 100.0 {
        return Err(DocumentError::DiscountPercentOutOfRange(discount.amount));
    }
    Ok(())
}

/// Validate a line item before submission
///
/// At least one row of the item must carry a positive quantity; rates and
/// add-ons must be finite and non-negative.
pub fn validate_line_item(item: &LineItem) -> DocumentResult<()> {
    if item.product.trim().is_empty() {
        return Err(DocumentError::EmptyProduct);
    }

    match &item.pricing {
        LinePricing::Simple {
            quantity,
            unit_price,
        } => {
            require_non_negative(*unit_price, "unit price")?;
            if *quantity <= 0 {
                return Err(DocumentError::ZeroQuantity);
            }
        }
        LinePricing::Variated { variations } => {
            for variation in variations {
                require_non_negative(variation.unit_rate, "unit rate")?;
            }
            let total: i64 = variations
                .iter()
                .map(|v| i64::from(v.quantity.max(0)))
                .sum();
            if total <= 0 {
                return Err(DocumentError::ZeroQuantity);
            }
        }
    }

    validate_discount(&item.discount)?;

    require_non_negative(item.tax_rate_percent, "tax rate")?;
    if item.tax_rate_percent > 100.0 {
        return Err(DocumentError::TaxRateOutOfRange(item.tax_rate_percent));
    }

    if let Some(labor) = item.labor_cost_per_unit {
        require_non_negative(labor, "labor cost per unit")?;
    }
    if let Some(material) = item.material_cost_per_unit {
        require_non_negative(material, "material cost per unit")?;
    }

    Ok(())
}

pub fn validate_transport(charge: &TransportCharge) -> DocumentResult<()> {
    require_non_negative(charge.amount, "transportation amount")?;
    require_non_negative(charge.tax_rate_percent, "transportation tax rate")?;
    if charge.tax_rate_percent > 100.0 {
        return Err(DocumentError::TaxRateOutOfRange(charge.tax_rate_percent));
    }
    Ok(())
}

/// Validate a whole document before submission
pub fn validate_document(
    items: &[LineItem],
    transport: Option<&TransportCharge>,
) -> DocumentResult<()> {
    if items.is_empty() {
        return Err(DocumentError::NoLineItems);
    }
    for item in items {
        validate_line_item(item)?;
    }
    if let Some(charge) = transport {
        validate_transport(charge)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variation;

    #[test]
    fn test_valid_item_passes() {
        let item = LineItem::simple("Shirt", 2, 500.0)
            .with_discount(Discount::percentage(10.0))
            .with_tax_rate(18.0);
        assert!(validate_line_item(&item).is_ok());
    }

    #[test]
    fn test_empty_product_rejected() {
        let item = LineItem::simple("   ", 1, 10.0);
        assert_eq!(validate_line_item(&item), Err(DocumentError::EmptyProduct));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let item = LineItem::simple("Shirt", 0, 10.0);
        assert_eq!(validate_line_item(&item), Err(DocumentError::ZeroQuantity));
    }

    #[test]
    fn test_variated_needs_one_positive_quantity() {
        let empty = LineItem::variated("Shirt", vec![Variation::new(0, 100.0)]);
        assert_eq!(validate_line_item(&empty), Err(DocumentError::ZeroQuantity));

        let ok = LineItem::variated(
            "Shirt",
            vec![Variation::new(0, 100.0), Variation::new(3, 200.0)],
        );
        assert!(validate_line_item(&ok).is_ok());
    }

    #[test]
    fn test_discount_percent_out_of_range() {
        let item = LineItem::simple("Shirt", 1, 10.0).with_discount(Discount::percentage(150.0));
        assert_eq!(
            validate_line_item(&item),
            Err(DocumentError::DiscountPercentOutOfRange(150.0))
        );
    }

    #[test]
    fn test_fixed_discount_may_exceed_line_cost() {
        // A fixed discount larger than the line cost is accepted: the
        // engine deliberately lets it drive the taxable base negative.
        let item = LineItem::simple("Shirt", 1, 10.0).with_discount(Discount::fixed(500.0));
        assert!(validate_line_item(&item).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let item = LineItem::simple("Shirt", 1, f64::NAN);
        assert!(matches!(
            validate_line_item(&item),
            Err(DocumentError::NonFiniteNumber { .. })
        ));
    }

    #[test]
    fn test_document_needs_items() {
        assert_eq!(
            validate_document(&[], None),
            Err(DocumentError::NoLineItems)
        );
    }

    #[test]
    fn test_transport_negative_amount_rejected() {
        let charge = TransportCharge::new(-5.0, 18.0);
        assert!(matches!(
            validate_transport(&charge),
            Err(DocumentError::NegativeNumber { .. })
        ));
    }
}
