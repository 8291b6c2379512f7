use super::*;
use shared::models::{Discount, DocumentKind, Variation};

fn unrounded() -> TotalsPolicy {
    TotalsPolicy::for_kind(DocumentKind::Estimation, TaxTreatment::Single)
}

fn invoice() -> TotalsPolicy {
    TotalsPolicy::for_kind(DocumentKind::Invoice, TaxTreatment::Single)
}

#[test]
fn test_empty_document_is_all_zero() {
    let totals = aggregate(&[], None, &unrounded());
    assert_eq!(totals, DocumentTotals::default());
}

#[test]
fn test_scenario_a_single_item() {
    // 10 × 275 = 2750, 5% tax = 137.50, grand total 2887.50
    let item = LineItem::simple("Fabric", 10, 275.0).with_tax_rate(5.0);

    let totals = aggregate(&[item.clone()], None, &unrounded());
    assert_eq!(totals.subtotal, 2750.0);
    assert_eq!(totals.total_discount, 0.0);
    assert_eq!(totals.total_tax, 137.5);
    assert_eq!(totals.grand_total, 2887.5);
    assert_eq!(totals.total_quantity, 10);

    // Invoice policy rounds 2887.50 half-up to 2888
    let rounded = aggregate(&[item], None, &invoice());
    assert_eq!(rounded.grand_total, 2888.0);
}

#[test]
fn test_scenario_b_percentage_discount() {
    // 2 × 500 = 1000, 10% discount = 100, tax 18% on 900 = 162, grand 1062
    let item = LineItem::simple("Shirt", 2, 500.0)
        .with_discount(Discount::percentage(10.0))
        .with_tax_rate(18.0);

    let totals = aggregate(&[item], None, &unrounded());
    assert_eq!(totals.subtotal, 1000.0);
    assert_eq!(totals.total_discount, 100.0);
    assert_eq!(totals.total_tax, 162.0);
    assert_eq!(totals.grand_total, 1062.0);
}

#[test]
fn test_scenario_c_transport_charge() {
    // Scenario A plus transportation 1500 @ 18%: 2887.5 + 1500 + 270 = 4657.5
    let item = LineItem::simple("Fabric", 10, 275.0).with_tax_rate(5.0);
    let charge = TransportCharge::new(1500.0, 18.0);

    let totals = aggregate(&[item], Some(&charge), &unrounded());
    assert_eq!(totals.transport_amount, 1500.0);
    assert_eq!(totals.transport_tax, 270.0);
    assert_eq!(totals.grand_total, 4657.5);
    // Transportation never enters the subtotal
    assert_eq!(totals.subtotal, 2750.0);
}

#[test]
fn test_scenario_d_variated_item() {
    // (5 × 100) + (3 × 200) = 1100, 12% tax = 132, grand 1232, 8 units
    let item = LineItem::variated(
        "Shirt",
        vec![Variation::new(5, 100.0), Variation::new(3, 200.0)],
    )
    .with_tax_rate(12.0);

    let totals = aggregate(&[item], None, &unrounded());
    assert_eq!(totals.subtotal, 1100.0);
    assert_eq!(totals.total_tax, 132.0);
    assert_eq!(totals.grand_total, 1232.0);
    assert_eq!(totals.total_quantity, 8);
}

#[test]
fn test_grand_total_rounding_boundaries() {
    // 100.4 rounds down, 100.5 rounds up (half-up)
    let item = LineItem::simple("A", 1, 100.4);
    assert_eq!(aggregate(&[item], None, &invoice()).grand_total, 100.0);

    let item = LineItem::simple("A", 1, 100.5);
    assert_eq!(aggregate(&[item], None, &invoice()).grand_total, 101.0);

    // Non-invoice documents keep 2 decimal places
    let item = LineItem::simple("A", 1, 100.5);
    assert_eq!(aggregate(&[item], None, &unrounded()).grand_total, 100.5);
}

#[test]
fn test_split_tax_halves_sum_back() {
    let policy = TotalsPolicy::for_kind(DocumentKind::Invoice, TaxTreatment::SplitHalf);
    let item = LineItem::simple("Shirt", 2, 500.0)
        .with_discount(Discount::percentage(10.0))
        .with_tax_rate(18.0);
    let charge = TransportCharge::new(1500.0, 18.0);

    let totals = aggregate(&[item], Some(&charge), &policy);

    let split = totals.tax_split.expect("split policy populates tax_split");
    assert_eq!(split.cgst, 81.0);
    assert_eq!(split.sgst, 81.0);
    assert!((split.cgst + split.sgst - totals.total_tax).abs() < 1e-9);

    let transport_split = totals
        .transport_tax_split
        .expect("split policy populates transport_tax_split");
    assert_eq!(transport_split.cgst, 135.0);
    assert!((transport_split.cgst + transport_split.sgst - totals.transport_tax).abs() < 1e-9);
}

#[test]
fn test_single_treatment_has_no_split() {
    let item = LineItem::simple("Shirt", 1, 100.0).with_tax_rate(18.0);
    let totals = aggregate(&[item], None, &unrounded());
    assert!(totals.tax_split.is_none());
    assert!(totals.transport_tax_split.is_none());
}

#[test]
fn test_fixed_discount_exceeding_cost_goes_negative() {
    // 100 line, 150 fixed discount: taxable base −50, tax 18% = −9,
    // grand total 100 − 150 − 9 = −59. Deliberately unclamped.
    let item = LineItem::simple("Shirt", 1, 100.0)
        .with_discount(Discount::fixed(150.0))
        .with_tax_rate(18.0);

    let totals = aggregate(&[item], None, &unrounded());
    assert_eq!(totals.subtotal, 100.0);
    assert_eq!(totals.total_discount, 150.0);
    assert_eq!(totals.total_tax, -9.0);
    assert_eq!(totals.grand_total, -59.0);
}

#[test]
fn test_multiple_items_accumulate() {
    let items = vec![
        LineItem::simple("A", 10, 275.0).with_tax_rate(5.0),
        LineItem::simple("B", 2, 500.0)
            .with_discount(Discount::percentage(10.0))
            .with_tax_rate(18.0),
    ];

    let totals = aggregate(&items, None, &unrounded());
    assert_eq!(totals.subtotal, 3750.0);
    assert_eq!(totals.total_discount, 100.0);
    assert_eq!(totals.total_tax, 299.5); // 137.5 + 162
    assert_eq!(totals.grand_total, 3949.5);
    assert_eq!(totals.total_quantity, 12);
}

#[test]
fn test_accumulation_does_not_compound_rounding() {
    // One hundred rows of 3 × 0.1: f64 would drift, Decimal must not
    let items: Vec<LineItem> = (0..100)
        .map(|i| LineItem::simple(format!("Row {i}"), 3, 0.1))
        .collect();

    let totals = aggregate(&items, None, &unrounded());
    assert_eq!(totals.subtotal, 30.0);
    assert_eq!(totals.grand_total, 30.0);
    assert_eq!(totals.total_quantity, 300);
}

#[test]
fn test_aggregate_is_idempotent() {
    let items = vec![
        LineItem::simple("A", 10, 275.0).with_tax_rate(5.0),
        LineItem::variated(
            "B",
            vec![Variation::new(5, 100.0), Variation::new(3, 200.0)],
        )
        .with_tax_rate(12.0),
    ];
    let charge = TransportCharge::new(1500.0, 18.0);
    let policy = TotalsPolicy::for_kind(DocumentKind::Invoice, TaxTreatment::SplitHalf);

    let first = aggregate(&items, Some(&charge), &policy);
    let second = aggregate(&items, Some(&charge), &policy);
    assert_eq!(first, second);
}

#[test]
fn test_transport_without_items() {
    let charge = TransportCharge::new(200.0, 5.0);
    let totals = aggregate(&[], Some(&charge), &unrounded());
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.transport_amount, 200.0);
    assert_eq!(totals.transport_tax, 10.0);
    assert_eq!(totals.grand_total, 210.0);
}

#[test]
fn test_nan_inputs_render_as_zero() {
    let mut item = LineItem::simple("A", 2, f64::NAN);
    item.tax_rate_percent = f64::NAN;

    let totals = aggregate(&[item], None, &unrounded());
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.total_tax, 0.0);
    assert_eq!(totals.grand_total, 0.0);
    assert!(totals.grand_total.is_finite());
}

#[test]
fn test_totals_serialize_for_display() {
    let item = LineItem::simple("Shirt", 1, 100.0).with_tax_rate(18.0);
    let totals = aggregate(&[item], None, &unrounded());

    let value = serde_json::to_value(&totals).unwrap();
    assert_eq!(value["subtotal"], 100.0);
    assert_eq!(value["grand_total"], 118.0);
    // Single treatment skips the split fields entirely
    assert!(value.get("tax_split").is_none());
}
