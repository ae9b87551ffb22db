use super::*;
use serde_json::json;

fn widget_cart() -> Cart {
    let mut cart = Cart::default();
    cart.add("p1", "Widget", 10.0);
    cart
}

// =============================================================
// add
// =============================================================

#[test]
fn add_inserts_with_quantity_one() {
    let cart = widget_cart();
    let item = cart.get("p1").expect("p1 present");
    assert_eq!(item.name, "Widget");
    assert_eq!(item.unit_price, 10.0);
    assert_eq!(item.quantity, 1);
}

#[test]
fn add_same_id_twice_increments_quantity() {
    let mut cart = widget_cart();
    cart.add("p1", "Widget", 10.0);
    assert_eq!(cart.get("p1").map(|i| i.quantity), Some(2));
    assert_eq!(cart.total(), 20.0);
}

#[test]
fn repeated_add_keeps_first_name_and_price() {
    let mut cart = Cart::default();
    cart.add("p1", "Widget", 10.0);
    cart.add("p1", "Renamed", 99.0);
    cart.add("p1", "Other", 0.5);
    let item = cart.get("p1").expect("p1 present");
    assert_eq!(item.quantity, 3);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.unit_price, 10.0);
}

#[test]
fn add_accepts_any_id_and_price() {
    let mut cart = Cart::default();
    cart.add("", "", -3.0);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total(), -3.0);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_present_id_reports_change() {
    let mut cart = widget_cart();
    assert!(cart.remove("p1"));
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn remove_absent_id_is_noop() {
    let mut cart = widget_cart();
    assert!(!cart.remove("missing"));
    assert_eq!(cart.len(), 1);
}

#[test]
fn add_after_remove_starts_fresh() {
    let mut cart = widget_cart();
    cart.add("p1", "Widget", 10.0);
    cart.remove("p1");
    cart.add("p1", "Gadget", 4.0);
    let item = cart.get("p1").expect("p1 present");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.name, "Gadget");
    assert_eq!(item.unit_price, 4.0);
}

// =============================================================
// set_quantity
// =============================================================

#[test]
fn set_quantity_sets_exact_value() {
    let mut cart = widget_cart();
    assert!(cart.set_quantity("p1", 5));
    assert_eq!(cart.get("p1").map(|i| i.quantity), Some(5));
    assert_eq!(cart.total(), 50.0);
}

#[test]
fn set_quantity_zero_removes() {
    let mut cart = widget_cart();
    assert!(cart.set_quantity("p1", 0));
    assert!(!cart.contains("p1"));
}

#[test]
fn set_quantity_negative_removes() {
    let mut cart = widget_cart();
    assert!(cart.set_quantity("p1", -4));
    assert!(!cart.contains("p1"));
}

#[test]
fn set_quantity_absent_id_is_noop() {
    let mut cart = widget_cart();
    assert!(!cart.set_quantity("missing", 3));
    assert!(!cart.set_quantity("missing", 0));
    assert!(!cart.contains("missing"));
    assert_eq!(cart.len(), 1);
}

#[test]
fn set_quantity_has_no_upper_clamp() {
    let mut cart = widget_cart();
    cart.set_quantity("p1", 10_000);
    assert_eq!(cart.item_count(), 10_000);
    cart.set_quantity("p1", i64::MAX);
    assert_eq!(cart.item_count(), u32::MAX);
}

// =============================================================
// total / item_count
// =============================================================

#[test]
fn empty_cart_totals_are_zero() {
    let cart = Cart::default();
    assert_eq!(cart.total(), 0.0);
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn total_sums_price_times_quantity() {
    let mut cart = Cart::default();
    cart.add("a", "A", 2.5);
    cart.add("a", "A", 2.5);
    cart.add("b", "B", 7.0);
    cart.set_quantity("b", 3);
    assert_eq!(cart.total(), 2.5 * 2.0 + 7.0 * 3.0);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn lines_iterate_in_id_order() {
    let mut cart = Cart::default();
    cart.add("c", "C", 1.0);
    cart.add("a", "A", 1.0);
    cart.add("b", "B", 1.0);
    let ids: Vec<&str> = cart.lines().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// =============================================================
// persisted layout
// =============================================================

#[test]
fn to_json_uses_persisted_field_names() {
    let cart = widget_cart();
    let value: serde_json::Value = serde_json::from_str(&cart.to_json().expect("serialize")).expect("json");
    assert_eq!(value, json!({ "p1": { "name": "Widget", "price": 10.0, "quantity": 1 } }));
}

#[test]
fn json_round_trip_reproduces_cart() {
    let mut cart = Cart::default();
    cart.add("p1", "Widget", 10.0);
    cart.add("p1", "Widget", 10.0);
    cart.add("p2", "שולחן", 149.9);
    cart.set_quantity("p2", 4);
    let raw = cart.to_json().expect("serialize");
    assert_eq!(Cart::from_json(&raw).expect("parse"), cart);
}

#[test]
fn from_json_reads_integer_prices() {
    let raw = json!({ "p1": { "name": "Widget", "price": 10, "quantity": 2 } }).to_string();
    let cart = Cart::from_json(&raw).expect("parse");
    assert_eq!(cart.total(), 20.0);
}

#[test]
fn from_json_ignores_unknown_fields() {
    let raw = json!({ "p1": { "name": "Widget", "price": 3, "quantity": 1, "sku": "W-1" } }).to_string();
    let cart = Cart::from_json(&raw).expect("parse");
    assert_eq!(cart.get("p1").map(|i| i.name.as_str()), Some("Widget"));
}

#[test]
fn from_json_defaults_missing_fields() {
    let raw = json!({ "p1": {} }).to_string();
    let cart = Cart::from_json(&raw).expect("parse");
    let item = cart.get("p1").expect("p1 present");
    assert_eq!(item.name, "");
    assert_eq!(item.unit_price, 0.0);
    assert_eq!(item.quantity, 1);
}

#[test]
fn from_json_drops_zero_quantity_entries() {
    let raw = json!({
        "p1": { "name": "Widget", "price": 3, "quantity": 0 },
        "p2": { "name": "Gadget", "price": 1, "quantity": 2 },
    })
    .to_string();
    let cart = Cart::from_json(&raw).expect("parse");
    assert!(!cart.contains("p1"));
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn from_json_rejects_malformed_input() {
    for raw in ["", "{", "null", "[]", "\"cart\"", r#"{"p1": 5}"#, r#"{"p1": {"quantity": -1}}"#] {
        let err = Cart::from_json(raw).expect_err(raw);
        assert!(matches!(err, CartError::CorruptPersistedState(_)), "{raw}");
    }
}

#[test]
fn from_json_reads_null_price_as_zero() {
    let raw = json!({
        "p1": { "name": "Widget", "price": 10, "quantity": 1 },
        "p2": { "name": "Broken", "price": null, "quantity": 2 },
    })
    .to_string();
    let cart = Cart::from_json(&raw).expect("parse");
    assert_eq!(cart.get("p2").map(|i| i.unit_price), Some(0.0));
    assert_eq!(cart.total(), 10.0);
}

#[test]
fn non_finite_price_survives_save_and_reload() {
    let mut cart = widget_cart();
    cart.add("p2", "Broken", f64::NAN);
    let raw = cart.to_json().expect("serialize");
    let restored = Cart::from_json(&raw).expect("parse");
    assert_eq!(restored.get("p1"), cart.get("p1"));
    assert_eq!(restored.get("p2").map(|i| i.unit_price), Some(0.0));
}
