use super::*;

#[test]
fn whole_amounts_have_no_fraction() {
    assert_eq!(format_amount(20.0), "20");
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(-0.0), "0");
}

#[test]
fn fractional_amounts_keep_digits() {
    assert_eq!(format_amount(149.9), "149.9");
    assert_eq!(format_amount(2.25), "2.25");
}

#[test]
fn price_prefixes_symbol() {
    assert_eq!(format_price("₪", 50.0), "₪50");
    assert_eq!(format_price("$", 1.5), "$1.5");
}

#[test]
fn unit_line_shows_price_and_quantity() {
    assert_eq!(format_unit_line("₪", 10.0, 3), "₪10 x 3");
}
