use super::*;

#[test]
fn format_expiry_date_from_timestamp() {
    assert_eq!(format_expiry_date("2025-08-01T00:00:00.000Z"), "1/8/2025");
}

#[test]
fn format_expiry_date_from_plain_date() {
    assert_eq!(format_expiry_date("2025-12-24"), "24/12/2025");
}

#[test]
fn format_expiry_date_from_naive_timestamp_prefix() {
    assert_eq!(format_expiry_date("2026-03-09T10:30:00"), "9/3/2026");
}

#[test]
fn format_expiry_date_keeps_unparseable_input() {
    assert_eq!(format_expiry_date("next week"), "next week");
}

#[test]
fn price_label_uses_rupee_sign() {
    assert_eq!(price_label("250"), "Price: ₹250");
}

#[test]
fn mailto_href_prefixes_scheme() {
    assert_eq!(mailto_href("a@b.co"), "mailto:a@b.co");
}
