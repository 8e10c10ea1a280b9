use super::*;

#[test]
fn integers_get_thousands_separators() {
    assert_eq!(format_number(1_234_567.0), "1,234,567");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1000.0), "1,000");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn decimals_group_only_the_integer_part() {
    assert_eq!(format_number(1234.5), "1,234.5");
    assert_eq!(format_number(9_876_543.21), "9,876,543.21");
}

#[test]
fn decimals_follow_locale_rounding() {
    assert_eq!(format_number(0.123_456), "0.123");
    assert_eq!(format_number(1234.567_89), "1,234.568");
    assert_eq!(format_number(999.9996), "1,000");
    assert_eq!(format_number(0.000_01), "0");
}

#[test]
fn decimal_ties_round_away_from_zero() {
    assert_eq!(format_number(1234.0625), "1,234.063");
    assert_eq!(format_number(0.0005), "0.001");
    assert_eq!(format_number(-2.5005), "-2.501");
    assert_eq!(format_number(999.9995), "1,000");
}

#[test]
fn negatives_keep_sign() {
    assert_eq!(format_number(-1_234_567.0), "-1,234,567");
    assert_eq!(format_number(-0.5), "-0.5");
}

#[test]
fn non_finite_values_render_like_the_browser() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "∞");
}

#[test]
fn group_thousands_handles_short_inputs() {
    assert_eq!(group_thousands(""), "");
    assert_eq!(group_thousands("12"), "12");
    assert_eq!(group_thousands("123456"), "123,456");
}

#[test]
fn format_date_renders_en_gb_fields() {
    assert_eq!(format_date("2024-03-05T14:30:00Z"), "05/03/2024, 14:30");
}

#[test]
fn format_date_converts_offsets_to_utc() {
    assert_eq!(format_date("2024-03-05T14:30:00+02:00"), "05/03/2024, 12:30");
}

#[test]
fn format_date_accepts_offsetless_and_fractional_timestamps() {
    assert_eq!(format_date("2024-12-31T23:59:59.123456"), "31/12/2024, 23:59");
    assert_eq!(format_date("2024-01-02 03:04:05"), "02/01/2024, 03:04");
}

#[test]
fn format_date_accepts_rfc_2822_http_dates() {
    assert_eq!(format_date("Tue, 05 Mar 2024 14:30:00 GMT"), "05/03/2024, 14:30");
    assert_eq!(format_date("Tue, 05 Mar 2024 14:30:00 +0100"), "05/03/2024, 13:30");
}

#[test]
fn format_date_accepts_bare_dates() {
    assert_eq!(format_date("2023-07-09"), "09/07/2023, 00:00");
}

#[test]
fn format_date_reports_invalid_input() {
    assert_eq!(format_date("yesterday"), INVALID_DATE);
    assert_eq!(format_date(""), INVALID_DATE);
}
