//! Number and date presentation shared by every view.
//!
//! Both helpers reproduce what a browser's default `en-US` number formatting
//! and `en-GB` short date-time formatting produce, so server-rendered and
//! hydrated markup agree.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Text shown for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Fraction digits kept by locale number formatting.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with thousands separators.
///
/// Integers are grouped as-is. Non-integers go through locale formatting
/// (at most three fraction digits, trailing zeros dropped) and only the
/// integer part is regrouped, so `1234.5` renders `1,234.5`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞".to_owned() } else { "-∞".to_owned() };
    }
    let sign = if n.is_sign_negative() && n != 0.0 { "-" } else { "" };
    if n.fract() == 0.0 {
        return format!("{sign}{}", group_thousands(&format!("{:.0}", n.abs())));
    }

    let (int_part, frac_part) = round_half_expand(&n.abs().to_string(), MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        format!("{sign}{}", group_thousands(&int_part))
    } else {
        format!("{sign}{}.{frac_part}", group_thousands(&int_part))
    }
}

/// Round a plain decimal string to `places` fraction digits, ties away from
/// zero. Works on the shortest round-trip text of the value, as locale
/// formatting does, so `1234.0625` rounds to `1234.063`.
fn round_half_expand(plain: &str, places: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));
    if frac_part.len() <= places {
        return (int_part.to_owned(), frac_part.to_owned());
    }
    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part[..places].bytes()).collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }
    let text: String = digits.iter().map(|&b| char::from(b)).collect();
    let (int_digits, frac_digits) = text.split_at(text.len() - places);
    (int_digits.to_owned(), frac_digits.to_owned())
}

/// Insert `,` every three digits from the right of a plain digit string.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a timestamp as `DD/MM/YYYY, HH:MM` in UTC.
///
/// Accepts RFC 3339, ISO 8601 with or without an offset (offset-less values
/// are UTC), a space in place of `T`, RFC 2822 (`Tue, 05 Mar 2024 14:30:00
/// GMT`), and bare dates.
#[must_use]
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{:02}/{:02}/{}, {:02}:{:02}",
            dt.day(),
            u8::from(dt.month()),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => INVALID_DATE.to_owned(),
    }
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = raw.replacen(' ', "T", 1);
    if let Ok(dt) = OffsetDateTime::parse(&normalized, &Rfc3339) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }
    if let Ok(dt) = OffsetDateTime::parse(&normalized, &Iso8601::DEFAULT) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc2822) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }
    if let Ok(dt) = PrimitiveDateTime::parse(&normalized, &Iso8601::DEFAULT) {
        return Some(dt.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}
