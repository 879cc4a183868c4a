//! Internal helpers for input validation and conversion.
//!
//! Not part of the public API.

use crate::{EngineError, ResultEngine};

/// Parse a decimal string into an integer number of `scale` minor units.
///
/// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
/// Rejects empty strings, non-digits, more than `scale` fractional digits and
/// magnitudes above `max` minor units.
pub(crate) fn parse_fixed_point(
    input: &str,
    scale: u32,
    max: i64,
    label: &str,
) -> ResultEngine<i64> {
    let invalid = || EngineError::InvalidValue(format!("invalid {label}: {input:?}"));
    let overflow = || EngineError::InvalidValue(format!("{label} too large"));

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidValue(format!("empty {label}")));
    }

    let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped.trim())
    } else if let Some(stripped) = trimmed.strip_prefix('+') {
        (false, stripped.trim())
    } else {
        (false, trimmed)
    };

    let rest = rest.replace(',', ".");
    let mut parts = rest.split('.');
    let whole_str = parts.next().ok_or_else(invalid)?;
    let frac_str = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(invalid());
    }

    if whole_str.is_empty() || !whole_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if !frac_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac_str.len() > scale as usize {
        return Err(EngineError::InvalidValue(format!(
            "{label} allows at most {scale} decimals"
        )));
    }

    let factor = 10i64.pow(scale);
    let whole: i64 = whole_str.parse().map_err(|_| overflow())?;
    let frac: i64 = if frac_str.is_empty() {
        0
    } else {
        let padding = 10i64.pow(scale - frac_str.len() as u32);
        frac_str.parse::<i64>().map_err(|_| invalid())? * padding
    };

    let total = whole
        .checked_mul(factor)
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(overflow)?;
    if total > max {
        return Err(overflow());
    }

    Ok(if negative { -total } else { total })
}

/// Write `value` with `,` every three digits (`1234567` -> `1,234,567`).
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Normalize enum text for lookups: lowercase, spaces and dashes become `_`.
pub(crate) fn enum_key(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}
