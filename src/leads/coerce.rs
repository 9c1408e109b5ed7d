//! Coerce-or-default helpers, one per field type.
//!
//! Each helper reports whether the input was kept, missing, or rejected so
//! the normalizer can tell a documented fallback from a discarded value.

use super::types::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<T> {
    /// The input was usable as-is
    Kept(T),
    /// The input was null or blank; holds the default
    Missing(T),
    /// The input was present but unusable; holds the default
    Rejected(T),
}

impl<T> Coerced<T> {
    pub fn into_value(self) -> T {
        match self {
            Coerced::Kept(v) | Coerced::Missing(v) | Coerced::Rejected(v) => v,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Coerced::Rejected(_))
    }
}

/// Text field: null or whitespace-only text falls back to `default`.
pub fn coerce_text(value: &FieldValue, default: &str) -> Coerced<String> {
    if value.is_blank() {
        return Coerced::Missing(default.to_string());
    }
    Coerced::Kept(value.to_string())
}

/// Currency field: finite, non-negative numbers (or text parsing as one).
pub fn coerce_currency(value: &FieldValue, default: f64) -> Coerced<f64> {
    if value.is_blank() {
        return Coerced::Missing(default);
    }
    match non_negative(value) {
        Some(n) => Coerced::Kept(n),
        None => Coerced::Rejected(default),
    }
}

/// Integer count field. Fractional values are truncated; values too large
/// for a `u64` are rejected.
pub fn coerce_count(value: &FieldValue, default: u64) -> Coerced<u64> {
    if value.is_blank() {
        return Coerced::Missing(default);
    }
    match non_negative(value) {
        Some(n) if n < u64::MAX as f64 => Coerced::Kept(n.trunc() as u64),
        _ => Coerced::Rejected(default),
    }
}

fn non_negative(value: &FieldValue) -> Option<f64> {
    let n = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
        FieldValue::Null => return None,
    };
    (n.is_finite() && n >= 0.0).then_some(n)
}
