//! The normalized value held by a decoder node.

use indexmap::IndexMap;

use crate::decoder::JsonDecoder;
use crate::error::ErrorInfo;

/// The tagged union behind every [`JsonDecoder`].
///
/// Exactly one variant is active per node. Container variants hold fully
/// normalized child decoders — a raw `serde_json` array or object never
/// appears here; normalization replaces them eagerly at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String scalar.
    Str(String),
    /// Integral number that fits `i64`.
    Int(i64),
    /// Integral number that only fits `u64` (above `i64::MAX`).
    Uint(u64),
    /// Non-integral number.
    Float(f64),
    /// Boolean scalar.
    Bool(bool),
    /// The null sentinel.
    Null,
    /// Ordered sequence of child decoders, source order preserved.
    Array(Vec<JsonDecoder>),
    /// Mapping of child decoders keyed by the source key. Duplicate source
    /// keys are last-wins; iteration follows insertion order.
    Object(IndexMap<String, JsonDecoder>),
    /// A captured failure (parse error or navigation miss).
    Error(ErrorInfo),
}

/// Raw-cast used by [`JsonDecoder::collect_array`] and
/// [`JsonDecoder::collect_object`] to filter children by underlying type.
///
/// Each impl matches exactly the variant its optional accessor matches, so a
/// `collect_array::<i64>` sees the same elements that `as_int` would accept
/// one by one.
///
/// [`JsonDecoder::collect_array`]: crate::JsonDecoder::collect_array
/// [`JsonDecoder::collect_object`]: crate::JsonDecoder::collect_object
pub trait FromValue: Sized {
    /// Cast `value` to `Self`, or `None` on variant mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Uint(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(n) => Some(*n as f32),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casts_match_their_variant_only() {
        assert_eq!(String::from_value(&Value::Str("x".into())), Some("x".into()));
        assert_eq!(String::from_value(&Value::Int(1)), None);

        assert_eq!(i64::from_value(&Value::Int(-3)), Some(-3));
        assert_eq!(i64::from_value(&Value::Uint(u64::MAX)), None);

        assert_eq!(u64::from_value(&Value::Uint(u64::MAX)), Some(u64::MAX));
        assert_eq!(u64::from_value(&Value::Int(3)), None);

        assert_eq!(f64::from_value(&Value::Float(1.5)), Some(1.5));
        assert_eq!(f64::from_value(&Value::Int(1)), None);

        assert_eq!(f32::from_value(&Value::Float(1.5)), Some(1.5f32));

        assert_eq!(bool::from_value(&Value::Bool(true)), Some(true));
        assert_eq!(bool::from_value(&Value::Null), None);
    }
}
