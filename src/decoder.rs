//! The decoder node: normalization, coercion accessors, and navigation.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Number, Value as Json};

use crate::error::{ErrorInfo, JsonError};
use crate::value::{FromValue, Value};

/// Raw input accepted by [`JsonDecoder::new`].
///
/// Text and bytes are treated as JSON source and handed to the parser; an
/// already-parsed [`serde_json::Value`] is normalized as-is, so a top-level
/// `Value::String` is a literal string scalar while a top-level `&str` is
/// JSON source.
#[derive(Debug, Clone)]
pub enum RawJson {
    /// UTF-8 JSON source text.
    Text(String),
    /// JSON source bytes.
    Bytes(Vec<u8>),
    /// An already-parsed native value tree.
    Parsed(Json),
}

impl From<&str> for RawJson {
    fn from(text: &str) -> Self {
        RawJson::Text(text.to_string())
    }
}

impl From<String> for RawJson {
    fn from(text: String) -> Self {
        RawJson::Text(text)
    }
}

impl From<&[u8]> for RawJson {
    fn from(bytes: &[u8]) -> Self {
        RawJson::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for RawJson {
    fn from(bytes: Vec<u8>) -> Self {
        RawJson::Bytes(bytes)
    }
}

impl From<Json> for RawJson {
    fn from(value: Json) -> Self {
        RawJson::Parsed(value)
    }
}

/// A recursive JSON value wrapper with safe, coercing accessors.
///
/// Construction normalizes the whole input eagerly: every element of an
/// array and every value of an object is itself a fully-formed
/// `JsonDecoder`, down to the scalar leaves. Failures never escape
/// construction — a parse error or a navigation miss produces a node whose
/// variant is [`Value::Error`], which behaves like any other node except
/// that every coercion accessor on it is absent.
///
/// # Example
///
/// ```
/// use jsonjoy::JsonDecoder;
///
/// let node = JsonDecoder::new(r#"{"name": "jsonjoy", "stars": 12}"#);
/// assert_eq!(node.get("name").as_str(), Some("jsonjoy"));
/// assert_eq!(node.get("stars").as_int(), Some(12));
/// assert!(node.get("missing").as_error().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonDecoder {
    value: Option<Value>,
}

impl JsonDecoder {
    /// Build a decoder tree from raw input. Never fails: parser errors are
    /// captured as an error-variant node.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonjoy::JsonDecoder;
    ///
    /// let ok = JsonDecoder::new("[1, 2, 3]");
    /// assert_eq!(ok.at(1).as_int(), Some(2));
    ///
    /// let bad = JsonDecoder::new("{not json");
    /// assert!(bad.as_error().is_some());
    /// ```
    pub fn new(raw: impl Into<RawJson>) -> JsonDecoder {
        match raw.into() {
            RawJson::Text(text) => Self::parse(text.as_bytes()),
            RawJson::Bytes(bytes) => Self::parse(&bytes),
            RawJson::Parsed(value) => Self::from_json(value),
        }
    }

    /// Hand JSON source to the parser and wrap the outcome.
    fn parse(bytes: &[u8]) -> JsonDecoder {
        match serde_json::from_slice::<Json>(bytes) {
            Ok(value) => Self::from_json(value),
            Err(err) => JsonDecoder {
                value: Some(Value::Error(ErrorInfo::parse(&err))),
            },
        }
    }

    /// Normalize an already-parsed value tree into a decoder tree.
    ///
    /// This is the recursive sub-node constructor: strings here are literal
    /// string scalars, never JSON source.
    pub fn from_json(value: Json) -> JsonDecoder {
        let value = match value {
            Json::Array(items) => Value::Array(items.into_iter().map(Self::from_json).collect()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from_json(value)))
                    .collect::<IndexMap<String, JsonDecoder>>(),
            ),
            Json::String(s) => Value::Str(s),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    // Without arbitrary_precision every remaining number is a
                    // finite f64.
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::Bool(b) => Value::Bool(b),
            Json::Null => Value::Null,
        };
        JsonDecoder { value: Some(value) }
    }

    /// The untyped underlying value; `None` only for the absent state.
    pub fn raw_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The text if the variant is a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// The number if the variant is a signed integer.
    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            Some(Value::Int(n)) => Some(n),
            _ => None,
        }
    }

    /// The number if the variant is an unsigned integer (a value above
    /// `i64::MAX`).
    pub fn as_uint(&self) -> Option<u64> {
        match self.value {
            Some(Value::Uint(n)) => Some(n),
            _ => None,
        }
    }

    /// The number if the variant is floating-point.
    pub fn as_double(&self) -> Option<f64> {
        match self.value {
            Some(Value::Float(n)) => Some(n),
            _ => None,
        }
    }

    /// The number if the variant is floating-point, narrowed to `f32`.
    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            Some(Value::Float(n)) => Some(n as f32),
            _ => None,
        }
    }

    /// The number if the variant is any numeric kind.
    pub fn as_number(&self) -> Option<Number> {
        match self.value {
            Some(Value::Int(n)) => Some(Number::from(n)),
            Some(Value::Uint(n)) => Some(Number::from(n)),
            Some(Value::Float(n)) => Number::from_f64(n),
            _ => None,
        }
    }

    /// The children if the variant is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonDecoder>> {
        match &self.value {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// The children if the variant is an array.
    pub fn as_array(&self) -> Option<&[JsonDecoder]> {
        match &self.value {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// The captured failure if the variant is an error.
    pub fn as_error(&self) -> Option<&ErrorInfo> {
        match &self.value {
            Some(Value::Error(info)) => Some(info),
            _ => None,
        }
    }

    /// Coerce the value to a boolean. Never fails.
    ///
    /// A string is truthy when it equals `"true"` (case-insensitive) or
    /// parses as an integer greater than zero. An integer is truthy when
    /// greater than zero. A float is truthy when greater than `0.99` — the
    /// threshold differs from the integer rule on purpose, for compatibility
    /// with upstream. Everything else (null, containers, errors, the absent
    /// state) is false.
    pub fn as_bool(&self) -> bool {
        if let Some(s) = self.as_str() {
            let lower = s.to_lowercase();
            lower == "true" || lower.parse::<i64>().is_ok_and(|n| n > 0)
        } else if let Some(n) = self.as_int() {
            n > 0
        } else if let Some(n) = self.as_uint() {
            n > 0
        } else if let Some(n) = self.as_double() {
            n > 0.99
        } else {
            false
        }
    }

    /// Like [`as_str`](Self::as_str), but raises on mismatch.
    pub fn try_str(&self) -> Result<String, JsonError> {
        self.as_str().map(str::to_string).ok_or(JsonError::WrongType)
    }

    /// Like [`as_int`](Self::as_int), but raises on mismatch.
    pub fn try_int(&self) -> Result<i64, JsonError> {
        self.as_int().ok_or(JsonError::WrongType)
    }

    /// Like [`as_uint`](Self::as_uint), but raises on mismatch.
    pub fn try_uint(&self) -> Result<u64, JsonError> {
        self.as_uint().ok_or(JsonError::WrongType)
    }

    /// Like [`as_double`](Self::as_double), but raises on mismatch.
    pub fn try_double(&self) -> Result<f64, JsonError> {
        self.as_double().ok_or(JsonError::WrongType)
    }

    /// Like [`as_float`](Self::as_float), but raises on mismatch.
    pub fn try_float(&self) -> Result<f32, JsonError> {
        self.as_float().ok_or(JsonError::WrongType)
    }

    /// Like [`as_number`](Self::as_number), but raises on mismatch.
    pub fn try_number(&self) -> Result<Number, JsonError> {
        self.as_number().ok_or(JsonError::WrongType)
    }

    /// Like [`as_bool`](Self::as_bool), except that the null sentinel raises
    /// instead of coercing to false.
    pub fn try_bool(&self) -> Result<bool, JsonError> {
        if matches!(self.value, Some(Value::Null)) {
            return Err(JsonError::WrongType);
        }
        Ok(self.as_bool())
    }

    /// Pull the raw values of type `T` out of an array node.
    ///
    /// Returns `None` when the variant is not an array; otherwise every
    /// child whose underlying value casts to `T`, in source order, silently
    /// skipping the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonjoy::JsonDecoder;
    ///
    /// let node = JsonDecoder::new(r#"["a", 1, "b", 2]"#);
    /// assert_eq!(node.collect_array::<String>(), Some(vec!["a".into(), "b".into()]));
    /// assert_eq!(node.collect_array::<i64>(), Some(vec![1, 2]));
    /// assert_eq!(node.at(0).collect_array::<i64>(), None);
    /// ```
    pub fn collect_array<T: FromValue>(&self) -> Option<Vec<T>> {
        let items = self.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|child| child.raw_value().and_then(T::from_value))
                .collect(),
        )
    }

    /// Pull the raw values of type `T` out of an object node, keyed as in
    /// the source. `None` when the variant is not an object.
    pub fn collect_object<T: FromValue>(&self) -> Option<IndexMap<String, T>> {
        let map = self.as_object()?;
        Some(
            map.iter()
                .filter_map(|(key, child)| {
                    child
                        .raw_value()
                        .and_then(T::from_value)
                        .map(|value| (key.clone(), value))
                })
                .collect(),
        )
    }

    /// Array element access. An out-of-range index, or any non-array node,
    /// yields an error-variant node rather than a panic, so chained lookups
    /// need no intermediate checks.
    pub fn at(&self, index: usize) -> JsonDecoder {
        if let Some(Value::Array(items)) = &self.value {
            if let Some(child) = items.get(index) {
                return child.clone();
            }
        }
        JsonDecoder::from(ErrorInfo::access(format!(
            "index: {index} is out of range or node is not an array"
        )))
    }

    /// Object member access. A missing key, or any non-object node, yields
    /// an error-variant node.
    pub fn get(&self, key: &str) -> JsonDecoder {
        if let Some(Value::Object(map)) = &self.value {
            if let Some(child) = map.get(key) {
                return child.clone();
            }
        }
        JsonDecoder::from(ErrorInfo::access(format!(
            "key: {key} does not exist or node is not an object"
        )))
    }

    /// Render the tree in a JSON-like format. Helpful for debugging.
    ///
    /// Not a spec-compliant emitter: strings are wrapped in quotes without
    /// escaping, objects print in insertion order, and the absent state
    /// prints as the empty string.
    pub fn print(&self) -> String {
        match &self.value {
            Some(Value::Array(items)) => {
                let mut out = String::from("[");
                for child in items {
                    out.push_str(&child.print());
                    out.push(',');
                }
                // Empty arrays have no trailing separator to drop.
                if out.ends_with(',') {
                    out.pop();
                }
                out.push(']');
                out
            }
            Some(Value::Object(map)) => {
                let mut out = String::from("{");
                for (key, child) in map {
                    out.push_str(&format!("\"{key}\": {},", child.print()));
                }
                if out.ends_with(',') {
                    out.pop();
                }
                out.push('}');
                out
            }
            Some(Value::Str(s)) => format!("\"{s}\""),
            Some(Value::Null) => "null".to_string(),
            Some(Value::Int(n)) => n.to_string(),
            Some(Value::Uint(n)) => n.to_string(),
            Some(Value::Float(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Error(info)) => info.to_string(),
            None => String::new(),
        }
    }
}

impl From<ErrorInfo> for JsonDecoder {
    fn from(info: ErrorInfo) -> Self {
        JsonDecoder {
            value: Some(Value::Error(info)),
        }
    }
}

impl fmt::Display for JsonDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}

/// Implement this on any type that builds itself from a decoder node.
///
/// # Example
///
/// ```
/// use jsonjoy::{FromDecoder, JsonDecoder, JsonError};
///
/// struct User {
///     name: String,
/// }
///
/// impl FromDecoder for User {
///     type Error = JsonError;
///
///     fn from_decoder(decoder: &JsonDecoder) -> Result<Self, JsonError> {
///         Ok(User {
///             name: decoder.get("name").try_str()?,
///         })
///     }
/// }
///
/// let user = User::from_decoder(&JsonDecoder::new(r#"{"name": "dalton"}"#)).unwrap();
/// assert_eq!(user.name, "dalton");
/// ```
pub trait FromDecoder: Sized {
    /// The typed error surfaced when the shape does not match.
    type Error;

    /// Build `Self` from a decoder node.
    fn from_decoder(decoder: &JsonDecoder) -> Result<Self, Self::Error>;
}
