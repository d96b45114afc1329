//! Error types for the two failure channels: errors captured in the decoder
//! tree as data ([`ErrorInfo`]) and errors raised by the `try_*` accessor
//! family ([`JsonError`]).

use std::fmt;

use thiserror::Error;

/// Domain tag carried by every [`ErrorInfo`].
pub const ERROR_DOMAIN: &str = "JSONJoy";

/// Stable code for a parse failure reported by the underlying JSON parser.
pub const PARSE_ERROR_CODE: i32 = 1001;

/// Stable code for a navigation miss (out-of-range index or missing key).
pub const ACCESS_ERROR_CODE: i32 = 1002;

/// A failure captured inside the decoder tree instead of being raised.
///
/// Parse failures and navigation misses produce a node whose variant wraps
/// one of these, so chains like `node.get("a").at(0)` keep working past the
/// point of failure. Inspect via [`JsonDecoder::as_error`].
///
/// [`JsonDecoder::as_error`]: crate::JsonDecoder::as_error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Always [`ERROR_DOMAIN`].
    pub domain: &'static str,
    /// One of [`PARSE_ERROR_CODE`] or [`ACCESS_ERROR_CODE`].
    pub code: i32,
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl ErrorInfo {
    /// Capture a parser-reported failure.
    pub fn parse(err: &serde_json::Error) -> ErrorInfo {
        ErrorInfo {
            domain: ERROR_DOMAIN,
            code: PARSE_ERROR_CODE,
            message: err.to_string(),
        }
    }

    /// Capture a navigation miss.
    pub fn access(message: impl Into<String>) -> ErrorInfo {
        ErrorInfo {
            domain: ERROR_DOMAIN,
            code: ACCESS_ERROR_CODE,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.domain, self.code, self.message)
    }
}

/// The single error kind raised by the `try_*` accessor family.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// The node's variant did not satisfy the requested coercion.
    #[error("WRONG_TYPE")]
    WrongType,
}
