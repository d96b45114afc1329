//! Recursive JSON decoder with coercing accessors.
//!
//! Rust port of [JSONJoy](https://github.com/daltoniam/JSONJoy-Swift): raw
//! input (JSON text, bytes, or an already-parsed [`serde_json::Value`]) is
//! normalized once, eagerly, into a tree of [`JsonDecoder`] nodes, and every
//! node exposes safe accessors over its value. Failures are captured in the
//! tree as error nodes instead of raised, so lookup chains never need
//! intermediate checks; the `try_*` family raises [`JsonError::WrongType`]
//! for call sites that prefer errors.
//!
//! # Example
//!
//! ```
//! use jsonjoy::JsonDecoder;
//!
//! let node = JsonDecoder::new(r#"{"user": {"name": "dalton", "age": 23}, "tags": ["a", "b"]}"#);
//!
//! // Navigation never panics; misses become error nodes.
//! assert_eq!(node.get("user").get("name").as_str(), Some("dalton"));
//! assert_eq!(node.get("user").get("age").as_int(), Some(23));
//! assert_eq!(node.get("tags").at(1).as_str(), Some("b"));
//! assert!(node.get("tags").at(9).as_error().is_some());
//!
//! // Throwing channel for call sites that want errors.
//! assert!(node.get("user").get("name").try_int().is_err());
//! ```

pub mod decoder;
pub mod error;
pub mod value;

pub use decoder::{FromDecoder, JsonDecoder, RawJson};
pub use error::{ErrorInfo, JsonError, ACCESS_ERROR_CODE, ERROR_DOMAIN, PARSE_ERROR_CODE};
pub use value::{FromValue, Value};
