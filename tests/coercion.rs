//! Coercion accessor contracts: the optional family, the boolean coercion
//! table, and optional/throwing consistency.

use jsonjoy::{JsonDecoder, JsonError};
use serde_json::json;

#[test]
fn bare_string_round_trip() {
    let node = JsonDecoder::new(r#""hello""#);
    assert_eq!(node.as_str(), Some("hello"));
    assert_eq!(node.as_int(), None);
    assert_eq!(node.as_uint(), None);
    assert_eq!(node.as_double(), None);
    assert_eq!(node.as_float(), None);
    assert_eq!(node.as_number(), None);
    assert!(node.as_array().is_none());
    assert!(node.as_object().is_none());
    assert!(node.as_error().is_none());
}

#[test]
fn bare_integer_round_trip() {
    let node = JsonDecoder::new("-42");
    assert_eq!(node.as_int(), Some(-42));
    assert_eq!(node.as_str(), None);
    assert_eq!(node.as_uint(), None);
    assert_eq!(node.as_double(), None);
    assert_eq!(node.as_number(), Some(serde_json::Number::from(-42)));
}

#[test]
fn bare_double_round_trip() {
    let node = JsonDecoder::new("3.5");
    assert_eq!(node.as_double(), Some(3.5));
    assert_eq!(node.as_float(), Some(3.5f32));
    assert_eq!(node.as_int(), None);
    assert_eq!(node.as_str(), None);
    assert_eq!(node.as_number(), serde_json::Number::from_f64(3.5));
}

#[test]
fn bare_boolean_and_null_round_trip() {
    let node = JsonDecoder::new("true");
    assert!(node.as_bool());
    assert_eq!(node.as_str(), None);
    assert_eq!(node.as_number(), None);

    let node = JsonDecoder::new("null");
    assert_eq!(node.as_str(), None);
    assert_eq!(node.as_int(), None);
    assert!(!node.as_bool());
}

#[test]
fn boolean_coercion_table() {
    // Strings: "true" (any case) or an integer text > 0.
    assert!(JsonDecoder::new(json!("true")).as_bool());
    assert!(JsonDecoder::new(json!("TRUE")).as_bool());
    assert!(!JsonDecoder::new(json!("FALSE")).as_bool());
    assert!(JsonDecoder::new(json!("5")).as_bool());
    assert!(!JsonDecoder::new(json!("0")).as_bool());
    assert!(!JsonDecoder::new(json!("-3")).as_bool());
    assert!(!JsonDecoder::new(json!("yes")).as_bool());

    // Integers: > 0.
    assert!(!JsonDecoder::new(json!(0)).as_bool());
    assert!(JsonDecoder::new(json!(1)).as_bool());
    assert!(!JsonDecoder::new(json!(-1)).as_bool());

    // Floats: > 0.99, an intentional asymmetry kept for compatibility.
    assert!(!JsonDecoder::new(json!(0.99)).as_bool());
    assert!(JsonDecoder::new(json!(1.0)).as_bool());
    assert!(!JsonDecoder::new(json!(0.5)).as_bool());

    // Everything else is false.
    assert!(!JsonDecoder::new(json!(null)).as_bool());
    assert!(!JsonDecoder::new(json!([1])).as_bool());
    assert!(!JsonDecoder::new(json!({"a": 1})).as_bool());
    assert!(!JsonDecoder::new("{broken").as_bool());
}

#[test]
fn float_view_uses_the_same_threshold() {
    let node = JsonDecoder::new(json!(0.99));
    assert_eq!(node.as_float(), Some(0.99f32));
    assert!(!node.as_bool());
}

#[test]
fn throwing_family_mirrors_the_optional_family() {
    let string_node = JsonDecoder::new(r#""x""#);
    assert_eq!(string_node.try_str(), Ok("x".to_string()));
    assert_eq!(string_node.try_int(), Err(JsonError::WrongType));
    assert_eq!(string_node.try_uint(), Err(JsonError::WrongType));
    assert_eq!(string_node.try_double(), Err(JsonError::WrongType));
    assert_eq!(string_node.try_float(), Err(JsonError::WrongType));
    assert_eq!(string_node.try_number(), Err(JsonError::WrongType));

    let int_node = JsonDecoder::new("7");
    assert_eq!(int_node.try_int(), Ok(7));
    assert_eq!(int_node.try_str(), Err(JsonError::WrongType));
    assert_eq!(int_node.try_number(), Ok(serde_json::Number::from(7)));

    let double_node = JsonDecoder::new("2.5");
    assert_eq!(double_node.try_double(), Ok(2.5));
    assert_eq!(double_node.try_float(), Ok(2.5f32));
    assert_eq!(double_node.try_int(), Err(JsonError::WrongType));
}

#[test]
fn try_bool_raises_only_on_null() {
    // Null is the one case where the coercing path is refused.
    assert_eq!(
        JsonDecoder::new("null").try_bool(),
        Err(JsonError::WrongType)
    );
    assert!(!JsonDecoder::new("null").as_bool());

    assert_eq!(JsonDecoder::new("true").try_bool(), Ok(true));
    assert_eq!(JsonDecoder::new("0").try_bool(), Ok(false));
    assert_eq!(JsonDecoder::new(json!("5")).try_bool(), Ok(true));
    // An error node coerces to false rather than raising.
    assert_eq!(JsonDecoder::new("{broken").try_bool(), Ok(false));
}

#[test]
fn throwing_family_raises_on_error_nodes() {
    let miss = JsonDecoder::new(r#"{"a": 1}"#).get("b");
    assert_eq!(miss.try_str(), Err(JsonError::WrongType));
    assert_eq!(miss.try_int(), Err(JsonError::WrongType));
    assert_eq!(miss.try_number(), Err(JsonError::WrongType));
}
