//! Fixed placeholder values for each primitive type/format pair.
//!
//! Values are never random, so generating the same type twice yields the
//! same example.

use crate::schema::{IntegerFormat, NumberFormat, StringFormat};
use serde_json::{Map, Value};

/// Key of the single synthetic entry exemplifying `additionalProperties`.
pub const ADDITIONAL_PROPERTY_NAME: &str = "RANDOM_PROPERTY_NAME";

/// `@type` of the example for `any`: "no specific shape".
pub const EMPTY_MESSAGE_TYPE: &str = "type.googleapis.com/google.protobuf.Empty";

pub(crate) fn any() -> Value {
    let mut message: Map<String, Value> = Map::new();
    message.insert(
        "@type".to_string(),
        Value::String(EMPTY_MESSAGE_TYPE.to_string()),
    );
    Value::Object(message)
}

pub(crate) const fn boolean() -> Value {
    Value::Bool(true)
}

pub(crate) fn integer(format: IntegerFormat) -> Value {
    match format {
        IntegerFormat::Int32 => Value::from(i32::MIN),
        IntegerFormat::Uint32 => Value::from(u32::MAX),
    }
}

pub(crate) fn number(format: NumberFormat) -> Value {
    match format {
        NumberFormat::Double => Value::from(-0.1_f64),
        NumberFormat::Float => Value::from(0.1_f64),
    }
}

pub(crate) fn string(format: StringFormat) -> Value {
    let literal: &str = match format {
        StringFormat::Plain => "RANDOM_STRING",
        // base64 of "RANDOM_TEXT"
        StringFormat::Byte => "UkFORE9NX1RFWFQ=",
        StringFormat::Date => "2030-12-31",
        StringFormat::DateTime => "2031-11-30T23:00:30.123Z",
        StringFormat::Int64 => "-9223372036854775808",
    };
    Value::String(literal.to_string())
}
