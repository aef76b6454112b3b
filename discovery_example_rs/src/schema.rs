use crate::error::ExampleGenError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A discovery document: the catalog of an API's named data types.
///
/// Only `schemas` is modeled; every other top-level key (`kind`, `resources`,
/// `methods`, ...) is ignored via serde's default behavior. Schemas stay raw
/// JSON until the walk reaches them, so a malformed type that is never
/// referenced does not prevent generating the others.
#[derive(Debug, Deserialize)]
pub struct DiscoveryDocument {
    pub schemas: BTreeMap<String, Value>,
}

impl DiscoveryDocument {
    /// Look up a named schema, returning the document's own key alongside it.
    #[must_use]
    pub fn schema(&self, type_name: &str) -> Option<(&str, &Value)> {
        self.schemas
            .get_key_value(type_name)
            .map(|(name, node)| (name.as_str(), node))
    }
}

impl FromStr for DiscoveryDocument {
    type Err = ExampleGenError;

    fn from_str(document_json: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(document_json)?)
    }
}

/// One schema node: a `$ref` to a named type, or a typed node.
///
/// Keywords with no bearing on the generated example (`description`, `enum`,
/// `pattern`, `minimum`, ...) are not modeled. Nested nodes are kept as raw
/// JSON and read with [`SchemaNode::from_value`] when they are walked.
#[derive(Debug, Deserialize)]
pub struct SchemaNode {
    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,

    #[serde(default)]
    pub r#type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub properties: Option<BTreeMap<String, Value>>,

    #[serde(default, rename = "additionalProperties")]
    pub additional_properties: Option<Value>,

    #[serde(default)]
    pub items: Option<Value>,
}

/// How an object declares keys beyond its `properties`.
#[derive(Debug, Clone, Copy)]
pub enum AdditionalProperties<'a> {
    /// `true`: any value is allowed.
    Any,
    /// A schema template for the values.
    Schema(&'a Value),
}

/// Every shape the generator knows how to exemplify.
#[derive(Debug, Clone, Copy)]
pub enum SchemaKind<'a> {
    Ref(&'a str),
    Any,
    Array(&'a Value),
    Boolean,
    Integer(IntegerFormat),
    Number(NumberFormat),
    Object,
    String(StringFormat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerFormat {
    Int32,
    Uint32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Double,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Plain,
    Byte,
    Date,
    DateTime,
    Int64,
}

impl IntegerFormat {
    fn from_format(format: Option<&str>) -> Option<Self> {
        match format? {
            "int32" => Some(Self::Int32),
            "uint32" => Some(Self::Uint32),
            _ => None,
        }
    }
}

impl NumberFormat {
    fn from_format(format: Option<&str>) -> Option<Self> {
        match format? {
            "double" => Some(Self::Double),
            "float" => Some(Self::Float),
            _ => None,
        }
    }
}

impl StringFormat {
    fn from_format(format: Option<&str>) -> Option<Self> {
        let Some(format) = format else {
            return Some(Self::Plain);
        };
        match format {
            "byte" => Some(Self::Byte),
            "date" => Some(Self::Date),
            "date-time" => Some(Self::DateTime),
            "int64" => Some(Self::Int64),
            _ => None,
        }
    }
}

impl SchemaNode {
    /// Read the node at `pointer`.
    ///
    /// # Errors
    ///
    /// Returns `ExampleGenError::InvalidSchema` naming `pointer` if `value` does
    /// not have the shape of a schema node.
    pub fn from_value(value: &Value, pointer: &str) -> Result<Self, ExampleGenError> {
        Self::deserialize(value).map_err(|source| ExampleGenError::InvalidSchema {
            pointer: pointer.to_string(),
            source,
        })
    }

    /// `None` when absent or `false`.
    #[must_use]
    pub fn additional_properties(&self) -> Option<AdditionalProperties<'_>> {
        match self.additional_properties.as_ref()? {
            Value::Bool(false) => None,
            Value::Bool(true) => Some(AdditionalProperties::Any),
            template => Some(AdditionalProperties::Schema(template)),
        }
    }

    /// Classify this node. `$ref` takes priority over `type`.
    ///
    /// Returns `None` for a missing or unknown `type`, an `array` without
    /// `items`, or a `format` outside the table for its type.
    #[must_use]
    pub fn kind(&self) -> Option<SchemaKind<'_>> {
        if let Some(reference) = self.reference.as_deref() {
            return Some(SchemaKind::Ref(reference));
        }
        let format: Option<&str> = self.format.as_deref();
        let kind: SchemaKind<'_> = match self.r#type.as_deref()? {
            "any" => SchemaKind::Any,
            "array" => SchemaKind::Array(self.items.as_ref()?),
            "boolean" => SchemaKind::Boolean,
            "integer" => SchemaKind::Integer(IntegerFormat::from_format(format)?),
            "number" => SchemaKind::Number(NumberFormat::from_format(format)?),
            "object" => SchemaKind::Object,
            "string" => SchemaKind::String(StringFormat::from_format(format)?),
            _ => return None,
        };
        Some(kind)
    }
}
