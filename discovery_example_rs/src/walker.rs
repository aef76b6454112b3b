use crate::error::ExampleGenError;
use crate::json_pointer;
use crate::parent_chain::{self, ParentChain};
use crate::schema::{AdditionalProperties, DiscoveryDocument, SchemaKind, SchemaNode};
use crate::sentinel;
use crate::settings::GenerateSettings;
use serde_json::{Map, Value};
use std::fmt;

/// A generated example and the warnings raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub value: Map<String, Value>,
    pub warnings: Vec<RecursionWarning>,
}

impl Example {
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.value)
    }
}

/// A type found within itself; its nested occurrence was replaced by `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursionWarning {
    pub type_name: String,
    /// Types being expanded when the repetition was found, outermost first.
    pub parents: Vec<String>,
}

impl RecursionWarning {
    /// `A->B` for `A -> B -> A`.
    #[must_use]
    pub fn parents_display(&self) -> String {
        parent_chain::display(&self.parents)
    }

    /// `A->B->A` for `A -> B -> A`.
    #[must_use]
    pub fn cycle_display(&self) -> String {
        format!("{}->{}", self.parents_display(), self.type_name)
    }
}

impl fmt::Display for RecursionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} object found within itself, empty object returned as child to avoid recursion (parents: {})",
            self.type_name,
            self.parents_display()
        )
    }
}

/// Where `generate_object` finds its schema.
#[derive(Debug, Clone, Copy)]
enum ObjectRef<'n, 'p> {
    /// A type defined under `schemas`; extends the parent chain.
    /// `referenced_from` is the pointer of the `$ref`, if any.
    Named {
        type_name: &'n str,
        referenced_from: Option<&'p str>,
    },
    /// An anonymous `object` node at `pointer`; the parent chain is unchanged.
    Inline {
        node: &'n SchemaNode,
        pointer: &'p str,
    },
}

/// Walks a discovery document's schemas. One walker per top-level call.
struct Walker<'a> {
    document: &'a DiscoveryDocument,
    settings: &'a GenerateSettings,
    warnings: Vec<RecursionWarning>,
}

impl<'a> Walker<'a> {
    fn generate_property(
        &mut self,
        raw: &Value,
        pointer: &str,
        parents: &ParentChain<'a>,
    ) -> Result<Value, ExampleGenError> {
        let node: SchemaNode = SchemaNode::from_value(raw, pointer)?;
        let Some(kind) = node.kind() else {
            return Err(ExampleGenError::UnsupportedSchema {
                pointer: pointer.to_string(),
                schema_type: node.r#type.clone(),
                format: node.format.clone(),
            });
        };

        let value: Value = match kind {
            SchemaKind::Ref(type_name) => {
                let ref_pointer: String = json_pointer::child(pointer, "$ref");
                let object = ObjectRef::Named {
                    type_name,
                    referenced_from: Some(&ref_pointer),
                };
                Value::Object(self.generate_object(object, parents)?)
            }
            SchemaKind::Any => sentinel::any(),
            SchemaKind::Array(items) => {
                let items_pointer: String = json_pointer::child(pointer, "items");
                Value::Array(vec![self.generate_property(
                    items,
                    &items_pointer,
                    parents,
                )?])
            }
            SchemaKind::Boolean => sentinel::boolean(),
            SchemaKind::Integer(format) => sentinel::integer(format),
            SchemaKind::Number(format) => sentinel::number(format),
            SchemaKind::Object => {
                let object = ObjectRef::Inline {
                    node: &node,
                    pointer,
                };
                Value::Object(self.generate_object(object, parents)?)
            }
            SchemaKind::String(format) => sentinel::string(format),
        };
        Ok(value)
    }

    fn generate_object(
        &mut self,
        object: ObjectRef<'_, '_>,
        parents: &ParentChain<'a>,
    ) -> Result<Map<String, Value>, ExampleGenError> {
        match object {
            ObjectRef::Named {
                type_name,
                referenced_from,
            } => {
                if parents.contains(type_name) {
                    return self.recursion_found(type_name, parents);
                }
                let document: &'a DiscoveryDocument = self.document;
                let Some((defined_name, raw)) = document.schema(type_name) else {
                    return Err(ExampleGenError::UnknownType {
                        type_name: type_name.to_string(),
                        referenced_from: referenced_from.map(str::to_string),
                    });
                };
                let pointer: String = json_pointer::schema(defined_name);
                let node: SchemaNode = SchemaNode::from_value(raw, &pointer)?;
                self.generate_fields(&node, &pointer, &parents.extended(defined_name))
            }
            ObjectRef::Inline { node, pointer } => self.generate_fields(node, pointer, parents),
        }
    }

    /// Declared properties, plus `RANDOM_PROPERTY_NAME` for `additionalProperties`.
    fn generate_fields(
        &mut self,
        node: &SchemaNode,
        pointer: &str,
        parents: &ParentChain<'a>,
    ) -> Result<Map<String, Value>, ExampleGenError> {
        let mut result: Map<String, Value> = Map::new();

        if let Some(properties) = &node.properties {
            for (property_name, property) in properties {
                let property_pointer: String = json_pointer::property(pointer, property_name);
                let value: Value = self.generate_property(property, &property_pointer, parents)?;
                result.insert(property_name.clone(), value);
            }
        }

        let additional: Option<Value> = match node.additional_properties() {
            None => None,
            Some(AdditionalProperties::Any) => Some(sentinel::any()),
            Some(AdditionalProperties::Schema(template)) => {
                let template_pointer: String =
                    json_pointer::child(pointer, "additionalProperties");
                Some(self.generate_property(template, &template_pointer, parents)?)
            }
        };
        if let Some(value) = additional {
            result.insert(sentinel::ADDITIONAL_PROPERTY_NAME.to_string(), value);
        }

        Ok(result)
    }

    fn recursion_found(
        &mut self,
        type_name: &str,
        parents: &ParentChain<'a>,
    ) -> Result<Map<String, Value>, ExampleGenError> {
        let parents_display: String = parent_chain::display(parents.names());
        if self.settings.deny_recursive_types {
            return Err(ExampleGenError::RecursiveType {
                type_name: type_name.to_string(),
                parents: parents_display,
            });
        }

        tracing::warn!(
            type_name,
            parents = %parents_display,
            "object found within itself, empty object returned as child to avoid recursion"
        );
        self.warnings.push(RecursionWarning {
            type_name: type_name.to_string(),
            parents: parents.names().iter().map(|name| (*name).to_string()).collect(),
        });
        Ok(Map::new())
    }
}

/// Generate an example instance of the type named `type_name`.
///
/// # Errors
///
/// Returns `ExampleGenError::UnknownType` if `type_name` (or any `$ref` reached
/// from it) is not defined under `schemas`, `ExampleGenError::InvalidSchema` for a
/// reached node that is not shaped like a schema, `ExampleGenError::UnsupportedSchema`
/// for a node with no example value, and `ExampleGenError::RecursiveType` for a
/// type found within itself when `settings.deny_recursive_types` is set.
pub fn generate_example(
    document: &DiscoveryDocument,
    type_name: &str,
    settings: &GenerateSettings,
) -> Result<Example, ExampleGenError> {
    let Some((type_name, _)) = document.schema(type_name) else {
        return Err(ExampleGenError::UnknownType {
            type_name: type_name.to_string(),
            referenced_from: None,
        });
    };

    let mut walker: Walker<'_> = Walker {
        document,
        settings,
        warnings: Vec::new(),
    };
    let object = ObjectRef::Named {
        type_name,
        referenced_from: None,
    };
    let value: Map<String, Value> = walker.generate_object(object, &ParentChain::new())?;
    Ok(Example {
        value,
        warnings: walker.warnings,
    })
}
