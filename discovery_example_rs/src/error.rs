use thiserror::Error;

/// Error type for example generation operations.
#[derive(Debug, Error)]
pub enum ExampleGenError {
    /// I/O error (e.g., reading the discovery document, writing the example).
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// A type name (top-level or `$ref`) that is not defined under `schemas`.
    /// `referenced_from` is the pointer of the `$ref`, or `None` for the requested type.
    #[error(
        "unknown type `{type_name}`{}",
        referenced_at(.referenced_from.as_deref())
    )]
    UnknownType {
        type_name: String,
        referenced_from: Option<String>,
    },

    /// A schema node whose type/format combination has no example value.
    #[error(
        "unsupported schema at `{pointer}`: type {}, format {}",
        display_or_missing(.schema_type.as_deref()),
        display_or_missing(.format.as_deref())
    )]
    UnsupportedSchema {
        pointer: String,
        schema_type: Option<String>,
        format: Option<String>,
    },

    /// A schema node reached by the walk that does not have the shape of a
    /// schema node (e.g. `"type": ["string", "null"]`).
    #[error("invalid schema at `{pointer}`: {source}")]
    InvalidSchema {
        pointer: String,
        #[source]
        source: serde_json::Error,
    },

    /// A type found within itself while recursive types are denied.
    #[error("recursive type `{type_name}` found within itself (parents: {parents})")]
    RecursiveType { type_name: String, parents: String },
}

fn referenced_at(pointer: Option<&str>) -> String {
    pointer.map_or_else(String::new, |p| format!(" referenced at `{p}`"))
}

fn display_or_missing(value: Option<&str>) -> String {
    value.map_or_else(|| "<none>".to_string(), |v| format!("`{v}`"))
}
