//! Generate example JSON objects from the schemas of an API discovery document.
//!
//! Every property of the requested type gets a fixed placeholder value for its
//! type and format. `$ref`s are followed; a type found within itself is
//! replaced by an empty object.

mod error;
mod json_pointer;
mod parent_chain;
mod schema;
mod sentinel;
mod settings;
mod walker;

pub use error::ExampleGenError;
pub use schema::{
    AdditionalProperties, DiscoveryDocument, IntegerFormat, NumberFormat, SchemaKind, SchemaNode,
    StringFormat,
};
pub use sentinel::{ADDITIONAL_PROPERTY_NAME, EMPTY_MESSAGE_TYPE};
pub use settings::GenerateSettings;
pub use walker::{Example, RecursionWarning, generate_example};

use std::io::Write;
use std::path::Path;

/// Generate an example of `type_name` from a discovery document JSON string and
/// write it to `writer` as indented JSON (keys sorted) followed by a newline.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Stdout`, enabling easy unit testing without file system interaction.
/// Recursion warnings are returned and also emitted through `tracing`.
///
/// # Errors
///
/// Returns `ExampleGenError` if the document JSON is invalid, generation fails
/// (see [`generate_example`]), or writing to the writer fails.
pub fn generate_to_writer<W: Write>(
    document_json: &str,
    type_name: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<Vec<RecursionWarning>, ExampleGenError> {
    let document: DiscoveryDocument = document_json.parse()?;
    let Example { value, warnings } = generate_example(&document, type_name, settings)?;
    serde_json::to_writer_pretty(&mut *writer, &value)?;
    writeln!(writer)?;
    Ok(warnings)
}

/// Generate an example of `type_name` from a discovery document file and write
/// it to `writer`.
///
/// # Errors
///
/// Returns `ExampleGenError` if reading the input file fails, or for any error
/// of [`generate_to_writer`].
pub fn generate_from_file<W: Write>(
    input_path: impl AsRef<Path>,
    type_name: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<Vec<RecursionWarning>, ExampleGenError> {
    let document_json: String = std::fs::read_to_string(input_path)?;
    generate_to_writer(&document_json, type_name, writer, settings)
}
