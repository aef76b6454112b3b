//! JSON Pointers (RFC 6901) into a discovery document.
//!
//! Errors name the offending schema node by pointer, e.g.
//! `/schemas/Instance/properties/labels/additionalProperties`.
//! `~` is escaped as `~0` and `/` as `~1`.

/// Pointer to the definition of a named type.
#[must_use]
pub fn schema(type_name: &str) -> String {
    child("/schemas", type_name)
}

/// Pointer to a declared property of the object node at `object`.
#[must_use]
pub fn property(object: &str, property_name: &str) -> String {
    child(&child(object, "properties"), property_name)
}

/// Returns a new pointer with one escaped segment appended.
#[must_use]
pub fn child(pointer: &str, segment: &str) -> String {
    let mut result: String = String::with_capacity(pointer.len() + segment.len() + 1);
    result.push_str(pointer);
    result.push('/');
    for c in segment.chars() {
        match c {
            '~' => result.push_str("~0"),
            '/' => result.push_str("~1"),
            other => result.push(other),
        }
    }
    result
}
