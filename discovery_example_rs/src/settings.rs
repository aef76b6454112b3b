//! Settings for example generation.

/// Settings that control example generation behavior.
#[derive(Debug, Clone, Default)]
pub struct GenerateSettings {
    /// When true, a type found within itself (directly or through other
    /// types) aborts generation with `ExampleGenError::RecursiveType`.
    ///
    /// **Default: false.** The repeated type is replaced by an empty object
    /// and a warning is emitted instead.
    pub deny_recursive_types: bool,
}
