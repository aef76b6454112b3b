use std::collections::BTreeSet;

/// Named types currently being expanded along one recursive path.
///
/// Keeps insertion order for diagnostics and a set for membership checks.
/// Never holds the same name twice: callers check [`ParentChain::contains`]
/// before [`ParentChain::extended`].
#[derive(Debug, Clone, Default)]
pub struct ParentChain<'a> {
    names: Vec<&'a str>,
    members: BTreeSet<&'a str>,
}

impl<'a> ParentChain<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.members.contains(type_name)
    }

    /// A new chain with `type_name` appended; `self` is left untouched so
    /// sibling properties keep seeing the same parents.
    #[must_use]
    pub fn extended(&self, type_name: &'a str) -> Self {
        debug_assert!(!self.contains(type_name), "{type_name} already in chain");
        let mut chain: Self = self.clone();
        chain.names.push(type_name);
        chain.members.insert(type_name);
        chain
    }

    #[must_use]
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }
}

/// Joins type names with `->`, e.g. `A->B`.
#[must_use]
pub fn display<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("->")
}
