//! The set of vocabulary type names a resolver recognizes.

use std::collections::BTreeSet;

use weftstreams_vocab::{VocabularyType, BUILTIN_TYPES};

/// Type names a [`Resolver`](crate::Resolver) treats as legitimate document
/// nodes.
///
/// Values whose type name falls outside the universe fail dispatch with
/// [`UnhandledType`](crate::ResolveError::UnhandledType); handlers may only be
/// registered for types inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUniverse {
    names: BTreeSet<String>,
}

impl TypeUniverse {
    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add a type name.
    pub fn with(mut self, type_name: impl Into<String>) -> Self {
        self.insert(type_name);
        self
    }

    /// Add the name of an extension type.
    pub fn with_type<T: VocabularyType>(self) -> Self {
        self.with(T::TYPE_NAME)
    }

    pub fn insert(&mut self, type_name: impl Into<String>) {
        self.names.insert(type_name.into());
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.names.contains(type_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::builtin()
    }
}
