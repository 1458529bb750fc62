//! Built-in vocabulary node types.
//!
//! Every built-in type is a thin struct around a [`Properties`] bag. The
//! property schema of each term is deliberately not modelled here; the types
//! exist so that values have a concrete Rust type a resolver can dispatch on.

use crate::node::{DocumentNode, VocabularyType};
use crate::value::{Properties, Value};

macro_rules! vocabulary_types {
    ($($(#[$doc:meta])* $ty:ident,)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Default)]
            pub struct $ty {
                pub properties: Properties,
            }

            impl $ty {
                pub fn new() -> Self {
                    Self::default()
                }

                /// Builder-style append of `value` to property `name`.
                pub fn with(mut self, name: &str, value: Value) -> Self {
                    self.properties.append(name, value);
                    self
                }
            }

            impl DocumentNode for $ty {
                fn type_name(&self) -> &str {
                    Self::TYPE_NAME
                }

                fn properties(&self) -> Option<&Properties> {
                    Some(&self.properties)
                }
            }

            impl VocabularyType for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }
        )*

        /// Names of every built-in type, the default recognized type universe.
        pub const BUILTIN_TYPES: &[&str] = &[$(stringify!($ty)),*];
    };
}

vocabulary_types! {
    /// The base of the Object family.
    Object,
    /// A reference to a resource, carrying `href` and presentation hints.
    Link,
    /// A Link that mentions an actor.
    Mention,
    /// A short written work.
    Note,
    Article,
    Image,
    Document,
    /// A logical or physical location.
    Place,
    Person,
    Application,
    Collection,
    /// An action, with `object` and the other activity properties.
    Activity,
    /// An activity without an `object`.
    IntransitiveActivity,
    Create,
    /// An intransitive activity: the actor has arrived at `location`.
    Arrive,
    Travel,
    Question,
}

/// True for names of the Link family.
pub fn is_link_type(type_name: &str) -> bool {
    matches!(type_name, "Link" | "Mention")
}

pub fn is_builtin_type(type_name: &str) -> bool {
    BUILTIN_TYPES.contains(&type_name)
}

// --- tests -------------------------------------------------------------------
