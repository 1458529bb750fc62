//! The minimum capability a value needs to take part in dispatch.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::value::Properties;

/// Object-safe access to a value's concrete type as [`Any`].
///
/// Blanket-implemented for every `'static` type, so implementors of
/// [`DocumentNode`] never write it by hand. On a `&dyn DocumentNode` the call
/// goes through the vtable and yields the concrete type, not the reference.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value in the vocabulary's object graph.
///
/// Reporting a type name is the only thing the dispatch core requires.
/// Nodes that carry a property bag expose it through [`properties`] so
/// traversals can descend into them; extension nodes without one keep the
/// default `None`.
///
/// [`properties`]: DocumentNode::properties
pub trait DocumentNode: AsAny + fmt::Debug + Send + Sync {
    /// The vocabulary type name, e.g. `"Note"`.
    fn type_name(&self) -> &str;

    fn properties(&self) -> Option<&Properties> {
        None
    }
}

/// A concrete Rust type standing for exactly one vocabulary type.
///
/// `TYPE_NAME` is what a resolver checks against its type universe when a
/// handler for the type is registered.
pub trait VocabularyType: DocumentNode + Sized {
    const TYPE_NAME: &'static str;
}

/// A shared, embedded node.
pub type Node = Arc<dyn DocumentNode>;
