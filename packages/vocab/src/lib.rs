//! Raw document model for weftstreams.
//!
//! This crate holds the untyped side of the vocabulary: linked, JSON-like
//! nodes whose properties may carry literals, embedded nodes, or opaque IRI
//! references. It knows nothing about dispatch; the `weftstreams` crate
//! builds its resolver and convenience accessors on top of it.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`node`] | The [`DocumentNode`] capability and the [`VocabularyType`] marker |
//! | [`value`] | Property values ([`Value`]) and the ordered [`Properties`] bag |
//! | [`types`] | Built-in vocabulary node types ([`Note`], [`Image`], [`IntransitiveActivity`], …) |
//! | [`props`] | Well-known property names |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use weftstreams_vocab::{props, Image, Note, Value};
//!
//! let note = Note::new()
//!     .with(props::NAME, Value::text("Harbour at dusk"))
//!     .with(props::ATTACHMENT, Value::object(Image::new()));
//!
//! assert_eq!(note.properties.len(props::ATTACHMENT), 1);
//! ```

pub mod node;
pub mod props;
pub mod types;
pub mod value;

pub use node::{AsAny, DocumentNode, Node, VocabularyType};
pub use types::{
    is_builtin_type, is_link_type, Activity, Application, Arrive, Article, Collection, Create,
    Document, Image, IntransitiveActivity, Link, Mention, Note, Object, Person, Place, Question,
    Travel, BUILTIN_TYPES,
};
pub use value::{Properties, Value};
