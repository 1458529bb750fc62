//! Type-directed resolution of polymorphic ActivityStreams values.
//!
//! A property such as `result` may hold a Note, a Link, an Image, or a type
//! nobody registered. This crate lets a caller register one callback per
//! concrete type they care about, then dispatches each value to the callback
//! matching its runtime type, reporting anything that fell through so the
//! caller can handle it by hand.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`resolver`] | [`Resolver`]: immutable type-to-callback dispatch table |
//! | [`universe`] | [`TypeUniverse`]: the type names a resolver will accept |
//! | [`context`] | [`Context`]: cancellation and deadlines passed to every callback |
//! | [`resolution`] | [`Presence`] and [`Resolution`] classifications |
//! | [`streams`] | Convenience wrappers and per-property accessor views |
//! | [`walk`] | [`classify`]: breadth-first classification of a whole document |
//! | [`render`] | Human-readable text rendering of a [`Report`] |
//! | [`error`] | [`ResolveError`] and [`is_unmatched_err`] |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use weftstreams::{Context, Resolver};
//! use weftstreams_vocab::{Image, Note};
//!
//! let resolver = Resolver::builder()
//!     .on(|n: &Note| { println!("note: {n:?}"); Ok(()) })
//!     .on(|_: &Image| Ok(()))
//!     .build()?;
//!
//! let ctx = Context::background();
//! match resolver.resolve(&ctx, &Note::new()) {
//!     Ok(()) => {}
//!     Err(e) if e.is_unmatched() => { /* handle the raw value */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod context;
pub mod error;
pub mod render;
pub mod resolution;
pub mod resolver;
pub mod streams;
pub mod universe;
pub mod walk;

pub use context::{CancelHandle, Context, ContextError};
pub use error::{is_unmatched_err, BoxError, ResolveError};
pub use render::{render_entry, render_report};
pub use resolution::{Presence, Resolution};
pub use resolver::{Handler, Resolver, ResolverBuilder};
pub use streams::{ActivityAccessors, ObjectAccessors};
pub use universe::TypeUniverse;
pub use walk::{classify, Report, ReportEntry, WalkError};
