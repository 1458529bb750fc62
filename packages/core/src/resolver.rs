//! Type-driven dispatch of untyped document nodes.
//!
//! A [`Resolver`] is an immutable, ordered table of [`Handler`]s, each bound
//! to exactly one concrete node type. [`Resolver::resolve`] routes a
//! `&dyn DocumentNode` to the first callback registered for the value's
//! concrete type; [`Resolver::apply`] does the same for predicates.
//!
//! Handlers are type-erased closures keyed by [`TypeId`]. The type check that
//! binds a handler to its type happens once, when the handler is built; at
//! dispatch time the only work is a linear scan for a matching key followed
//! by a downcast that cannot fail for handlers built here.
//!
//! ```rust,ignore
//! use weftstreams::{Context, Handler, Resolver};
//! use weftstreams_vocab::{Image, Note};
//!
//! let resolver = Resolver::new([
//!     Handler::on(|note: &Note| {
//!         println!("note with {} names", note.properties.len("name"));
//!         Ok(())
//!     }),
//!     Handler::on(|_: &Image| Ok(())),
//! ])?;
//!
//! resolver.resolve(&Context::background(), &Note::new())?;
//! ```

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use weftstreams_vocab::{DocumentNode, VocabularyType};

use crate::context::Context;
use crate::error::{BoxError, ResolveError};
use crate::universe::TypeUniverse;

type CallbackFn = dyn Fn(&Context, &dyn DocumentNode) -> Result<(), ResolveError> + Send + Sync;
type PredicateFn = dyn Fn(&Context, &dyn DocumentNode) -> Result<bool, ResolveError> + Send + Sync;

#[derive(Clone)]
enum HandlerKind {
    Callback(Arc<CallbackFn>),
    Predicate(Arc<PredicateFn>),
}

/// One entry of a resolver's dispatch table: a callback or a predicate bound
/// to a single concrete node type.
#[derive(Clone)]
pub struct Handler {
    type_id: TypeId,
    type_name: &'static str,
    kind: HandlerKind,
}

impl Handler {
    /// A callback for values of type `T`.
    pub fn on<T, F>(f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self::on_with_context(move |_: &Context, value: &T| f(value))
    }

    /// A callback for values of type `T` that also receives the dispatch
    /// [`Context`].
    pub fn on_with_context<T, F>(f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&Context, &T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let thunk = move |ctx: &Context, value: &dyn DocumentNode| {
            let concrete = downcast::<T>(value)?;
            f(ctx, concrete).map_err(ResolveError::Callback)
        };
        Self {
            type_id: TypeId::of::<T>(),
            type_name: T::TYPE_NAME,
            kind: HandlerKind::Callback(Arc::new(thunk)),
        }
    }

    /// A boolean predicate over values of type `T`.
    pub fn predicate<T, F>(f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::predicate_with_context(move |_: &Context, value: &T| Ok(f(value)))
    }

    /// A fallible predicate over values of type `T` that also receives the
    /// dispatch [`Context`].
    pub fn predicate_with_context<T, F>(f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&Context, &T) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        let thunk = move |ctx: &Context, value: &dyn DocumentNode| {
            let concrete = downcast::<T>(value)?;
            f(ctx, concrete).map_err(ResolveError::Callback)
        };
        Self {
            type_id: TypeId::of::<T>(),
            type_name: T::TYPE_NAME,
            kind: HandlerKind::Predicate(Arc::new(thunk)),
        }
    }

    /// The vocabulary type this handler accepts.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self.kind, HandlerKind::Predicate(_))
    }

    fn accepts(&self, type_id: TypeId) -> bool {
        self.type_id == type_id
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            HandlerKind::Callback(_) => "callback",
            HandlerKind::Predicate(_) => "predicate",
        };
        f.debug_struct("Handler")
            .field("type_name", &self.type_name)
            .field("kind", &kind)
            .finish()
    }
}

fn downcast<T: VocabularyType>(value: &dyn DocumentNode) -> Result<&T, ResolveError> {
    value.as_any().downcast_ref::<T>().ok_or_else(|| {
        tracing::warn!(
            "resolver: handler for {} received a {}",
            T::TYPE_NAME,
            value.type_name()
        );
        ResolveError::TypeAssertion {
            expected: T::TYPE_NAME,
        }
    })
}

/// An immutable dispatch table from concrete node type to handler.
///
/// Cheap to clone, `Send + Sync`, and safe to share between threads without
/// locking. State captured by handlers is the handler author's concern.
#[derive(Debug, Clone)]
pub struct Resolver {
    handlers: Vec<Handler>,
    universe: TypeUniverse,
}

impl Resolver {
    /// Build a resolver over the built-in type universe.
    ///
    /// Handlers are consulted in the order given. Returns
    /// [`ResolveError::InvalidCallback`] if any handler's type is outside the
    /// universe.
    pub fn new(handlers: impl IntoIterator<Item = Handler>) -> Result<Self, ResolveError> {
        Self::builder().handlers(handlers).build()
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Dispatch `value` to the first callback registered for its concrete
    /// type.
    ///
    /// Returns `Ok(())` when the callback succeeds, the callback's own error
    /// wrapped in [`ResolveError::Callback`] when it fails, and an unmatched
    /// error ([`UnhandledType`] or [`NoCallbackMatch`]) when no callback
    /// applies. At most one callback runs per call.
    ///
    /// [`UnhandledType`]: ResolveError::UnhandledType
    /// [`NoCallbackMatch`]: ResolveError::NoCallbackMatch
    pub fn resolve(&self, ctx: &Context, value: &dyn DocumentNode) -> Result<(), ResolveError> {
        let type_name = value.type_name();
        if !self.universe.contains(type_name) {
            tracing::debug!("resolve: {type_name} is outside the type universe");
            return Err(ResolveError::UnhandledType {
                type_name: type_name.to_string(),
            });
        }

        let type_id = value.as_any().type_id();
        let callback = self.handlers.iter().find_map(|h| match &h.kind {
            HandlerKind::Callback(cb) if h.accepts(type_id) => Some(cb),
            _ => None,
        });

        match callback {
            Some(cb) => {
                tracing::trace!("resolve: dispatching {type_name}");
                cb(ctx, value)
            }
            None => {
                tracing::debug!("resolve: no callback registered for {type_name}");
                Err(ResolveError::NoCallbackMatch {
                    type_name: type_name.to_string(),
                })
            }
        }
    }

    /// Evaluate the first predicate registered for `value`'s concrete type.
    ///
    /// `Ok(false)` means the predicate ran and rejected the value. A value no
    /// predicate applies to is [`ResolveError::PredicateUnmatched`], never
    /// `Ok(false)`.
    pub fn apply(&self, ctx: &Context, value: &dyn DocumentNode) -> Result<bool, ResolveError> {
        let type_name = value.type_name();
        if !self.universe.contains(type_name) {
            tracing::debug!("apply: {type_name} is outside the type universe");
            return Err(ResolveError::UnhandledType {
                type_name: type_name.to_string(),
            });
        }

        let type_id = value.as_any().type_id();
        let predicate = self.handlers.iter().find_map(|h| match &h.kind {
            HandlerKind::Predicate(p) if h.accepts(type_id) => Some(p),
            _ => None,
        });

        match predicate {
            Some(p) => p(ctx, value),
            None => {
                tracing::debug!("apply: no predicate accepts {type_name}");
                Err(ResolveError::PredicateUnmatched {
                    type_name: type_name.to_string(),
                })
            }
        }
    }

    /// Number of registered handlers, callbacks and predicates together.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// True when a callback is registered for `type_name`.
    pub fn handles(&self, type_name: &str) -> bool {
        self.handlers
            .iter()
            .any(|h| !h.is_predicate() && h.type_name == type_name)
    }

    /// Accepted type of every handler, in registration order.
    pub fn registered_types(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.type_name).collect()
    }

    pub fn universe(&self) -> &TypeUniverse {
        &self.universe
    }
}

/// Collects handlers and the type universe for a [`Resolver`].
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    handlers: Vec<Handler>,
    universe: TypeUniverse,
}

impl ResolverBuilder {
    /// Replace the type universe. Defaults to [`TypeUniverse::builtin`].
    pub fn universe(mut self, universe: TypeUniverse) -> Self {
        self.universe = universe;
        self
    }

    /// Recognize the caller-defined type `T` as a document node.
    pub fn extension_type<T: VocabularyType>(mut self) -> Self {
        self.universe.insert(T::TYPE_NAME);
        self
    }

    /// Recognize a type by name only, for extension nodes that have no
    /// dedicated Rust type of their own.
    pub fn extension_name(mut self, type_name: impl Into<String>) -> Self {
        self.universe.insert(type_name);
        self
    }

    pub fn handler(mut self, handler: Handler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(mut self, handlers: impl IntoIterator<Item = Handler>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    pub fn on<T, F>(self, f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.handler(Handler::on(f))
    }

    pub fn on_with_context<T, F>(self, f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&Context, &T) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.handler(Handler::on_with_context(f))
    }

    pub fn predicate<T, F>(self, f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.handler(Handler::predicate(f))
    }

    pub fn predicate_with_context<T, F>(self, f: F) -> Self
    where
        T: VocabularyType,
        F: Fn(&Context, &T) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        self.handler(Handler::predicate_with_context(f))
    }

    /// Check every handler against the universe and freeze the table.
    pub fn build(self) -> Result<Resolver, ResolveError> {
        for h in &self.handlers {
            if h.type_name.is_empty() {
                return Err(ResolveError::InvalidCallback {
                    type_name: h.type_name,
                    reason: "accepted type has an empty name",
                });
            }
            if !self.universe.contains(h.type_name) {
                return Err(ResolveError::InvalidCallback {
                    type_name: h.type_name,
                    reason: "accepted type is not a recognized document node type",
                });
            }
        }
        tracing::debug!(
            "resolver: built with {} handler(s) over {} type(s)",
            self.handlers.len(),
            self.universe.len()
        );
        Ok(Resolver {
            handlers: self.handlers,
            universe: self.universe,
        })
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use weftstreams_vocab::{Image, Note, Value};

    #[derive(Debug, Default)]
    struct Emoji;

    impl DocumentNode for Emoji {
        fn type_name(&self) -> &str {
            Self::TYPE_NAME
        }
    }

    impl VocabularyType for Emoji {
        const TYPE_NAME: &'static str = "Emoji";
    }

    #[derive(Debug)]
    struct Nameless;

    impl DocumentNode for Nameless {
        fn type_name(&self) -> &str {
            ""
        }
    }

    impl VocabularyType for Nameless {
        const TYPE_NAME: &'static str = "";
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    fn counting<T: VocabularyType>(hits: &Arc<AtomicUsize>) -> Handler {
        let hits = Arc::clone(hits);
        Handler::on(move |_: &T| {
            hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[test]
    fn matching_callback_fires_once() {
        let hits = counter();
        let r = Resolver::new([counting::<Note>(&hits)]).unwrap();
        assert!(r.resolve(&Context::background(), &Note::new()).is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_resolver_reports_no_callback_match() {
        let r = Resolver::builder().build().unwrap();
        assert!(r.is_empty());
        assert!(matches!(
            r.resolve(&Context::background(), &Note::new()),
            Err(ResolveError::NoCallbackMatch { type_name }) if type_name == "Note"
        ));
    }

    #[test]
    fn other_type_is_not_dispatched() {
        let hits = counter();
        let r = Resolver::new([counting::<Note>(&hits)]).unwrap();
        let err = r.resolve(&Context::background(), &Image::new()).unwrap_err();
        assert!(matches!(err, ResolveError::NoCallbackMatch { .. }));
        assert!(err.is_unmatched());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn first_registration_wins() {
        let first = counter();
        let second = counter();
        let r = Resolver::new([counting::<Note>(&first), counting::<Note>(&second)]).unwrap();
        r.resolve(&Context::background(), &Note::new()).unwrap();
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unknown_type_is_unhandled() {
        let r = Resolver::builder().build().unwrap();
        let err = r.resolve(&Context::background(), &Emoji).unwrap_err();
        assert!(matches!(err, ResolveError::UnhandledType { ref type_name } if type_name == "Emoji"));
        assert!(err.is_unmatched());
    }

    #[test]
    fn extension_type_must_be_declared() {
        let err = Resolver::new([Handler::on(|_: &Emoji| Ok(()))]).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidCallback { type_name: "Emoji", .. }
        ));
        assert!(!err.is_unmatched());

        let hits = counter();
        let r = Resolver::builder()
            .extension_type::<Emoji>()
            .handler(counting::<Emoji>(&hits))
            .build()
            .unwrap();
        r.resolve(&Context::background(), &Emoji).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_type_name_rejected() {
        let err = Resolver::builder()
            .extension_name("")
            .on(|_: &Nameless| Ok(()))
            .build()
            .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidCallback { type_name: "", .. }));
    }

    #[test]
    fn callback_error_propagates_unchanged() {
        let r = Resolver::new([Handler::on(|_: &Note| Err("bad note".into()))]).unwrap();
        let err = r.resolve(&Context::background(), &Note::new()).unwrap_err();
        assert!(!err.is_unmatched());
        assert_eq!(err.to_string(), "bad note");
        assert!(matches!(err, ResolveError::Callback(_)));
    }

    #[test]
    fn context_reaches_handler() {
        let r = Resolver::new([Handler::on_with_context(|ctx: &Context, _: &Note| {
            ctx.check()?;
            Ok(())
        })])
        .unwrap();
        let (ctx, cancel) = Context::background().with_cancel();
        assert!(r.resolve(&ctx, &Note::new()).is_ok());
        cancel.cancel();
        let err = r.resolve(&ctx, &Note::new()).unwrap_err();
        assert!(err
            .callback_error()
            .is_some_and(|e| e.is::<crate::ContextError>()));
    }

    #[test]
    fn predicate_true_false_and_unmatched() {
        let calls = counter();
        let seen = Arc::clone(&calls);
        let r = Resolver::builder()
            .predicate(move |n: &Note| {
                seen.fetch_add(1, Ordering::SeqCst);
                n.properties.len("name") > 0
            })
            .build()
            .unwrap();
        let ctx = Context::background();

        let named = Note::new().with("name", Value::text("hi"));
        assert!(r.apply(&ctx, &named).unwrap());
        assert!(!r.apply(&ctx, &Note::new()).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let err = r.apply(&ctx, &Image::new()).unwrap_err();
        assert!(matches!(err, ResolveError::PredicateUnmatched { .. }));
        assert!(err.is_unmatched());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn predicate_failure_is_a_callback_error() {
        let r = Resolver::builder()
            .predicate_with_context(|ctx: &Context, _: &Note| {
                ctx.check()?;
                Err("cannot judge this note".into())
            })
            .build()
            .unwrap();

        let err = r.apply(&Context::background(), &Note::new()).unwrap_err();
        assert!(matches!(err, ResolveError::Callback(_)));
        assert!(!err.is_unmatched());
        assert!(!crate::is_unmatched_err(&err));
        assert_eq!(err.to_string(), "cannot judge this note");

        let (ctx, cancel) = Context::background().with_cancel();
        cancel.cancel();
        let err = r.apply(&ctx, &Note::new()).unwrap_err();
        assert_eq!(
            err.callback_error()
                .and_then(|e| e.downcast_ref::<crate::ContextError>()),
            Some(&crate::ContextError::Canceled)
        );
    }

    #[test]
    fn nested_unmatched_is_the_callbacks_failure() {
        let inner = Arc::new(Resolver::builder().build().unwrap());
        let r = Resolver::builder()
            .on_with_context(move |ctx: &Context, note: &Note| {
                inner.resolve(ctx, note)?;
                Ok(())
            })
            .build()
            .unwrap();

        let err = r.resolve(&Context::background(), &Note::new()).unwrap_err();
        assert!(!err.is_unmatched());
        assert!(!crate::is_unmatched_err(&err));
        let nested = err.into_callback_error().unwrap();
        assert!(crate::is_unmatched_err(nested.as_ref()));
        assert!(matches!(
            nested.downcast_ref::<ResolveError>(),
            Some(ResolveError::NoCallbackMatch { type_name }) if type_name == "Note"
        ));
    }

    #[test]
    fn callbacks_and_predicates_do_not_cross() {
        let r = Resolver::builder()
            .on(|_: &Note| Ok(()))
            .predicate(|_: &Image| true)
            .build()
            .unwrap();
        let ctx = Context::background();
        assert!(matches!(
            r.apply(&ctx, &Note::new()),
            Err(ResolveError::PredicateUnmatched { .. })
        ));
        assert!(matches!(
            r.resolve(&ctx, &Image::new()),
            Err(ResolveError::NoCallbackMatch { .. })
        ));
        assert!(r.handles("Note"));
        assert!(!r.handles("Image"));
        assert_eq!(r.registered_types(), vec!["Note", "Image"]);
    }

    #[test]
    fn mismatched_registry_entry_is_a_type_assertion() {
        // Hand-built entry keyed on Note but bound to Image.
        let bad = Handler {
            type_id: TypeId::of::<Note>(),
            ..Handler::on(|_: &Image| Ok(()))
        };
        let r = Resolver::new([bad]).unwrap();
        let err = r.resolve(&Context::background(), &Note::new()).unwrap_err();
        assert!(matches!(err, ResolveError::TypeAssertion { expected: "Image" }));
        assert!(!err.is_unmatched());
    }
}
