//! Errors produced by resolver construction and dispatch.
//!
//! The taxonomy separates three kinds of failure:
//!
//! | Variant | Meaning | Caller action |
//! |---------|---------|---------------|
//! | [`NoCallbackMatch`] | known type, no handler registered for it | raw handling |
//! | [`UnhandledType`] | type outside the recognized universe | raw handling |
//! | [`PredicateUnmatched`] | no predicate accepts the value's type | raw handling |
//! | [`TypeAssertion`] | registry invariant violated | treat as a bug |
//! | [`InvalidCallback`] | a handler could not be bound at construction | fix the resolver |
//! | [`Callback`] | the invoked handler failed | propagate |
//!
//! The first three are "unmatched" outcomes: the dispatch mechanism worked,
//! nothing applied. [`is_unmatched_err`] recognises them.
//!
//! [`NoCallbackMatch`]: ResolveError::NoCallbackMatch
//! [`UnhandledType`]: ResolveError::UnhandledType
//! [`PredicateUnmatched`]: ResolveError::PredicateUnmatched
//! [`TypeAssertion`]: ResolveError::TypeAssertion
//! [`InvalidCallback`]: ResolveError::InvalidCallback
//! [`Callback`]: ResolveError::Callback

use thiserror::Error;

/// The error type handlers return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`Resolver`](crate::Resolver) construction and dispatch.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("value of type {type_name:?} did not match any registered callback")]
    NoCallbackMatch { type_name: String },

    #[error("value of type {type_name:?} is not a recognized vocabulary type")]
    UnhandledType { type_name: String },

    #[error("value of type {type_name:?} did not match the type demanded by any predicate")]
    PredicateUnmatched { type_name: String },

    /// A matched handler could not view the value as its declared type.
    /// Unreachable for resolvers built through the constructor.
    #[error("value cannot be asserted to the handler's declared type {expected:?}")]
    TypeAssertion { expected: &'static str },

    #[error("callback for {type_name:?} cannot be registered: {reason}")]
    InvalidCallback {
        type_name: &'static str,
        reason: &'static str,
    },

    /// The handler's own failure, passed through untouched.
    #[error(transparent)]
    Callback(BoxError),
}

impl ResolveError {
    /// True when dispatch worked but nothing matched the value.
    pub fn is_unmatched(&self) -> bool {
        matches!(
            self,
            ResolveError::NoCallbackMatch { .. }
                | ResolveError::UnhandledType { .. }
                | ResolveError::PredicateUnmatched { .. }
        )
    }

    /// The handler's error, if this is a callback failure.
    pub fn callback_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            ResolveError::Callback(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Unwrap a callback failure into the handler's original error.
    pub fn into_callback_error(self) -> Result<BoxError, Self> {
        match self {
            ResolveError::Callback(e) => Ok(e),
            other => Err(other),
        }
    }
}

/// True when `err` is a [`ResolveError`] reporting that a value matched no
/// callback, no predicate, or no known type.
///
/// Accepts any error so that callers holding a boxed or foreign error can
/// classify it without first downcasting.
///
/// Only the outermost error is inspected. A callback that itself returns an
/// unmatched error (say, from a nested resolver) yields
/// [`ResolveError::Callback`], which is the callback's own failure and not
/// unmatched; reach the nested error through
/// [`ResolveError::into_callback_error`] to classify it.
pub fn is_unmatched_err(err: &(dyn std::error::Error + 'static)) -> bool {
    err.downcast_ref::<ResolveError>()
        .is_some_and(ResolveError::is_unmatched)
}

// --- tests -------------------------------------------------------------------
