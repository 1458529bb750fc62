//! Cancellation and deadlines for dispatch.
//!
//! A [`Context`] travels with every [`resolve`](crate::Resolver::resolve)
//! call and is handed to handlers registered in their context-taking form.
//! The resolver itself never consults it; long-running handlers observe it
//! with [`Context::check`].
//!
//! Contexts form a chain: a child created with [`with_cancel`] or
//! [`with_deadline`] is done as soon as its parent is.
//!
//! [`with_cancel`]: Context::with_cancel
//! [`with_deadline`]: Context::with_deadline

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Why a context is done.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Debug)]
struct Inner {
    canceled: AtomicBool,
    deadline: Option<Instant>,
    parent: Option<Arc<Inner>>,
}

/// A cheap-to-clone cancellation and deadline carrier, shareable across
/// threads.
#[derive(Debug, Clone)]
pub struct Context {
    inner: Arc<Inner>,
}

/// Cancels the [`Context`] it was created with, and every context derived
/// from it.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: Arc<Inner>,
}

impl Context {
    /// A context that is never canceled and has no deadline.
    pub fn background() -> Self {
        Self {
            inner: Arc::new(Inner {
                canceled: AtomicBool::new(false),
                deadline: None,
                parent: None,
            }),
        }
    }

    fn child(&self, deadline: Option<Instant>) -> Self {
        Self {
            inner: Arc::new(Inner {
                canceled: AtomicBool::new(false),
                deadline,
                parent: Some(Arc::clone(&self.inner)),
            }),
        }
    }

    /// Derive a child context together with the handle that cancels it.
    pub fn with_cancel(&self) -> (Context, CancelHandle) {
        let ctx = self.child(None);
        let handle = CancelHandle {
            inner: Arc::clone(&ctx.inner),
        };
        (ctx, handle)
    }

    /// Derive a child context that is done at `deadline`, or earlier if an
    /// ancestor's deadline comes first.
    pub fn with_deadline(&self, deadline: Instant) -> Context {
        self.child(Some(deadline))
    }

    /// Derive a child context that is done after `timeout`. A timeout too
    /// large to represent as an [`Instant`] adds no deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Context {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.child(None),
        }
    }

    /// The earliest deadline along the chain.
    pub fn deadline(&self) -> Option<Instant> {
        self.chain().filter_map(|i| i.deadline).min()
    }

    /// Why the context is done, or `None` while it is still live.
    ///
    /// Cancellation wins over an expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.chain().any(|i| i.canceled.load(Ordering::Acquire)) {
            return Some(ContextError::Canceled);
        }
        match self.deadline() {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// `Err` once the context is done; handlers use it with `?`.
    pub fn check(&self) -> Result<(), ContextError> {
        match self.err() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Inner> {
        std::iter::successors(Some(self.inner.as_ref()), |i| i.parent.as_deref())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.inner.canceled.store(true, Ordering::Release);
    }
}

// --- tests -------------------------------------------------------------------
