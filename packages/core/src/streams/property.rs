//! Read views and the write handle behind every convenience accessor.
//!
//! Each view borrows the values of one property and classifies them for a
//! particular accessor family:
//!
//! | View | Convenient when the value is | Access |
//! |------|------------------------------|--------|
//! | [`IriProperty`] | an IRI | `get` |
//! | [`ObjectProperty`] | an embedded Object or Link | `resolve`, through a [`Resolver`] |
//! | [`TextProperty`] | a string literal | `get` |
//! | [`DateTimeProperty`] | a date-time literal (functional) | `get` |
//! | [`FloatProperty`] | a float literal (functional) | `get` |
//!
//! Everything else present at a position is [`Presence::RawPresence`] and
//! [`Resolution::RawResolutionNeeded`]; nothing at a position is
//! [`Presence::NoPresence`] and [`Resolution::Unresolved`].

use chrono::{DateTime, FixedOffset};
use weftstreams_vocab::{DocumentNode, Node, Properties, Value};

use crate::context::Context;
use crate::error::ResolveError;
use crate::resolution::{Presence, Resolution};
use crate::resolver::Resolver;

fn presence(value: Option<&Value>, convenient: impl Fn(&Value) -> bool) -> Presence {
    match value {
        None => Presence::NoPresence,
        Some(v) if convenient(v) => Presence::ConvenientPresence,
        Some(_) => Presence::RawPresence,
    }
}

/// A property whose convenient form is an IRI (`actor`, `to`, `url`, …).
#[derive(Debug, Clone, Copy)]
pub struct IriProperty<'a> {
    values: &'a [Value],
}

impl<'a> IriProperty<'a> {
    pub(crate) fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    /// Number of values. Each index below it can be checked with
    /// [`has`](Self::has) before calling [`get`](Self::get).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, idx: usize) -> Presence {
        presence(self.values.get(idx), Value::is_iri)
    }

    /// The IRI at `idx`, with a [`Resolution`] telling whether raw handling
    /// is needed instead.
    pub fn get(&self, idx: usize) -> (Resolution, Option<&'a str>) {
        match self.values.get(idx) {
            None => (Resolution::Unresolved, None),
            Some(Value::Iri(iri)) => (Resolution::Resolved, Some(iri.as_str())),
            Some(_) => (Resolution::RawResolutionNeeded, None),
        }
    }

    /// The raw value at `idx`, whatever its kind.
    pub fn raw(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx)
    }
}

/// A property that may embed polymorphic nodes (`result`, `tag`, …).
#[derive(Debug, Clone, Copy)]
pub struct ObjectProperty<'a> {
    values: &'a [Value],
}

impl<'a> ObjectProperty<'a> {
    pub(crate) fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, idx: usize) -> Presence {
        presence(self.values.get(idx), |v| v.as_node().is_some())
    }

    /// Hand the embedded node at `idx` to `resolver`.
    ///
    /// An embedded node the resolver has no callback for comes back as
    /// [`Resolution::RawResolutionNeeded`]; a callback's own failure is
    /// returned as `Err`. IRIs and other non-embedded values are never
    /// dispatched.
    pub fn resolve(
        &self,
        ctx: &Context,
        resolver: &Resolver,
        idx: usize,
    ) -> Result<Resolution, ResolveError> {
        let node = match self.values.get(idx) {
            None => return Ok(Resolution::Unresolved),
            Some(Value::Object(node) | Value::Link(node)) => node,
            Some(_) => return Ok(Resolution::RawResolutionNeeded),
        };
        classify_dispatch(resolver.resolve(ctx, node.as_ref()))
    }

    /// The embedded node at `idx`, for callers that want to dispatch it
    /// themselves.
    pub fn node(&self, idx: usize) -> Option<&'a Node> {
        self.values.get(idx).and_then(Value::as_node)
    }

    pub fn raw(&self, idx: usize) -> Option<&'a Value> {
        self.values.get(idx)
    }
}

/// Map a dispatch outcome onto a [`Resolution`], keeping real failures.
pub(crate) fn classify_dispatch(
    outcome: Result<(), ResolveError>,
) -> Result<Resolution, ResolveError> {
    match outcome {
        Ok(()) => Ok(Resolution::Resolved),
        Err(e) if e.is_unmatched() => Ok(Resolution::RawResolutionNeeded),
        Err(e) => Err(e),
    }
}

/// A property whose convenient form is a plain string (`name`, `summary`, …).
#[derive(Debug, Clone, Copy)]
pub struct TextProperty<'a> {
    values: &'a [Value],
}

impl<'a> TextProperty<'a> {
    pub(crate) fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has(&self, idx: usize) -> Presence {
        presence(self.values.get(idx), |v| matches!(v, Value::Text(_)))
    }

    pub fn get(&self, idx: usize) -> (Resolution, Option<&'a str>) {
        match self.values.get(idx) {
            None => (Resolution::Unresolved, None),
            Some(Value::Text(text)) => (Resolution::Resolved, Some(text.as_str())),
            Some(_) => (Resolution::RawResolutionNeeded, None),
        }
    }
}

/// A functional date-time property (`published`, `updated`, …).
#[derive(Debug, Clone, Copy)]
pub struct DateTimeProperty<'a> {
    value: Option<&'a Value>,
}

impl<'a> DateTimeProperty<'a> {
    pub(crate) fn new(values: &'a [Value]) -> Self {
        Self {
            value: values.first(),
        }
    }

    pub fn has(&self) -> Presence {
        presence(self.value, |v| matches!(v, Value::DateTime(_)))
    }

    pub fn get(&self) -> (Resolution, Option<DateTime<FixedOffset>>) {
        match self.value {
            None => (Resolution::Unresolved, None),
            Some(Value::DateTime(t)) => (Resolution::Resolved, Some(*t)),
            Some(_) => (Resolution::RawResolutionNeeded, None),
        }
    }
}

/// A functional float property (`altitude`).
#[derive(Debug, Clone, Copy)]
pub struct FloatProperty<'a> {
    value: Option<&'a Value>,
}

impl<'a> FloatProperty<'a> {
    pub(crate) fn new(values: &'a [Value]) -> Self {
        Self {
            value: values.first(),
        }
    }

    pub fn has(&self) -> Presence {
        presence(self.value, |v| matches!(v, Value::Float(_)))
    }

    pub fn get(&self) -> (Resolution, Option<f64>) {
        match self.value {
            None => (Resolution::Unresolved, None),
            Some(Value::Float(f)) => (Resolution::Resolved, Some(*f)),
            Some(_) => (Resolution::RawResolutionNeeded, None),
        }
    }
}

/// Write access to one property of a wrapped node.
///
/// Mutations go straight to the raw property bag; nothing stops a caller
/// from storing a kind the read views will later report as raw.
#[derive(Debug)]
pub struct PropertyMut<'a> {
    properties: &'a mut Properties,
    name: &'a str,
}

impl<'a> PropertyMut<'a> {
    pub(crate) fn new(properties: &'a mut Properties, name: &'a str) -> Self {
        Self { properties, name }
    }

    pub fn len(&self) -> usize {
        self.properties.len(self.name)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append_iri(&mut self, iri: impl Into<String>) -> &mut Self {
        self.properties.append(self.name, Value::Iri(iri.into()));
        self
    }

    pub fn prepend_iri(&mut self, iri: impl Into<String>) -> &mut Self {
        self.properties.prepend(self.name, Value::Iri(iri.into()));
        self
    }

    pub fn append_object(&mut self, node: impl DocumentNode + 'static) -> &mut Self {
        self.properties.append(self.name, Value::object(node));
        self
    }

    pub fn prepend_object(&mut self, node: impl DocumentNode + 'static) -> &mut Self {
        self.properties.prepend(self.name, Value::object(node));
        self
    }

    pub fn append_link(&mut self, node: impl DocumentNode + 'static) -> &mut Self {
        self.properties.append(self.name, Value::link(node));
        self
    }

    pub fn prepend_link(&mut self, node: impl DocumentNode + 'static) -> &mut Self {
        self.properties.prepend(self.name, Value::link(node));
        self
    }

    /// Append an already shared node, as Link or Object by its type name.
    pub fn append_node(&mut self, node: Node) -> &mut Self {
        self.properties.append(self.name, Value::embed(node));
        self
    }

    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.properties.append(self.name, Value::Text(text.into()));
        self
    }

    pub fn prepend_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.properties.prepend(self.name, Value::Text(text.into()));
        self
    }

    /// Replace the property with a single IRI.
    pub fn set_iri(&mut self, iri: impl Into<String>) -> &mut Self {
        self.properties.set(self.name, Value::Iri(iri.into()));
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.properties.set(self.name, Value::Text(text.into()));
        self
    }

    pub fn set_date_time(&mut self, t: DateTime<FixedOffset>) -> &mut Self {
        self.properties.set(self.name, Value::DateTime(t));
        self
    }

    pub fn set_float(&mut self, f: f64) -> &mut Self {
        self.properties.set(self.name, Value::Float(f));
        self
    }

    /// Remove the value at `idx`; out of range is a no-op.
    pub fn remove(&mut self, idx: usize) -> Option<Value> {
        self.properties.remove(self.name, idx)
    }

    pub fn clear(&mut self) {
        self.properties.clear(self.name);
    }
}

// --- tests -------------------------------------------------------------------
