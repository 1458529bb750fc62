//! Property values and the ordered property bag every built-in node carries.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::node::{DocumentNode, Node};
use crate::types::is_link_type;

/// One entry of a (possibly multi-valued) property.
///
/// Which variants a property may legally hold is a schema concern the raw
/// model does not enforce. The convenience layer decides per property which
/// variants it understands and reports the rest as needing raw handling.
#[derive(Debug, Clone)]
pub enum Value {
    /// An opaque reference to a node stored elsewhere.
    Iri(String),
    /// An embedded node of the Object family.
    Object(Node),
    /// An embedded node of the Link family.
    Link(Node),
    /// A plain string literal.
    Text(String),
    /// An `xsd:dateTime` literal.
    DateTime(DateTime<FixedOffset>),
    /// An `xsd:float` literal.
    Float(f64),
    /// Anything the model has no variant for, kept verbatim.
    Unknown(serde_json::Value),
}

impl Value {
    pub fn iri(iri: impl Into<String>) -> Self {
        Value::Iri(iri.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// Embed `node` as an Object-family value.
    pub fn object(node: impl DocumentNode + 'static) -> Self {
        Value::Object(Arc::new(node))
    }

    /// Embed `node` as a Link-family value.
    pub fn link(node: impl DocumentNode + 'static) -> Self {
        Value::Link(Arc::new(node))
    }

    /// Embed an already shared node, choosing `Link` or `Object` from its
    /// type name.
    pub fn embed(node: Node) -> Self {
        if is_link_type(node.type_name()) {
            Value::Link(node)
        } else {
            Value::Object(node)
        }
    }

    /// The embedded node, if this value is an Object or a Link.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Object(node) | Value::Link(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Value::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Value::Iri(_))
    }

    /// A short label for the variant, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Iri(_) => "iri",
            Value::Object(_) => "object",
            Value::Link(_) => "link",
            Value::Text(_) => "text",
            Value::DateTime(_) => "date_time",
            Value::Float(_) => "float",
            Value::Unknown(_) => "unknown",
        }
    }
}

/// An ordered map from property name to the values it holds.
///
/// A functional property is simply one that is kept at a single value;
/// [`set`](Properties::set) replaces whatever was there. Absent names and
/// empty value lists are treated the same: the property has no value.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: BTreeMap<String, Vec<Value>>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`append`](Properties::append).
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.append(name, value);
        self
    }

    /// All values of `name`, in order. Empty when the property is absent.
    pub fn values(&self, name: &str) -> &[Value] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The number of values `name` holds.
    pub fn len(&self, name: &str) -> usize {
        self.values(name).len()
    }

    /// True when no property holds any value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(Vec::is_empty)
    }

    pub fn get(&self, name: &str, idx: usize) -> Option<&Value> {
        self.values(name).get(idx)
    }

    /// Replace every value of `name` with `value`.
    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), vec![value]);
    }

    pub fn append(&mut self, name: &str, value: Value) {
        self.values.entry(name.to_string()).or_default().push(value);
    }

    pub fn prepend(&mut self, name: &str, value: Value) {
        self.values
            .entry(name.to_string())
            .or_default()
            .insert(0, value);
    }

    /// Remove and return the value at `idx`. Out-of-range indices are a
    /// no-op returning `None`.
    pub fn remove(&mut self, name: &str, idx: usize) -> Option<Value> {
        let values = self.values.get_mut(name)?;
        if idx >= values.len() {
            return None;
        }
        let removed = values.remove(idx);
        if values.is_empty() {
            self.values.remove(name);
        }
        Some(removed)
    }

    /// Drop every value of `name`.
    pub fn clear(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Names of the properties holding at least one value, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| k.as_str())
    }

    /// `(name, values)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

// --- tests -------------------------------------------------------------------
