//! Breadth-first classification of every property slot in a document.
//!
//! [`classify`] visits a node, every value of every property it carries, and
//! (up to a depth limit) the nodes embedded in those values. Each slot is
//! recorded with its [`Presence`] and [`Resolution`]; embedded nodes are
//! dispatched through the caller's [`Resolver`].
//!
//! Unmatched dispatch outcomes are expected in any real document and are
//! recorded as [`Resolution::RawResolutionNeeded`]; they never stop the walk.
//! A callback's own failure does.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use weftstreams_vocab::{is_link_type, DocumentNode, Value};

use crate::context::{Context, ContextError};
use crate::error::ResolveError;
use crate::resolution::{Presence, Resolution};
use crate::resolver::Resolver;
use crate::streams::property::classify_dispatch;

/// Path recorded for the node the walk starts from.
pub const ROOT_PATH: &str = "$";

/// Why a walk stopped early.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("walk interrupted: {0}")]
    Interrupted(#[from] ContextError),

    #[error(transparent)]
    Dispatch(#[from] ResolveError),
}

/// One classified property slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    /// Dotted property path from the root, e.g. `$.result[0].attachment`.
    pub path: String,

    /// Position within the property's values.
    pub index: usize,

    /// The raw value kind (`iri`, `object`, `link`, `text`, …).
    pub kind: String,

    /// Type name of an embedded node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    pub presence: Presence,

    pub resolution: Resolution,
}

impl ReportEntry {
    /// `path[index]`.
    pub fn location(&self) -> String {
        format!("{}[{}]", self.path, self.index)
    }
}

/// The slots visited by [`classify`], in visiting order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ReportEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots with the given resolution.
    pub fn count(&self, resolution: Resolution) -> usize {
        self.entries
            .iter()
            .filter(|e| e.resolution == resolution)
            .count()
    }

    pub fn count_presence(&self, presence: Presence) -> usize {
        self.entries
            .iter()
            .filter(|e| e.presence == presence)
            .count()
    }

    /// Locations of every slot that needs raw handling.
    pub fn raw_paths(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.resolution == Resolution::RawResolutionNeeded)
            .map(ReportEntry::location)
            .collect()
    }
}

/// Classify `root` and everything embedded in it down to `max_depth` levels
/// of nesting (`0` looks at the root's own properties only).
///
/// A node shared between several slots is recorded, and dispatched, once per
/// slot, but its own properties are walked only the first time it is seen.
/// The context is checked before each node is expanded.
pub fn classify(
    ctx: &Context,
    resolver: &Resolver,
    root: &dyn DocumentNode,
    max_depth: usize,
) -> Result<Report, WalkError> {
    let mut report = Report::default();
    let mut visited: HashSet<*const ()> = HashSet::new();
    let mut queue: VecDeque<(String, &dyn DocumentNode, usize)> = VecDeque::new();

    report.entries.push(ReportEntry {
        path: ROOT_PATH.to_string(),
        index: 0,
        kind: root_kind(root).to_string(),
        type_name: Some(root.type_name().to_string()),
        presence: Presence::ConvenientPresence,
        resolution: classify_dispatch(resolver.resolve(ctx, root))?,
    });
    visited.insert(address(root));
    queue.push_back((ROOT_PATH.to_string(), root, 0));

    while let Some((path, node, depth)) = queue.pop_front() {
        ctx.check()?;
        let Some(properties) = node.properties() else {
            continue;
        };

        for (name, values) in properties.iter() {
            let slot = format!("{path}.{name}");
            for (index, value) in values.iter().enumerate() {
                let (presence, resolution, type_name) = match value {
                    Value::Object(child) | Value::Link(child) => {
                        let child = child.as_ref();
                        let resolution = classify_dispatch(resolver.resolve(ctx, child))?;
                        if depth < max_depth && visited.insert(address(child)) {
                            queue.push_back((format!("{slot}[{index}]"), child, depth + 1));
                        }
                        (
                            Presence::ConvenientPresence,
                            resolution,
                            Some(child.type_name().to_string()),
                        )
                    }
                    Value::Text(_) | Value::DateTime(_) | Value::Float(_) => {
                        (Presence::ConvenientPresence, Resolution::Resolved, None)
                    }
                    Value::Iri(_) | Value::Unknown(_) => {
                        (Presence::RawPresence, Resolution::RawResolutionNeeded, None)
                    }
                };
                report.entries.push(ReportEntry {
                    path: slot.clone(),
                    index,
                    kind: value.kind().to_string(),
                    type_name,
                    presence,
                    resolution,
                });
            }
        }
    }

    tracing::debug!(
        "walk: classified {} slot(s), {} need raw handling",
        report.len(),
        report.count(Resolution::RawResolutionNeeded)
    );
    Ok(report)
}

/// The value kind the root would have if it sat in a slot.
fn root_kind(root: &dyn DocumentNode) -> &'static str {
    if is_link_type(root.type_name()) {
        "link"
    } else {
        "object"
    }
}

fn address(node: &dyn DocumentNode) -> *const () {
    node as *const dyn DocumentNode as *const ()
}

// --- tests -------------------------------------------------------------------
