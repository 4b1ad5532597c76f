//! Topology type definitions.
//!
//! Regions are opaque names whose position in the region list defines ring
//! adjacency. A topology is an ordered list of directed edges between them.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A named network location. Order in the region list carries meaning.
pub type Region = String;

/// An ordered list of directed edges. Duplicates are allowed here and are
/// only reconciled by [`crate::topology::combine`].
pub type Topology = Vec<DirectedEdge>;

/// A directed link from `source` to `destination`
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct DirectedEdge {
    pub source: Region,
    pub destination: Region,
}

impl DirectedEdge {
    pub fn new(source: impl Into<Region>, destination: impl Into<Region>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// The same link pointing the other way
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// Edges serialize as single-entry mappings (`source: destination`), which
/// keeps the YAML dump of a topology readable as `- a: b`.
impl Serialize for DirectedEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.source, &self.destination)?;
        map.end()
    }
}

/// What generators do with an edge whose source equals its destination.
///
/// Self-loops only arise for degenerate inputs (a single region, or custom
/// connector parameters), so the default drops them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelfLoopPolicy {
    /// Drop self-loop edges
    #[default]
    Skip,
    /// Keep self-loop edges as generated
    Allow,
}

impl SelfLoopPolicy {
    /// Returns true if `edge` should be kept under this policy
    pub fn admits(&self, edge: &DirectedEdge) -> bool {
        match self {
            Self::Allow => true,
            Self::Skip => !edge.is_self_loop(),
        }
    }
}
