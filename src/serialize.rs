//! Human-readable dumps of edge lists.

use crate::topology::Topology;

/// Serialize a topology as a YAML sequence of `source: destination` entries
pub fn serialize_human_readable(edges: &Topology) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(edges)
}
