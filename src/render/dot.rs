//! GraphViz DOT output.

use crate::topology::{Region, Topology};

/// Generate a GraphViz `digraph` for a topology.
///
/// Every region becomes a node, in list order, even when no edge touches it.
/// Edges keep the order of the edge list and carry a running id.
pub fn to_dot(nodes: &[Region], edges: &Topology, title: &str, layout: &str) -> String {
    let mut dot = String::new();
    dot.push_str(&format!("digraph {} {{\n", quote(title)));
    dot.push_str(&format!("    layout={};\n", quote(layout)));
    dot.push_str(&format!("    label={};\n", quote(title)));
    dot.push_str("    labelloc=t;\n");
    dot.push_str("    node [shape=circle];\n\n");

    for node in nodes {
        dot.push_str(&format!("    {};\n", quote(node)));
    }

    dot.push('\n');

    for (id, edge) in edges.iter().enumerate() {
        dot.push_str(&format!(
            "    {} -> {} [id=\"{}\"];\n",
            quote(&edge.source),
            quote(&edge.destination),
            id
        ));
    }

    dot.push_str("}\n");
    dot
}

/// Quote a DOT identifier
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
