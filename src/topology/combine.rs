//! Unions of edge lists.
//!
//! Generators never drop duplicate edges on their own. When two topologies are
//! overlaid, duplicates are reconciled here: the first occurrence of a
//! (source, destination) pair wins, so concatenation order decides which
//! instance survives.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::topology::types::Topology;

/// Concatenation order used by [`combine`]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConcatOrder {
    /// `a` followed by `b`
    #[default]
    AThenB,
    /// `b` followed by `a`
    BThenA,
}

/// Concatenate two topologies in the given order, optionally removing
/// duplicate directed edges.
pub fn combine(a: &Topology, b: &Topology, order: ConcatOrder, remove_duplicates: bool) -> Topology {
    let (first, second) = match order {
        ConcatOrder::AThenB => (a, b),
        ConcatOrder::BThenA => (b, a),
    };

    let concatenated: Topology = first.iter().chain(second.iter()).cloned().collect();

    if remove_duplicates {
        dedup(&concatenated)
    } else {
        concatenated
    }
}

/// Remove repeated (source, destination) pairs, keeping the first occurrence
/// and preserving the order of everything that survives.
pub fn dedup(edges: &Topology) -> Topology {
    let mut seen = HashSet::new();
    edges
        .iter()
        .filter(|edge| seen.insert((edge.source.as_str(), edge.destination.as_str())))
        .cloned()
        .collect()
}

/// Overlay any number of layers in order, earlier layers taking precedence
/// when duplicates are removed.
pub fn union(layers: &[Topology], remove_duplicates: bool) -> Topology {
    let combined = layers
        .iter()
        .fold(Topology::new(), |acc, layer| combine(&acc, layer, ConcatOrder::AThenB, false));

    if remove_duplicates {
        dedup(&combined)
    } else {
        combined
    }
}
