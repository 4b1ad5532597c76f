//! Edge generation for ring and chord topologies.
//!
//! All generators are pure functions of the region list. Output order follows
//! the traversal order of the list, so identical inputs always produce
//! identical edge lists.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::topology::types::{DirectedEdge, Region, SelfLoopPolicy, Topology};

/// Which index pair within a connector window receives the chord
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChordPairing {
    /// Link the neighbours of the opposite pair: `i -> target-1` and `target -> i-1`
    Shifted,
    /// Link the opposite pair itself: `i -> target`
    Opposite,
}

/// Parameters of the connector (chord) generator.
///
/// For `i = start, start + stride, ...` while `i < N/2`, the opposite index is
/// `(i + N/2) mod N`. `pairing` picks the endpoints and `symmetric` adds the
/// reverse of every chord right after it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectorPolicy {
    pub start: usize,
    pub stride: usize,
    pub pairing: ChordPairing,
    pub symmetric: bool,
}

impl ConnectorPolicy {
    /// One-way chords between the neighbours of every other opposite pair
    pub fn paired_window() -> Self {
        Self {
            start: 1,
            stride: 2,
            pairing: ChordPairing::Shifted,
            symmetric: false,
        }
    }

    /// Two-way chords between every other opposite pair
    pub fn bidirectional_window() -> Self {
        Self {
            start: 1,
            stride: 2,
            pairing: ChordPairing::Opposite,
            symmetric: true,
        }
    }

    /// Sparse two-way chords, one every fourth region starting at index 3
    pub fn fixed_stride() -> Self {
        Self {
            start: 3,
            stride: 4,
            pairing: ChordPairing::Opposite,
            symmetric: true,
        }
    }
}

impl Default for ConnectorPolicy {
    fn default() -> Self {
        Self::paired_window()
    }
}

/// Generate a unidirectional ring: `R[i] -> R[(i+1) mod N]` for every region.
pub fn ring(regions: &[Region], self_loops: SelfLoopPolicy) -> Topology {
    let n = regions.len();
    regions
        .iter()
        .enumerate()
        .map(|(i, region)| DirectedEdge::new(region.as_str(), regions[(i + 1) % n].as_str()))
        .filter(|edge| self_loops.admits(edge))
        .collect()
}

/// Generate a bidirectional ring.
///
/// Each adjacency contributes the forward edge immediately followed by its
/// reverse, so a ring of N >= 2 regions yields exactly 2N edges. For N == 2
/// both adjacencies join the same two regions and each direction appears twice.
pub fn bidirectional_ring(regions: &[Region], self_loops: SelfLoopPolicy) -> Topology {
    ring(regions, SelfLoopPolicy::Allow)
        .into_iter()
        .flat_map(|edge| {
            let reverse = edge.reversed();
            [edge, reverse]
        })
        .filter(|edge| self_loops.admits(edge))
        .collect()
}

/// Generate chord edges across the ring according to `policy`.
///
/// A zero stride produces no edges.
pub fn connectors(
    regions: &[Region],
    policy: &ConnectorPolicy,
    self_loops: SelfLoopPolicy,
) -> Topology {
    let n = regions.len();
    let half = n / 2;
    let mut topology = Vec::new();

    if policy.stride == 0 {
        return topology;
    }

    // i < half <= n, so n >= 2 inside the loop and all indices stay in range
    for i in (policy.start..half).step_by(policy.stride) {
        let target = (i + half) % n;
        let chords = match policy.pairing {
            ChordPairing::Shifted => vec![
                DirectedEdge::new(regions[i].as_str(), regions[(target + n - 1) % n].as_str()),
                DirectedEdge::new(regions[target].as_str(), regions[(i + n - 1) % n].as_str()),
            ],
            ChordPairing::Opposite => {
                vec![DirectedEdge::new(regions[i].as_str(), regions[target].as_str())]
            }
        };

        for chord in chords {
            let reverse = policy.symmetric.then(|| chord.reversed());
            for edge in std::iter::once(chord).chain(reverse) {
                push_chord(&mut topology, edge, self_loops);
            }
        }
    }

    topology
}

/// Append `edge` if the self-loop policy admits it, logging only kept chords.
/// Returns whether the edge was kept.
fn push_chord(topology: &mut Topology, edge: DirectedEdge, self_loops: SelfLoopPolicy) -> bool {
    if !self_loops.admits(&edge) {
        return false;
    }
    debug!("{} connects to {}", edge.source, edge.destination);
    topology.push(edge);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(names: &[&str]) -> Vec<Region> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn numbered(n: usize) -> Vec<Region> {
        (0..n).map(|i| format!("r{}", i)).collect()
    }

    fn edges(pairs: &[(&str, &str)]) -> Topology {
        pairs.iter().map(|(a, b)| DirectedEdge::new(*a, *b)).collect()
    }

    #[test]
    fn test_ring_four_regions() {
        let topology = ring(&regions(&["a", "b", "c", "d"]), SelfLoopPolicy::Skip);
        assert_eq!(topology, edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]));
    }

    #[test]
    fn test_bidirectional_ring_four_regions() {
        let topology = bidirectional_ring(&regions(&["a", "b", "c", "d"]), SelfLoopPolicy::Skip);
        assert_eq!(
            topology,
            edges(&[
                ("a", "b"), ("b", "a"),
                ("b", "c"), ("c", "b"),
                ("c", "d"), ("d", "c"),
                ("d", "a"), ("a", "d"),
            ])
        );
    }

    #[test]
    fn test_ring_empty_and_single() {
        assert!(ring(&[], SelfLoopPolicy::Allow).is_empty());
        assert!(bidirectional_ring(&[], SelfLoopPolicy::Allow).is_empty());

        let single = regions(&["solo"]);
        assert!(ring(&single, SelfLoopPolicy::Skip).is_empty());
        assert_eq!(ring(&single, SelfLoopPolicy::Allow), edges(&[("solo", "solo")]));

        assert!(bidirectional_ring(&single, SelfLoopPolicy::Skip).is_empty());
        assert_eq!(
            bidirectional_ring(&single, SelfLoopPolicy::Allow),
            edges(&[("solo", "solo"), ("solo", "solo")])
        );
    }

    #[test]
    fn test_bidirectional_ring_two_regions() {
        let topology = bidirectional_ring(&regions(&["a", "b"]), SelfLoopPolicy::Skip);
        assert_eq!(topology, edges(&[("a", "b"), ("b", "a"), ("b", "a"), ("a", "b")]));
    }

    #[test]
    fn test_ring_forms_single_cycle() {
        for n in 2..=12 {
            let list = numbered(n);
            let topology = ring(&list, SelfLoopPolicy::Skip);
            assert_eq!(topology.len(), n);

            // Follow successors from the first region; every region must be
            // visited exactly once before returning to the start.
            let mut current = list[0].clone();
            let mut visited = std::collections::HashSet::new();
            for _ in 0..n {
                assert!(visited.insert(current.clone()), "revisited {} for n={}", current, n);
                let next: Vec<_> = topology.iter().filter(|e| e.source == current).collect();
                assert_eq!(next.len(), 1);
                current = next[0].destination.clone();
            }
            assert_eq!(current, list[0]);
            assert_eq!(visited.len(), n);
        }
    }

    #[test]
    fn test_bidirectional_ring_covers_both_directions() {
        for n in 2..=12 {
            let list = numbered(n);
            let forward = ring(&list, SelfLoopPolicy::Skip);
            let both = bidirectional_ring(&list, SelfLoopPolicy::Skip);
            assert_eq!(both.len(), 2 * n);

            for edge in &forward {
                assert!(both.contains(edge));
                assert!(both.contains(&edge.reversed()));
            }
            for edge in &both {
                assert!(forward.contains(edge) || forward.contains(&edge.reversed()));
            }
        }
    }

    #[test]
    fn test_paired_window_connectors() {
        let list = regions(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let topology = connectors(&list, &ConnectorPolicy::paired_window(), SelfLoopPolicy::Skip);
        assert_eq!(topology, edges(&[("b", "e"), ("f", "a"), ("d", "g"), ("h", "c")]));

        let small = regions(&["a", "b", "c", "d"]);
        let topology = connectors(&small, &ConnectorPolicy::paired_window(), SelfLoopPolicy::Skip);
        assert_eq!(topology, edges(&[("b", "c"), ("d", "a")]));
    }

    #[test]
    fn test_bidirectional_window_connectors() {
        let list = regions(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let topology =
            connectors(&list, &ConnectorPolicy::bidirectional_window(), SelfLoopPolicy::Skip);
        assert_eq!(topology, edges(&[("b", "f"), ("f", "b"), ("d", "h"), ("h", "d")]));
    }

    #[test]
    fn test_fixed_stride_connectors() {
        let small = regions(&["a", "b", "c", "d"]);
        assert!(connectors(&small, &ConnectorPolicy::fixed_stride(), SelfLoopPolicy::Skip).is_empty());

        let list = numbered(8);
        let topology = connectors(&list, &ConnectorPolicy::fixed_stride(), SelfLoopPolicy::Skip);
        assert_eq!(topology, edges(&[("r3", "r7"), ("r7", "r3")]));

        let list = numbered(16);
        let topology = connectors(&list, &ConnectorPolicy::fixed_stride(), SelfLoopPolicy::Skip);
        assert_eq!(
            topology,
            edges(&[("r3", "r11"), ("r11", "r3"), ("r7", "r15"), ("r15", "r7")])
        );
    }

    #[test]
    fn test_connectors_never_self_loop() {
        let presets = [
            ConnectorPolicy::paired_window(),
            ConnectorPolicy::bidirectional_window(),
            ConnectorPolicy::fixed_stride(),
        ];
        for n in 0..=20 {
            let list = numbered(n);
            for policy in &presets {
                let topology = connectors(&list, policy, SelfLoopPolicy::Allow);
                assert!(
                    topology.iter().all(|edge| !edge.is_self_loop()),
                    "self-loop for n={} with {:?}",
                    n,
                    policy
                );
            }
        }
    }

    #[test]
    fn test_connectors_odd_counts() {
        let five = numbered(5);
        assert_eq!(
            connectors(&five, &ConnectorPolicy::paired_window(), SelfLoopPolicy::Allow),
            edges(&[("r1", "r2"), ("r3", "r0")])
        );
        assert_eq!(
            connectors(&five, &ConnectorPolicy::bidirectional_window(), SelfLoopPolicy::Allow),
            edges(&[("r1", "r3"), ("r3", "r1")])
        );

        let seven = numbered(7);
        assert_eq!(
            connectors(&seven, &ConnectorPolicy::paired_window(), SelfLoopPolicy::Allow),
            edges(&[("r1", "r3"), ("r4", "r0")])
        );

        // Too few regions for any chord
        let three = numbered(3);
        assert!(connectors(&three, &ConnectorPolicy::paired_window(), SelfLoopPolicy::Allow).is_empty());
    }

    #[test]
    fn test_custom_policy_self_loops() {
        let policy = ConnectorPolicy {
            start: 0,
            stride: 1,
            pairing: ChordPairing::Shifted,
            symmetric: false,
        };
        let pair = regions(&["a", "b"]);

        assert_eq!(
            connectors(&pair, &policy, SelfLoopPolicy::Allow),
            edges(&[("a", "a"), ("b", "b")])
        );
        assert!(connectors(&pair, &policy, SelfLoopPolicy::Skip).is_empty());
    }

    #[test]
    fn test_push_chord_drops_rejected_edges() {
        let mut topology = Topology::new();

        assert!(!push_chord(&mut topology, DirectedEdge::new("a", "a"), SelfLoopPolicy::Skip));
        assert!(topology.is_empty());

        assert!(push_chord(&mut topology, DirectedEdge::new("a", "b"), SelfLoopPolicy::Skip));
        assert!(push_chord(&mut topology, DirectedEdge::new("b", "b"), SelfLoopPolicy::Allow));
        assert_eq!(topology, edges(&[("a", "b"), ("b", "b")]));
    }

    #[test]
    fn test_custom_policy_wraps_window() {
        // start 0 reaches index -1, which wraps to the last region
        let policy = ConnectorPolicy {
            start: 0,
            stride: 2,
            pairing: ChordPairing::Shifted,
            symmetric: true,
        };
        let list = numbered(6);
        assert_eq!(
            connectors(&list, &policy, SelfLoopPolicy::Skip),
            edges(&[
                ("r0", "r2"), ("r2", "r0"),
                ("r3", "r5"), ("r5", "r3"),
                ("r2", "r4"), ("r4", "r2"),
                ("r5", "r1"), ("r1", "r5"),
            ])
        );
    }

    #[test]
    fn test_zero_stride_yields_nothing() {
        let policy = ConnectorPolicy {
            stride: 0,
            ..ConnectorPolicy::default()
        };
        assert!(connectors(&numbered(8), &policy, SelfLoopPolicy::Skip).is_empty());
    }

    #[test]
    fn test_policy_parsing_defaults() {
        let policy: ConnectorPolicy = serde_yaml::from_str("start: 3\nstride: 4\n").unwrap();
        assert_eq!(policy.start, 3);
        assert_eq!(policy.stride, 4);
        assert_eq!(policy.pairing, ChordPairing::Shifted);
        assert!(!policy.symmetric);

        let policy: ConnectorPolicy =
            serde_yaml::from_str("pairing: opposite\nsymmetric: true\n").unwrap();
        assert_eq!(policy, ConnectorPolicy::bidirectional_window());
    }
}
