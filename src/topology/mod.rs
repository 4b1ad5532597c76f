//! Network topology module.
//!
//! This module contains the ring and chord generators and the combinator
//! that overlays their edge lists.

pub mod types;
pub mod connections;
pub mod combine;

// Re-export key types and functions for easier access
pub use types::{DirectedEdge, Region, SelfLoopPolicy, Topology};
pub use connections::{bidirectional_ring, connectors, ring, ChordPairing, ConnectorPolicy};
pub use combine::{combine, dedup, union, ConcatOrder};
