//! # ringtopo - Ring and chord topology generator for network regions
//!
//! This library turns an ordered list of region names into edge lists for a
//! handful of related topologies and renders each one as a diagram.
//!
//! ## Overview
//!
//! Regions are arranged in a ring in the order they are listed. From that
//! order the library derives:
//!
//! - **Ring**: every region links to its successor, the last back to the first
//! - **Bidirectional ring**: both directions at every adjacency
//! - **Connectors**: chords between regions roughly opposite each other
//! - **Unions**: overlays of the above with duplicate edges removed
//!
//! ## Architecture
//!
//! - `topology`: region/edge types, generators and the edge-list combinator
//! - `config`: typed run configuration and validation
//! - `config_loader`: region list and configuration loading
//! - `serialize`: human-readable edge list dumps
//! - `render`: DOT output and GraphViz rendering
//! - `orchestrator`: the per-topology generate/print/render loop
//!
//! ## Example Usage
//!
//! ```rust
//! use ringtopo::topology::{connectors, ring, union, ConnectorPolicy, SelfLoopPolicy};
//!
//! let regions: Vec<String> = ["a", "b", "c", "d"].iter().map(|r| r.to_string()).collect();
//!
//! let ring_edges = ring(&regions, SelfLoopPolicy::Skip);
//! let chords = connectors(&regions, &ConnectorPolicy::paired_window(), SelfLoopPolicy::Skip);
//! let combined = union(&[chords, ring_edges], true);
//!
//! assert_eq!(combined.len(), 4);
//! ```
//!
//! ## Region File Format
//!
//! ```yaml
//! - us-west
//! - us-east
//! - eu-west
//! - ap-south
//! ```
//!
//! ## Error Handling
//!
//! Library errors are typed (`RegionsError`, `ValidationError`, `RenderError`);
//! the binary reports them through `color_eyre`.

pub mod config;
pub mod config_loader;
pub mod orchestrator;
pub mod render;
pub mod serialize;
pub mod topology;
