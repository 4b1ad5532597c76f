//! Diagram rendering.
//!
//! The generators only hand over nodes, edges and a title. File locations,
//! image formats and the layout engine are decided by the [`Renderer`].

pub mod dot;
pub mod graphviz;

use std::io;
use std::path::PathBuf;

use crate::topology::{Region, Topology};

pub use dot::to_dot;
pub use graphviz::GraphvizRenderer;

/// Errors that can occur while rendering a topology
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("GraphViz failed to produce {format} ({status}): {stderr}")]
    Failed {
        format: String,
        status: String,
        stderr: String,
    },
}

/// Turns a topology into diagram artifacts
pub trait Renderer {
    /// Render `edges` over `nodes`, returning the paths of written artifacts
    fn render(&self, nodes: &[Region], edges: &Topology, title: &str) -> Result<Vec<PathBuf>, RenderError>;
}
