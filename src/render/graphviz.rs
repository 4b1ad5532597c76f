//! Rendering through the GraphViz `dot` executable.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::config::OutputFormat;
use crate::render::{dot::to_dot, RenderError, Renderer};
use crate::topology::{Region, Topology};

/// Renders topologies into title-derived files under `output_dir`
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    pub output_dir: PathBuf,
    pub layout: String,
    pub formats: Vec<OutputFormat>,
    /// Name or path of the GraphViz executable
    pub executable: String,
}

impl GraphvizRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, layout: &str, formats: Vec<OutputFormat>) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout: layout.to_string(),
            formats,
            executable: "dot".to_string(),
        }
    }

    /// Path an artifact of `format` for `title` is written to
    pub fn artifact_path(&self, title: &str, format: OutputFormat) -> PathBuf {
        self.output_dir
            .join(format.directory())
            .join(format!("{}.{}", title, format.extension()))
    }

    fn run_graphviz(&self, dot: &str, format: &str, path: &Path) -> Result<(), RenderError> {
        let mut child = Command::new(&self.executable)
            .arg(format!("-K{}", self.layout))
            .arg(format!("-T{}", format))
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn { program: self.executable.clone(), source })?;

        // stdin is dropped after the write, closing the pipe so the child sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes()),
            None => Ok(()),
        };

        // Always reap the child; when it exits early its stderr explains a
        // failed write better than the broken pipe does
        let output = child
            .wait_with_output()
            .map_err(|source| RenderError::Spawn { program: self.executable.clone(), source })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                format: format.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        written.map_err(|source| RenderError::Io { path: path.to_path_buf(), source })
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, nodes: &[Region], edges: &Topology, title: &str) -> Result<Vec<PathBuf>, RenderError> {
        let dot = to_dot(nodes, edges, title, &self.layout);
        let mut artifacts = Vec::with_capacity(self.formats.len());

        for format in &self.formats {
            let path = self.artifact_path(title, *format);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|source| RenderError::Io { path: parent.to_path_buf(), source })?;
            }

            match format.graphviz_format() {
                Some(graphviz_format) => self.run_graphviz(&dot, graphviz_format, &path)?,
                None => fs::write(&path, &dot)
                    .map_err(|source| RenderError::Io { path: path.clone(), source })?,
            }

            debug!("Rendered {:?}", path);
            artifacts.push(path);
        }

        Ok(artifacts)
    }
}
