//! Topology generation orchestrator.
//!
//! This module runs every configured [`TopologySpec`] against the region
//! list: generate, print, render. A rendering failure is recorded for that
//! topology and the run moves on to the next one.

use crate::config::{GenerationConfig, Generator, TopologySpec};
use crate::render::Renderer;
use crate::serialize::serialize_human_readable;
use crate::topology::{self, ConnectorPolicy, Region, SelfLoopPolicy, Topology};
use color_eyre::eyre::WrapErr;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the run summary written to the output directory
pub const SUMMARY_FILE: &str = "run_summary.json";

/// Result of processing one topology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyOutcome {
    pub title: String,
    pub edge_count: usize,
    pub artifacts: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_error: Option<String>,
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub region_count: usize,
    pub topologies: Vec<TopologyOutcome>,
}

impl RunReport {
    /// Outcomes whose rendering failed
    pub fn failures(&self) -> impl Iterator<Item = &TopologyOutcome> {
        self.topologies.iter().filter(|outcome| outcome.render_error.is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Build the edge list of a single generator layer
pub fn generate_layer(
    generator: Generator,
    regions: &[Region],
    connectors: &ConnectorPolicy,
    self_loops: SelfLoopPolicy,
) -> Topology {
    match generator {
        Generator::Ring => topology::ring(regions, self_loops),
        Generator::BidirectionalRing => topology::bidirectional_ring(regions, self_loops),
        Generator::Connectors => topology::connectors(regions, connectors, self_loops),
    }
}

/// Build the edge list described by `spec`
pub fn generate(spec: &TopologySpec, regions: &[Region], config: &GenerationConfig) -> Topology {
    let connectors = config.connectors.policy();
    let layers: Vec<Topology> = spec
        .layers
        .iter()
        .map(|generator| generate_layer(*generator, regions, &connectors, config.self_loops))
        .collect();

    match layers.as_slice() {
        [single] => single.clone(),
        _ => topology::union(&layers, config.dedup_unions),
    }
}

/// Generate, print and render every configured topology.
///
/// Textual dumps go to `out`. Pass `None` as renderer to skip diagrams.
pub fn run(
    regions: &[Region],
    config: &GenerationConfig,
    renderer: Option<&dyn Renderer>,
    out: &mut dyn Write,
) -> color_eyre::Result<RunReport> {
    let mut report = RunReport {
        region_count: regions.len(),
        topologies: Vec::with_capacity(config.topologies.len()),
    };

    for spec in &config.topologies {
        let edges = generate(spec, regions, config);
        info!("Generated '{}' with {} edges", spec.title, edges.len());

        let dump = serialize_human_readable(&edges)
            .wrap_err_with(|| format!("Failed to serialize topology '{}'", spec.title))?;
        writeln!(out, "{}", spec.heading())?;
        writeln!(out, "{}", dump)?;

        let mut outcome = TopologyOutcome {
            title: spec.title.clone(),
            edge_count: edges.len(),
            artifacts: Vec::new(),
            render_error: None,
        };

        if let Some(renderer) = renderer.filter(|_| spec.render) {
            match renderer.render(regions, &edges, &spec.title) {
                Ok(artifacts) => {
                    info!("Rendered '{}' to {} artifact(s)", spec.title, artifacts.len());
                    outcome.artifacts = artifacts;
                }
                Err(e) => {
                    error!("Rendering '{}' failed: {}", spec.title, e);
                    outcome.render_error = Some(e.to_string());
                }
            }
        }

        report.topologies.push(outcome);
    }

    let failed = report.failures().count();
    if failed > 0 {
        warn!(
            "{} of {} topologies failed to render",
            failed,
            report.topologies.len()
        );
    } else {
        info!("Processed {} topologies", report.topologies.len());
    }

    Ok(report)
}

/// Write the run summary as JSON into `output_dir`
pub fn write_report(report: &RunReport, output_dir: &Path) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let path = output_dir.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(report).wrap_err("Failed to serialize run summary")?;
    fs::write(&path, json)
        .wrap_err_with(|| format!("Failed to write run summary '{}'", path.display()))?;

    Ok(path)
}
