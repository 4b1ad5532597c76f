use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::topology::{ConnectorPolicy, SelfLoopPolicy};

/// Named connector parameter sets
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorPreset {
    /// One-way chords between neighbours of opposite regions
    PairedWindow,
    /// Two-way chords between every other opposite pair
    BidirectionalWindow,
    /// Sparse two-way chords every fourth region
    FixedStride,
}

impl ConnectorPreset {
    pub fn policy(&self) -> ConnectorPolicy {
        match self {
            Self::PairedWindow => ConnectorPolicy::paired_window(),
            Self::BidirectionalWindow => ConnectorPolicy::bidirectional_window(),
            Self::FixedStride => ConnectorPolicy::fixed_stride(),
        }
    }
}

/// Connector settings, either a preset name or explicit parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ConnectorSetting {
    Preset(ConnectorPreset),
    Custom(ConnectorPolicy),
}

impl ConnectorSetting {
    pub fn policy(&self) -> ConnectorPolicy {
        match self {
            Self::Preset(preset) => preset.policy(),
            Self::Custom(policy) => policy.clone(),
        }
    }
}

impl Default for ConnectorSetting {
    fn default() -> Self {
        Self::Preset(ConnectorPreset::PairedWindow)
    }
}

/// Edge generator used as one layer of a topology
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    /// Unidirectional ring
    Ring,
    /// Ring with both directions at every adjacency
    BidirectionalRing,
    /// Chords across the ring
    Connectors,
}

/// One topology produced per run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopologySpec {
    /// File-name stem of every artifact rendered for this topology
    pub title: String,
    /// Heading printed above the textual dump; defaults to the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Generators overlaid in order; earlier layers win duplicate removal
    pub layers: Vec<Generator>,
    #[serde(default = "default_true")]
    pub render: bool,
}

impl TopologySpec {
    pub fn new(title: &str, heading: &str, layers: Vec<Generator>) -> Self {
        Self {
            title: title.to_string(),
            heading: Some(heading.to_string()),
            layers,
            render: true,
        }
    }

    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.title)
    }
}

/// Artifact kinds the renderer can produce
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Raster image, `images/<title>.png`
    Png,
    /// Vector image, `svg/<title>.svg`
    Svg,
    /// Laid-out graph description, `dot/<title>.dot`
    Xdot,
    /// Unlaid DOT text written directly, `graphs/<title>.gv`
    Dot,
}

impl OutputFormat {
    /// Subdirectory of the output directory holding this format
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Png => "images",
            Self::Svg => "svg",
            Self::Xdot => "dot",
            Self::Dot => "graphs",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Xdot => "dot",
            Self::Dot => "gv",
        }
    }

    /// Argument for `dot -T`, or `None` when GraphViz is not involved
    pub fn graphviz_format(&self) -> Option<&'static str> {
        match self {
            Self::Png => Some("png"),
            Self::Svg => Some("svg"),
            Self::Xdot => Some("xdot"),
            Self::Dot => None,
        }
    }
}

/// Run configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    /// YAML file holding the ordered region list
    pub regions: PathBuf,
    /// Root directory for rendered artifacts and the run summary
    pub output_dir: PathBuf,
    /// GraphViz layout engine
    pub layout: String,
    pub formats: Vec<OutputFormat>,
    pub render: bool,
    pub self_loops: SelfLoopPolicy,
    pub connectors: ConnectorSetting,
    /// Remove duplicate edges from multi-layer topologies
    pub dedup_unions: bool,
    pub topologies: Vec<TopologySpec>,
}

impl GenerationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.connectors.policy().stride == 0 {
            return Err(ValidationError::InvalidConnectors(
                "stride must be greater than zero".to_string(),
            ));
        }

        if self.layout.trim().is_empty() {
            return Err(ValidationError::InvalidOutput(
                "layout cannot be empty".to_string(),
            ));
        }

        if self.render && self.formats.is_empty() {
            return Err(ValidationError::InvalidOutput(
                "at least one output format is required when rendering is enabled".to_string(),
            ));
        }

        let mut titles = HashSet::new();
        for spec in &self.topologies {
            Self::validate_title(&spec.title)?;
            if !titles.insert(spec.title.as_str()) {
                return Err(ValidationError::InvalidTopology(format!(
                    "duplicate title '{}'",
                    spec.title
                )));
            }
            if spec.layers.is_empty() {
                return Err(ValidationError::InvalidTopology(format!(
                    "topology '{}' has no layers",
                    spec.title
                )));
            }
        }

        Ok(())
    }

    /// Titles become file names, so they must stay within one path component
    fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::InvalidTopology(
                "title cannot be empty".to_string(),
            ));
        }
        if title == "." || title == ".." || title.contains(['/', '\\']) {
            return Err(ValidationError::InvalidTopology(format!(
                "title '{}' is not a valid file name",
                title
            )));
        }
        Ok(())
    }
}

/// The five topologies generated by default
pub fn standard_topologies() -> Vec<TopologySpec> {
    vec![
        TopologySpec::new("ring-topology", "ring topology", vec![Generator::Ring]),
        TopologySpec::new(
            "bidirectional-ring-topology",
            "bidirectional ring topology",
            vec![Generator::BidirectionalRing],
        ),
        TopologySpec::new("connectors", "connectors", vec![Generator::Connectors]),
        TopologySpec::new(
            "ring-topology-connectors",
            "ring topology with connectors",
            vec![Generator::Connectors, Generator::Ring],
        ),
        TopologySpec::new(
            "bidirectional-ring-topology-connectors",
            "bidirectional ring topology with connectors",
            vec![Generator::Connectors, Generator::BidirectionalRing],
        ),
    ]
}

fn default_true() -> bool {
    true
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid connector configuration: {0}")]
    InvalidConnectors(String),
    #[error("Invalid output configuration: {0}")]
    InvalidOutput(String),
    #[error("Invalid topology configuration: {0}")]
    InvalidTopology(String),
}

/// Default implementations
impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            regions: PathBuf::from("regions.yaml"),
            output_dir: PathBuf::from("."),
            layout: "circo".to_string(),
            formats: vec![OutputFormat::Png],
            render: true,
            self_loops: SelfLoopPolicy::Skip,
            connectors: ConnectorSetting::default(),
            dedup_unions: true,
            topologies: standard_topologies(),
        }
    }
}
