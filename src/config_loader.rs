use crate::config::GenerationConfig;
use crate::topology::Region;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use serde::Deserialize;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading the region list
#[derive(Debug, thiserror::Error)]
pub enum RegionsError {
    #[error("Region file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read region file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse region file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Region document with the sequence under a `regions` key
#[derive(Debug, Deserialize)]
struct KeyedRegions {
    regions: Vec<Region>,
}

/// Load the ordered region list from a YAML file.
///
/// The document is either a bare sequence of names or a mapping with the
/// sequence under `regions`. Order is preserved exactly as written. Names are
/// not checked for uniqueness, and scalars YAML would read as numbers are kept
/// as their written text.
pub fn load_regions(path: &Path) -> Result<Vec<Region>, RegionsError> {
    info!("Loading regions from: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RegionsError::NotFound { path: path.to_path_buf() },
        _ => RegionsError::Io { path: path.to_path_buf(), source },
    })?;
    let parse_error = |source| RegionsError::Parse { path: path.to_path_buf(), source };

    // The shape is read from a Value, but names come from a second typed
    // parse: a Value has already typed `64512` as a number.
    let shape: serde_yaml::Value = serde_yaml::from_str(&content).map_err(parse_error)?;
    let regions = if shape.is_mapping() {
        serde_yaml::from_str::<KeyedRegions>(&content).map(|document| document.regions)
    } else {
        serde_yaml::from_str::<Vec<Region>>(&content)
    }
    .map_err(parse_error)?;

    if regions.is_empty() {
        warn!("Region file {:?} lists no regions; every topology will be empty", path);
    }
    info!("Parsed regions: {:?}", regions);

    Ok(regions)
}

/// Load a run configuration from a YAML file.
///
/// The result is not validated: command-line overrides may still change it,
/// so callers run [`GenerationConfig::validate`] once those are applied.
pub fn load_config(config_path: &Path) -> Result<GenerationConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: GenerationConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    Ok(config)
}
