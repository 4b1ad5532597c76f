use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

use ringtopo::config::{ConnectorPreset, ConnectorSetting, GenerationConfig, OutputFormat};
use ringtopo::config_loader::{load_config, load_regions};
use ringtopo::orchestrator;
use ringtopo::render::{GraphvizRenderer, Renderer};
use ringtopo::topology::SelfLoopPolicy;

/// Ring, chord and combined topology generator for network regions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a run configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the region list YAML file (overrides the configuration)
    #[arg(short, long)]
    regions: Option<PathBuf>,

    /// Output directory for rendered diagrams and the run summary
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// GraphViz layout engine
    #[arg(long)]
    layout: Option<String>,

    /// Artifact format to render; may be repeated
    #[arg(long = "format", value_enum)]
    formats: Vec<OutputFormat>,

    /// Connector parameter preset
    #[arg(long, value_enum)]
    connectors: Option<ConnectorPreset>,

    /// Keep edges whose source and destination are the same region
    #[arg(long)]
    allow_self_loops: bool,

    /// Keep duplicate edges in combined topologies
    #[arg(long)]
    no_dedup: bool,

    /// Only print edge lists, skip diagram rendering
    #[arg(long)]
    no_render: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut GenerationConfig, args: &Args) {
    if let Some(regions) = &args.regions {
        config.regions = regions.clone();
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(layout) = &args.layout {
        config.layout = layout.clone();
    }
    if !args.formats.is_empty() {
        config.formats = args.formats.clone();
    }
    if let Some(preset) = args.connectors {
        config.connectors = ConnectorSetting::Preset(preset);
    }
    if args.allow_self_loops {
        config.self_loops = SelfLoopPolicy::Allow;
    }
    if args.no_dedup {
        config.dedup_unions = false;
    }
    if args.no_render {
        config.render = false;
    }
}

/// Load the configuration file, apply overrides, then validate the result
fn resolve_config(args: &Args) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let config = resolve_config(&args)?;

    info!("Region file: {:?}", config.regions);
    info!("Output directory: {:?}", config.output_dir);

    let regions = load_regions(&config.regions)
        .wrap_err("Cannot load the region list; no topologies were generated")?;

    let renderer = config
        .render
        .then(|| GraphvizRenderer::new(&config.output_dir, &config.layout, config.formats.clone()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = orchestrator::run(
        &regions,
        &config,
        renderer.as_ref().map(|r| r as &dyn Renderer),
        &mut out,
    )?;

    let summary = orchestrator::write_report(&report, &config.output_dir)?;
    info!("Run summary written to {:?}", summary);

    if report.has_failures() {
        let failed: Vec<_> = report.failures().map(|t| t.title.as_str()).collect();
        return Err(eyre!("Rendering failed for: {}", failed.join(", ")));
    }

    info!("Topology generation completed successfully");
    Ok(())
}
