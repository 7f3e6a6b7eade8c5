//! Nginx cache configuration generator.
//!
//! # Pipeline
//!
//! ```text
//!   generator.toml + .env            routes.json
//!          │                              │
//!          ▼                              ▼
//!   ┌──────────────┐              ┌──────────────┐
//!   │    config    │              │    source    │
//!   │ + directory  │              │ route table  │
//!   └──────┬───────┘              └──────┬───────┘
//!          │                             │
//!          │         ┌───────────────────┘
//!          ▼         ▼
//!   ┌──────────────────────┐      ┌──────────────┐
//!   │  routing (filter +   │─────▶│    render    │
//!   │  decompose+compile)  │      │ zone/location│
//!   └──────────────────────┘      └──────┬───────┘
//!                                        │ both rendered
//!                                        ▼
//!                                 ┌──────────────┐
//!                                 │     sink     │
//!                                 │ files/stdout │
//!                                 └──────────────┘
//! ```
//!
//! Nothing is written unless every route compiled and both artifacts rendered.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;

use proxy_cache_gen::config::loader::{read_config, ConfigError};
use proxy_cache_gen::config::validation::validate_config;
use proxy_cache_gen::config::{GeneratorConfig, GroupDirectory};
use proxy_cache_gen::observability::logging;
use proxy_cache_gen::pipeline::generate;
use proxy_cache_gen::sink::{FileSink, Sink, WriterSink};
use proxy_cache_gen::source::load_routes;

const DEFAULT_CONFIG: &str = "generator.toml";

#[derive(Parser)]
#[command(name = "proxy-cache-gen")]
#[command(about = "Generate nginx cache zones and location blocks from a route table", long_about = None)]
struct Cli {
    /// Config file (defaults to ./generator.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route table JSON file
    #[arg(short, long)]
    routes: Option<String>,

    /// Group to compile locations for
    #[arg(short, long)]
    group: Option<String>,

    /// Zone output file
    #[arg(long)]
    zone_file: Option<String>,

    /// Location output file
    #[arg(long)]
    location_file: Option<String>,

    /// Print both artifacts to stdout instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = resolve_config(&cli);

    let level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.observability.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    logging::init(&level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Configuration rejected");
            return Err(e.into());
        }
    };

    tracing::info!(
        group = %config.target_group,
        routes = %config.routes_path,
        groups = config.groups.len(),
        "Configuration loaded"
    );

    if let Err(e) = run(&cli, &config) {
        tracing::error!(error = %e, "Generation aborted, no output written");
        return Err(e);
    }

    tracing::info!("Generation complete");
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => read_config(Path::new(DEFAULT_CONFIG))?,
        None => GeneratorConfig::default(),
    };

    if let Some(routes) = &cli.routes {
        config.routes_path = routes.clone();
    }
    if let Some(group) = &cli.group {
        config.target_group = group.clone();
    }
    if let Some(zone_file) = &cli.zone_file {
        config.output.zone_file = zone_file.clone();
    }
    if let Some(location_file) = &cli.location_file {
        config.output.location_file = location_file.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn run(cli: &Cli, config: &GeneratorConfig) -> Result<(), Box<dyn Error>> {
    let directory = GroupDirectory::from_env(&config.groups);
    let routes = load_routes(Path::new(&config.routes_path))?;

    let artifacts = generate(config, &directory, &routes)?;

    let mut sink: Box<dyn Sink> = if cli.dry_run {
        Box::new(WriterSink::stdout())
    } else {
        Box::new(FileSink::new(
            &config.output.zone_file,
            &config.output.location_file,
        ))
    };
    sink.accept(&artifacts)?;
    Ok(())
}
