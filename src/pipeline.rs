//! End-to-end generation: route table + directory → zone and location text.
//!
//! Pure and synchronous. Nothing here touches the filesystem; callers hand
//! the resulting [`Artifacts`] to a [`Sink`](crate::sink::Sink) only after
//! `generate` succeeded.

use thiserror::Error;

use crate::config::{GeneratorConfig, GroupDirectory};
use crate::render::{render_locations, render_zones, Includes, RenderError};
use crate::routing::{CompileError, CompiledRoute, RouteCompiler, RouteDescriptor};

/// The two rendered configuration fragments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Artifacts {
    /// `proxy_cache_path` declarations.
    pub zones: String,
    /// Location blocks.
    pub locations: String,
}

/// Errors aborting a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("route compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Compile routes for `config.target_group` and render both artifacts.
pub fn generate(
    config: &GeneratorConfig,
    directory: &GroupDirectory,
    routes: &[RouteDescriptor],
) -> Result<Artifacts, GenerateError> {
    let compiler = RouteCompiler::new(config.target_group.as_str());
    generate_with(&compiler, config, directory, routes)
}

/// Same as [`generate`] with a caller-supplied compiler.
pub fn generate_with(
    compiler: &RouteCompiler,
    config: &GeneratorConfig,
    directory: &GroupDirectory,
    routes: &[RouteDescriptor],
) -> Result<Artifacts, GenerateError> {
    let compiled: Vec<CompiledRoute> = compiler.compile(routes)?;

    let zones = render_zones(directory, &config.cache)?;
    let locations = render_locations(
        &compiled,
        directory,
        Includes {
            proxy: &config.includes.proxy,
            cache: &config.includes.cache,
        },
    )?;

    Ok(Artifacts { zones, locations })
}
