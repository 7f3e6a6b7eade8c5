//! Route table loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::routing::RouteDescriptor;

/// Errors reading the route table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read route table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of `{ "url", "ttl" }` records.
pub fn load_routes(path: &Path) -> Result<Vec<RouteDescriptor>, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let routes = parse_routes(&content)?;

    tracing::debug!(path = %path.display(), routes = routes.len(), "Loaded route table");

    Ok(routes)
}

pub fn parse_routes(content: &str) -> Result<Vec<RouteDescriptor>, SourceError> {
    Ok(serde_json::from_str(content)?)
}
