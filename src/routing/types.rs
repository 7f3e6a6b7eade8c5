//! Route records and error definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw route table entry.
///
/// `ttl` is kept as an untyped JSON value: it is only checked for routes that
/// survive group filtering.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteDescriptor {
    pub url: String,

    #[serde(default)]
    pub ttl: serde_json::Value,
}

impl RouteDescriptor {
    pub fn new(url: impl Into<String>, ttl: u64) -> Self {
        Self {
            url: url.into(),
            ttl: ttl.into(),
        }
    }
}

/// How a location matches incoming requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSpec {
    /// Literal absolute path, matched with `=`.
    Exact(String),
    /// Quoted regex, matched with `~`, carrying one named capture.
    Pattern { expr: String, capture: String },
}

impl MatchSpec {
    /// Location modifier for this match.
    pub fn modifier(&self) -> &'static str {
        match self {
            MatchSpec::Exact(_) => "=",
            MatchSpec::Pattern { .. } => "~",
        }
    }

    /// Location argument, already quoted for patterns.
    pub fn argument(&self) -> &str {
        match self {
            MatchSpec::Exact(path) => path,
            MatchSpec::Pattern { expr, .. } => expr,
        }
    }
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.modifier(), self.argument())
    }
}

/// A route ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoute {
    /// Group key (always the compiler's target group).
    pub group: String,
    pub url: MatchSpec,
    /// Sub-path without the group segment or trailing parameter.
    pub route: String,
    /// Cache lifetime in minutes.
    pub ttl: u64,
}

impl CompiledRoute {
    pub fn is_dynamic(&self) -> bool {
        matches!(self.url, MatchSpec::Pattern { .. })
    }

    /// Name of the captured parameter for dynamic routes.
    pub fn capture(&self) -> Option<&str> {
        match &self.url {
            MatchSpec::Pattern { capture, .. } => Some(capture),
            MatchSpec::Exact(_) => None,
        }
    }

    /// Human-readable path, e.g. `/users/:id`.
    pub fn logical_path(&self) -> String {
        let mut path = format!("/{}", self.route);
        if let Some(capture) = self.capture() {
            if !self.route.is_empty() {
                path.push('/');
            }
            path.push(':');
            path.push_str(capture);
        }
        path
    }
}

/// Errors found while parsing a single route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// URL is empty or does not start with `/`.
    #[error("URL must start with '/'")]
    MissingLeadingSlash,

    /// No `<group>-api` segment.
    #[error("URL has no group segment")]
    MissingGroup,

    /// Group segment lacks the `-api` suffix.
    #[error("group segment '{0}' does not end with '-api'")]
    MissingApiSuffix(String),

    /// Group segment is exactly `-api`.
    #[error("group segment has an empty group key")]
    EmptyGroup,

    /// `//` or a trailing `/`.
    #[error("URL contains an empty path segment")]
    EmptySegment,

    /// TTL is not a whole number.
    #[error("ttl {0} is not a whole number of minutes")]
    InvalidTtl(String),

    /// TTL is below zero.
    #[error("ttl {0} is negative")]
    NegativeTtl(i64),
}

/// A route error tagged with the route's position in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route #{index} '{url}': {source}")]
pub struct CompileError {
    pub index: usize,
    pub url: String,
    #[source]
    pub source: RouteError,
}

impl CompileError {
    pub fn new(index: usize, route: &RouteDescriptor, source: RouteError) -> Self {
        Self {
            index,
            url: route.url.clone(),
            source,
        }
    }
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
