//! URL decomposition.
//!
//! # Responsibilities
//! - Parse `/<group>-api/<segment>(/<segment>)*` into structured segments
//! - Detect a trailing dynamic parameter (`:name`)
//! - Derive the location match spec from the remaining segments
//!
//! # Design Decisions
//! - Parsing, parameter detection and pattern construction are separate steps
//! - Malformed URLs are errors, never skipped
//! - Only the last sub-path segment may be a parameter

use crate::routing::param::ParamPattern;
use crate::routing::types::{MatchSpec, RouteError, RouteResult};

/// Suffix every group segment carries.
pub const GROUP_SUFFIX: &str = "-api";

/// Character marking a dynamic segment.
pub const PARAM_MARKER: char = ':';

/// A parsed route URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    group: String,
    segments: Vec<String>,
    param: Option<String>,
}

impl RoutePath {
    /// Parse a raw route URL.
    pub fn parse(url: &str) -> RouteResult<Self> {
        let segments = split_segments(url)?;
        let (group_segment, rest) = segments.split_first().ok_or(RouteError::MissingGroup)?;
        let group = group_key(group_segment)?;

        let mut segments: Vec<String> = rest.iter().map(|s| s.to_string()).collect();
        let param = if segments.last().is_some_and(|last| is_param(last)) {
            segments.pop()
        } else {
            None
        };

        Ok(Self {
            group: group.to_string(),
            segments,
            param,
        })
    }

    /// Group key with the `-api` suffix removed.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Sub-path segments, excluding any trailing parameter.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Raw parameter segment (e.g. `:id`), if the route is dynamic.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    pub fn is_dynamic(&self) -> bool {
        self.param.is_some()
    }

    /// Canonical sub-path, e.g. `users/active`.
    pub fn sub_path(&self) -> String {
        self.segments.join("/")
    }

    /// Location match for this path.
    pub fn match_spec(&self, pattern: &dyn ParamPattern) -> MatchSpec {
        if self.is_dynamic() {
            let mut parts: Vec<String> = self.segments.iter().map(|s| escape_segment(s)).collect();
            parts.push(pattern.capture_group());
            MatchSpec::Pattern {
                expr: format!("\"{}\"", parts.join("\\/")),
                capture: pattern.capture_name().to_string(),
            }
        } else {
            MatchSpec::Exact(format!("/{}", self.sub_path()))
        }
    }

    /// Group, sub-path segments and match spec in one record.
    pub fn decompose(&self, pattern: &dyn ParamPattern) -> Decomposition {
        Decomposition {
            group: self.group.clone(),
            sub_path_segments: self.segments.clone(),
            is_dynamic: self.is_dynamic(),
            match_spec: self.match_spec(pattern),
        }
    }
}

/// Full decomposition of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub group: String,
    pub sub_path_segments: Vec<String>,
    pub is_dynamic: bool,
    pub match_spec: MatchSpec,
}

/// Decompose a URL into group, sub-path and match spec.
pub fn decompose(url: &str, pattern: &dyn ParamPattern) -> RouteResult<Decomposition> {
    Ok(RoutePath::parse(url)?.decompose(pattern))
}

fn split_segments(url: &str) -> RouteResult<Vec<&str>> {
    let rest = url.strip_prefix('/').ok_or(RouteError::MissingLeadingSlash)?;
    if rest.is_empty() {
        return Err(RouteError::MissingGroup);
    }

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RouteError::EmptySegment);
    }
    Ok(segments)
}

fn group_key(segment: &str) -> RouteResult<&str> {
    let key = segment
        .strip_suffix(GROUP_SUFFIX)
        .ok_or_else(|| RouteError::MissingApiSuffix(segment.to_string()))?;
    if key.is_empty() {
        return Err(RouteError::EmptyGroup);
    }
    Ok(key)
}

/// Escape PCRE metacharacters and `"` so a literal segment stays literal
/// inside the quoted location regex.
fn escape_segment(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        if matches!(
            c,
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '"'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn is_param(segment: &str) -> bool {
    segment.contains(PARAM_MARKER)
}
