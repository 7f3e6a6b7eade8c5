//! Capture patterns for dynamic path parameters.
//!
//! # Design Decisions
//! - One capture per route, always in the final segment
//! - Shape of the captured value is pluggable; only 24-hex object ids ship

use std::fmt;

/// Strategy producing the named regex capture for a dynamic segment.
pub trait ParamPattern: Send + Sync + fmt::Debug {
    /// Capture group name, referenced as `$<name>` in the redirect.
    fn capture_name(&self) -> &str;

    /// Regex the parameter value must match.
    fn expression(&self) -> &str;

    /// Full named capture group, e.g. `(?<id>[0-9a-fA-F]{24})`.
    fn capture_group(&self) -> String {
        format!("(?<{}>{})", self.capture_name(), self.expression())
    }
}

/// 24-character hexadecimal identifier, captured as `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectIdPattern;

impl ParamPattern for ObjectIdPattern {
    fn capture_name(&self) -> &str {
        "id"
    }

    fn expression(&self) -> &str {
        "[0-9a-fA-F]{24}"
    }
}
