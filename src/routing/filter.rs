//! Group filtering of the route table.

use crate::routing::path::RoutePath;
use crate::routing::types::{CompileError, RouteDescriptor};

/// A route that belongs to the target group, with its parsed path.
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedRoute<'a> {
    /// Position in the original route table.
    pub index: usize,
    pub route: &'a RouteDescriptor,
    pub path: RoutePath,
}

/// Keeps routes whose URL group equals the target group.
#[derive(Debug, Clone)]
pub struct RouteFilter {
    target_group: String,
}

impl RouteFilter {
    pub fn new(target_group: impl Into<String>) -> Self {
        Self {
            target_group: target_group.into(),
        }
    }

    pub fn target_group(&self) -> &str {
        &self.target_group
    }

    /// Filter `routes`, preserving order.
    ///
    /// Every URL is parsed, so a malformed route in any group fails the call.
    pub fn filter<'a>(
        &self,
        routes: &'a [RouteDescriptor],
    ) -> Result<Vec<RetainedRoute<'a>>, CompileError> {
        let mut retained = Vec::new();
        for (index, route) in routes.iter().enumerate() {
            let path =
                RoutePath::parse(&route.url).map_err(|e| CompileError::new(index, route, e))?;
            if path.group() == self.target_group {
                retained.push(RetainedRoute { index, route, path });
            }
        }
        Ok(retained)
    }
}
