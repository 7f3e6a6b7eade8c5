//! Route compilation.
//!
//! Turns raw route descriptors into render-ready [`CompiledRoute`]s for one
//! target group.

use serde_json::Value;

use crate::routing::filter::RouteFilter;
use crate::routing::param::{ObjectIdPattern, ParamPattern};
use crate::routing::types::{CompileError, CompiledRoute, RouteDescriptor, RouteError, RouteResult};

/// Compiles the route table for a single group.
#[derive(Debug)]
pub struct RouteCompiler {
    filter: RouteFilter,
    param: Box<dyn ParamPattern>,
}

impl RouteCompiler {
    /// Create a compiler using 24-hex object id parameters.
    pub fn new(target_group: impl Into<String>) -> Self {
        Self {
            filter: RouteFilter::new(target_group),
            param: Box::new(ObjectIdPattern),
        }
    }

    /// Replace the dynamic parameter pattern.
    pub fn with_param_pattern(mut self, param: impl ParamPattern + 'static) -> Self {
        self.param = Box::new(param);
        self
    }

    pub fn target_group(&self) -> &str {
        self.filter.target_group()
    }

    /// Compile every route of the target group, in table order.
    pub fn compile(&self, routes: &[RouteDescriptor]) -> Result<Vec<CompiledRoute>, CompileError> {
        let retained = self.filter.filter(routes)?;

        tracing::info!(
            group = self.target_group(),
            total = routes.len(),
            retained = retained.len(),
            "Filtered route table"
        );

        retained
            .into_iter()
            .map(|r| {
                let ttl = parse_ttl(&r.route.ttl).map_err(|e| CompileError::new(r.index, r.route, e))?;
                let parts = r.path.decompose(self.param.as_ref());
                let compiled = CompiledRoute {
                    group: parts.group,
                    url: parts.match_spec,
                    route: parts.sub_path_segments.join("/"),
                    ttl,
                };
                tracing::debug!(
                    url = %r.route.url,
                    location = %compiled.url,
                    ttl = compiled.ttl,
                    "Compiled route"
                );
                Ok(compiled)
            })
            .collect()
    }
}

/// Accept non-negative whole minutes only. Integral floats (`5.0`) count as
/// whole minutes; fractional ones cannot be expressed as an nginx time.
fn parse_ttl(value: &Value) -> RouteResult<u64> {
    if let Some(minutes) = value.as_u64() {
        return Ok(minutes);
    }
    if let Some(negative) = value.as_i64() {
        return Err(RouteError::NegativeTtl(negative));
    }
    match value.as_f64() {
        Some(minutes) if minutes.is_finite() && minutes.fract() == 0.0 => {
            if minutes < 0.0 {
                Err(RouteError::NegativeTtl(minutes as i64))
            } else if minutes <= u64::MAX as f64 {
                Ok(minutes as u64)
            } else {
                Err(RouteError::InvalidTtl(value.to_string()))
            }
        }
        _ => Err(RouteError::InvalidTtl(value.to_string())),
    }
}
