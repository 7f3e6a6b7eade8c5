//! Location blocks binding compiled routes to upstreams and cache zones.
//!
//! Every block has the same shape:
//!
//! ```text
//! # GROUP: moderator-web
//! # ROUTE: /users/:id
//! # TTL:   5m
//! location ~ "users\/(?<id>[0-9a-fA-F]{24})" {
//!     # Redirect
//!     include <proxy include>; # importing common proxy configurations
//!     proxy_pass http://moderator_web_app/users/$id;
//!
//!     # Cache
//!     proxy_cache moderator_web_cache;
//!     proxy_cache_key "...";
//!     proxy_cache_valid 200 201 5m;
//!     include <cache include>; # importing common cache configurations
//! }
//! ```

use crate::config::GroupDirectory;
use crate::render::error::{require, RenderError, RenderResult};
use crate::routing::CompiledRoute;

/// Cache key: host, request URI, authorization, branch header, request body.
pub const CACHE_KEY: &str = "$proxy_host$request_uri$http_authorization$http_branch$request_body";

/// Status codes whose responses are cached.
pub const CACHED_STATUSES: &str = "200 201";

/// Include paths referenced from every block.
#[derive(Debug, Clone, Copy)]
pub struct Includes<'a> {
    pub proxy: &'a str,
    pub cache: &'a str,
}

/// Render one block per route, in input order, separated by a blank line.
pub fn render_locations(
    routes: &[CompiledRoute],
    directory: &GroupDirectory,
    includes: Includes<'_>,
) -> RenderResult<String> {
    let blocks = routes
        .iter()
        .map(|route| render_block(route, directory, includes))
        .collect::<RenderResult<Vec<_>>>()?;

    tracing::info!(locations = blocks.len(), "Rendered location blocks");

    Ok(blocks.join("\n\n").trim().to_string())
}

/// `http://<upstream>/<route>[/$<capture>]`, without a doubled slash.
pub fn redirect_target(upstream: &str, route: &CompiledRoute) -> String {
    let mut target = format!("http://{}/{}", upstream, route.route);
    if let Some(capture) = route.capture() {
        if !route.route.is_empty() {
            target.push('/');
        }
        target.push('$');
        target.push_str(capture);
    }
    target
}

fn render_block(
    route: &CompiledRoute,
    directory: &GroupDirectory,
    includes: Includes<'_>,
) -> RenderResult<String> {
    let entry = directory
        .get(&route.group)
        .ok_or_else(|| RenderError::UnknownGroup(route.group.clone()))?;
    let upstream = require(&entry.key, "upstream", &entry.upstream)?;
    let zone = require(&entry.key, "zone", &entry.zone)?;

    Ok(format!(
        "# GROUP: {group}\n\
         # ROUTE: {path}\n\
         # TTL:   {ttl}m\n\
         location {matcher} {{\n\
         \t# Redirect\n\
         \tinclude {proxy_include}; # importing common proxy configurations\n\
         \tproxy_pass {redirect};\n\
         \n\
         \t# Cache\n\
         \tproxy_cache {zone};\n\
         \tproxy_cache_key \"{key}\";\n\
         \tproxy_cache_valid {statuses} {ttl}m;\n\
         \tinclude {cache_include}; # importing common cache configurations\n\
         }}",
        group = route.group,
        path = route.logical_path(),
        ttl = route.ttl,
        matcher = route.url,
        proxy_include = includes.proxy,
        redirect = redirect_target(upstream, route),
        zone = zone,
        key = CACHE_KEY,
        statuses = CACHED_STATUSES,
        cache_include = includes.cache,
    ))
}
