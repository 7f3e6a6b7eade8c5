//! `proxy_cache_path` declarations, one per group.

use crate::config::{CacheZoneConfig, GroupDirectory, GroupEntry};
use crate::render::error::{require, RenderResult};

/// Render one cache-path line per directory entry, in directory order.
///
/// Groups without routes still get a zone.
pub fn render_zones(directory: &GroupDirectory, cache: &CacheZoneConfig) -> RenderResult<String> {
    let lines = directory
        .iter()
        .map(|entry| zone_line(entry, cache))
        .collect::<RenderResult<Vec<_>>>()?;

    tracing::info!(zones = lines.len(), "Rendered cache zones");

    Ok(lines.join("\n").trim().to_string())
}

fn zone_line(entry: &GroupEntry, cache: &CacheZoneConfig) -> RenderResult<String> {
    let folder = require(&entry.key, "folder", &entry.folder)?;
    let zone = require(&entry.key, "zone", &entry.zone)?;
    let temp_path = if cache.use_temp_path { "on" } else { "off" };

    Ok(format!(
        "proxy_cache_path {} levels={} keys_zone={}:{} max_size={} inactive={} use_temp_path={};",
        folder, cache.levels, zone, cache.keys_zone_size, cache.max_size, cache.inactive, temp_path
    ))
}
