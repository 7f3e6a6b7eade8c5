//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the generator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the generator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path of the JSON route table.
    pub routes_path: String,

    /// Group key whose routes are compiled into location blocks.
    pub target_group: String,

    /// Include files referenced verbatim from every location block.
    pub includes: IncludeConfig,

    /// Destinations of the two rendered artifacts.
    pub output: OutputConfig,

    /// Cache zone tunables shared by every `proxy_cache_path` line.
    pub cache: CacheZoneConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Group directory, in declaration order.
    pub groups: Vec<GroupConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            routes_path: "routes.json".to_string(),
            target_group: "moderator-web".to_string(),
            includes: IncludeConfig::default(),
            output: OutputConfig::default(),
            cache: CacheZoneConfig::default(),
            observability: ObservabilityConfig::default(),
            groups: ["moderator-web", "moderator-mobile", "teacher", "parent", "student"]
                .into_iter()
                .map(GroupConfig::conventional)
                .collect(),
        }
    }
}

/// Include paths for shared proxy/cache directives.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IncludeConfig {
    /// Common proxy settings (headers, timeouts).
    pub proxy: String,

    /// Common cache settings (lock, bypass, stale handling).
    pub cache: String,
}

impl Default for IncludeConfig {
    fn default() -> Self {
        Self {
            proxy: "/etc/nginx/snippets/proxy.conf".to_string(),
            cache: "/etc/nginx/snippets/cache.conf".to_string(),
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File receiving the `proxy_cache_path` declarations.
    pub zone_file: String,

    /// File receiving the location blocks.
    pub location_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            zone_file: "zones.conf".to_string(),
            location_file: "locations.conf".to_string(),
        }
    }
}

/// Cache zone sizing. Not derived from the route table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheZoneConfig {
    /// Directory hashing levels (e.g. `1:2`).
    pub levels: String,

    /// Shared memory size for the keys zone.
    pub keys_zone_size: String,

    /// Maximum on-disk cache size.
    pub max_size: String,

    /// Inactivity window before eviction.
    pub inactive: String,

    /// Whether responses are first written to a temp path.
    pub use_temp_path: bool,
}

impl Default for CacheZoneConfig {
    fn default() -> Self {
        Self {
            levels: "1:2".to_string(),
            keys_zone_size: "10m".to_string(),
            max_size: "10g".to_string(),
            inactive: "10m".to_string(),
            use_temp_path: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// One group directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupConfig {
    /// Group key as it appears in `/<key>-api/...` URLs.
    pub key: String,

    /// Cache storage folder.
    #[serde(default)]
    pub folder: String,

    /// Upstream block name used in `proxy_pass`.
    pub upstream: String,

    /// Cache zone name.
    pub zone: String,

    /// Environment variable overriding `folder` when set.
    #[serde(default)]
    pub folder_env: Option<String>,
}

impl GroupConfig {
    /// Entry following the `<key>_app` / `<key>_cache` / `<KEY>_FOLDER` naming.
    pub fn conventional(key: &str) -> Self {
        let snake = key.replace('-', "_");
        Self {
            key: key.to_string(),
            folder: String::new(),
            upstream: format!("{}_app", snake),
            zone: format!("{}_cache", snake),
            folder_env: Some(format!("{}_FOLDER", snake.to_uppercase())),
        }
    }
}
