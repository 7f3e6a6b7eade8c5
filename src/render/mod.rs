//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! GroupDirectory + CacheZoneConfig
//!     → zone.rs (one proxy_cache_path line per group)
//!     → zone text
//!
//! CompiledRoute[] + GroupDirectory + include paths
//!     → location.rs (one location block per route)
//!     → location text
//! ```
//!
//! # Design Decisions
//! - Output is a pure function of the inputs (byte-identical across runs)
//! - Directive names and argument order follow the nginx grammar exactly
//! - A missing group entry or blank field fails rendering, nothing is omitted

pub mod error;
pub mod location;
pub mod zone;

pub use error::RenderError;
pub use location::{render_locations, Includes};
pub use zone::render_zones;
