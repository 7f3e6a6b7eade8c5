//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + .env
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GeneratorConfig (validated, immutable)
//!     → directory.rs (resolve *_FOLDER overrides)
//!     → GroupDirectory handed to the renderers
//! ```
//!
//! # Design Decisions
//! - Config is an explicit value passed into the core; the core never reads
//!   the process environment itself
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod directory;
pub mod loader;
pub mod schema;
pub mod validation;

pub use directory::{GroupDirectory, GroupEntry};
pub use schema::CacheZoneConfig;
pub use schema::GeneratorConfig;
pub use schema::GroupConfig;
