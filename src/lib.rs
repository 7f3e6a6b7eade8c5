//! Nginx cache configuration generator library.
//!
//! Compiles a route table of `/<group>-api/...` URLs into `proxy_cache_path`
//! zone declarations and per-route location blocks.

pub mod config;
pub mod observability;
pub mod pipeline;
pub mod render;
pub mod routing;
pub mod sink;
pub mod source;

pub use config::{GeneratorConfig, GroupDirectory};
pub use pipeline::{generate, Artifacts, GenerateError};
pub use routing::{CompiledRoute, RouteCompiler, RouteDescriptor};
pub use sink::{FileSink, MemorySink, Sink, WriterSink};
