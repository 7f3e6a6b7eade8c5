//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RouteDescriptor[] (route table)
//!     → filter.rs (parse URLs, keep target group)
//!     → path.rs (group / sub-path / trailing parameter)
//!     → param.rs (named capture for dynamic segments)
//!     → compiler.rs (assemble CompiledRoute, check TTL)
//!     → CompiledRoute[] (immutable, table order)
//! ```
//!
//! # Design Decisions
//! - Target group is a parameter, never a constant
//! - Deterministic: same table always compiles to the same routes
//! - Any malformed URL aborts compilation

pub mod compiler;
pub mod filter;
pub mod param;
pub mod path;
pub mod types;

pub use compiler::RouteCompiler;
pub use filter::RouteFilter;
pub use param::{ObjectIdPattern, ParamPattern};
pub use path::{decompose, RoutePath};
pub use types::{CompileError, CompiledRoute, MatchSpec, RouteDescriptor, RouteError};
