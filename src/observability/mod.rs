//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / routing / render / sink
//!     → tracing events (info summaries, per-route debug)
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```

pub mod logging;
