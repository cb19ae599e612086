//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! translator + binary produce:
//!     → tracing events (discarded lines, config loading, completion)
//!
//! Consumers:
//!     → logging.rs subscriber, writing to stderr
//! ```
//!
//! # Design Decisions
//! - stdout carries generated code only; every log line goes to stderr
//! - Pretty format for humans, JSON for machine parsing
//! - `RUST_LOG` wins over config and `-v`

pub mod logging;

pub use logging::{effective_level, init_logging};
