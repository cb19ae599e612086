//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CodegenConfig (validated, immutable)
//!     → CLI flags applied on top
//!     → HeaderLineTranslator built from tables + style
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::CodegenConfig;
pub use schema::{LineEnding, LogFormat, ObservabilityConfig, OutputConfig, OutputFormat, TablesConfig};
pub use validation::{validate_config, ValidationError};
