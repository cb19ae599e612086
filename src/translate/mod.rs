//! Header text to code translation.
//!
//! # Data Flow
//! ```text
//! raw text
//!     → line.rs (split on \r\n / \n, keep lines with exactly one ':')
//!     → tables.rs (drop excluded names, recognise known identifiers)
//!     → statement.rs (render AddHeader statements)
//!     → Vec<String>, input order preserved
//! ```
//!
//! # Design Decisions
//! - Translation is total: malformed lines are skipped, never reported as errors
//! - Excluded names are compared raw, known names hyphen-stripped
//! - Tables are immutable once built and shared by reference

pub mod line;
pub mod statement;
pub mod tables;
pub mod translator;

pub use line::HeaderLine;
pub use statement::{OutputStatement, StatementStyle};
pub use tables::{HeaderTables, NameSet, EXCLUDED_HEADERS, KNOWN_HEADERS};
pub use translator::{translate, DiscardReport, HeaderLineTranslator, Translation};
