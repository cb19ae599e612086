//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject table entries that can never match a header line
//! - Check that generated-code names are usable identifiers
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CodegenConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::CodegenConfig;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("tables.{table}[{index}] is empty")]
    EmptyEntry { table: &'static str, index: usize },

    #[error("tables.{table} lists \"{name}\" more than once")]
    DuplicateEntry { table: &'static str, name: String },

    /// Known names are matched after hyphens are removed.
    #[error("tables.known_headers entry \"{0}\" contains '-' and can never match")]
    HyphenatedKnownHeader(String),

    /// A qualifying header name never contains a colon.
    #[error("tables.excluded_headers entry \"{0}\" contains ':' and can never match")]
    ColonInExcludedHeader(String),

    #[error("output.{field} \"{value}\" is not a valid identifier")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("observability.log_level \"{0}\" is not one of trace, debug, info, warn, error, off")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &CodegenConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_table(&mut errors, "known_headers", &config.tables.known_headers);
    check_table(&mut errors, "excluded_headers", &config.tables.excluded_headers);

    for name in &config.tables.known_headers {
        if name.contains('-') {
            errors.push(ValidationError::HyphenatedKnownHeader(name.clone()));
        }
    }
    for name in &config.tables.excluded_headers {
        if name.contains(':') {
            errors.push(ValidationError::ColonInExcludedHeader(name.clone()));
        }
    }

    if !is_identifier(&config.output.request_variable) {
        errors.push(ValidationError::InvalidIdentifier {
            field: "request_variable",
            value: config.output.request_variable.clone(),
        });
    }
    if !config.output.header_enum.split('.').all(is_identifier) {
        errors.push(ValidationError::InvalidIdentifier {
            field: "header_enum",
            value: config.output.header_enum.clone(),
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_table(errors: &mut Vec<ValidationError>, table: &'static str, names: &[String]) {
    let mut seen = HashSet::new();
    for (index, name) in names.iter().enumerate() {
        if name.is_empty() {
            errors.push(ValidationError::EmptyEntry { table, index });
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateEntry {
                table,
                name: name.clone(),
            });
        }
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
