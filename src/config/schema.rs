//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the generator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::translate::statement::{DEFAULT_HEADER_ENUM, DEFAULT_REQUEST_VARIABLE};
use crate::translate::{
    HeaderLineTranslator, HeaderTables, StatementStyle, EXCLUDED_HEADERS, KNOWN_HEADERS,
};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CodegenConfig {
    /// Known and excluded header tables.
    pub tables: TablesConfig,

    /// Generated code and rendering settings.
    pub output: OutputConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl CodegenConfig {
    /// Build a translator from the configured tables and style.
    pub fn translator(&self) -> HeaderLineTranslator {
        HeaderLineTranslator::new(self.tables.build(), self.output.style())
    }
}

/// Header table configuration. Each list replaces the built-in one.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TablesConfig {
    /// Canonical identifiers, compared against hyphen-stripped names.
    pub known_headers: Vec<String>,

    /// Raw header names that are always dropped.
    pub excluded_headers: Vec<String>,
}

impl TablesConfig {
    pub fn build(&self) -> HeaderTables {
        HeaderTables::new(&self.known_headers, &self.excluded_headers)
    }
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            known_headers: KNOWN_HEADERS.iter().map(|h| h.to_string()).collect(),
            excluded_headers: EXCLUDED_HEADERS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Variable the statements are called on.
    pub request_variable: String,

    /// Type holding the symbolic header constants.
    pub header_enum: String,

    /// Output format.
    pub format: OutputFormat,

    /// Line terminator for text output.
    pub line_ending: LineEnding,
}

impl OutputConfig {
    pub fn style(&self) -> StatementStyle {
        StatementStyle {
            request_variable: self.request_variable.clone(),
            header_enum: self.header_enum.clone(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            request_variable: DEFAULT_REQUEST_VARIABLE.to_string(),
            header_enum: DEFAULT_HEADER_ENUM.to_string(),
            format: OutputFormat::Text,
            line_ending: LineEnding::Lf,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One statement per line.
    #[default]
    Text,
    /// A single JSON object with statements and discard counts.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error, off).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodegenConfig::default();
        assert_eq!(config.tables.known_headers.len(), KNOWN_HEADERS.len());
        assert_eq!(config.tables.excluded_headers, vec!["Cookie", "Content-Length", "Host"]);
        assert_eq!(config.output.style(), StatementStyle::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.line_ending.as_str(), "\n");
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CodegenConfig = toml::from_str(
            r#"
            [output]
            request_variable = "req"
            line_ending = "crlf"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.request_variable, "req");
        assert_eq!(config.output.header_enum, "HttpHeader");
        assert_eq!(config.output.line_ending, LineEnding::Crlf);
        assert_eq!(config.tables.excluded_headers.len(), 3);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_configured_translator() {
        let config: CodegenConfig = toml::from_str(
            r#"
            [tables]
            known_headers = ["Accept"]
            excluded_headers = []
            "#,
        )
        .unwrap();

        let output = config.translator().translate("Accept: */*\nCookie: a=1\nUser-Agent: x");
        assert_eq!(
            output,
            vec![
                "httpRequest.AddHeader(HttpHeader.Accept,\"*/*\");",
                "httpRequest.AddHeader(\"Cookie\",\"a=1\");",
                "httpRequest.AddHeader(\"User-Agent\",\"x\");",
            ]
        );
    }
}
