//! Generated code statements.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REQUEST_VARIABLE: &str = "httpRequest";
pub const DEFAULT_HEADER_ENUM: &str = "HttpHeader";

/// Names used when rendering statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatementStyle {
    /// Variable holding the request object (e.g., "httpRequest").
    pub request_variable: String,

    /// Type exposing the symbolic header constants (e.g., "HttpHeader").
    pub header_enum: String,
}

impl Default for StatementStyle {
    fn default() -> Self {
        Self {
            request_variable: DEFAULT_REQUEST_VARIABLE.to_string(),
            header_enum: DEFAULT_HEADER_ENUM.to_string(),
        }
    }
}

/// One header assignment, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStatement {
    /// Header recognised by the known table; rendered through the header enum.
    Known { identifier: String, value: String },
    /// Any other header; rendered with its original name quoted.
    Custom { name: String, value: String },
}

impl OutputStatement {
    pub fn value(&self) -> &str {
        match self {
            OutputStatement::Known { value, .. } | OutputStatement::Custom { value, .. } => value,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, OutputStatement::Known { .. })
    }

    /// Render with the given style.
    pub fn render(&self, style: &StatementStyle) -> String {
        Rendered {
            statement: self,
            style,
        }
        .to_string()
    }
}

struct Rendered<'a> {
    statement: &'a OutputStatement,
    style: &'a StatementStyle,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are emitted verbatim, without escaping.
        match self.statement {
            OutputStatement::Known { identifier, value } => write!(
                f,
                "{}.AddHeader({}.{},\"{}\");",
                self.style.request_variable, self.style.header_enum, identifier, value
            ),
            OutputStatement::Custom { name, value } => write!(
                f,
                "{}.AddHeader(\"{}\",\"{}\");",
                self.style.request_variable, name, value
            ),
        }
    }
}
