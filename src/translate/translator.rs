//! The header line translator.

use serde::Serialize;

use crate::translate::line::{split_lines, HeaderLine};
use crate::translate::statement::{OutputStatement, StatementStyle};
use crate::translate::tables::HeaderTables;

/// Counts of non-empty input lines that produced no statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscardReport {
    /// Lines without exactly one `:`.
    pub malformed: usize,
    /// Lines whose name is in the excluded set.
    pub excluded: usize,
}

impl DiscardReport {
    pub fn total(&self) -> usize {
        self.malformed + self.excluded
    }
}

/// Rendered statements plus discard counts for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub statements: Vec<String>,
    pub discarded: DiscardReport,
}

/// Turns raw header text into `AddHeader` statements.
///
/// Stateless apart from its immutable tables and style; one instance can
/// serve any number of calls, from any thread.
#[derive(Debug, Clone, Default)]
pub struct HeaderLineTranslator {
    tables: HeaderTables,
    style: StatementStyle,
}

enum Classified<'a> {
    Statement(OutputStatement),
    Malformed(&'a str),
    Excluded(&'a str),
}

impl HeaderLineTranslator {
    pub fn new(tables: HeaderTables, style: StatementStyle) -> Self {
        Self { tables, style }
    }

    pub fn tables(&self) -> &HeaderTables {
        &self.tables
    }

    pub fn style(&self) -> &StatementStyle {
        &self.style
    }

    /// Translate raw text into rendered statements, in input order.
    pub fn translate(&self, raw: &str) -> Vec<String> {
        self.translate_with_report(raw).statements
    }

    /// Translate raw text into typed statements, in input order.
    pub fn translate_statements(&self, raw: &str) -> Vec<OutputStatement> {
        split_lines(raw)
            .filter_map(|line| match self.classify(line) {
                Classified::Statement(statement) => Some(statement),
                _ => None,
            })
            .collect()
    }

    /// Translate raw text and count the lines that were dropped.
    pub fn translate_with_report(&self, raw: &str) -> Translation {
        let mut translation = Translation::default();

        for line in split_lines(raw) {
            match self.classify(line) {
                Classified::Statement(statement) => {
                    tracing::trace!(
                        known = statement.is_known(),
                        value = statement.value(),
                        "Emitting statement"
                    );
                    translation.statements.push(statement.render(&self.style));
                }
                Classified::Malformed(line) => {
                    tracing::debug!(line, "Skipping line without exactly one colon");
                    translation.discarded.malformed += 1;
                }
                Classified::Excluded(name) => {
                    tracing::debug!(name, "Skipping excluded header");
                    translation.discarded.excluded += 1;
                }
            }
        }

        tracing::debug!(
            statements = translation.statements.len(),
            malformed = translation.discarded.malformed,
            excluded = translation.discarded.excluded,
            "Translated header text"
        );

        translation
    }

    fn classify<'a>(&self, line: &'a str) -> Classified<'a> {
        let Some(header) = HeaderLine::parse(line) else {
            return Classified::Malformed(line);
        };

        // Exclusion compares the raw name; recognition compares the stripped one.
        if self.tables.is_excluded(header.name) {
            return Classified::Excluded(header.name);
        }

        let stripped = header.stripped_name();
        let value = header.value.to_string();
        if self.tables.is_known(&stripped) {
            Classified::Statement(OutputStatement::Known {
                identifier: stripped,
                value,
            })
        } else {
            Classified::Statement(OutputStatement::Custom {
                name: header.name.to_string(),
                value,
            })
        }
    }
}

/// Translate with the built-in tables and default style.
pub fn translate(raw: &str) -> Vec<String> {
    HeaderLineTranslator::default().translate(raw)
}
