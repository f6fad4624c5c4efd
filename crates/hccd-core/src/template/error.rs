//! Template error types

use std::fmt;

/// Template compile errors
///
/// Rendering itself never fails; only malformed template syntax is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed tag syntax
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// `{{#key}}` or `{{^key}}` without `{{/key}}`
    UnclosedSection {
        /// The section key
        key: String,
        /// Line of the opening tag
        line: usize,
    },

    /// `{{/key}}` with no open section
    UnexpectedClose {
        /// The closing key
        key: String,
        /// Line of the closing tag
        line: usize,
    },

    /// `{{/key}}` closing a different section than the innermost open one
    MismatchedClose {
        /// Key of the innermost open section
        expected: String,
        /// Key found in the closing tag
        found: String,
        /// Line of the closing tag
        line: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedSyntax { message, line } => {
                write!(f, "Malformed syntax at line {}: {}", line, message)
            }
            TemplateError::UnclosedSection { key, line } => {
                write!(
                    f,
                    "Unclosed section '{}' opened at line {}. Add {{{{/{}}}}}",
                    key, line, key
                )
            }
            TemplateError::UnexpectedClose { key, line } => {
                write!(
                    f,
                    "Unexpected {{{{/{}}}}} at line {} without matching {{{{#{}}}}}",
                    key, line, key
                )
            }
            TemplateError::MismatchedClose {
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Section '{}' closed by {{{{/{}}}}} at line {}",
                    expected, found, line
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
