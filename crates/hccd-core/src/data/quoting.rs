//! Quote structure check run before the CSV reader
//!
//! The csv crate recovers from broken quoting instead of failing: a quoted
//! field left open swallows the rest of the file, and text after a closing
//! quote is glued onto the field. Both are rejected here.

use crate::error::{HccdError, Result};

const QUOTE: u8 = b'"';

#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldState {
    /// At the first byte of a field
    Start,
    Unquoted,
    /// Inside a quoted field opened on `line`
    Quoted { line: usize },
    /// Seen a `"` inside a quoted field: an escaped quote or the closing one
    QuoteInQuoted { line: usize },
}

/// Fail with [`HccdError::MalformedData`] on an unterminated quoted field or
/// on characters between a closing quote and the next delimiter
pub(super) fn check_quoting(bytes: &[u8], delimiter: u8) -> Result<()> {
    let mut state = FieldState::Start;
    let mut line = 1;

    for &byte in bytes {
        let ends_field = byte == delimiter || byte == b'\n' || byte == b'\r';

        state = match state {
            FieldState::Start if byte == QUOTE => FieldState::Quoted { line },
            FieldState::Start | FieldState::Unquoted if ends_field => FieldState::Start,
            FieldState::Start | FieldState::Unquoted => FieldState::Unquoted,
            FieldState::Quoted { line: open } if byte == QUOTE => {
                FieldState::QuoteInQuoted { line: open }
            }
            FieldState::Quoted { .. } => state,
            FieldState::QuoteInQuoted { line: open } if byte == QUOTE => {
                FieldState::Quoted { line: open }
            }
            FieldState::QuoteInQuoted { .. } if ends_field => FieldState::Start,
            FieldState::QuoteInQuoted { .. } => {
                return Err(HccdError::MalformedData(format!(
                    "line {}: invalid character '{}' between closing quote and delimiter",
                    line,
                    char::from(byte).escape_default()
                )));
            }
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    match state {
        FieldState::Quoted { line: open } => Err(HccdError::MalformedData(format!(
            "line {}: end of file reached before quoted field was closed",
            open
        ))),
        _ => Ok(()),
    }
}
