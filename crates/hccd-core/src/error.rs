use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HccdError {
    // Input errors
    #[error("MISSING_INPUT: '{}' does not exist", path.display())]
    MissingInput { path: PathBuf },

    #[error("MALFORMED_DATA: {0}")]
    MalformedData(String),

    // Template errors
    #[error("TEMPLATE_SYNTAX: {0}")]
    TemplateSyntax(#[from] crate::template::TemplateError),

    #[error("CARD_FRAGMENT_NOT_FOUND: no element with class 'card' in '{}'", path.display())]
    CardFragmentNotFound { path: PathBuf },

    // Project errors
    #[error("PROJECT_INVALID_STRUCTURE: {0}")]
    ProjectInvalidStructure(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Lock errors
    #[error("LOCK_FAILED: {0}")]
    LockFailed(#[from] crate::lock::LockError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl HccdError {
    pub(crate) fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        HccdError::ConfigInvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for HccdError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => HccdError::IoError(io),
            _ => HccdError::MalformedData(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, HccdError>;
