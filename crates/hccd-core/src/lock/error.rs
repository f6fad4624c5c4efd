//! Lock errors

use std::fmt;
use std::path::PathBuf;

/// Failure to take the sheet lock
#[derive(Debug)]
pub enum LockError {
    /// Another run held the lock for longer than the timeout
    Timeout {
        path: PathBuf,
        /// What the lock protects, for the message
        description: String,
    },
    /// The lock file could not be opened or locked
    Io {
        source: std::io::Error,
        path: PathBuf,
        operation: String,
    },
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Timeout { path, description } => write!(
                f,
                "Timed out waiting for lock on {} ({}); is another run still writing?",
                path.display(),
                description
            ),
            LockError::Io {
                source,
                path,
                operation,
            } => write!(f, "Failed to {} {}: {}", operation, path.display(), source),
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LockError::Timeout { .. } => None,
            LockError::Io { source, .. } => Some(source),
        }
    }
}
