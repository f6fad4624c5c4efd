//! Advisory lock serializing writes of one generated card sheet
//!
//! Two runs targeting the same `<base>-GENERATED.html` take an exclusive
//! fs2 lock on a sibling lock file, so one waits for the other instead of
//! both racing on the output.

mod error;

pub use error::LockError;

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};


const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(10);
const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);
const WAIT_NOTICE_THRESHOLD: Duration = Duration::from_secs(2);

/// RAII guard for a held lock
///
/// The lock is released when the guard drops and the file descriptor closes.
#[derive(Debug)]
pub struct LockGuard {
    _file: File,
    path: PathBuf,
}

impl LockGuard {
    /// Path of the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Acquire an exclusive lock on `lock_path`, retrying with exponential
/// backoff until `timeout` elapses
///
/// The lock file is created if missing and left in place afterwards.
///
/// # Errors
///
/// [`LockError::Timeout`] when another holder keeps the lock past `timeout`,
/// [`LockError::Io`] when the lock file cannot be opened or locked.
///
/// # Examples
///
/// ```no_run
/// use hccd_core::lock::acquire_lock;
/// use std::path::Path;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let guard = acquire_lock(Path::new("cards/.cards-GENERATED.lock"), Duration::from_secs(10), "cards")?;
/// // write the sheet
/// drop(guard);
/// # Ok(())
/// # }
/// ```
pub fn acquire_lock(
    lock_path: &Path,
    timeout: Duration,
    description: &str,
) -> Result<LockGuard, LockError> {
    let io_error = |source: io::Error, operation: &str| LockError::Io {
        source,
        path: lock_path.to_path_buf(),
        operation: operation.to_string(),
    };

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| io_error(e, "open lock file"))?;

    let start = Instant::now();
    let mut retry_delay = INITIAL_RETRY_DELAY;
    let mut notice_shown = false;

    loop {
        match file.try_lock_exclusive() {
            Ok(()) => {
                tracing::trace!(path = %lock_path.display(), "lock acquired");
                return Ok(LockGuard {
                    _file: file,
                    path: lock_path.to_path_buf(),
                });
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                let elapsed = start.elapsed();
                if elapsed >= timeout {
                    return Err(LockError::Timeout {
                        path: lock_path.to_path_buf(),
                        description: description.to_string(),
                    });
                }

                if !notice_shown && elapsed >= WAIT_NOTICE_THRESHOLD {
                    tracing::warn!(
                        path = %lock_path.display(),
                        "waiting for lock ({})",
                        description
                    );
                    notice_shown = true;
                }

                thread::sleep(retry_delay.min(timeout - elapsed));
                retry_delay = (retry_delay * 2).min(MAX_RETRY_DELAY);
            }
            Err(e) => return Err(io_error(e, "acquire lock")),
        }
    }
}
