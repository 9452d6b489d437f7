//! Advisory store lock
//!
//! A lock file created with `create_new` marks a read-modify-write cycle in
//! progress. Writers in other processes wait for it to disappear, up to a
//! timeout. The file is removed when the guard drops.
//!
//! A holder that dies without dropping its guard leaves the file behind. Such
//! a lock is treated as stale, and removed, once it is older than
//! `STALE_AFTER` or once the pid recorded in it no longer runs.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use tracing::{debug, warn};

use crate::error::TrackerError;

const RETRY_INTERVAL: Duration = Duration::from_millis(25);

/// Age after which a lock file is considered abandoned
pub const STALE_AFTER: Duration = Duration::from_secs(30);

/// Guard for an acquired store lock
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl StoreLock {
    /// Acquire the lock at `path`, waiting at most `timeout`
    pub fn acquire(path: &Path, timeout: Duration) -> Result<Self, TrackerError> {
        let deadline = Instant::now() + timeout;

        loop {
            match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(mut file) => {
                    // Owner pid lets other processes detect a dead holder
                    let _ = writeln!(file, "{}", std::process::id());
                    debug!(path = %path.display(), "acquired store lock");
                    return Ok(Self {
                        path: path.to_path_buf(),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if let Some(reason) = stale_reason(path) {
                        warn!(path = %path.display(), reason, "removing stale store lock");
                        let _ = fs::remove_file(path);
                        continue;
                    }
                    if Instant::now() >= deadline {
                        warn!(path = %path.display(), ?timeout, "timed out waiting for store lock");
                        return Err(TrackerError::Persistence(format!(
                            "Timed out after {:?} waiting for lock {} (remove it if no other process is running)",
                            timeout,
                            path.display()
                        )));
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => {
                    return Err(TrackerError::Persistence(format!(
                        "Failed to create lock {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to release store lock");
        }
    }
}

/// Why the existing lock at `path` looks abandoned, if it does
fn stale_reason(path: &Path) -> Option<&'static str> {
    let age = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|mtime| SystemTime::now().duration_since(mtime).ok());
    if age.is_some_and(|age| age > STALE_AFTER) {
        return Some("lock file too old");
    }

    let holder = fs::read_to_string(path)
        .ok()
        .and_then(|contents| contents.trim().parse::<u32>().ok())?;
    if holder != std::process::id() && !process_is_running(holder) {
        return Some("holder process is gone");
    }
    None
}

#[cfg(target_os = "linux")]
fn process_is_running(pid: u32) -> bool {
    Path::new("/proc").join(pid.to_string()).exists()
}

// No cheap liveness probe elsewhere; rely on the age check
#[cfg(not(target_os = "linux"))]
fn process_is_running(_pid: u32) -> bool {
    true
}
