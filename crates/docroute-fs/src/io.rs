//! Atomic I/O operations with file locking

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::{Error, Result};

/// Distinguishes temp files of writers within one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Tuning knobs for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Flush file contents to disk before the rename.
    pub enable_fsync: bool,
    /// How long to keep retrying a contended advisory lock.
    pub lock_timeout: Duration,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            enable_fsync: true,
            lock_timeout: Duration::from_secs(5),
        }
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Writers to the same target serialize on an advisory lock held on a
/// sidecar `.<name>.lock` file next to it, retried with exponential
/// backoff until `config.lock_timeout` elapses. Each writer fills its own
/// temp file, and the last writer to take the lock wins.
///
/// `path` is used exactly as given. Pass the `PathBuf` returned by the
/// resolver, not a re-normalized copy of it.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.as_ref();
    let file_name = native_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let lock_path = lock_path_for(native_path);
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::io(&lock_path, e))?;

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_elapsed_time(Some(config.lock_timeout))
        .build();
    backoff::retry(policy, || {
        FileExt::try_lock_exclusive(&lock_file).map_err(backoff::Error::transient)
    })
    .map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    let written = replace_contents(native_path, &file_name, content, config);
    let unlocked = FileExt::unlock(&lock_file).map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    });
    written?;
    unlocked?;

    tracing::trace!(path = %native_path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Sidecar file writers to `path` lock on.
pub fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".lock");
    path.with_file_name(name)
}

fn replace_contents(
    native_path: &Path,
    file_name: &str,
    content: &[u8],
    config: RobustnessConfig,
) -> Result<()> {
    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}-{}.tmp",
        file_name,
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let filled = temp_file.write_all(content).and_then(|()| {
        if config.enable_fsync {
            temp_file.sync_all()
        } else {
            Ok(())
        }
    });
    drop(temp_file);
    if let Err(e) = filled {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(native_path, e));
    }
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically with default robustness settings.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}
