use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::{ScratchError, ScratchResult, context};

/// How often [`remove_all`] re-checks for the path after removing it.
pub const REMOVE_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Creates `path` as an empty directory, along with any missing parents.
///
/// The leaf itself must not already exist; callers are expected to have
/// removed it first (see [`remove_all`]). An existing leaf fails with the
/// underlying `AlreadyExists` io error.
pub fn mkdir<P: AsRef<Path>>(path: P) -> ScratchResult<()> {
    let path = path.as_ref();
    debug!("mkdir: {:?}", path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| ScratchError::FileError(err, parent.to_path_buf()))?;
    }
    fs::create_dir(path).map_err(|err| ScratchError::FileError(err, path.to_path_buf()))?;
    Ok(())
}

/// Removes `path` and everything beneath it, then waits for the removal to
/// become observable. A missing path is a no-op.
///
/// Some filesystems complete removals asynchronously, so an existence check
/// right after `remove_dir_all` can still see the path. This polls at
/// [`REMOVE_POLL_INTERVAL`] until the path is gone or the configured timeout
/// elapses, and fails with [`ScratchError::RemoveTimeout`] in the latter
/// case. The timeout signals an environment problem and is not retried.
pub fn remove_all<P: AsRef<Path>>(path: P) -> ScratchResult<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(());
    }
    debug!("remove_all: {:?}", path);
    fs::remove_dir_all(path).map_err(|err| ScratchError::FileError(err, path.to_path_buf()))?;
    let timeout = context::get_remove_timeout();
    let mut waited = Duration::ZERO;
    while path.exists() {
        if waited >= timeout {
            return Err(ScratchError::RemoveTimeout {
                path: path.to_path_buf(),
                timeout,
            });
        }
        thread::sleep(REMOVE_POLL_INTERVAL.min(timeout - waited));
        waited += REMOVE_POLL_INTERVAL;
    }
    Ok(())
}
