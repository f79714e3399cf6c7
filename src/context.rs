use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// Where the scratch dir lives when no override is set. Relative to the
/// working directory the test runner starts in.
pub const DEFAULT_SCRATCH_ROOT: &str = "tests/example_data/tmp";

/// How long [`crate::file::remove_all`] waits for a removal to become
/// observable before giving up. Tunable because slow filesystems (NFS
/// in particular) can lag behind the remove call.
pub const DEFAULT_REMOVE_TIMEOUT: Duration = Duration::from_secs(10);

static SCRATCH_ROOT: Mutex<Option<PathBuf>> = Mutex::new(None);
static REMOVE_TIMEOUT: Mutex<Option<Duration>> = Mutex::new(None);

pub fn get_scratch_root() -> PathBuf {
    SCRATCH_ROOT
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRATCH_ROOT))
}

pub fn set_scratch_root(root: PathBuf) {
    *SCRATCH_ROOT.lock().unwrap() = Some(root);
}

pub fn get_remove_timeout() -> Duration {
    REMOVE_TIMEOUT
        .lock()
        .unwrap()
        .unwrap_or(DEFAULT_REMOVE_TIMEOUT)
}

pub fn set_remove_timeout(timeout: Duration) {
    *REMOVE_TIMEOUT.lock().unwrap() = Some(timeout);
}
