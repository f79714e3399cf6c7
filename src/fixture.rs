use std::path::{Path, PathBuf};

use crate::{ScratchResult, context, file};

/// Removes any leftover scratch dir, then creates it fresh and empty.
///
/// Always removing first means calling this twice in a row never fails
/// with "already exists". Returns the scratch path.
pub fn setup() -> ScratchResult<PathBuf> {
    let root = context::get_scratch_root();
    file::remove_all(&root)?;
    file::mkdir(&root)?;
    Ok(root)
}

/// Removes the scratch dir, waiting for the removal to complete.
pub fn teardown() -> ScratchResult<()> {
    file::remove_all(context::get_scratch_root())
}

/// Scoped handle on the scratch dir: acquires on construction, tears down
/// on drop so the directory is released on every exit path, test panics
/// included.
///
/// The scratch path is a fixed, process-wide location (see
/// [`context::get_scratch_root`]); tests holding a `ScratchDir` must not
/// run concurrently against the same path.
pub struct ScratchDir {
    path: PathBuf,
    cleanup: bool,
}

impl ScratchDir {
    /// Fresh empty scratch dir now, removed on drop.
    pub fn init() -> ScratchResult<Self> {
        let path = setup()?;
        Ok(Self {
            path,
            cleanup: true,
        })
    }

    /// Removes any leftover scratch dir now and again on drop, without
    /// creating one.
    pub fn clean() -> ScratchResult<Self> {
        teardown()?;
        Ok(Self {
            path: context::get_scratch_root(),
            cleanup: true,
        })
    }

    /// No setup; only removes the scratch dir on drop.
    pub fn cleanup_on_drop() -> Self {
        Self {
            path: context::get_scratch_root(),
            cleanup: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Disarms the drop teardown, leaving the directory in place.
    pub fn keep(mut self) -> PathBuf {
        self.cleanup = false;
        self.path.clone()
    }

    /// Tears down now, surfacing the error instead of logging it from drop.
    pub fn close(mut self) -> ScratchResult<()> {
        self.cleanup = false;
        file::remove_all(&self.path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.cleanup {
            return;
        }
        if let Err(err) = file::remove_all(&self.path) {
            error!("failed to remove scratch dir: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use crate::test;

    use super::*;

    #[test_log::test]
    fn test_init_creates_fresh_dir_and_removes_on_drop() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        context::set_scratch_root(tmpdir.path().join("scratch"));
        let dir = ScratchDir::init().unwrap();
        assert!(dir.path().is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        fs::write(dir.path().join("artifact.txt"), "data").unwrap();
        let path = dir.path().to_path_buf();
        drop(dir);
        assert!(!path.exists());
    }

    #[test_log::test]
    fn test_setup_twice_does_not_fail() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        context::set_scratch_root(tmpdir.path().join("scratch"));
        let root = setup().unwrap();
        fs::write(root.join("leftover.txt"), "stale").unwrap();
        let root = setup().unwrap();
        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test_log::test]
    fn test_setup_then_teardown_leaves_nothing() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        let root = tmpdir.path().join("scratch");
        context::set_scratch_root(root.clone());
        setup().unwrap();
        teardown().unwrap();
        assert!(!root.exists());
    }

    #[test_log::test]
    fn test_clean_removes_leftovers_upfront() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        let root = tmpdir.path().join("scratch");
        context::set_scratch_root(root.clone());
        file::mkdir(root.join("stale")).unwrap();
        let dir = ScratchDir::clean().unwrap();
        assert!(!root.exists());
        drop(dir);
        assert!(!root.exists());
    }

    #[test_log::test]
    fn test_cleanup_on_drop_only_tears_down() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        let root = tmpdir.path().join("scratch");
        context::set_scratch_root(root.clone());
        let dir = ScratchDir::cleanup_on_drop();
        assert!(!root.exists());
        file::mkdir(&root).unwrap();
        drop(dir);
        assert!(!root.exists());
    }

    #[test_log::test]
    fn test_keep_leaves_dir_in_place() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        context::set_scratch_root(tmpdir.path().join("scratch"));
        let dir = ScratchDir::init().unwrap();
        let path = dir.keep();
        assert!(path.is_dir());
    }

    #[test_log::test]
    fn test_close_surfaces_result() {
        let _t = test::lock();
        let tmpdir = test::tempdir();
        let root = tmpdir.path().join("scratch");
        context::set_scratch_root(root.clone());
        let dir = ScratchDir::init().unwrap();
        dir.close().unwrap();
        assert!(!root.exists());
    }
}
