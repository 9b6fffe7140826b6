use std::path::PathBuf;
use tempfile::TempDir;

/// Writes fixture files into a scratch directory.
pub trait WriteFixture {
    /// Writes `contents` to `relative_path`, creating parent directories.
    fn write(&self, relative_path: &str, contents: &str) -> PathBuf;
}

impl WriteFixture for TempDir {
    fn write(&self, relative_path: &str, contents: &str) -> PathBuf {
        let path = self.path().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}
