use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes an executable shell script into `dir` and returns its path.
pub fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, script).expect("Failed to write stub script");

    let mut perms = fs::metadata(&path)
        .expect("Failed to stat stub script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to mark stub script executable");

    path
}
