//! Path utilities: expand `~` and prepare the directory a file will live in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `~/x` → `$HOME/x`; other paths are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Create the parent directory of `file` if it does not exist yet.
pub fn ensure_parent_dir(file: &Path) -> io::Result<()> {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
