use std::env;
use std::path::{Path, PathBuf};

/// Directory two levels above the running executable.
///
/// For a launcher at `C:\foo\bin\java.exe` this yields `C:\foo`: one
/// segment stripped for the executable name, one for its `bin`-style
/// directory. `None` when the executable sits too close to a filesystem
/// root to strip both.
pub fn application_home() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    home_from_exe(&exe)
}

/// Segment-stripping core of [`application_home`], separated so the
/// boundary cases can be checked against arbitrary paths.
pub fn home_from_exe(exe: &Path) -> Option<PathBuf> {
    let bin_dir = exe.parent()?;
    let home = bin_dir.parent()?;
    // Landing on a root (or an empty relative prefix) means the exe had
    // no real bin directory above it.
    if home.as_os_str().is_empty() || home.parent().is_none() {
        return None;
    }
    Some(home.to_path_buf())
}
