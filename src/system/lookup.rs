// src/system/lookup.rs

use std::env;
use std::path::{Path, PathBuf};

/// Resolves a bare program name to an executable on disk.
pub trait ExecutableLookup {
    /// Returns the full path of `name` if it resolves to an executable.
    fn find(&self, name: &str) -> Option<PathBuf>;
}

/// Searches a list of directories in order, like a shell resolving `PATH`.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    dirs: Vec<PathBuf>,
}

impl PathSearch {
    /// Builds a lookup over the current process's `PATH`.
    pub fn from_env() -> Self {
        let dirs = env::var_os("PATH")
            .map(|path_var| env::split_paths(&path_var).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    /// Builds a lookup over an explicit directory list.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl ExecutableLookup for PathSearch {
    fn find(&self, name: &str) -> Option<PathBuf> {
        // Paths with a separator are checked as-is; bare names need a directory to search.
        let is_path = Path::new(name).components().count() > 1;
        if self.dirs.is_empty() && !is_path {
            return None;
        }
        let search_path = env::join_paths(&self.dirs).ok()?;
        let cwd = env::current_dir().unwrap_or_default();
        match which::which_in(name, Some(search_path), cwd) {
            Ok(path) => Some(path),
            Err(e) => {
                log::trace!("'{}' not resolved: {}", name, e);
                None
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").expect("write fixture");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod fixture");
        path
    }

    #[test]
    fn test_find_returns_first_directory_in_order() {
        let first = TempDir::new().expect("tempdir");
        let second = TempDir::new().expect("tempdir");
        touch(second.path(), "kitty", 0o755);
        let expected = touch(first.path(), "kitty", 0o755);

        let lookup = PathSearch::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(lookup.find("kitty"), Some(expected));
    }

    #[test]
    fn test_find_skips_non_executable_files_and_directories() {
        let dir = TempDir::new().expect("tempdir");
        touch(dir.path(), "xterm", 0o644);
        fs::create_dir(dir.path().join("konsole")).expect("mkdir");

        let lookup = PathSearch::new(vec![dir.path().to_path_buf()]);

        assert_eq!(lookup.find("xterm"), None);
        assert_eq!(lookup.find("konsole"), None);
    }

    #[test]
    fn test_find_accepts_explicit_paths() {
        let dir = TempDir::new().expect("tempdir");
        let path = touch(dir.path(), "alacritty", 0o700);

        let lookup = PathSearch::default();

        assert_eq!(lookup.find(&path.display().to_string()), Some(path));
    }

    #[test]
    fn test_find_bare_name_without_search_dirs_is_none() {
        let lookup = PathSearch::default();

        assert_eq!(lookup.find("sh"), None);
    }
}
