//! Python virtual environment detection.
//!
//! A directory is a virtual environment when it holds a `pyvenv.cfg` file
//! next to either the Windows layout (`Lib`, `Scripts`) or the Unix layout
//! (`bin`, `lib`, `lib64`). The configuration file is never parsed.

use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Directories created by `venv` on Windows.
pub const WINDOWS_DIRS: &[&str] = &["Lib", "Scripts"];

/// Directories created by `venv` on Unix-like systems.
pub const UNIX_DIRS: &[&str] = &["bin", "lib", "lib64"];

/// Marker file written by `venv` into every environment root.
pub const CONFIG_FILE: &str = "pyvenv.cfg";

/// Which directory signature matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Windows,
    Unix,
}

/// Check if a directory is a Python virtual environment.
///
/// Filesystem errors count as "not an environment"; they are logged so
/// permission problems do not vanish silently.
pub fn is_virtual_env(dir: &Path) -> bool {
    match detect_layout(dir) {
        Ok(layout) => layout.is_some(),
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "Could not inspect directory");
            false
        }
    }
}

/// Detect which virtual environment layout a directory has, if any.
///
/// Missing entries are not errors. Any other failure to stat the directory
/// or one of its markers is returned to the caller.
pub fn detect_layout(dir: &Path) -> io::Result<Option<Layout>> {
    match entry_type(dir)? {
        Some(file_type) if file_type.is_dir() => {}
        _ => return Ok(None),
    }

    if !has_file(dir, CONFIG_FILE)? {
        return Ok(None);
    }

    if has_all_dirs(dir, WINDOWS_DIRS)? {
        Ok(Some(Layout::Windows))
    } else if has_all_dirs(dir, UNIX_DIRS)? {
        Ok(Some(Layout::Unix))
    } else {
        Ok(None)
    }
}

// --- Helper Functions ---

/// Follows symlinks: `lib64` is usually a link to `lib`.
fn entry_type(path: &Path) -> io::Result<Option<fs::FileType>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.file_type())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

fn has_file(base_dir: &Path, file_name: &str) -> io::Result<bool> {
    Ok(entry_type(&base_dir.join(file_name))?.is_some_and(|t| t.is_file()))
}

fn has_all_dirs(base_dir: &Path, dir_names: &[&str]) -> io::Result<bool> {
    for name in dir_names {
        if !entry_type(&base_dir.join(name))?.is_some_and(|t| t.is_dir()) {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Test fixture for creating temporary environment directories
    struct VenvTestFixture {
        _temp_dir: TempDir,
        env_dir: std::path::PathBuf,
    }

    impl VenvTestFixture {
        fn new() -> Result<Self, Box<dyn std::error::Error>> {
            let temp_dir = TempDir::new()?;
            let env_dir = temp_dir.path().join("venv");
            fs::create_dir_all(&env_dir)?;

            Ok(Self {
                _temp_dir: temp_dir,
                env_dir,
            })
        }

        fn with_layout(entries: &[&str]) -> Result<Self, Box<dyn std::error::Error>> {
            let fixture = Self::new()?;
            for entry in entries {
                if *entry == CONFIG_FILE {
                    fixture.create_file(entry, "home = /usr/bin\n")?;
                } else {
                    fixture.create_dir(entry)?;
                }
            }
            Ok(fixture)
        }

        fn create_file(&self, name: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
            fs::write(self.env_dir.join(name), content)?;
            Ok(())
        }

        fn create_dir(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
            fs::create_dir_all(self.env_dir.join(name))?;
            Ok(())
        }

        fn path(&self) -> &Path {
            &self.env_dir
        }
    }

    #[test]
    fn test_unix_layout_detection() {
        let fixture = VenvTestFixture::with_layout(&["bin", "lib", "lib64", CONFIG_FILE]).unwrap();

        assert!(is_virtual_env(fixture.path()));
        assert_eq!(detect_layout(fixture.path()).unwrap(), Some(Layout::Unix));
    }

    #[test]
    fn test_windows_layout_detection() {
        let fixture = VenvTestFixture::with_layout(&["Lib", "Scripts", CONFIG_FILE]).unwrap();

        assert!(is_virtual_env(fixture.path()));
        assert_eq!(
            detect_layout(fixture.path()).unwrap(),
            Some(Layout::Windows)
        );
    }

    #[test]
    fn test_each_unix_marker_is_required() {
        let full = ["bin", "lib", "lib64", CONFIG_FILE];
        for missing in full {
            let entries: Vec<&str> = full.iter().copied().filter(|e| *e != missing).collect();
            let fixture = VenvTestFixture::with_layout(&entries).unwrap();
            assert!(
                !is_virtual_env(fixture.path()),
                "detected without '{}'",
                missing
            );
        }
    }

    #[test]
    fn test_each_windows_marker_is_required() {
        let full = ["Lib", "Scripts", CONFIG_FILE];
        for missing in full {
            let entries: Vec<&str> = full.iter().copied().filter(|e| *e != missing).collect();
            let fixture = VenvTestFixture::with_layout(&entries).unwrap();
            assert!(
                !is_virtual_env(fixture.path()),
                "detected without '{}'",
                missing
            );
        }
    }

    #[test]
    fn test_config_as_directory_is_rejected() {
        let fixture = VenvTestFixture::with_layout(&["bin", "lib", "lib64"]).unwrap();
        fixture.create_dir(CONFIG_FILE).unwrap();

        assert!(!is_virtual_env(fixture.path()));
    }

    #[test]
    fn test_marker_as_file_is_rejected() {
        let fixture = VenvTestFixture::with_layout(&["bin", "lib", CONFIG_FILE]).unwrap();
        fixture.create_file("lib64", "").unwrap();

        assert!(!is_virtual_env(fixture.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_lib64_symlink_counts_as_directory() {
        let fixture = VenvTestFixture::with_layout(&["bin", "lib", CONFIG_FILE]).unwrap();
        std::os::unix::fs::symlink("lib", fixture.path().join("lib64")).unwrap();

        assert_eq!(detect_layout(fixture.path()).unwrap(), Some(Layout::Unix));
    }

    #[test]
    fn test_empty_directory() {
        let fixture = VenvTestFixture::new().unwrap();

        assert!(!is_virtual_env(fixture.path()));
        assert_eq!(detect_layout(fixture.path()).unwrap(), None);
    }

    #[test]
    fn test_missing_path_handling() {
        assert!(!is_virtual_env(Path::new("/nonexistent/path/venv")));
        assert_eq!(detect_layout(Path::new("/nonexistent/path/venv")).unwrap(), None);
    }

    #[test]
    fn test_regular_file_is_not_an_environment() {
        let fixture = VenvTestFixture::new().unwrap();
        fixture.create_file("notes.txt", "hello").unwrap();

        assert!(!is_virtual_env(&fixture.path().join("notes.txt")));
    }
}
