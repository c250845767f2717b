//! Filesystem abstraction for testability.
//!
//! The config loader, document loading and the link resolver go through this
//! trait so unit tests can run against an in-memory tree.

use std::path::{Path, PathBuf};

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Read raw file bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for site-audit.
    ///
    /// - Windows: `%APPDATA%\site-audit`
    /// - macOS: `~/Library/Application Support/site-audit`
    /// - Linux: `~/.config/site-audit` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;

    /// Canonicalize a path to its absolute, normalized form.
    ///
    /// # Errors
    /// Returns an error if the path cannot be canonicalized (e.g., it doesn't exist).
    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "site-audit")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        // dunce strips the `\\?\` prefix on Windows so reported paths stay readable
        dunce::canonicalize(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        (**self).read_to_string(path)
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        (**self).config_dir()
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::io::{Error, ErrorKind};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::FileSystem;
    use crate::path_utils::normalize_lexically;

    /// In-memory filesystem. Directories exist implicitly as ancestors of files.
    pub struct MockFileSystem {
        files: Mutex<HashMap<PathBuf, Vec<u8>>>,
        current_dir: PathBuf,
        config_dir: Option<PathBuf>,
    }

    impl Default for MockFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockFileSystem {
        pub fn new() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
                current_dir: PathBuf::from("/project"),
                config_dir: Some(PathBuf::from("/home/user/.config/site-audit")),
            }
        }

        pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
            self.with_bytes(path, content.as_bytes())
        }

        pub fn with_bytes(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(normalize_lexically(&path.into()), content.to_vec());
            self
        }

        pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
            self.current_dir = path.into();
            self
        }

        pub fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
            self.config_dir = path;
            self
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
            String::from_utf8(self.read(path)?)
                .map_err(|e| Error::new(ErrorKind::InvalidData, e))
        }

        fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
            let normalized = normalize_lexically(path);
            self.files
                .lock()
                .unwrap()
                .get(&normalized)
                .cloned()
                .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
        }

        fn exists(&self, path: &Path) -> bool {
            let normalized = normalize_lexically(path);
            self.is_file(&normalized) || self.is_dir(&normalized)
        }

        fn is_file(&self, path: &Path) -> bool {
            let normalized = normalize_lexically(path);
            self.files.lock().unwrap().contains_key(&normalized)
        }

        fn is_dir(&self, path: &Path) -> bool {
            let normalized = normalize_lexically(path);
            self.files
                .lock()
                .unwrap()
                .keys()
                .any(|file| *file != normalized && file.starts_with(&normalized))
        }

        fn current_dir(&self) -> std::io::Result<PathBuf> {
            Ok(self.current_dir.clone())
        }

        fn config_dir(&self) -> Option<PathBuf> {
            self.config_dir.clone()
        }

        fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
            let normalized = normalize_lexically(path);
            if self.exists(&normalized) {
                Ok(normalized)
            } else {
                Err(Error::new(ErrorKind::NotFound, "file not found"))
            }
        }
    }
}
