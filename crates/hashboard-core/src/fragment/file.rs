//! File-backed fragment accessor for native platforms.

use super::{FragmentAccessor, FragmentError, FragmentResult};
use std::fs;
use std::path::PathBuf;

/// Persists the raw fragment string to a single file.
///
/// Native builds have no address bar; this keeps state across runs the
/// way a bookmarked URL would. The file holds exactly what a browser
/// would report for `location.hash`.
pub struct FileAccessor {
    /// File the fragment string is stored in.
    path: PathBuf,
}

impl FileAccessor {
    /// Create a file accessor backed by the given path.
    ///
    /// Creates the parent directory if it doesn't exist. A missing
    /// file reads as an absent fragment.
    pub fn new(path: PathBuf) -> FragmentResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    FragmentError::Io(format!("Failed to create fragment directory: {}", e))
                })?;
            }
        }
        Ok(Self { path })
    }

    /// Create a file accessor in the default location.
    ///
    /// On Unix: `~/.local/share/hashboard/fragment`
    /// On Windows: `%LOCALAPPDATA%\hashboard\fragment`
    pub fn default_location() -> FragmentResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| FragmentError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("hashboard").join("fragment"))
    }

    /// Get the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl FragmentAccessor for FileAccessor {
    fn fragment(&self) -> FragmentResult<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(|e| {
            FragmentError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }

    fn set_fragment(&self, fragment: &str) -> FragmentResult<()> {
        let raw = if fragment.is_empty() {
            String::new()
        } else {
            format!("#{}", fragment)
        };
        fs::write(&self.path, raw).map_err(|e| {
            FragmentError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let accessor = FileAccessor::new(dir.path().join("fragment")).unwrap();
        assert_eq!(accessor.fragment().unwrap(), "");
    }

    #[test]
    fn test_set_and_read_back() {
        let dir = tempdir().unwrap();
        let accessor = FileAccessor::new(dir.path().join("fragment")).unwrap();

        accessor.set_fragment(r#"{"a":1}"#).unwrap();
        assert_eq!(accessor.fragment().unwrap(), r##"#{"a":1}"##);
    }

    #[test]
    fn test_survives_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fragment");

        let accessor = FileAccessor::new(path.clone()).unwrap();
        accessor.set_fragment("persisted").unwrap();
        drop(accessor);

        let reopened = FileAccessor::new(path).unwrap();
        assert_eq!(reopened.fragment().unwrap(), "#persisted");
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("fragment");

        let accessor = FileAccessor::new(path).unwrap();
        accessor.set_fragment("x").unwrap();
        assert_eq!(accessor.fragment().unwrap(), "#x");
    }
}
