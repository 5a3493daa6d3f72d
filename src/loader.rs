//! Loading atlas documents
//!
//! The merge itself never touches the filesystem; documents arrive
//! through a [`DocumentLoader`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collect::{parse_document, AtlasDocument};
use crate::error::MergeError;

/// Source of atlas documents
pub trait DocumentLoader {
    /// Load and parse the document at `path`
    fn load(&self, path: &Path) -> Result<AtlasDocument, MergeError>;
}

/// Loads documents from local files
///
/// Relative paths are resolved against `base_path`.
#[derive(Debug, Clone)]
pub struct FilesystemLoader {
    base_path: PathBuf,
}

impl FilesystemLoader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolve a path against the loader's base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

impl Default for FilesystemLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DocumentLoader for FilesystemLoader {
    fn load(&self, path: &Path) -> Result<AtlasDocument, MergeError> {
        let full_path = self.resolve(path);
        debug!(path = %full_path.display(), "Loading atlas document");

        let content = fs::read_to_string(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MergeError::InputNotFound {
                path: full_path.clone(),
            },
            _ => MergeError::LoadError {
                path: full_path.clone(),
                reason: e.to_string(),
            },
        })?;

        parse_document(&content, &full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let loader = FilesystemLoader::new("/data/atlas");
        assert_eq!(
            loader.resolve(Path::new("imagery-atlas-data.json")),
            PathBuf::from("/data/atlas/imagery-atlas-data.json")
        );
        assert_eq!(
            loader.resolve(Path::new("/tmp/other.json")),
            PathBuf::from("/tmp/other.json")
        );
    }

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("atlas.json"),
            r#"{"datasets": [{"id": "naip", "type": "aerial"}], "platforms": []}"#,
        )
        .unwrap();

        let loader = FilesystemLoader::new(dir.path());
        let doc = loader.load(Path::new("atlas.json")).unwrap();
        assert_eq!(doc.datasets.len(), 1);
        assert!(doc.platforms.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FilesystemLoader::new(dir.path());

        match loader.load(Path::new("missing.json")) {
            Err(MergeError::InputNotFound { path }) => {
                assert_eq!(path, dir.path().join("missing.json"));
            }
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "not json").unwrap();

        let loader = FilesystemLoader::new(dir.path());
        let result = loader.load(Path::new("bad.json"));
        assert!(matches!(result, Err(MergeError::InvalidDocument { .. })));
    }
}
