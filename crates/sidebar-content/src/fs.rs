//! Filesystem content store.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::scanner::{DocumentFile, Scanner, join_id};
use crate::store::{ContentError, ContentStore};

/// Front matter fields that affect the document id.
#[derive(Deserialize)]
struct FrontMatter {
    id: Option<String>,
}

/// Content store backed by a directory of markdown files.
///
/// Scans `source_dir` recursively for `.md` and `.mdx` files. A document's
/// id is its relative path without extension, unless its YAML front matter
/// declares an `id`, which replaces the file name part.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use sidebar_content::{ContentStore, FsContentStore};
///
/// let store = FsContentStore::new(PathBuf::from("docs"));
/// let ids = store.document_ids()?;
/// assert!(ids.contains("Build/Chains/near"));
/// ```
pub struct FsContentStore {
    /// Root directory for documents.
    source_dir: PathBuf,
    /// Scanner for document discovery.
    scanner: Scanner,
    /// Regex for extracting a leading YAML front matter block.
    front_matter_regex: Regex,
}

impl FsContentStore {
    /// Create a store rooted at `source_dir`.
    ///
    /// # Panics
    ///
    /// Panics if the internal front matter regex fails to compile.
    /// This should never happen as the regex is a compile-time constant.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            scanner: Scanner::new(source_dir.clone()),
            source_dir,
            front_matter_regex: Regex::new(
                r"\A\x{FEFF}?---[ \t]*\r?\n((?s:.*?))\r?\n---[ \t]*(?:\r?\n|\z)",
            )
            .unwrap(),
        }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Resolve the final id of a scanned file.
    ///
    /// A file that is not valid UTF-8 keeps its path id, like one with
    /// malformed front matter.
    fn resolve_id(&self, file: &DocumentFile) -> Result<String, ContentError> {
        let content = match fs::read_to_string(&file.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(
                    file = %file.file_path.display(),
                    error = %e,
                    "Document is not valid UTF-8, using path id"
                );
                return Ok(file.path_id.clone());
            }
            Err(e) => return Err(ContentError::io(&file.file_path, e)),
        };
        Ok(self
            .front_matter_id(&content, &file.file_path)
            .map_or_else(|| file.path_id.clone(), |id| join_id(&file.dir_id, &id)))
    }

    /// Extract `id` from the front matter block, if any.
    ///
    /// Malformed front matter is logged and ignored.
    fn front_matter_id(&self, content: &str, file_path: &Path) -> Option<String> {
        let block = self.front_matter_regex.captures(content)?.get(1)?.as_str();
        if block.trim().is_empty() {
            return None;
        }
        match serde_yaml::from_str::<FrontMatter>(block) {
            Ok(front_matter) => front_matter
                .id
                .map(|id| id.trim().to_owned())
                .filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::warn!(file = %file_path.display(), error = %e, "Invalid front matter");
                None
            }
        }
    }
}

impl ContentStore for FsContentStore {
    fn document_ids(&self) -> Result<BTreeSet<String>, ContentError> {
        let files = self.scanner.scan()?;
        let mut ids = BTreeSet::new();

        for file in &files {
            let id = self.resolve_id(file)?;
            if !ids.insert(id.clone()) {
                tracing::warn!(
                    id = %id,
                    file = %file.file_path.display(),
                    "Multiple documents resolve to the same id"
                );
            }
        }

        tracing::debug!(
            dir = %self.source_dir.display(),
            documents = ids.len(),
            "Scanned content directory"
        );
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_fs_content_store_is_send_sync() {
        assert_send_sync::<FsContentStore>();
    }

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn ids(store: &FsContentStore) -> Vec<String> {
        store.document_ids().unwrap().into_iter().collect()
    }

    #[test]
    fn test_document_ids_empty_dir() {
        let temp_dir = create_test_dir();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert!(store.document_ids().unwrap().is_empty());
    }

    #[test]
    fn test_document_ids_from_paths() {
        let temp_dir = create_test_dir();
        let guides = temp_dir.path().join("Build").join("Guides");
        fs::create_dir_all(&guides).unwrap();
        fs::write(guides.join("libraries.md"), "# Libraries").unwrap();
        fs::write(guides.join("rpcapi.mdx"), "# RPC API").unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(
            ids(&store),
            vec!["Build/Guides/libraries", "Build/Guides/rpcapi"]
        );
    }

    #[test]
    fn test_front_matter_id_overrides_file_name() {
        let temp_dir = create_test_dir();
        let dir = temp_dir.path().join("Earn");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("yield-farming.md"),
            "---\nid: yeld-farm\ntitle: Yield farming\n---\n\n# Yield farming\n",
        )
        .unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(ids(&store), vec!["Earn/yeld-farm"]);
    }

    #[test]
    fn test_front_matter_without_id_keeps_path() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("intro.md"),
            "---\ntitle: Introduction\n---\n# Intro",
        )
        .unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(ids(&store), vec!["intro"]);
    }

    #[test]
    fn test_invalid_front_matter_keeps_path() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("broken.md"),
            "---\nid: [unclosed\n---\n# Broken",
        )
        .unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(ids(&store), vec!["broken"]);
    }

    #[test]
    fn test_non_utf8_document_keeps_path_id() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("good.md"), "# Good").unwrap();
        // "# été" in Latin-1
        fs::write(
            temp_dir.path().join("latin1.md"),
            [0x23, 0x20, 0xE9, 0x74, 0xE9],
        )
        .unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(ids(&store), vec!["good", "latin1"]);
    }

    #[test]
    fn test_horizontal_rule_is_not_front_matter() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("page.md"),
            "# Page\n\n---\nid: other\n---\n",
        )
        .unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(ids(&store), vec!["page"]);
    }

    #[test]
    fn test_crlf_front_matter() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("win.md"),
            "---\r\nid: windows\r\n---\r\n# Win",
        )
        .unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert_eq!(ids(&store), vec!["windows"]);
    }

    #[test]
    fn test_contains() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();

        let store = FsContentStore::new(temp_dir.path().to_path_buf());

        assert!(store.contains("guide"));
        assert!(!store.contains("missing"));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let store = FsContentStore::new(PathBuf::from("/nonexistent/docs"));

        assert!(store.document_ids().unwrap().is_empty());
    }
}
