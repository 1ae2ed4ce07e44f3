//! Document discovery by filesystem walking.
//!
//! The scanner only finds candidate files; reading front matter and
//! resolving final ids is left to [`FsContentStore`](crate::FsContentStore).

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::ContentError;

/// File extensions treated as documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Reference to a document file found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentFile {
    /// Id derived from the file location (e.g. `"Build/Chains/near"`).
    pub path_id: String,
    /// Directory part of the id (`""` at the root).
    pub dir_id: String,
    /// Absolute path to the file.
    pub file_path: PathBuf,
}

/// Walks a content directory collecting document files.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub(crate) fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the content directory.
    ///
    /// Returns an empty list if the directory doesn't exist. Files are
    /// returned in sorted path order so results are stable across platforms.
    pub(crate) fn scan(&self) -> Result<Vec<DocumentFile>, ContentError> {
        let mut files = Vec::new();
        match fs::metadata(&self.source_dir) {
            Ok(meta) if meta.is_dir() => {
                self.scan_directory(&self.source_dir, "", &mut files)?;
            }
            Ok(_) => return Err(ContentError::NotADirectory(self.source_dir.clone())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    dir = %self.source_dir.display(),
                    "Content directory does not exist"
                );
            }
            Err(e) => return Err(ContentError::io(&self.source_dir, e)),
        }
        Ok(files)
    }

    /// Recursively collect documents below `dir_path`.
    ///
    /// Hidden entries (`.git`) and partials (`_snippet.md`) are skipped.
    fn scan_directory(
        &self,
        dir_path: &Path,
        id_prefix: &str,
        files: &mut Vec<DocumentFile>,
    ) -> Result<(), ContentError> {
        let entries = fs::read_dir(dir_path).map_err(|e| ContentError::io(dir_path, e))?;

        // Cache file_type to avoid repeated stat calls
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                let name = e.file_name().to_string_lossy().into_owned();
                (e.path(), is_dir, name)
            })
            .filter(|(_, _, name)| !name.starts_with('.') && !name.starts_with('_'))
            .collect();
        entries.sort_by(|a, b| a.2.cmp(&b.2));

        for (path, is_dir, name) in entries {
            if is_dir {
                let child_prefix = join_id(id_prefix, &name);
                self.scan_directory(&path, &child_prefix, files)?;
            } else if let Some(stem) = document_stem(&name) {
                files.push(DocumentFile {
                    path_id: join_id(id_prefix, stem),
                    dir_id: id_prefix.to_owned(),
                    file_path: path,
                });
            }
        }

        Ok(())
    }
}

/// File name without its document extension, or `None` for non-documents.
fn document_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    let is_document = DOCUMENT_EXTENSIONS
        .iter()
        .any(|d| ext.eq_ignore_ascii_case(d));
    (is_document && !stem.is_empty()).then_some(stem)
}

/// Join an id prefix and a segment with `/`.
pub(crate) fn join_id(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn ids(files: &[DocumentFile]) -> Vec<&str> {
        files.iter().map(|f| f.path_id.as_str()).collect()
    }

    #[test]
    fn test_document_stem() {
        assert_eq!(document_stem("guide.md"), Some("guide"));
        assert_eq!(document_stem("guide.mdx"), Some("guide"));
        assert_eq!(document_stem("GUIDE.MD"), Some("GUIDE"));
        assert_eq!(document_stem("v1.2.md"), Some("v1.2"));
        assert_eq!(document_stem("style.css"), None);
        assert_eq!(document_stem("README"), None);
        assert_eq!(document_stem(".md"), None);
    }

    #[test]
    fn test_join_id() {
        assert_eq!(join_id("", "intro"), "intro");
        assert_eq!(join_id("Build/Chains", "near"), "Build/Chains/near");
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let scanner = Scanner::new(PathBuf::from("/nonexistent/docs"));

        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_file_as_root_fails() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("docs.md");
        fs::write(&file, "# Docs").unwrap();

        let err = Scanner::new(file).scan().unwrap_err();

        assert!(matches!(err, ContentError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_nested_sorted() {
        let temp_dir = create_test_dir();
        let chains = temp_dir.path().join("Build").join("Chains");
        fs::create_dir_all(&chains).unwrap();
        fs::write(chains.join("near.md"), "# Near").unwrap();
        fs::write(chains.join("celo.mdx"), "# Celo").unwrap();
        fs::write(temp_dir.path().join("intro.md"), "# Intro").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(ids(&files), vec!["Build/Chains/celo", "Build/Chains/near", "intro"]);
        assert_eq!(files[0].dir_id, "Build/Chains");
        assert_eq!(files[2].dir_id, "");
    }

    #[test]
    fn test_scan_skips_hidden_partials_and_assets() {
        let temp_dir = create_test_dir();
        let hidden = temp_dir.path().join(".drafts");
        let partials = temp_dir.path().join("_partials");
        fs::create_dir_all(&hidden).unwrap();
        fs::create_dir_all(&partials).unwrap();
        fs::write(hidden.join("draft.md"), "# Draft").unwrap();
        fs::write(partials.join("note.md"), "# Note").unwrap();
        fs::write(temp_dir.path().join("_snippet.mdx"), "snippet").unwrap();
        fs::write(temp_dir.path().join("logo.png"), [0u8; 4]).unwrap();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(ids(&files), vec!["guide"]);
    }
}
