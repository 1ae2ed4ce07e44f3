//! Content store trait and error type.
//!
//! # Document Id Convention
//!
//! Document ids are slash-separated paths relative to the content root,
//! without file extension:
//! - `"intro"` - `intro.md`
//! - `"Build/Chains/near"` - `Build/Chains/near.mdx`
//! - `"Build/Guides/rpc"` - `Build/Guides/rpc-api.md` declaring `id: rpc`
//!   in its front matter

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Error raised while discovering documents.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Directory or file could not be read.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Content root exists but is not a directory.
    #[error("Content root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Source of known document ids.
///
/// Implementations are consulted once per validation run; callers hold the
/// returned set for the lifetime of the check.
pub trait ContentStore: Send + Sync {
    /// Collect the ids of all documents in the store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the backend cannot be read.
    fn document_ids(&self) -> Result<BTreeSet<String>, ContentError>;

    /// Check whether a single document exists.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn contains(&self, id: &str) -> bool {
        self.document_ids().is_ok_and(|ids| ids.contains(id))
    }
}
