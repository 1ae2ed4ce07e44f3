//! Mock content store for testing.
//!
//! Provides [`MockContentStore`] for unit testing without filesystem access.

use std::collections::BTreeSet;

use crate::store::{ContentError, ContentStore};

/// In-memory content store.
///
/// # Example
///
/// ```ignore
/// use sidebar_content::{ContentStore, MockContentStore};
///
/// let store = MockContentStore::new()
///     .with_document("guides/a")
///     .with_document("guides/b");
///
/// assert!(store.contains("guides/a"));
/// ```
#[derive(Debug, Default)]
pub struct MockContentStore {
    ids: BTreeSet<String>,
}

impl MockContentStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document id.
    #[must_use]
    pub fn with_document(mut self, id: impl Into<String>) -> Self {
        self.ids.insert(id.into());
        self
    }

    /// Add several document ids.
    #[must_use]
    pub fn with_documents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }
}

impl ContentStore for MockContentStore {
    fn document_ids(&self) -> Result<BTreeSet<String>, ContentError> {
        Ok(self.ids.clone())
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
