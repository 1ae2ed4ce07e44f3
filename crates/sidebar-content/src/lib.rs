//! Document discovery for sidebar validation.
//!
//! This crate provides a [`ContentStore`] trait answering one question:
//! which document ids exist? Sidebar references are validated against the
//! returned set.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentStore`] trait with `document_ids()` and `contains()` methods
//! - [`FsContentStore`] scanning a directory of `.md`/`.mdx` files
//! - [`MockContentStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use sidebar_content::{ContentStore, FsContentStore};
//!
//! let store = FsContentStore::new(PathBuf::from("docs"));
//! for id in store.document_ids()? {
//!     println!("{id}");
//! }
//! ```

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod scanner;
mod store;

pub use fs::FsContentStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentStore;
pub use store::{ContentError, ContentStore};
