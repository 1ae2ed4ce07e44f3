//! Sidebar navigation tree model.
//!
//! This crate provides:
//! - [`NavigationTree`]: ordered mapping from sidebar name to [`Node`]s
//! - Loading of JSON/YAML sidebar files, normalizing every historical
//!   authoring shape into one canonical model
//! - [`validate`]: batch reporting of unresolved document references
//! - [`NavigationTree::flatten`]: display-order walk for tables of contents
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::collections::HashSet;
//! use sidebar_tree::{NavigationTree, validate};
//!
//! let tree = NavigationTree::from_json_str(r#"{
//!     "buildSidebar": { "Build": [
//!         { "type": "category", "label": "Guides",
//!           "link": { "type": "generated-index" },
//!           "items": ["Build/Guides/libraries"] },
//!         "Build/Support/get-support"
//!     ]}
//! }"#)?;
//!
//! for entry in tree.flatten() {
//!     println!("{}{}", "  ".repeat(entry.depth), entry.label());
//! }
//!
//! let known: HashSet<String> = ["Build/Guides/libraries".to_owned()].into();
//! let errors = validate(&tree, &known);
//! assert_eq!(errors[0].id, "Build/Support/get-support");
//! # Ok(())
//! # }
//! ```

mod error;
mod flatten;
mod node;
mod raw;
mod tree;
mod validate;

pub use error::{ConfigurationWarning, NodePath, ReferenceError, SchemaError};
pub use flatten::{FlatEntry, Flatten, TocEntry};
pub use node::{
    Category, CategoryLink, DEFAULT_COLLAPSED, DEFAULT_COLLAPSIBLE, DocEntry, Node, NodeKind,
    split_icon,
};
pub use tree::{NavigationTree, Sidebar, SidebarFormat};
pub use validate::{
    CheckOptions, DEFAULT_MAX_DEPTH, DocumentIndex, ValidationReport, check, validate,
    validate_parallel,
};
