//! Error, diagnostic and path types.
//!
//! - [`SchemaError`]: malformed authoring input. Fatal; stops loading.
//! - [`ReferenceError`]: unknown document id. Collected in batches.
//! - [`ConfigurationWarning`]: advisory lint, never fails a build.

use std::fmt;

use serde::Serialize;

use crate::node::NodeKind;

/// Location of a node inside a navigation tree.
///
/// Rendered as `sidebar[0].items[3].items[1]`: the sidebar name, the index
/// among the sidebar's root items, then the index within each enclosing
/// category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NodePath {
    /// Sidebar the node belongs to.
    pub sidebar: String,
    /// Item indices from the sidebar root down to the node.
    pub indices: Vec<usize>,
}

impl NodePath {
    /// Nesting depth of the node (root items are depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indices.len().saturating_sub(1)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sidebar)?;
        for (level, index) in self.indices.iter().enumerate() {
            if level == 0 {
                write!(f, "[{index}]")?;
            } else {
                write!(f, ".items[{index}]")?;
            }
        }
        Ok(())
    }
}

/// Malformed sidebar definition.
///
/// Every variant that originates from authoring input names the offending
/// location (e.g. `buildSidebar.Build[3].items[1]`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Value has the wrong shape or type.
    #[error("{path}: {message}")]
    InvalidShape { path: String, message: String },
    /// Required field is absent.
    #[error("{path}: missing required field `{field}`")]
    MissingField { path: String, field: &'static str },
    /// Object carries an unsupported `type` tag.
    #[error("{path}: unknown item type `{found}`")]
    UnknownType { path: String, found: String },
    /// Sidebar name is empty or whitespace.
    #[error("sidebar name cannot be empty")]
    EmptySidebarName,
    /// Sidebar name declared twice.
    #[error("sidebar `{name}` is defined more than once")]
    DuplicateSidebar { name: String },
    /// Input is not valid JSON/YAML.
    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

impl SchemaError {
    pub(crate) fn invalid(path: impl fmt::Display, message: impl Into<String>) -> Self {
        Self::InvalidShape {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(path: impl fmt::Display, field: &'static str) -> Self {
        Self::MissingField {
            path: path.to_string(),
            field,
        }
    }
}

/// Document reference that does not resolve to a known document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{path}: unknown document `{id}` referenced by {kind}")]
pub struct ReferenceError {
    /// Unresolved document identifier.
    pub id: String,
    /// Kind of node holding the reference.
    pub kind: NodeKind,
    /// Location of the referencing node.
    pub path: NodePath,
}

impl ReferenceError {
    /// Sidebar containing the reference.
    #[must_use]
    pub fn sidebar(&self) -> &str {
        &self.path.sidebar
    }
}

/// Advisory finding about a sidebar definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum ConfigurationWarning {
    /// Category with no items whose generated index page would be empty.
    EmptyGeneratedIndex { path: NodePath, label: String },
    /// Node nested deeper than the sidebar UI comfortably shows.
    TooDeep {
        path: NodePath,
        depth: usize,
        max_depth: usize,
    },
    /// Same document listed more than once in one sidebar.
    DuplicateReference { path: NodePath, id: String },
    /// Category starts collapsed but cannot be expanded by the reader.
    CollapsedNotCollapsible { path: NodePath, label: String },
}

impl ConfigurationWarning {
    /// Location the warning refers to.
    #[must_use]
    pub fn path(&self) -> &NodePath {
        match self {
            Self::EmptyGeneratedIndex { path, .. }
            | Self::TooDeep { path, .. }
            | Self::DuplicateReference { path, .. }
            | Self::CollapsedNotCollapsible { path, .. } => path,
        }
    }
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGeneratedIndex { path, label } => write!(
                f,
                "{path}: category `{label}` has no items; its generated index page will be empty"
            ),
            Self::TooDeep {
                path,
                depth,
                max_depth,
            } => write!(f, "{path}: nested at depth {depth} (max {max_depth})"),
            Self::DuplicateReference { path, id } => {
                write!(f, "{path}: document `{id}` is already listed in this sidebar")
            }
            Self::CollapsedNotCollapsible { path, label } => write!(
                f,
                "{path}: category `{label}` is collapsed but not collapsible"
            ),
        }
    }
}
