//! Navigation tree: ordered mapping from sidebar name to nodes.

use std::collections::HashMap;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::error::{NodePath, SchemaError};
use crate::flatten::Flatten;
use crate::node::Node;
use crate::raw;

/// Authoring file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarFormat {
    Json,
    Yaml,
}

impl SidebarFormat {
    /// Detect the format from a file extension (`json`, `yaml`, `yml`).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Format name used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// One named sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    /// Unique sidebar name.
    pub name: String,
    /// Root nodes in display order.
    pub items: Vec<Node>,
}

/// Ordered collection of uniquely named sidebars.
///
/// Built once (via [`define`](Self::define) or by parsing an authoring file)
/// and read-only afterwards. Sidebars keep their declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationTree {
    sidebars: Vec<Sidebar>,
    name_index: HashMap<String, usize>,
}

impl NavigationTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sidebar and return the extended tree.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptySidebarName`] for a blank name,
    /// [`SchemaError::DuplicateSidebar`] if the name is taken, or a shape
    /// error if a node carries an empty identifier or label.
    ///
    /// # Example
    ///
    /// ```
    /// use sidebar_tree::{Category, NavigationTree, Node};
    ///
    /// let tree = NavigationTree::new()
    ///     .define("Build", vec![Category::new("Guides", vec![Node::doc("guides/a")]).into()])
    ///     .unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn define(
        mut self,
        name: impl Into<String>,
        nodes: Vec<Node>,
    ) -> Result<Self, SchemaError> {
        self.insert(name.into(), nodes)?;
        Ok(self)
    }

    /// Add a sidebar in place.
    ///
    /// # Errors
    ///
    /// Same as [`define`](Self::define).
    pub fn insert(&mut self, name: String, nodes: Vec<Node>) -> Result<(), SchemaError> {
        if name.trim().is_empty() {
            return Err(SchemaError::EmptySidebarName);
        }
        if self.name_index.contains_key(&name) {
            return Err(SchemaError::DuplicateSidebar { name });
        }
        check_nodes(&name, &nodes, &mut Vec::new())?;

        self.name_index.insert(name.clone(), self.sidebars.len());
        self.sidebars.push(Sidebar { name, items: nodes });
        Ok(())
    }

    /// Parse authoring input.
    ///
    /// All accepted authoring shapes are normalized into the canonical
    /// [`Node`] representation here.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] for syntax errors and malformed shapes.
    pub fn parse(content: &str, format: SidebarFormat) -> Result<Self, SchemaError> {
        let parse_error = |message: String| SchemaError::Parse {
            format: format.as_str(),
            message,
        };
        let document: raw::RawSidebars = match format {
            SidebarFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            SidebarFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        };
        raw::normalize(document)
    }

    /// Parse JSON authoring input.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn from_json_str(content: &str) -> Result<Self, SchemaError> {
        Self::parse(content, SidebarFormat::Json)
    }

    /// Parse YAML authoring input.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn from_yaml_str(content: &str) -> Result<Self, SchemaError> {
        Self::parse(content, SidebarFormat::Yaml)
    }

    /// Get a sidebar by name.
    #[must_use]
    pub fn sidebar(&self, name: &str) -> Option<&Sidebar> {
        self.name_index.get(name).map(|&i| &self.sidebars[i])
    }

    /// All sidebars in declaration order.
    #[must_use]
    pub fn sidebars(&self) -> &[Sidebar] {
        &self.sidebars
    }

    /// Sidebar names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(|s| s.name.as_str())
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Whether the tree has no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Walk every node in display order.
    ///
    /// Each call returns a fresh iterator.
    #[must_use]
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(&self.sidebars)
    }

    /// Every referenced document id in display order, including category
    /// landing documents. Duplicates are kept.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.flatten().filter_map(|entry| entry.node.doc_id())
    }

    /// Keep only the named sidebar.
    ///
    /// Returns `None` if no such sidebar exists.
    #[must_use]
    pub fn select(&self, name: &str) -> Option<Self> {
        let sidebar = self.sidebar(name)?.clone();
        let mut name_index = HashMap::new();
        name_index.insert(sidebar.name.clone(), 0);
        Some(Self {
            sidebars: vec![sidebar],
            name_index,
        })
    }
}

impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sidebars.len()))?;
        for sidebar in &self.sidebars {
            map.serialize_entry(&sidebar.name, &sidebar.items)?;
        }
        map.end()
    }
}

/// Reject typed nodes that could not have come from valid authoring input.
fn check_nodes(sidebar: &str, nodes: &[Node], indices: &mut Vec<usize>) -> Result<(), SchemaError> {
    for (i, node) in nodes.iter().enumerate() {
        indices.push(i);
        let path = || NodePath {
            sidebar: sidebar.to_owned(),
            indices: indices.clone(),
        };
        match node {
            Node::DocRef(id) if id.trim().is_empty() => {
                return Err(SchemaError::invalid(path(), "document id cannot be empty"));
            }
            Node::DocEntry(entry) if entry.id.trim().is_empty() => {
                return Err(SchemaError::invalid(path(), "document id cannot be empty"));
            }
            Node::Category(category) => {
                if category.label.trim().is_empty() {
                    return Err(SchemaError::invalid(path(), "category label cannot be empty"));
                }
                if category.link_doc_id().is_some_and(|id| id.trim().is_empty()) {
                    return Err(SchemaError::invalid(path(), "link document id cannot be empty"));
                }
                check_nodes(sidebar, &category.items, indices)?;
            }
            Node::DocRef(_) | Node::DocEntry(_) => {}
        }
        indices.pop();
    }
    Ok(())
}
