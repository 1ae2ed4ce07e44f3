//! Sidebar node types.
//!
//! A sidebar is an ordered list of [`Node`] values. Nodes are either leaves
//! pointing at a single document ([`Node::DocRef`], [`Node::DocEntry`]) or
//! a [`Category`] grouping further nodes.
//!
//! Serialization produces the canonical authoring shape: bare strings for
//! document references and `type`-tagged objects for everything else, with
//! collapse flags always written out.

use std::fmt;

use serde::Serialize;

/// Default for a category's `collapsible` flag when the author omits it.
pub const DEFAULT_COLLAPSIBLE: bool = false;

/// Default for a category's `collapsed` flag when the author omits it.
pub const DEFAULT_COLLAPSED: bool = false;

/// Navigation node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Bare document identifier (e.g. `"Build/Guides/libraries"`).
    DocRef(String),
    /// Document reference with an optional label override.
    DocEntry(DocEntry),
    /// Group of child nodes.
    Category(Category),
}

/// Explicit document entry (`type: doc`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct DocEntry {
    /// Document identifier.
    pub id: String,
    /// Display label overriding the document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Category node (`type: category`).
///
/// Collapse flags are always explicit here; authoring input that omits them
/// is normalized to [`DEFAULT_COLLAPSIBLE`] and [`DEFAULT_COLLAPSED`] at load
/// time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "category")]
pub struct Category {
    /// Display label, possibly prefixed with an icon (e.g. `"⛓ Chains V1"`).
    pub label: String,
    /// Whether the sidebar UI lets the reader fold this category.
    pub collapsible: bool,
    /// Whether the category starts folded.
    pub collapsed: bool,
    /// Landing page for the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<CategoryLink>,
    /// Search keywords for the category's index page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Child nodes in display order.
    pub items: Vec<Node>,
}

/// Landing page attached to a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryLink {
    /// Index page generated from the category's children.
    GeneratedIndex {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        slug: Option<String>,
    },
    /// Hand-written landing document.
    Doc { id: String },
}

/// Variant tag of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    DocRef,
    DocEntry,
    Category,
}

impl NodeKind {
    /// Stable lowercase name used in messages and JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DocRef => "doc_ref",
            Self::DocEntry => "doc_entry",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Create a bare document reference.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::DocRef(id.into())
    }

    /// Variant tag of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::DocRef(_) => NodeKind::DocRef,
            Self::DocEntry(_) => NodeKind::DocEntry,
            Self::Category(_) => NodeKind::Category,
        }
    }

    /// Document this node points at.
    ///
    /// For categories this is the `doc` link target, if any.
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::DocRef(id) => Some(id),
            Self::DocEntry(entry) => Some(&entry.id),
            Self::Category(category) => category.link_doc_id(),
        }
    }

    /// Text shown for this node in a sidebar.
    ///
    /// Bare references have no label of their own, so the identifier is used.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self {
            Self::DocRef(id) => id,
            Self::DocEntry(entry) => entry.label.as_deref().unwrap_or(&entry.id),
            Self::Category(category) => &category.label,
        }
    }

    /// Child nodes (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Category(category) => &category.items,
            Self::DocRef(_) | Self::DocEntry(_) => &[],
        }
    }
}

impl From<DocEntry> for Node {
    fn from(entry: DocEntry) -> Self {
        Self::DocEntry(entry)
    }
}

impl From<Category> for Node {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl DocEntry {
    /// Create an entry without a label override.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Set the label override.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Category {
    /// Create a category with default collapse flags and no link.
    #[must_use]
    pub fn new(label: impl Into<String>, items: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            collapsible: DEFAULT_COLLAPSIBLE,
            collapsed: DEFAULT_COLLAPSED,
            link: None,
            keywords: Vec::new(),
            items,
        }
    }

    /// Attach a generated index page.
    #[must_use]
    pub fn with_generated_index(mut self) -> Self {
        self.link = Some(CategoryLink::GeneratedIndex {
            title: None,
            description: None,
            slug: None,
        });
        self
    }

    /// Attach a landing document.
    #[must_use]
    pub fn with_doc_link(mut self, id: impl Into<String>) -> Self {
        self.link = Some(CategoryLink::Doc { id: id.into() });
        self
    }

    /// Set both collapse flags.
    #[must_use]
    pub fn with_collapse(mut self, collapsible: bool, collapsed: bool) -> Self {
        self.collapsible = collapsible;
        self.collapsed = collapsed;
        self
    }

    /// Set the index page keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Target of a `doc` link.
    #[must_use]
    pub fn link_doc_id(&self) -> Option<&str> {
        match &self.link {
            Some(CategoryLink::Doc { id }) => Some(id),
            Some(CategoryLink::GeneratedIndex { .. }) | None => None,
        }
    }

    /// Whether the category lands on a generated index page.
    #[must_use]
    pub fn has_generated_index(&self) -> bool {
        matches!(self.link, Some(CategoryLink::GeneratedIndex { .. }))
    }

    /// Icon embedded at the start of the label.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        split_icon(&self.label).0
    }

    /// Label without its icon.
    #[must_use]
    pub fn title(&self) -> &str {
        split_icon(&self.label).1
    }
}

/// Split a leading icon off a label.
///
/// The icon is the first whitespace-delimited token when it contains no
/// alphanumeric characters and is followed by more text:
/// `"⚖️ Governance"` gives `(Some("⚖️"), "Governance")`.
#[must_use]
pub fn split_icon(label: &str) -> (Option<&str>, &str) {
    let trimmed = label.trim_start();
    if let Some((head, rest)) = trimmed.split_once(char::is_whitespace) {
        let rest = rest.trim_start();
        if !rest.is_empty() && !head.chars().any(char::is_alphanumeric) {
            return (Some(head), rest);
        }
    }
    (None, trimmed)
}
