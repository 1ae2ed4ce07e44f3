//! Display-order walk over a navigation tree.
//!
//! [`Flatten`] yields every node pre-order, depth-first, in declaration
//! order, which is the order a sidebar renderer shows them. It is lazy and
//! holds only a stack of slice iterators. A clone continues from the same
//! position; call [`NavigationTree::flatten`](crate::NavigationTree::flatten)
//! again to start over.

use std::iter::Enumerate;
use std::slice;

use serde::Serialize;

use crate::error::NodePath;
use crate::node::{Node, NodeKind};
use crate::tree::Sidebar;

/// One node visited by [`Flatten`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    /// Sidebar the node belongs to.
    pub sidebar: &'a str,
    /// Nesting level (root items are depth 0).
    pub depth: usize,
    /// Index path of the node.
    pub path: NodePath,
    /// The node itself.
    pub node: &'a Node,
}

impl<'a> FlatEntry<'a> {
    /// Variant tag of the node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    /// Display label of the node.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.node.display_label()
    }

    /// Owned summary for serialization (tables of contents, sitemaps).
    #[must_use]
    pub fn to_summary(&self) -> TocEntry {
        TocEntry {
            sidebar: self.sidebar.to_owned(),
            path: self.path.to_string(),
            depth: self.depth,
            kind: self.kind(),
            label: self.label().to_owned(),
            id: self.node.doc_id().map(str::to_owned),
        }
    }
}

/// Serializable table-of-contents row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub sidebar: String,
    pub path: String,
    pub depth: usize,
    pub kind: NodeKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Pre-order iterator over all sidebars of a tree.
#[derive(Clone, Debug)]
pub struct Flatten<'a> {
    sidebars: slice::Iter<'a, Sidebar>,
    sidebar: &'a str,
    stack: Vec<Enumerate<slice::Iter<'a, Node>>>,
    /// Indices of the categories enclosing the current frame.
    ancestors: Vec<usize>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(sidebars: &'a [Sidebar]) -> Self {
        Self {
            sidebars: sidebars.iter(),
            sidebar: "",
            stack: Vec::new(),
            ancestors: Vec::new(),
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                let sidebar = self.sidebars.next()?;
                self.sidebar = &sidebar.name;
                self.stack.push(sidebar.items.iter().enumerate());
                continue;
            };

            let Some((index, node)) = frame.next() else {
                self.stack.pop();
                self.ancestors.pop();
                continue;
            };

            let depth = self.stack.len() - 1;
            let mut indices = Vec::with_capacity(depth + 1);
            indices.extend_from_slice(&self.ancestors);
            indices.push(index);

            if let Node::Category(category) = node {
                self.stack.push(category.items.iter().enumerate());
                self.ancestors.push(index);
            }

            return Some(FlatEntry {
                sidebar: self.sidebar,
                depth,
                path: NodePath {
                    sidebar: self.sidebar.to_owned(),
                    indices,
                },
                node,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NavigationTree;
    use crate::node::{Category, DocEntry};
    use pretty_assertions::assert_eq;

    fn sample_tree() -> NavigationTree {
        NavigationTree::new()
            .define(
                "Earn",
                vec![
                    Category::new(
                        "Liquid Staking",
                        vec![
                            Node::doc("Earn/liquid-staking/overview"),
                            Category::new(
                                "BNB",
                                vec![
                                    Node::doc("Earn/liquid-staking/bnb/mechanics"),
                                    Node::doc("Earn/liquid-staking/bnb/stake-bnb"),
                                ],
                            )
                            .into(),
                        ],
                    )
                    .into(),
                    Category::new("DeFi", vec![Node::doc("Earn/defi/yield-farm")]).into(),
                ],
            )
            .unwrap()
            .define("About", vec![DocEntry::new("About/about-ankr").into()])
            .unwrap()
    }

    fn rows(tree: &NavigationTree) -> Vec<(String, usize, NodeKind)> {
        tree.flatten()
            .map(|e| (e.label().to_owned(), e.depth, e.kind()))
            .collect()
    }

    #[test]
    fn test_flatten_preorder_with_depths() {
        let tree = sample_tree();

        assert_eq!(
            rows(&tree),
            vec![
                ("Liquid Staking".to_owned(), 0, NodeKind::Category),
                ("Earn/liquid-staking/overview".to_owned(), 1, NodeKind::DocRef),
                ("BNB".to_owned(), 1, NodeKind::Category),
                ("Earn/liquid-staking/bnb/mechanics".to_owned(), 2, NodeKind::DocRef),
                ("Earn/liquid-staking/bnb/stake-bnb".to_owned(), 2, NodeKind::DocRef),
                ("DeFi".to_owned(), 0, NodeKind::Category),
                ("Earn/defi/yield-farm".to_owned(), 1, NodeKind::DocRef),
                ("About/about-ankr".to_owned(), 0, NodeKind::DocEntry),
            ]
        );
    }

    #[test]
    fn test_flatten_paths() {
        let tree = sample_tree();

        let paths: Vec<_> = tree.flatten().map(|e| e.path.to_string()).collect();

        assert_eq!(
            paths,
            vec![
                "Earn[0]",
                "Earn[0].items[0]",
                "Earn[0].items[1]",
                "Earn[0].items[1].items[0]",
                "Earn[0].items[1].items[1]",
                "Earn[1]",
                "Earn[1].items[0]",
                "About[0]",
            ]
        );
    }

    #[test]
    fn test_flatten_depth_matches_path() {
        let tree = sample_tree();

        for entry in tree.flatten() {
            assert_eq!(entry.depth, entry.path.depth());
        }
    }

    #[test]
    fn test_flatten_is_restartable() {
        let tree = sample_tree();

        let first = rows(&tree);
        let second = rows(&tree);

        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_clone_continues_independently() {
        let tree = sample_tree();
        let mut iter = tree.flatten();
        iter.next();

        let rest_a: Vec<_> = iter.clone().map(|e| e.path).collect();
        let rest_b: Vec<_> = iter.map(|e| e.path).collect();

        assert_eq!(rest_a, rest_b);
        assert_eq!(rest_a.len(), 7);
    }

    #[test]
    fn test_flatten_empty_category_emits_only_itself() {
        let tree = NavigationTree::new()
            .define(
                "Build",
                vec![
                    Category::new("Empty", Vec::new()).into(),
                    Node::doc("after"),
                ],
            )
            .unwrap();

        let entries: Vec<_> = tree.flatten().collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind(), NodeKind::Category);
        assert_eq!(entries[1].label(), "after");
        assert_eq!(entries[1].depth, 0);
    }

    #[test]
    fn test_flatten_empty_tree_and_empty_sidebar() {
        assert_eq!(NavigationTree::new().flatten().count(), 0);

        let tree = NavigationTree::new()
            .define("Empty", Vec::new())
            .unwrap()
            .define("One", vec![Node::doc("a")])
            .unwrap();
        let entries: Vec<_> = tree.flatten().collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sidebar, "One");
    }

    #[test]
    fn test_toc_entry_serialization() {
        let tree = sample_tree();
        let entry = tree.flatten().nth(2).unwrap();

        let json = serde_json::to_value(entry.to_summary()).unwrap();

        assert_eq!(json["sidebar"], "Earn");
        assert_eq!(json["path"], "Earn[0].items[1]");
        assert_eq!(json["depth"], 1);
        assert_eq!(json["kind"], "category");
        assert_eq!(json["label"], "BNB");
        assert!(json.get("id").is_none());
    }
}
