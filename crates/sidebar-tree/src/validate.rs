//! Reference validation and advisory lints.
//!
//! [`validate`] reports every document reference that is missing from the
//! set of known documents. It never stops at the first problem: a maintainer
//! fixing one typo wants to see the rest in the same pass.
//!
//! [`check`] adds [`ConfigurationWarning`]s on top. Warnings are logged and
//! returned but never turn into errors.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{ConfigurationWarning, ReferenceError};
use crate::flatten::{FlatEntry, Flatten};
use crate::node::Node;
use crate::tree::NavigationTree;

/// Default for [`CheckOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Set of document ids that references are checked against.
pub trait DocumentIndex {
    /// Whether a document with this id exists.
    fn contains_doc(&self, id: &str) -> bool;
}

impl<S: BuildHasher> DocumentIndex for HashSet<String, S> {
    fn contains_doc(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl<S: BuildHasher> DocumentIndex for HashSet<&str, S> {
    fn contains_doc(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl DocumentIndex for BTreeSet<String> {
    fn contains_doc(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl DocumentIndex for [&str] {
    fn contains_doc(&self, id: &str) -> bool {
        self.contains(&id)
    }
}

/// Options for [`check`].
#[derive(Clone, Debug)]
pub struct CheckOptions {
    /// Deepest nesting level that does not produce a warning.
    pub max_depth: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Combined result of [`check`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Unresolved references in display order.
    pub errors: Vec<ReferenceError>,
    /// Advisory findings in display order.
    pub warnings: Vec<ConfigurationWarning>,
}

impl ValidationReport {
    /// Whether every reference resolved.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Report every unresolved document reference.
///
/// Walks the tree pre-order in display order and checks each bare reference,
/// each explicit doc entry, and each category `doc` link. Returns an empty
/// list when everything resolves. The result only depends on the tree and
/// `known`, so repeated calls return identical lists.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use sidebar_tree::{Category, NavigationTree, Node, validate};
///
/// let tree = NavigationTree::new()
///     .define("Build", vec![
///         Category::new("Guides", vec![Node::doc("guides/a"), Node::doc("guides/b")]).into(),
///     ])
///     .unwrap();
/// let known: HashSet<String> = ["guides/a".to_owned()].into();
///
/// let errors = validate(&tree, &known);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].id, "guides/b");
/// ```
pub fn validate<K>(tree: &NavigationTree, known: &K) -> Vec<ReferenceError>
where
    K: DocumentIndex + ?Sized,
{
    collect_errors(tree.flatten(), known)
}

/// [`validate`] with sidebars processed in parallel.
///
/// Returns the same list in the same order as [`validate`].
pub fn validate_parallel<K>(tree: &NavigationTree, known: &K) -> Vec<ReferenceError>
where
    K: DocumentIndex + Sync + ?Sized,
{
    tree.sidebars()
        .par_iter()
        .map(|sidebar| collect_errors(Flatten::new(std::slice::from_ref(sidebar)), known))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Validate references and run advisory lints.
///
/// Every warning is also logged with `tracing::warn!`.
pub fn check<K>(tree: &NavigationTree, known: &K, options: &CheckOptions) -> ValidationReport
where
    K: DocumentIndex + ?Sized,
{
    let mut report = ValidationReport::default();
    let mut listed: HashSet<(&str, &str)> = HashSet::new();

    for entry in tree.flatten() {
        if let Some(error) = reference_error(&entry, known) {
            report.errors.push(error);
        }
        lint(&entry, options, &mut listed, &mut report.warnings);
    }

    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }
    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Checked navigation tree"
    );

    report
}

fn collect_errors<K>(entries: Flatten<'_>, known: &K) -> Vec<ReferenceError>
where
    K: DocumentIndex + ?Sized,
{
    entries
        .filter_map(|entry| reference_error(&entry, known))
        .collect()
}

fn reference_error<K>(entry: &FlatEntry<'_>, known: &K) -> Option<ReferenceError>
where
    K: DocumentIndex + ?Sized,
{
    let id = entry.node.doc_id()?;
    if known.contains_doc(id) {
        return None;
    }
    Some(ReferenceError {
        id: id.to_owned(),
        kind: entry.kind(),
        path: entry.path.clone(),
    })
}

fn lint<'a>(
    entry: &FlatEntry<'a>,
    options: &CheckOptions,
    listed: &mut HashSet<(&'a str, &'a str)>,
    warnings: &mut Vec<ConfigurationWarning>,
) {
    if entry.depth > options.max_depth {
        warnings.push(ConfigurationWarning::TooDeep {
            path: entry.path.clone(),
            depth: entry.depth,
            max_depth: options.max_depth,
        });
    }

    if let Some(id) = entry.node.doc_id()
        && !listed.insert((entry.sidebar, id))
    {
        warnings.push(ConfigurationWarning::DuplicateReference {
            path: entry.path.clone(),
            id: id.to_owned(),
        });
    }

    if let Node::Category(category) = entry.node {
        if category.items.is_empty() && category.has_generated_index() {
            warnings.push(ConfigurationWarning::EmptyGeneratedIndex {
                path: entry.path.clone(),
                label: category.label.clone(),
            });
        }
        if category.collapsed && !category.collapsible {
            warnings.push(ConfigurationWarning::CollapsedNotCollapsible {
                path: entry.path.clone(),
                label: category.label.clone(),
            });
        }
    }
}
