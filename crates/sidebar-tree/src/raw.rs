//! Authoring shapes and their normalization.
//!
//! Sidebar files have been written in several shapes over time. All of them
//! are accepted here and converted into the canonical [`Node`] model:
//!
//! - sidebar value as an item array: `"about": ["About/about-ankr"]`
//! - sidebar value as an object shorthand: `"build": { "Build": [...] }`,
//!   where each key becomes a category labelled with that key
//! - bare string items (document references)
//! - `{ "type": "doc", "id": ..., "label"?: ... }`
//! - `{ "type": "category", "label": ..., "items": [...], ... }`
//! - nested object shorthand inside an items array
//!
//! Collapse flags missing from a category become [`DEFAULT_COLLAPSIBLE`] and
//! [`DEFAULT_COLLAPSED`]. No other code infers defaults.
//!
//! Input is first read into `RawValue`, which keeps every object entry in
//! declaration order. A key repeated inside any object is rejected with the
//! path of that key.

use std::collections::HashSet;
use std::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::error::SchemaError;
use crate::node::{
    Category, CategoryLink, DEFAULT_COLLAPSED, DEFAULT_COLLAPSIBLE, DocEntry, Node,
};
use crate::tree::NavigationTree;

/// Top-level sidebars object with declaration order and duplicate keys kept.
pub(crate) struct RawSidebars(Vec<(String, RawValue)>);

impl<'de> Deserialize<'de> for RawSidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawSidebars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping sidebar names to items")
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                Ok(RawSidebars(entries(map)?))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

/// Any authoring value. Unlike `serde_json::Value`, objects keep repeated
/// keys so they can be reported instead of silently overwritten.
enum RawValue {
    Null,
    Bool(bool),
    Number,
    String(String),
    Array(Vec<RawValue>),
    Object(RawObject),
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = RawValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sidebar value")
            }

            fn visit_bool<E: Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(RawValue::Bool(v))
            }

            fn visit_i64<E: Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(RawValue::Number)
            }

            fn visit_u64<E: Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(RawValue::Number)
            }

            fn visit_f64<E: Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(RawValue::Number)
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawValue::String(v.to_owned()))
            }

            fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RawValue::String(v))
            }

            fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
                Ok(RawValue::Null)
            }

            fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
                Ok(RawValue::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                RawValue::deserialize(d)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(RawValue::Array(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                Ok(RawValue::Object(RawObject(entries(map)?)))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Collect map entries as-is, repeated keys included.
fn entries<'de, A: MapAccess<'de>>(mut map: A) -> Result<Vec<(String, RawValue)>, A::Error> {
    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
    while let Some((key, value)) = map.next_entry::<String, RawValue>()? {
        entries.push((key, value));
    }
    Ok(entries)
}

/// Object entries in declaration order.
struct RawObject(Vec<(String, RawValue)>);

impl RawObject {
    fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fail on the first key declared twice, at that key's path.
    fn unique_keys(&self, path: &RawPath) -> Result<&Self, SchemaError> {
        let mut seen = HashSet::with_capacity(self.0.len());
        match self.0.iter().find(|(key, _)| !seen.insert(key.as_str())) {
            Some((key, _)) => Err(SchemaError::invalid(
                path.key(key),
                format!("duplicate key `{key}`"),
            )),
            None => Ok(self),
        }
    }
}

/// Location within the authoring document, used for error messages.
#[derive(Clone)]
struct RawPath(String);

impl RawPath {
    fn root(sidebar: &str) -> Self {
        Self(sidebar.to_owned())
    }

    fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    fn key(&self, key: &str) -> Self {
        Self(format!("{}.{key}", self.0))
    }
}

impl fmt::Display for RawPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert parsed authoring input into a [`NavigationTree`].
pub(crate) fn normalize(raw: RawSidebars) -> Result<NavigationTree, SchemaError> {
    let mut seen = HashSet::new();
    let mut tree = NavigationTree::new();

    for (name, value) in raw.0 {
        if !seen.insert(name.clone()) {
            return Err(SchemaError::DuplicateSidebar { name });
        }
        let path = RawPath::root(&name);
        let items = sidebar_items(&value, &path)?;
        tracing::debug!(sidebar = %name, items = items.len(), "Loaded sidebar");
        tree.insert(name, items)?;
    }

    Ok(tree)
}

/// Items of one sidebar, whatever shape its value takes.
fn sidebar_items(value: &RawValue, path: &RawPath) -> Result<Vec<Node>, SchemaError> {
    match value {
        RawValue::Array(items) => item_list(items, path),
        // A single typed item used as the whole sidebar
        RawValue::Object(obj) if obj.contains_key("type") => Ok(vec![item(value, path)?]),
        RawValue::Object(obj) => shorthand(obj, path),
        _ => Err(SchemaError::invalid(
            path,
            format!("expected an array or object, found {}", type_name(value)),
        )),
    }
}

fn item_list(items: &[RawValue], path: &RawPath) -> Result<Vec<Node>, SchemaError> {
    let mut nodes = Vec::with_capacity(items.len());
    for (i, value) in items.iter().enumerate() {
        let item_path = path.index(i);
        match value {
            // Nested shorthand may declare several categories at once
            RawValue::Object(obj) if !obj.contains_key("type") => {
                nodes.extend(shorthand(obj, &item_path)?);
            }
            _ => nodes.push(item(value, &item_path)?),
        }
    }
    Ok(nodes)
}

/// `{ "Label": [items], ... }` into one category per key.
fn shorthand(obj: &RawObject, path: &RawPath) -> Result<Vec<Node>, SchemaError> {
    if obj.is_empty() {
        return Err(SchemaError::invalid(path, "empty object is not a valid item"));
    }
    obj.unique_keys(path)?
        .iter()
        .map(|(label, value)| {
            let category_path = path.key(label);
            let RawValue::Array(items) = value else {
                return Err(SchemaError::invalid(
                    &category_path,
                    format!(
                        "shorthand category expects an array of items, found {}",
                        type_name(value)
                    ),
                ));
            };
            if label.trim().is_empty() {
                return Err(SchemaError::invalid(
                    &category_path,
                    "category label cannot be empty",
                ));
            }
            Ok(Category::new(label, item_list(items, &category_path)?).into())
        })
        .collect()
}

fn item(value: &RawValue, path: &RawPath) -> Result<Node, SchemaError> {
    match value {
        RawValue::String(id) => {
            if id.trim().is_empty() {
                return Err(SchemaError::invalid(path, "document id cannot be empty"));
            }
            Ok(Node::DocRef(id.clone()))
        }
        RawValue::Object(obj) => {
            let obj = obj.unique_keys(path)?;
            let ty = required_str(obj, "type", path)?;
            match ty {
                "doc" => doc_entry(obj, path).map(Node::DocEntry),
                "category" => category(obj, path).map(Node::Category),
                other => Err(SchemaError::UnknownType {
                    path: path.to_string(),
                    found: other.to_owned(),
                }),
            }
        }
        _ => Err(SchemaError::invalid(
            path,
            format!("expected a document id or an object, found {}", type_name(value)),
        )),
    }
}

fn doc_entry(obj: &RawObject, path: &RawPath) -> Result<DocEntry, SchemaError> {
    warn_unknown_fields(obj, &["type", "id", "label"], path);
    let id = required_str(obj, "id", path)?;
    if id.trim().is_empty() {
        return Err(SchemaError::invalid(path.key("id"), "document id cannot be empty"));
    }
    Ok(DocEntry {
        id: id.to_owned(),
        label: optional_str(obj, "label", path)?,
    })
}

fn category(obj: &RawObject, path: &RawPath) -> Result<Category, SchemaError> {
    warn_unknown_fields(
        obj,
        &[
            "type",
            "label",
            "items",
            "link",
            "keywords",
            "collapsible",
            "collapsed",
        ],
        path,
    );

    let label = required_str(obj, "label", path)?;
    if label.trim().is_empty() {
        return Err(SchemaError::invalid(path.key("label"), "category label cannot be empty"));
    }

    let items_path = path.key("items");
    let items = match obj.get("items") {
        Some(RawValue::Array(items)) => item_list(items, &items_path)?,
        Some(other) => {
            return Err(SchemaError::invalid(
                &items_path,
                format!("expected an array, found {}", type_name(other)),
            ));
        }
        None => return Err(SchemaError::missing(path, "items")),
    };

    let mut keywords = string_list(obj.get("keywords"), &path.key("keywords"))?;
    let link = match obj.get("link") {
        Some(value) => {
            let (link, link_keywords) = category_link(value, &path.key("link"))?;
            keywords.extend(link_keywords);
            Some(link)
        }
        None => None,
    };

    Ok(Category {
        label: label.to_owned(),
        collapsible: optional_bool(obj, "collapsible", path)?.unwrap_or(DEFAULT_COLLAPSIBLE),
        collapsed: optional_bool(obj, "collapsed", path)?.unwrap_or(DEFAULT_COLLAPSED),
        link,
        keywords,
        items,
    })
}

/// Parse a category link. Keywords declared on a generated-index link are
/// returned separately so they can be folded into the category.
fn category_link(
    value: &RawValue,
    path: &RawPath,
) -> Result<(CategoryLink, Vec<String>), SchemaError> {
    let RawValue::Object(obj) = value else {
        return Err(SchemaError::invalid(
            path,
            format!("expected an object, found {}", type_name(value)),
        ));
    };
    let obj = obj.unique_keys(path)?;

    match required_str(obj, "type", path)? {
        "generated-index" => {
            warn_unknown_fields(
                obj,
                &["type", "title", "description", "slug", "keywords"],
                path,
            );
            let link = CategoryLink::GeneratedIndex {
                title: optional_str(obj, "title", path)?,
                description: optional_str(obj, "description", path)?,
                slug: optional_str(obj, "slug", path)?,
            };
            Ok((link, string_list(obj.get("keywords"), &path.key("keywords"))?))
        }
        "doc" => {
            warn_unknown_fields(obj, &["type", "id"], path);
            let id = required_str(obj, "id", path)?;
            if id.trim().is_empty() {
                return Err(SchemaError::invalid(path.key("id"), "document id cannot be empty"));
            }
            Ok((CategoryLink::Doc { id: id.to_owned() }, Vec::new()))
        }
        other => Err(SchemaError::UnknownType {
            path: path.key("type").to_string(),
            found: other.to_owned(),
        }),
    }
}

fn required_str<'a>(
    obj: &'a RawObject,
    field: &'static str,
    path: &RawPath,
) -> Result<&'a str, SchemaError> {
    match obj.get(field) {
        Some(RawValue::String(s)) => Ok(s),
        Some(other) => Err(SchemaError::invalid(
            path.key(field),
            format!("expected a string, found {}", type_name(other)),
        )),
        None => Err(SchemaError::missing(path, field)),
    }
}

fn optional_str(
    obj: &RawObject,
    field: &str,
    path: &RawPath,
) -> Result<Option<String>, SchemaError> {
    match obj.get(field) {
        Some(RawValue::String(s)) => Ok(Some(s.clone())),
        Some(RawValue::Null) | None => Ok(None),
        Some(other) => Err(SchemaError::invalid(
            path.key(field),
            format!("expected a string, found {}", type_name(other)),
        )),
    }
}

fn optional_bool(
    obj: &RawObject,
    field: &str,
    path: &RawPath,
) -> Result<Option<bool>, SchemaError> {
    match obj.get(field) {
        Some(RawValue::Bool(b)) => Ok(Some(*b)),
        Some(RawValue::Null) | None => Ok(None),
        Some(other) => Err(SchemaError::invalid(
            path.key(field),
            format!("expected a boolean, found {}", type_name(other)),
        )),
    }
}

fn string_list(value: Option<&RawValue>, path: &RawPath) -> Result<Vec<String>, SchemaError> {
    match value {
        None | Some(RawValue::Null) => Ok(Vec::new()),
        Some(RawValue::Array(values)) => values
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                RawValue::String(s) => Ok(s.clone()),
                other => Err(SchemaError::invalid(
                    path.index(i),
                    format!("expected a string, found {}", type_name(other)),
                )),
            })
            .collect(),
        Some(other) => Err(SchemaError::invalid(
            path,
            format!("expected an array of strings, found {}", type_name(other)),
        )),
    }
}

fn warn_unknown_fields(obj: &RawObject, known: &[&str], path: &RawPath) {
    for (key, _) in obj.iter().filter(|(k, _)| !known.contains(k)) {
        tracing::debug!(path = %path, field = %key, "Ignoring unknown sidebar field");
    }
}

fn type_name(value: &RawValue) -> &'static str {
    match value {
        RawValue::Null => "null",
        RawValue::Bool(_) => "boolean",
        RawValue::Number => "number",
        RawValue::String(_) => "string",
        RawValue::Array(_) => "array",
        RawValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Result<NavigationTree, SchemaError> {
        NavigationTree::from_json_str(json)
    }

    #[test]
    fn test_array_sidebar_with_doc_entry() {
        let tree = parse(
            r#"{"aboutSidebar": [{"type": "doc", "id": "About/about-ankr", "label": "⚓️ About Ankr"}]}"#,
        )
        .unwrap();

        let items = &tree.sidebar("aboutSidebar").unwrap().items;
        assert_eq!(
            items,
            &vec![Node::DocEntry(
                DocEntry::new("About/about-ankr").with_label("⚓️ About Ankr")
            )]
        );
    }

    #[test]
    fn test_object_shorthand_sidebar_becomes_category() {
        let tree = parse(
            r#"{"communitySidebar": {"Community": [
                {"type": "category", "label": "👥 Community",
                 "link": {"type": "generated-index"}, "items": ["Community/channels"]}
            ]}}"#,
        )
        .unwrap();

        let items = &tree.sidebar("communitySidebar").unwrap().items;
        let expected = Category::new(
            "Community",
            vec![
                Category::new("👥 Community", vec![Node::doc("Community/channels")])
                    .with_generated_index()
                    .into(),
            ],
        );
        assert_eq!(items, &vec![Node::Category(expected)]);
    }

    #[test]
    fn test_shorthand_keeps_key_order() {
        let tree = parse(r#"{"s": {"Zeta": ["z"], "Alpha": ["a"], "Mid": ["m"]}}"#).unwrap();

        let labels: Vec<_> = tree.sidebar("s").unwrap().items.iter().map(Node::display_label).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_nested_shorthand_inside_items() {
        let tree = parse(r#"{"s": ["intro", {"Advanced": ["adv/a", "adv/b"]}, "outro"]}"#).unwrap();

        let items = &tree.sidebar("s").unwrap().items;
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].display_label(), "Advanced");
        assert_eq!(items[1].children().len(), 2);
    }

    #[test]
    fn test_missing_collapse_flags_use_defaults() {
        let tree = parse(r#"{"s": [{"type": "category", "label": "Guides", "items": []}]}"#).unwrap();

        let Node::Category(category) = &tree.sidebar("s").unwrap().items[0] else {
            panic!("expected category");
        };
        assert!(!category.collapsible);
        assert!(!category.collapsed);
    }

    #[test]
    fn test_explicit_collapse_flags_win() {
        let tree = parse(
            r#"{"s": [{"type": "category", "label": "Guides", "collapsible": true, "collapsed": true, "items": []}]}"#,
        )
        .unwrap();

        let Node::Category(category) = &tree.sidebar("s").unwrap().items[0] else {
            panic!("expected category");
        };
        assert!(category.collapsible);
        assert!(category.collapsed);
    }

    #[test]
    fn test_doc_link_and_keywords() {
        let tree = parse(
            r#"{"s": [{"type": "category", "label": "Guides",
                "link": {"type": "doc", "id": "guides/index"},
                "keywords": ["rpc", "api"], "items": ["guides/a"]}]}"#,
        )
        .unwrap();

        let Node::Category(category) = &tree.sidebar("s").unwrap().items[0] else {
            panic!("expected category");
        };
        assert_eq!(category.link_doc_id(), Some("guides/index"));
        assert_eq!(category.keywords, vec!["rpc", "api"]);
    }

    #[test]
    fn test_generated_index_keywords_fold_into_category() {
        let tree = parse(
            r#"{"s": [{"type": "category", "label": "Guides",
                "link": {"type": "generated-index", "title": "All guides", "keywords": ["howto"]},
                "items": []}]}"#,
        )
        .unwrap();

        let Node::Category(category) = &tree.sidebar("s").unwrap().items[0] else {
            panic!("expected category");
        };
        assert_eq!(category.keywords, vec!["howto"]);
        assert_eq!(
            category.link,
            Some(CategoryLink::GeneratedIndex {
                title: Some("All guides".to_owned()),
                description: None,
                slug: None,
            })
        );
    }

    #[test]
    fn test_duplicate_sidebar_key_fails() {
        let err = parse(r#"{"Build": [], "Build": ["a"]}"#).unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateSidebar {
                name: "Build".to_owned()
            }
        );
    }

    #[test]
    fn test_duplicate_shorthand_label_fails() {
        let err = parse(r#"{"s": {"Build": ["a"], "Build": ["b"]}}"#).unwrap_err();

        assert_eq!(
            err,
            SchemaError::InvalidShape {
                path: "s.Build".to_owned(),
                message: "duplicate key `Build`".to_owned(),
            }
        );
    }

    #[test]
    fn test_duplicate_category_field_fails() {
        let err = parse(
            r#"{"s": [{"type": "category", "label": "G", "items": ["a"], "items": ["b"]}]}"#,
        )
        .unwrap_err();

        assert!(matches!(err, SchemaError::InvalidShape { .. }));
        assert!(err.to_string().starts_with("s[0].items:"));
    }

    #[test]
    fn test_duplicate_link_field_fails() {
        let err = parse(
            r#"{"s": [{"type": "category", "label": "G", "items": [],
                "link": {"type": "doc", "id": "a", "id": "b"}}]}"#,
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("s[0].link.id:"));
    }

    #[test]
    fn test_duplicate_yaml_shorthand_label_fails() {
        let err = NavigationTree::from_yaml_str("s:\n  Build: [a]\n  Build: [b]\n").unwrap_err();

        assert_eq!(
            err,
            SchemaError::InvalidShape {
                path: "s.Build".to_owned(),
                message: "duplicate key `Build`".to_owned(),
            }
        );
    }

    #[test]
    fn test_empty_shorthand_label_reports_key_path() {
        let err = parse(r#"{"s": ["intro", {" ": ["a"]}]}"#).unwrap_err();

        assert_eq!(
            err,
            SchemaError::InvalidShape {
                path: "s[1]. ".to_owned(),
                message: "category label cannot be empty".to_owned(),
            }
        );
    }

    #[test]
    fn test_non_string_id_reports_path() {
        let err = parse(r#"{"buildSidebar": {"Build": ["ok", 42]}}"#).unwrap_err();

        assert!(matches!(err, SchemaError::InvalidShape { .. }));
        assert!(err.to_string().starts_with("buildSidebar.Build[1]:"));
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_missing_label_reports_path() {
        let err = parse(r#"{"s": ["a", {"type": "category", "items": []}]}"#).unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingField {
                path: "s[1]".to_owned(),
                field: "label",
            }
        );
    }

    #[test]
    fn test_missing_items_fails() {
        let err = parse(r#"{"s": [{"type": "category", "label": "Guides"}]}"#).unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingField {
                path: "s[0]".to_owned(),
                field: "items",
            }
        );
    }

    #[test]
    fn test_unknown_type_fails() {
        let err = parse(r#"{"s": [{"type": "link", "href": "https://example.com"}]}"#).unwrap_err();

        assert_eq!(
            err,
            SchemaError::UnknownType {
                path: "s[0]".to_owned(),
                found: "link".to_owned(),
            }
        );
    }

    #[test]
    fn test_wrong_collapsed_type_fails() {
        let err = parse(
            r#"{"s": [{"type": "category", "label": "G", "collapsed": "yes", "items": []}]}"#,
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("s[0].collapsed:"));
    }

    #[test]
    fn test_nested_error_path() {
        let err = parse(
            r#"{"s": [{"type": "category", "label": "G", "items": ["a", {"type": "doc"}]}]}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::MissingField {
                path: "s[0].items[1]".to_owned(),
                field: "id",
            }
        );
    }

    #[test]
    fn test_top_level_array_is_parse_error() {
        let err = parse(r#"["a", "b"]"#).unwrap_err();

        assert!(matches!(err, SchemaError::Parse { format: "JSON", .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse("{ not json").unwrap_err();

        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn test_yaml_input() {
        let yaml = r"
build:
  Build:
    - type: category
      label: Guides
      link:
        type: generated-index
      items:
        - Build/Guides/json-methods
        - Build/Guides/libraries
    - Build/Support/get-support
";
        let tree = NavigationTree::from_yaml_str(yaml).unwrap();

        let build = &tree.sidebar("build").unwrap().items[0];
        assert_eq!(build.display_label(), "Build");
        assert_eq!(build.children().len(), 2);
        assert_eq!(build.children()[1], Node::doc("Build/Support/get-support"));
    }
}
