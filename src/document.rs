//! The host-editor seam.
//!
//! The document tree is owned by the host editor. tablekit reads and
//! mutates it exclusively through [`DocumentRead`] and [`DocumentEdit`],
//! resolving nodes by stable key on every call and never retaining a
//! [`Node`] across calls — the tree may change between events.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Attribute keys this extension reads and writes on document nodes.
///
/// Spellings match the host document's serialized form.
pub mod attr {
    /// Number of grid rows a cell occupies (positive integer, missing = 1).
    pub const ROW_SPAN: &str = "rowspan";
    /// Number of grid columns a cell occupies (positive integer, missing = 1).
    pub const COL_SPAN: &str = "colspan";
    /// Boolean title marker on a row node.
    pub const IS_TITLE_ROW: &str = "isTitleRow";
    /// Boolean title marker on each cell of a logical column.
    pub const IS_TITLE_COLUMN: &str = "isTitleColumn";
    /// Background token on a cell while it is part of an active selection.
    pub const SELECTION_COLOR: &str = "selectionColor";
    /// Stored column width in pixels.
    pub const WIDTH: &str = "width";
}

/// Stable, tree-wide-unique node identity assigned by the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    /// Wrap a host-assigned key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A node's attribute map, as serialized by the host document.
///
/// Attributes are arbitrary JSON data; the typed accessors below read the
/// keys in [`attr`] and tolerate missing or malformed values. The
/// builder-style [`with`](Self::with) / [`without`](Self::without) /
/// [`toggled`](Self::toggled) produce updated copies that preserve every
/// other entry, which is what [`DocumentEdit::set_node`] expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an attribute map handed over by the host.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// The underlying map.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Raw attribute lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Row span carried by a cell; missing or invalid values count as 1.
    #[must_use]
    pub fn row_span(&self) -> usize {
        self.span(attr::ROW_SPAN)
    }

    /// Column span carried by a cell; missing or invalid values count as 1.
    #[must_use]
    pub fn col_span(&self) -> usize {
        self.span(attr::COL_SPAN)
    }

    fn span(&self, key: &str) -> usize {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
            .map_or(1, |v| v.max(1))
    }

    /// Title marker on a row node.
    #[must_use]
    pub fn is_title_row(&self) -> bool {
        self.flag(attr::IS_TITLE_ROW)
    }

    /// Title marker on a cell belonging to a title column.
    #[must_use]
    pub fn is_title_column(&self) -> bool {
        self.flag(attr::IS_TITLE_COLUMN)
    }

    fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Active selection background on a cell, if any.
    #[must_use]
    pub fn selection_color(&self) -> Option<&str> {
        self.0.get(attr::SELECTION_COLOR).and_then(Value::as_str)
    }

    /// Stored column width in pixels, if any.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.0.get(attr::WIDTH).and_then(Value::as_f64)
    }

    /// Copy with `key` set to `value`; all other entries preserved.
    #[must_use]
    pub fn with(&self, key: &str, value: impl Into<Value>) -> Self {
        let mut map = self.0.clone();
        map.insert(key.to_string(), value.into());
        Self(map)
    }

    /// Copy with `key` removed; all other entries preserved.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        let mut map = self.0.clone();
        map.remove(key);
        Self(map)
    }

    /// Copy with the boolean flag at `key` flipped (missing counts as false).
    #[must_use]
    pub fn toggled(&self, key: &str) -> Self {
        let current = self.flag(key);
        self.with(key, !current)
    }
}

/// Snapshot of one document node as handed out by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identity of this node.
    pub key: NodeKey,
    /// Runtime type tag, classified via [`crate::TableOptions::classify`].
    #[serde(rename = "type")]
    pub node_type: String,
    /// Attribute map.
    #[serde(default)]
    pub data: Attributes,
    /// Child node keys, in document order.
    #[serde(default)]
    pub children: Vec<NodeKey>,
}

impl Node {
    /// Replacement change that keeps this node's type tag and swaps its data.
    #[must_use]
    pub fn change_data(&self, data: Attributes) -> NodeChange {
        NodeChange {
            node_type: self.node_type.clone(),
            data,
        }
    }
}

/// Atomic type-tag and attribute-map replacement accepted by
/// [`DocumentEdit::set_node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeChange {
    /// New type tag.
    #[serde(rename = "type")]
    pub node_type: String,
    /// New attribute map.
    pub data: Attributes,
}

/// Read access to the host document tree.
pub trait DocumentRead {
    /// Resolve a node by key. `None` when the node no longer exists.
    fn node(&self, key: &NodeKey) -> Option<Node>;

    /// Parent of a node, `None` at the document root.
    fn parent(&self, key: &NodeKey) -> Option<NodeKey>;

    /// The sibling immediately following a node, `None` at the end.
    fn next_sibling(&self, key: &NodeKey) -> Option<Node>;

    /// Deepest node currently holding the cursor, `None` without a cursor.
    fn cursor(&self) -> Option<NodeKey>;
}

/// Mutation access to the host document tree and cursor.
pub trait DocumentEdit: DocumentRead {
    /// Replace a node's type tag and attribute map atomically.
    ///
    /// # Errors
    /// [`crate::TableError::NodeNotFound`] when the key no longer resolves.
    fn set_node(&mut self, key: &NodeKey, change: NodeChange) -> Result<()>;

    /// Excise a node (and its subtree) from the document.
    ///
    /// # Errors
    /// [`crate::TableError::NodeNotFound`] when the key no longer resolves.
    fn remove_node(&mut self, key: &NodeKey) -> Result<()>;

    /// Insert a text node at the current position.
    fn insert_text(&mut self, text: &str);

    /// Move the cursor to the start of the next text node.
    fn move_cursor_to_start_of_next_text(&mut self);

    /// Give the editor focus.
    fn focus(&mut self);

    /// Drop editor focus.
    fn blur(&mut self);

    /// Run `f` as one externally-visible change: intermediate states inside
    /// the scope are not separately persisted or observable.
    fn without_saving<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized;
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, Value)]) -> Attributes {
        let mut map = Map::new();
        for (k, v) in pairs {
            map.insert((*k).to_string(), v.clone());
        }
        Attributes::from_map(map)
    }

    #[test]
    fn spans_default_to_one() {
        let empty = Attributes::new();
        assert_eq!(empty.row_span(), 1);
        assert_eq!(empty.col_span(), 1);
    }

    #[test]
    fn spans_read_positive_integers() {
        let attrs = data(&[
            (attr::ROW_SPAN, Value::from(2)),
            (attr::COL_SPAN, Value::from(3)),
        ]);
        assert_eq!(attrs.row_span(), 2);
        assert_eq!(attrs.col_span(), 3);
    }

    #[test]
    fn invalid_spans_count_as_one() {
        // Zero, negative, fractional, and non-numeric spans all degrade to 1.
        assert_eq!(data(&[(attr::ROW_SPAN, Value::from(0))]).row_span(), 1);
        assert_eq!(data(&[(attr::ROW_SPAN, Value::from(-4))]).row_span(), 1);
        assert_eq!(data(&[(attr::COL_SPAN, Value::from(2.5))]).col_span(), 1);
        assert_eq!(data(&[(attr::COL_SPAN, Value::from("2"))]).col_span(), 1);
    }

    #[test]
    fn selection_color_ignores_null() {
        let cleared = data(&[(attr::SELECTION_COLOR, Value::Null)]);
        assert_eq!(cleared.selection_color(), None);
        let set = data(&[(attr::SELECTION_COLOR, Value::from("#B9D3FC"))]);
        assert_eq!(set.selection_color(), Some("#B9D3FC"));
    }

    #[test]
    fn with_and_toggled_preserve_other_entries() {
        let attrs = data(&[("custom", Value::from("kept")), (attr::WIDTH, Value::from(120))]);
        let toggled = attrs.toggled(attr::IS_TITLE_COLUMN);
        assert!(toggled.is_title_column());
        assert_eq!(toggled.get("custom"), Some(&Value::from("kept")));
        assert_eq!(toggled.width(), Some(120.0));

        let back = toggled.toggled(attr::IS_TITLE_COLUMN);
        assert!(!back.is_title_column());
        assert_eq!(back.get("custom"), Some(&Value::from("kept")));
    }

    #[test]
    fn node_change_keeps_type_tag() {
        let node = Node {
            key: NodeKey::from("c1"),
            node_type: "table_cell".to_string(),
            data: Attributes::new(),
            children: vec![],
        };
        let change = node.change_data(node.data.with(attr::IS_TITLE_COLUMN, true));
        assert_eq!(change.node_type, "table_cell");
        assert!(change.data.is_title_column());
    }
}
