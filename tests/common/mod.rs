//! Common test utilities: an in-memory host editor and table fixtures.
//!
//! `EditorDoc` is a minimal stand-in for the host editor's document tree.
//! It stores nodes flat with parent links, tracks the cursor, and counts
//! persisted change points so tests can assert that batched writes are not
//! separately observable.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::HashMap;

use tablekit::{
    Attributes, DocumentEdit, DocumentRead, Node, NodeChange, NodeKey, RenderedElement, Result,
    TableError, TableOptions,
};

/// Node-type tag used for text anchors in fixtures.
pub const TEXT_TYPE: &str = "text";

#[derive(Debug, Clone)]
struct StoredNode {
    node_type: String,
    data: Attributes,
    children: Vec<NodeKey>,
    parent: Option<NodeKey>,
}

/// In-memory host editor document.
#[derive(Debug, Default)]
pub struct EditorDoc {
    nodes: HashMap<NodeKey, StoredNode>,
    roots: Vec<NodeKey>,
    cursor: Option<NodeKey>,
    /// Whether the editor currently has focus.
    pub focused: bool,
    /// Externally-visible change points; writes inside `without_saving`
    /// do not count.
    pub persisted_changes: usize,
    in_batch: bool,
    /// Text inserted via `insert_text`, in order.
    pub inserted_texts: Vec<String>,
    /// Number of `move_cursor_to_start_of_next_text` calls.
    pub cursor_moves: usize,
    next_generated: usize,
}

impl EditorDoc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the document root.
    pub fn add_root(&mut self, key: &str, node_type: &str, data: Attributes) -> NodeKey {
        let key = NodeKey::from(key);
        self.nodes.insert(
            key.clone(),
            StoredNode {
                node_type: node_type.to_string(),
                data,
                children: Vec::new(),
                parent: None,
            },
        );
        self.roots.push(key.clone());
        key
    }

    /// Add a node as the last child of `parent`.
    pub fn add_child(
        &mut self,
        parent: &NodeKey,
        key: &str,
        node_type: &str,
        data: Attributes,
    ) -> NodeKey {
        let key = NodeKey::from(key);
        self.nodes.insert(
            key.clone(),
            StoredNode {
                node_type: node_type.to_string(),
                data,
                children: Vec::new(),
                parent: Some(parent.clone()),
            },
        );
        self.nodes
            .get_mut(parent)
            .expect("parent node must exist")
            .children
            .push(key.clone());
        key
    }

    pub fn set_cursor(&mut self, key: &NodeKey) {
        self.cursor = Some(key.clone());
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor_key(&self) -> Option<&NodeKey> {
        self.cursor.as_ref()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Attribute map of a node; panics when the node is missing.
    pub fn data_of(&self, key: &NodeKey) -> &Attributes {
        &self.nodes.get(key).expect("node must exist").data
    }

    pub fn type_of(&self, key: &NodeKey) -> &str {
        &self.nodes.get(key).expect("node must exist").node_type
    }

    fn record_change(&mut self) {
        if !self.in_batch {
            self.persisted_changes += 1;
        }
    }

    fn remove_subtree(&mut self, key: &NodeKey) {
        if let Some(node) = self.nodes.remove(key) {
            for child in node.children {
                self.remove_subtree(&child);
            }
        }
    }
}

impl DocumentRead for EditorDoc {
    fn node(&self, key: &NodeKey) -> Option<Node> {
        self.nodes.get(key).map(|stored| Node {
            key: key.clone(),
            node_type: stored.node_type.clone(),
            data: stored.data.clone(),
            children: stored.children.clone(),
        })
    }

    fn parent(&self, key: &NodeKey) -> Option<NodeKey> {
        self.nodes.get(key)?.parent.clone()
    }

    fn next_sibling(&self, key: &NodeKey) -> Option<Node> {
        let siblings = match self.nodes.get(key)?.parent.as_ref() {
            Some(parent) => &self.nodes.get(parent)?.children,
            None => &self.roots,
        };
        let index = siblings.iter().position(|k| k == key)?;
        self.node(siblings.get(index + 1)?)
    }

    fn cursor(&self) -> Option<NodeKey> {
        self.cursor.clone()
    }
}

impl DocumentEdit for EditorDoc {
    fn set_node(&mut self, key: &NodeKey, change: NodeChange) -> Result<()> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or_else(|| TableError::NodeNotFound(key.clone()))?;
        node.node_type = change.node_type;
        node.data = change.data;
        self.record_change();
        Ok(())
    }

    fn remove_node(&mut self, key: &NodeKey) -> Result<()> {
        let parent = self
            .nodes
            .get(key)
            .ok_or_else(|| TableError::NodeNotFound(key.clone()))?
            .parent
            .clone();
        match parent {
            Some(parent_key) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent_key) {
                    parent_node.children.retain(|k| k != key);
                }
            }
            None => self.roots.retain(|k| k != key),
        }
        self.remove_subtree(key);
        if self
            .cursor
            .as_ref()
            .is_some_and(|c| !self.nodes.contains_key(c))
        {
            self.cursor = None;
        }
        self.record_change();
        Ok(())
    }

    fn insert_text(&mut self, text: &str) {
        let key = format!("text-{}", self.next_generated);
        self.next_generated += 1;
        self.add_root(&key, TEXT_TYPE, Attributes::new());
        self.inserted_texts.push(text.to_string());
        self.record_change();
    }

    fn move_cursor_to_start_of_next_text(&mut self) {
        let start = self
            .cursor
            .as_ref()
            .and_then(|c| self.roots.iter().position(|k| k == c))
            .map_or(0, |i| i + 1);
        let next_text = self
            .roots
            .iter()
            .skip(start)
            .find(|k| self.nodes.get(*k).is_some_and(|n| n.node_type == TEXT_TYPE))
            .cloned();
        if let Some(key) = next_text {
            self.cursor = Some(key);
        }
        self.cursor_moves += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn without_saving<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let was_batched = self.in_batch;
        self.in_batch = true;
        let result = f(self);
        self.in_batch = was_batched;
        result
    }
}

// ============================================================================
// Table fixtures
// ============================================================================

/// Declarative cell for [`TableBuilder`].
#[derive(Debug, Clone, Copy)]
pub struct CellSpec {
    key: &'static str,
    row_span: usize,
    col_span: usize,
}

/// A unit-span cell with the given key.
pub fn c(key: &'static str) -> CellSpec {
    CellSpec {
        key,
        row_span: 1,
        col_span: 1,
    }
}

impl CellSpec {
    /// Set the cell's row span.
    #[must_use]
    pub fn rows(mut self, row_span: usize) -> Self {
        self.row_span = row_span;
        self
    }

    /// Set the cell's column span.
    #[must_use]
    pub fn cols(mut self, col_span: usize) -> Self {
        self.col_span = col_span;
        self
    }
}

/// Builds a table subtree into an [`EditorDoc`] using the default type
/// tags. Rows get keys `{table}-r{i}`, and each cell gets a content child
/// `{cell}-p` so cursor tests can start below cell granularity.
#[derive(Debug)]
pub struct TableBuilder {
    key: &'static str,
    rows: Vec<Vec<CellSpec>>,
}

impl TableBuilder {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn row(mut self, cells: Vec<CellSpec>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn build(self, doc: &mut EditorDoc) -> NodeKey {
        let opts = TableOptions::default();
        let table = doc.add_root(self.key, &opts.type_table, Attributes::new());
        for (i, row) in self.rows.into_iter().enumerate() {
            let row_key = doc.add_child(
                &table,
                &format!("{}-r{i}", self.key),
                &opts.type_row,
                Attributes::new(),
            );
            for spec in row {
                let mut data = Attributes::new();
                if spec.row_span > 1 {
                    data = data.with(tablekit::attr::ROW_SPAN, spec.row_span);
                }
                if spec.col_span > 1 {
                    data = data.with(tablekit::attr::COL_SPAN, spec.col_span);
                }
                let cell = doc.add_child(&row_key, spec.key, &opts.type_cell, data);
                doc.add_child(
                    &cell,
                    &format!("{}-p", spec.key),
                    &opts.type_content,
                    Attributes::new(),
                );
            }
        }
        table
    }
}

/// Shorthand for a [`NodeKey`].
pub fn key(s: &str) -> NodeKey {
    NodeKey::from(s)
}

/// Place the cursor inside the content block of a cell.
pub fn cursor_into(doc: &mut EditorDoc, cell: &str) {
    let content = key(&format!("{cell}-p"));
    doc.set_cursor(&content);
}

// ============================================================================
// Rendered-element fixtures
// ============================================================================

/// Minimal rendered-element tree for element-ascent tests.
#[derive(Debug, Clone)]
pub struct RenderedEl {
    key: Option<NodeKey>,
    parent: Option<Box<RenderedEl>>,
}

impl RenderedEl {
    /// Root element, optionally tagged with a document node key.
    pub fn root(key: Option<&str>) -> Self {
        Self {
            key: key.map(NodeKey::from),
            parent: None,
        }
    }

    /// New element whose parent is `self`.
    #[must_use]
    pub fn child(self, key: Option<&str>) -> Self {
        Self {
            key: key.map(NodeKey::from),
            parent: Some(Box::new(self)),
        }
    }
}

impl RenderedElement for RenderedEl {
    fn node_key(&self) -> Option<NodeKey> {
        self.key.clone()
    }

    fn parent(&self) -> Option<Self> {
        self.parent.as_deref().cloned()
    }
}
