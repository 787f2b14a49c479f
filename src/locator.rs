//! Context lookup: the enclosing table, row, or cell of a position.
//!
//! Ascent is a plain parent-walk over the host tree, matching node type
//! tags against the configured identifiers. The element variants walk the
//! rendering collaborator's tree instead, for gestures that start from an
//! on-screen target rather than the cursor.

use crate::document::{DocumentRead, Node, NodeKey};
use crate::options::{NodeKind, TableOptions};

/// A node in the rendering collaborator's element tree.
///
/// The renderer tags the elements it creates with the document node they
/// render; ascending over this seam maps an arbitrary on-screen element (a
/// text span deep inside a cell, say) back to the owning cell. tablekit
/// performs no rendering itself — the host supplies the implementation.
pub trait RenderedElement {
    /// The document node this element renders, when the renderer tagged one.
    fn node_key(&self) -> Option<NodeKey>;

    /// Parent element, `None` at the rendered root.
    fn parent(&self) -> Option<Self>
    where
        Self: Sized;
}

/// Nearest table enclosing the cursor.
#[must_use]
pub fn current_table(doc: &impl DocumentRead, opts: &TableOptions) -> Option<Node> {
    current_table_at(doc, opts, &doc.cursor()?)
}

/// Nearest row enclosing the cursor.
#[must_use]
pub fn current_row(doc: &impl DocumentRead, opts: &TableOptions) -> Option<Node> {
    current_row_at(doc, opts, &doc.cursor()?)
}

/// Nearest cell enclosing the cursor.
#[must_use]
pub fn current_cell(doc: &impl DocumentRead, opts: &TableOptions) -> Option<Node> {
    current_cell_at(doc, opts, &doc.cursor()?)
}

/// Nearest table enclosing an explicit position.
#[must_use]
pub fn current_table_at(
    doc: &impl DocumentRead,
    opts: &TableOptions,
    position: &NodeKey,
) -> Option<Node> {
    ascend(doc, opts, position, NodeKind::Table)
}

/// Nearest row enclosing an explicit position.
#[must_use]
pub fn current_row_at(
    doc: &impl DocumentRead,
    opts: &TableOptions,
    position: &NodeKey,
) -> Option<Node> {
    ascend(doc, opts, position, NodeKind::Row)
}

/// Nearest cell enclosing an explicit position.
#[must_use]
pub fn current_cell_at(
    doc: &impl DocumentRead,
    opts: &TableOptions,
    position: &NodeKey,
) -> Option<Node> {
    ascend(doc, opts, position, NodeKind::Cell)
}

/// Map an on-screen element back to the owning cell.
///
/// Walks the rendered ancestry starting at `element` itself; the first
/// ancestor whose tagged node key resolves to a cell-classified document
/// node wins. `None` when the ancestry leaves the rendered root without
/// touching a cell.
#[must_use]
pub fn find_cell_by_element<E: RenderedElement>(
    doc: &impl DocumentRead,
    opts: &TableOptions,
    element: E,
) -> Option<Node> {
    let mut current = Some(element);
    while let Some(el) = current {
        if let Some(key) = el.node_key() {
            if let Some(node) = doc.node(&key) {
                if opts.classify(&node.node_type) == NodeKind::Cell {
                    return Some(node);
                }
            }
        }
        current = el.parent();
    }
    None
}

/// Parent-walk from `start` (inclusive) to the nearest node of `kind`.
fn ascend(
    doc: &impl DocumentRead,
    opts: &TableOptions,
    start: &NodeKey,
    kind: NodeKind,
) -> Option<Node> {
    let mut key = start.clone();
    loop {
        if let Some(node) = doc.node(&key) {
            if opts.classify(&node.node_type) == kind {
                return Some(node);
            }
        }
        key = doc.parent(&key)?;
    }
}
