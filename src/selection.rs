//! Rectangular multi-cell selection.
//!
//! [`selected_cells`] is the pure rectangle engine: given an anchor and a
//! focus cell it computes the smallest grid-aligned rectangle containing
//! both that consists only of whole cells. [`SelectionState`] is the
//! session-scoped anchor/focus store for an in-progress drag gesture, and
//! [`update_cell_selection`] / [`clear_selection_marks`] write the
//! resulting `selectionColor` marks back to the host document.

use std::collections::HashSet;

use log::trace;
use serde_json::Value;

use crate::document::{attr, DocumentEdit, NodeKey};
use crate::error::Result;
use crate::grid::Grid;
use crate::locator;
use crate::mutations::MutationOutcome;
use crate::options::{NodeKind, TableOptions};

/// Anchor/focus store for an in-progress drag selection.
///
/// Lifecycle: [`begin`](Self::begin) on mouse-down over a cell,
/// [`focus_on`](Self::focus_on) as the drag enters further cells,
/// [`end`](Self::end) on mouse-up (the painted range stays), and
/// [`clear`](Self::clear) when the interaction leaves the table or a grid
/// rebuild fails — stale coordinates must never outlive the tree state they
/// were computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    anchor: Option<NodeKey>,
    focus: Option<NodeKey>,
    selecting: bool,
}

impl SelectionState {
    /// Fresh, inactive state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor the gesture at a cell and enter cell-selecting mode.
    pub fn begin(&mut self, anchor: NodeKey) {
        self.anchor = Some(anchor);
        self.focus = None;
        self.selecting = true;
    }

    /// Record the cell the drag currently hovers.
    pub fn focus_on(&mut self, focus: NodeKey) {
        self.focus = Some(focus);
    }

    /// Leave cell-selecting mode, keeping the anchored range.
    pub fn end(&mut self) {
        self.selecting = false;
    }

    /// Drop all gesture state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// First-picked cell of the gesture, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&NodeKey> {
        self.anchor.as_ref()
    }

    /// Currently hovered cell of the gesture, if any.
    #[must_use]
    pub fn focus(&self) -> Option<&NodeKey> {
        self.focus.as_ref()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }
}

/// Result of applying a selection gesture update to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// Marks were written; carries the selected cells, row-major.
    Applied(Vec<NodeKey>),
    /// The grid could not be rebuilt or an endpoint went stale. The gesture
    /// state has been cleared; the interaction ends without an effect.
    Aborted,
    /// No active gesture or no table in context; nothing to do.
    NotApplicable,
}

/// Compute the cells covered by the rectangle between `anchor` and `focus`.
///
/// Starts from the bounding box of the two cells' full extents, then grows
/// to a fixed point: any cell whose extent intersects the box is pulled in
/// whole. A cell merely adjacent to the box — sharing its row or column
/// range without occupying a slot inside it — does not expand it. The box
/// only grows and is bounded by the grid, so the loop terminates.
///
/// Returns distinct cell identities, row-major by top-left origin.
///
/// # Errors
/// [`crate::TableError::CellNotFound`] when either endpoint is absent from
/// `grid` (stale reference after a structural edit).
pub fn selected_cells(grid: &Grid, anchor: &NodeKey, focus: &NodeKey) -> Result<Vec<NodeKey>> {
    let mut bounds = grid.extent_of(anchor)?.union(grid.extent_of(focus)?);
    loop {
        let mut grew = false;
        for slot in grid.cells() {
            let extent = slot.extent();
            if extent.intersects(bounds) && !bounds.contains(extent) {
                bounds = bounds.union(extent);
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }
    Ok(grid
        .cells()
        .filter(|slot| bounds.contains_point(slot.origin_row, slot.origin_col))
        .map(|slot| slot.key.clone())
        .collect())
}

/// Advance the drag gesture to `focus` and repaint selection marks.
///
/// Rebuilds the grid for the table enclosing the anchor, computes the
/// selected set, and — inside one [`DocumentEdit::without_saving`] scope —
/// writes `selectionColor` onto every selected cell and nulls it on every
/// other cell of the table, so intermediate states are never separately
/// observable. A failed rebuild or a stale endpoint clears the gesture
/// state and reports [`SelectionUpdate::Aborted`] without mutating the
/// document.
///
/// # Errors
/// Only host-side failures ([`crate::TableError::NodeNotFound`]) propagate;
/// structural problems are absorbed into [`SelectionUpdate::Aborted`].
pub fn update_cell_selection<D: DocumentEdit>(
    doc: &mut D,
    opts: &TableOptions,
    state: &mut SelectionState,
    focus: NodeKey,
) -> Result<SelectionUpdate> {
    let Some(anchor) = state.anchor().cloned() else {
        return Ok(SelectionUpdate::NotApplicable);
    };
    if !state.is_selecting() {
        return Ok(SelectionUpdate::NotApplicable);
    }
    let Some(table) = locator::current_table_at(doc, opts, &anchor) else {
        state.clear();
        return Ok(SelectionUpdate::Aborted);
    };

    let grid = match Grid::build(doc, opts, &table.key) {
        Ok(grid) => grid,
        Err(err) => {
            trace!("selection aborted, grid rebuild failed: {err}");
            state.clear();
            return Ok(SelectionUpdate::Aborted);
        }
    };
    let selected = match selected_cells(&grid, &anchor, &focus) {
        Ok(selected) => selected,
        Err(err) => {
            trace!("selection aborted, stale endpoint: {err}");
            state.clear();
            return Ok(SelectionUpdate::Aborted);
        }
    };
    state.focus_on(focus);

    let chosen: HashSet<&NodeKey> = selected.iter().collect();
    doc.without_saving(|doc| -> Result<()> {
        for slot in grid.cells() {
            let Some(cell) = doc.node(&slot.key) else {
                continue;
            };
            let data = if chosen.contains(&slot.key) {
                cell.data
                    .with(attr::SELECTION_COLOR, opts.selection_color.as_str())
            } else {
                cell.data.with(attr::SELECTION_COLOR, Value::Null)
            };
            doc.set_node(&slot.key, cell.change_data(data))?;
        }
        Ok(())
    })?;

    Ok(SelectionUpdate::Applied(selected))
}

/// Remove every `selectionColor` mark from the table under the cursor.
///
/// Walks the tree directly rather than the grid, so marks clear even when
/// the table's spans have become inconsistent. All writes happen in one
/// [`DocumentEdit::without_saving`] scope.
///
/// # Errors
/// Only host-side failures ([`crate::TableError::NodeNotFound`]) propagate.
pub fn clear_selection_marks<D: DocumentEdit>(
    doc: &mut D,
    opts: &TableOptions,
) -> Result<MutationOutcome> {
    let Some(table) = locator::current_table(doc, opts) else {
        return Ok(MutationOutcome::NotApplicable);
    };

    let cells: Vec<NodeKey> = table
        .children
        .iter()
        .filter_map(|key| doc.node(key))
        .filter(|node| opts.classify(&node.node_type) == NodeKind::Row)
        .flat_map(|row| row.children)
        .filter(|key| {
            doc.node(key)
                .is_some_and(|node| opts.classify(&node.node_type) == NodeKind::Cell)
        })
        .collect();

    doc.without_saving(|doc| -> Result<()> {
        for key in &cells {
            let Some(cell) = doc.node(key) else {
                continue;
            };
            if cell.data.get(attr::SELECTION_COLOR).is_none() {
                continue;
            }
            let data = cell.data.without(attr::SELECTION_COLOR);
            doc.set_node(key, cell.change_data(data))?;
        }
        Ok(())
    })?;

    Ok(MutationOutcome::Applied)
}
