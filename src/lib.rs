//! tablekit - table grid model and selection engine for rich-text editors.
//!
//! A document may contain grid-structured content: table nodes holding
//! rows, rows holding cells, cells carrying `rowspan`/`colspan` attributes.
//! This crate owns the logic that makes such content editable:
//!
//! - [`grid`] reconstructs the logical (row, column) matrix from a table
//!   subtree, expanding merged cells into every slot they occupy
//! - [`locator`] resolves the table/row/cell context of the cursor, an
//!   explicit position, or an on-screen element
//! - [`selection`] computes the minimal whole-cell rectangle between two
//!   cells and maintains the anchor/focus state of a drag gesture
//! - [`mutations`] toggles title rows and columns, removes tables, and
//!   persists resized column widths
//! - [`render`] feeds per-node visual attributes to the rendering layer
//!
//! The document tree is owned by the host editor and reached through the
//! [`DocumentRead`]/[`DocumentEdit`] traits; nodes are re-resolved by
//! stable key on every call. Grids are rebuilt per query and never cached
//! across mutations.

pub mod document;
pub mod error;
pub mod grid;
pub mod locator;
pub mod mutations;
pub mod options;
pub mod render;
pub mod selection;

pub use document::{attr, Attributes, DocumentEdit, DocumentRead, Node, NodeChange, NodeKey};
pub use error::{Result, TableError};
pub use grid::{CellExtent, Grid, GridSlot};
pub use locator::{
    current_cell, current_cell_at, current_row, current_row_at, current_table, current_table_at,
    find_cell_by_element, RenderedElement,
};
pub use mutations::{
    remove_table, set_column_widths, toggle_title_column, toggle_title_row, MutationOutcome,
};
pub use options::{NodeKind, TableOptions};
pub use render::{cell_visual, row_visual, table_visual, CellVisual, RowVisual, TableVisual};
pub use selection::{
    clear_selection_marks, selected_cells, update_cell_selection, SelectionState, SelectionUpdate,
};
