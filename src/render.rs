//! Visual attributes for the rendering collaborator.
//!
//! The rendering layer owns markup and event wiring; it asks this module
//! which visual attributes each node should carry and performs no grid or
//! selection computation of its own. Everything here is a pure read of
//! node attributes against the configured style tokens, so it stays
//! testable without any rendering backend.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::Node;
use crate::options::TableOptions;

/// Visual attributes for a table node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableVisual {
    /// Base style map from the configuration.
    pub style: Map<String, Value>,
}

/// Visual attributes for a row node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowVisual {
    /// Base style map from the configuration.
    pub style: Map<String, Value>,
    /// Title background, set when the row carries `isTitleRow`.
    pub background: Option<String>,
}

/// Visual attributes for a cell node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellVisual {
    /// Base style map from the configuration.
    pub style: Map<String, Value>,
    /// Background token; selection wins over title styling.
    pub background: Option<String>,
    /// Row span for merge-aware rendering.
    pub row_span: usize,
    /// Column span for merge-aware rendering.
    pub col_span: usize,
    /// Column width in pixels, falling back to the configured default.
    pub width: f64,
}

/// Visual attributes for a table node.
#[must_use]
pub fn table_visual(opts: &TableOptions) -> TableVisual {
    TableVisual {
        style: opts.table_style.clone(),
    }
}

/// Visual attributes for a row node.
#[must_use]
pub fn row_visual(opts: &TableOptions, row: &Node) -> RowVisual {
    RowVisual {
        style: opts.row_style.clone(),
        background: row
            .data
            .is_title_row()
            .then(|| opts.title_color.clone()),
    }
}

/// Visual attributes for a cell node inside its owning row.
///
/// Background precedence: an active `selectionColor` mark, then title
/// styling (the cell's own `isTitleColumn` or the row's `isTitleRow`),
/// then none.
#[must_use]
pub fn cell_visual(opts: &TableOptions, row: &Node, cell: &Node) -> CellVisual {
    let background = cell
        .data
        .selection_color()
        .map(str::to_string)
        .or_else(|| {
            (cell.data.is_title_column() || row.data.is_title_row())
                .then(|| opts.title_color.clone())
        });
    CellVisual {
        style: opts.cell_style.clone(),
        background,
        row_span: cell.data.row_span(),
        col_span: cell.data.col_span(),
        width: cell.data.width().unwrap_or(opts.default_column_width),
    }
}
