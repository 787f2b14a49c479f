//! Toggle the title marker on the logical column under the cursor.

use log::debug;

use crate::document::{attr, DocumentEdit};
use crate::error::Result;
use crate::grid::Grid;
use crate::locator;
use crate::options::TableOptions;

use super::MutationOutcome;

/// Flip `isTitleColumn` on every cell of the logical column containing the
/// cursor, spans included.
///
/// Each distinct cell flips exactly once — a cell whose row span makes it
/// occupy several rows of the column would otherwise cancel itself out. All
/// other attributes are preserved.
///
/// # Errors
/// [`crate::TableError::MalformedGrid`] when the table's spans are
/// inconsistent; nothing is mutated in that case. Host-side failures from
/// [`DocumentEdit::set_node`] propagate.
pub fn toggle_title_column(
    doc: &mut impl DocumentEdit,
    opts: &TableOptions,
) -> Result<MutationOutcome> {
    let Some(table) = locator::current_table(doc, opts) else {
        debug!("toggle_title_column: no table in context");
        return Ok(MutationOutcome::NotApplicable);
    };
    let Some(cell) = locator::current_cell(doc, opts) else {
        debug!("toggle_title_column: no cell in context");
        return Ok(MutationOutcome::NotApplicable);
    };

    let grid = Grid::build(doc, opts, &table.key)?;
    let column = grid.column_index(&cell.key)?;

    for key in grid.column_cells(column) {
        let Some(cell) = doc.node(&key) else {
            continue;
        };
        let data = cell.data.toggled(attr::IS_TITLE_COLUMN);
        doc.set_node(&key, cell.change_data(data))?;
    }
    Ok(MutationOutcome::Applied)
}
