//! Excise the table under the cursor.

use log::debug;

use crate::document::DocumentEdit;
use crate::error::Result;
use crate::locator;
use crate::options::TableOptions;

use super::MutationOutcome;

/// Node-type tag of the caption block that may trail a table.
const CAPTION_TYPE: &str = "caption";

/// Remove the table enclosing the cursor from the document.
///
/// A `caption`-typed sibling immediately following the table is removed
/// with it. When the table has no following sibling at all, an empty text
/// node is inserted after removal and the cursor moves to its start — the
/// document must never be left without a trailing text anchor.
///
/// # Errors
/// Propagates host-side failures from [`DocumentEdit::remove_node`].
pub fn remove_table(doc: &mut impl DocumentEdit, opts: &TableOptions) -> Result<MutationOutcome> {
    let Some(table) = locator::current_table(doc, opts) else {
        debug!("remove_table: no table in context");
        return Ok(MutationOutcome::NotApplicable);
    };

    match doc.next_sibling(&table.key) {
        None => {
            doc.remove_node(&table.key)?;
            doc.insert_text("");
            doc.move_cursor_to_start_of_next_text();
            doc.focus();
        }
        Some(next) if next.node_type == CAPTION_TYPE => {
            doc.remove_node(&table.key)?;
            doc.remove_node(&next.key)?;
        }
        Some(_) => {
            doc.remove_node(&table.key)?;
        }
    }
    Ok(MutationOutcome::Applied)
}
