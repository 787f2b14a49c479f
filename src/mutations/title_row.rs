//! Toggle the title marker on the row under the cursor.

use log::debug;

use crate::document::{attr, DocumentEdit};
use crate::error::Result;
use crate::locator;
use crate::options::TableOptions;

use super::MutationOutcome;

/// Flip `isTitleRow` on the row enclosing the cursor, preserving all other
/// attributes.
///
/// # Errors
/// Propagates host-side failures from [`DocumentEdit::set_node`].
pub fn toggle_title_row(doc: &mut impl DocumentEdit, opts: &TableOptions) -> Result<MutationOutcome> {
    let Some(row) = locator::current_row(doc, opts) else {
        debug!("toggle_title_row: no row in context");
        return Ok(MutationOutcome::NotApplicable);
    };
    let data = row.data.toggled(attr::IS_TITLE_ROW);
    doc.set_node(&row.key, row.change_data(data))?;
    Ok(MutationOutcome::Applied)
}
