//! Persist resized column widths onto document nodes.

use crate::document::{attr, DocumentEdit, NodeKey};
use crate::error::Result;

/// Write pixel widths onto the referenced nodes, preserving all other
/// attributes.
///
/// `widths` maps node keys, as reported by the host's resize widget, to
/// widths in pixels. Keys the document no longer knows are skipped — a
/// resize can race a structural edit. Returns the number of nodes updated.
///
/// # Errors
/// Propagates host-side failures from [`DocumentEdit::set_node`].
pub fn set_column_widths(
    doc: &mut impl DocumentEdit,
    widths: &[(NodeKey, f64)],
) -> Result<usize> {
    let mut updated = 0;
    for (key, width) in widths {
        let Some(node) = doc.node(key) else {
            continue;
        };
        let data = node.data.with(attr::WIDTH, *width);
        doc.set_node(key, node.change_data(data))?;
        updated += 1;
    }
    Ok(updated)
}
