//! Whole-row/column and table-level mutations issued against the host
//! editor.
//!
//! Every helper locates its context fresh from the cursor, rebuilds the
//! grid where column math is needed, and degrades to
//! [`MutationOutcome::NotApplicable`] when the cursor is not inside a
//! table — absent context is a normal no-op, never an error.

mod column_width;
mod remove_table;
mod title_column;
mod title_row;

pub use column_width::set_column_widths;
pub use remove_table::remove_table;
pub use title_column::toggle_title_column;
pub use title_row::toggle_title_row;

/// Whether a mutation found anything to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The mutation changed the document.
    Applied,
    /// Nothing to do at the current position.
    NotApplicable,
}

impl MutationOutcome {
    /// True when the mutation changed the document.
    #[must_use]
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
