//! Structured error types for tablekit.
//!
//! Absent context (no enclosing table/row/cell at the queried position) is
//! deliberately not represented here: locators return `Option` and mutation
//! helpers report [`crate::MutationOutcome::NotApplicable`] instead.

use crate::document::NodeKey;

/// All errors that can occur while building grids or resolving cells.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Structural inconsistency in the table: rows expand to different
    /// column counts, or a cell's span overruns the matrix. Not recoverable;
    /// the operation aborts without mutating anything.
    #[error("malformed table grid: {0}")]
    MalformedGrid(String),

    /// A referenced cell is absent from a freshly built grid. Expected when
    /// the tree changed mid-gesture; callers clear any in-progress selection
    /// state and abort the current interaction.
    #[error("cell {0} not found in grid")]
    CellNotFound(NodeKey),

    /// A node key could not be resolved by the host document.
    #[error("node {0} not found in document")]
    NodeNotFound(NodeKey),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
