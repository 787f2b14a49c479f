//! Configuration handed to the table extension by the host editor.
//!
//! The host document classifies nodes by a runtime type tag rather than a
//! fixed hierarchy, so the tags to look for are configuration, not
//! constants. The style tokens and base style maps are consumed by the
//! rendering collaborator via [`crate::render`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Classification of a document node against the configured type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A table node holding row children.
    Table,
    /// A row node holding cell children.
    Row,
    /// A cell node; carries span and title attributes.
    Cell,
    /// The content block inside a cell.
    Content,
    /// Anything else in the document.
    Other,
}

/// Recognized options for the table extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    /// Node-type tag marking a cell node.
    pub type_cell: String,
    /// Node-type tag marking a row node.
    pub type_row: String,
    /// Node-type tag marking a table node.
    pub type_table: String,
    /// Node-type tag marking the content block inside a cell.
    pub type_content: String,
    /// Background token painted on selected cells.
    pub selection_color: String,
    /// Background token painted on title rows and columns.
    pub title_color: String,
    /// Base visual attributes for cells.
    pub cell_style: Map<String, Value>,
    /// Base visual attributes for rows.
    pub row_style: Map<String, Value>,
    /// Base visual attributes for the table itself.
    pub table_style: Map<String, Value>,
    /// Fallback column width in pixels for cells that store none.
    pub default_column_width: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        let mut cell_style = Map::new();
        cell_style.insert("padding".to_string(), Value::from("3px"));
        Self {
            type_cell: "table_cell".to_string(),
            type_row: "table_row".to_string(),
            type_table: "table".to_string(),
            type_content: "table_content".to_string(),
            selection_color: "#B9D3FC".to_string(),
            title_color: "#EEEEEE".to_string(),
            cell_style,
            row_style: Map::new(),
            table_style: Map::new(),
            default_column_width: 15.0,
        }
    }
}

impl TableOptions {
    /// Classify a node's declared type tag against the configured identifiers.
    #[must_use]
    pub fn classify(&self, type_tag: &str) -> NodeKind {
        if type_tag == self.type_table {
            NodeKind::Table
        } else if type_tag == self.type_row {
            NodeKind::Row
        } else if type_tag == self.type_cell {
            NodeKind::Cell
        } else if type_tag == self.type_content {
            NodeKind::Content
        } else {
            NodeKind::Other
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = TableOptions::default();
        assert_eq!(opts.type_cell, "table_cell");
        assert_eq!(opts.type_row, "table_row");
        assert_eq!(opts.type_table, "table");
        assert_eq!(opts.type_content, "table_content");
        assert_eq!(opts.selection_color, "#B9D3FC");
        assert_eq!(opts.title_color, "#EEEEEE");
        assert_eq!(opts.cell_style.get("padding"), Some(&Value::from("3px")));
        assert!(opts.row_style.is_empty());
        assert!((opts.default_column_width - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn classify_resolves_configured_tags() {
        let opts = TableOptions::default();
        assert_eq!(opts.classify("table"), NodeKind::Table);
        assert_eq!(opts.classify("table_row"), NodeKind::Row);
        assert_eq!(opts.classify("table_cell"), NodeKind::Cell);
        assert_eq!(opts.classify("table_content"), NodeKind::Content);
        assert_eq!(opts.classify("paragraph"), NodeKind::Other);
    }

    #[test]
    fn classify_honors_custom_tags() {
        let opts = TableOptions {
            type_cell: "td".to_string(),
            type_table: "tbl".to_string(),
            ..TableOptions::default()
        };
        assert_eq!(opts.classify("td"), NodeKind::Cell);
        assert_eq!(opts.classify("tbl"), NodeKind::Table);
        // The default tags are no longer recognized once overridden.
        assert_eq!(opts.classify("table_cell"), NodeKind::Other);
    }

    #[test]
    fn options_roundtrip_as_camel_case_json() {
        let opts = TableOptions::default();
        let json = serde_json::to_value(&opts).unwrap();
        assert!(json.get("typeCell").is_some());
        assert!(json.get("selectionColor").is_some());
        assert!(json.get("defaultColumnWidth").is_some());
        let back: TableOptions = serde_json::from_value(json).unwrap();
        assert_eq!(back.type_cell, opts.type_cell);
        assert_eq!(back.selection_color, opts.selection_color);
    }
}
