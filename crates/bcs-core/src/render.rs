//! Result rendering policy for the data item matrix.
//!
//! Pure display formatting: a [`DataItem`] becomes a [`MatrixRow`] with a
//! Name cell and a Description cell. Long descriptions are truncated to a
//! preview and marked hover-expandable; the full text is only revealed on
//! hover/focus, never inline. Names are plain text.

use bcs_model::DataItem;

/// Descriptions of this length or longer are truncated to a preview.
pub const DESCRIPTION_PREVIEW_LIMIT: usize = 120;

/// Marker appended to a truncated preview.
pub const TRUNCATION_MARKER: &str = "...";

/// One rendered table row: a plain-text name and a description cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub name: String,
    pub description: DescriptionCell,
}

/// Display form of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionCell {
    /// Short description, shown verbatim with no marker.
    Inline(String),
    /// Long description: `preview` is shown inline, `full` on hover/focus.
    Expandable { preview: String, full: String },
}

impl DescriptionCell {
    /// The text shown inline in the cell.
    pub fn visible_text(&self) -> &str {
        match self {
            Self::Inline(text) => text,
            Self::Expandable { preview, .. } => preview,
        }
    }

    /// Whether the cell reveals more text on hover/focus.
    pub fn is_expandable(&self) -> bool {
        matches!(self, Self::Expandable { .. })
    }
}

/// Render one data item into its display row.
pub fn render_row(item: &DataItem) -> MatrixRow {
    let description = if item.description.chars().count() >= DESCRIPTION_PREVIEW_LIMIT {
        let preview: String = item
            .description
            .chars()
            .take(DESCRIPTION_PREVIEW_LIMIT)
            .chain(TRUNCATION_MARKER.chars())
            .collect();
        DescriptionCell::Expandable {
            preview,
            full: item.description.clone(),
        }
    } else {
        DescriptionCell::Inline(item.description.clone())
    };

    MatrixRow {
        name: item.name.clone(),
        description,
    }
}
