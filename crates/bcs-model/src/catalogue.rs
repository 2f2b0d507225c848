//! Catalogue entities returned by the resource lookup service.
//!
//! The wire format mirrors the v1 REST API: attribute names are capitalized
//! (`Name`, `ProtocolUsed`) and references to other entities arrive as
//! objects carrying an `href` whose trailing path segment is the resource id.

use serde::{Deserialize, Serialize};

// =============================================================================
// RESOURCE REFERENCES
// =============================================================================

/// Reference to another REST resource.
///
/// Expanded entities embed the referenced resource inline, but the `href` is
/// always present and is the canonical way to recover the resource id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub href: String,
}

impl ResourceRef {
    /// Create a reference from an href.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The resource id: the trailing path segment of the href.
    ///
    /// Returns `None` for an empty or slash-terminated href.
    pub fn id(&self) -> Option<&str> {
        Self::id_of(&self.href)
    }

    /// Recover a resource id from a raw href string.
    pub fn id_of(href: &str) -> Option<&str> {
        let tail = href.rsplit('/').next()?;
        (!tail.is_empty()).then_some(tail)
    }
}

// =============================================================================
// DATASETS
// =============================================================================

/// A dataset ("catalogue") with its protocol reference expanded.
///
/// Fetched with `expand=ProtocolUsed` so the protocol href is available
/// without a second round trip. Immutable once fetched; re-fetched on each
/// new selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub href: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ProtocolUsed")]
    pub protocol_used: ResourceRef,
}

impl Dataset {
    /// The dataset id, recovered from the entity href.
    pub fn id(&self) -> Option<&str> {
        ResourceRef::id_of(&self.href)
    }

    /// The id of the protocol rooting this dataset's item hierarchy.
    pub fn protocol_id(&self) -> Option<&str> {
        self.protocol_used.id()
    }
}

/// A dataset as it appears in the collection listing (no expansion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub href: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl DatasetSummary {
    /// The dataset id, recovered from the entity href.
    pub fn id(&self) -> Option<&str> {
        ResourceRef::id_of(&self.href)
    }
}

/// The collection envelope returned by the dataset listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetCollection {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub items: Vec<DatasetSummary>,
}

// =============================================================================
// DATA ITEMS
// =============================================================================

/// A data item (observable feature): the leaf entity being searched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A typeahead candidate, distinct from an authoritative search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
}

impl From<DataItem> for Suggestion {
    fn from(item: DataItem) -> Self {
        Self { name: item.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_ref_id_is_trailing_segment() {
        let re = ResourceRef::new("/api/v1/protocol/42");
        assert_eq!(re.id(), Some("42"));
    }

    #[test]
    fn resource_ref_id_rejects_empty_tail() {
        assert_eq!(ResourceRef::new("/api/v1/protocol/").id(), None);
        assert_eq!(ResourceRef::new("").id(), None);
    }

    #[test]
    fn dataset_decodes_v1_wire_format() {
        let json = r#"{
            "href": "/api/v1/dataset/1",
            "Name": "Lifelines",
            "ProtocolUsed": { "href": "/api/v1/protocol/7" }
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.name, "Lifelines");
        assert_eq!(dataset.id(), Some("1"));
        assert_eq!(dataset.protocol_id(), Some("7"));
    }

    #[test]
    fn dataset_collection_decodes_listing() {
        let json = r#"{
            "total": 2,
            "items": [
                { "href": "/api/v1/dataset/1", "Name": "Lifelines" },
                { "href": "/api/v1/dataset/2", "Name": "Prevend" }
            ]
        }"#;
        let collection: DatasetCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.total, 2);
        assert_eq!(collection.items[1].id(), Some("2"));
    }

    #[test]
    fn data_item_description_defaults_to_empty() {
        let item: DataItem = serde_json::from_str(r#"{ "name": "Weight" }"#).unwrap();
        assert_eq!(item.description, "");
    }
}
