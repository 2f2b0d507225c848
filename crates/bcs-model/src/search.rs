//! Structured search queries and responses.
//!
//! A search request is a document-type tag plus a rule tree: a conjunction of
//! disjunctions of `(field, operator, value)` triples. The constructors here
//! are the only place queries are built; they are pure and total, so callers
//! can rely on identical inputs producing structurally identical requests.

use serde::{Deserialize, Serialize};

use crate::catalogue::DataItem;

/// Item type indexed under a protocol tree.
pub const FEATURE_TYPE: &str = "observablefeature";

/// Document-type prefix for queries scoped to an item hierarchy.
pub const PROTOCOL_TREE_PREFIX: &str = "protocolTree-";

// =============================================================================
// RULES
// =============================================================================

/// Comparison operator of a single query rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Equals,
    Search,
}

/// One `(field, operator, value)` triple.
///
/// Free-text rules carry no field; the backend decides which fields a
/// `SEARCH` rule matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub operator: Operator,
    pub value: String,
}

impl QueryRule {
    /// Exact-match rule on a named field.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            operator: Operator::Equals,
            value: value.into(),
        }
    }

    /// Free-text rule. The text is passed through opaquely, never parsed.
    pub fn search(value: impl Into<String>) -> Self {
        Self {
            field: None,
            operator: Operator::Search,
            value: value.into(),
        }
    }
}

// =============================================================================
// SORTING
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Backend sort rule, accepted as an opaque pass-through. The core never
/// resorts results itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    pub field: String,
    pub order: SortOrder,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// A structured query sent to the search backend.
///
/// `rules` is a conjunction of disjunctions: the outer groups are ANDed, the
/// rules inside a group are ORed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub document_type: String,
    pub rules: Vec<Vec<QueryRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_rule: Option<SortRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl SearchRequest {
    /// Query for all items of `item_type` under the scope's protocol tree.
    pub fn items_of_type(scope_id: &str, item_type: &str) -> Self {
        Self {
            document_type: format!("{PROTOCOL_TREE_PREFIX}{scope_id}"),
            rules: vec![vec![QueryRule::equals("type", item_type)]],
            sort_rule: None,
            max_results: None,
        }
    }

    /// Count-style query: every observable feature under the protocol.
    ///
    /// Also used to fetch the unfiltered result listing, so the counter and
    /// the table are always derived from the same query shape.
    pub fn count(protocol_id: &str) -> Self {
        Self::items_of_type(protocol_id, FEATURE_TYPE)
    }

    /// Free-text query: observable features under the protocol, additionally
    /// constrained by an opaque search term.
    pub fn filtered(protocol_id: &str, free_text: &str) -> Self {
        let mut request = Self::count(protocol_id);
        request.rules.push(vec![QueryRule::search(free_text)]);
        request
    }

    /// Attach a backend sort rule.
    #[must_use]
    pub fn with_sort(mut self, sort: SortRule) -> Self {
        self.sort_rule = Some(sort);
        self
    }

    /// Cap the number of returned items.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Search backend response: a total hit count plus the matched items in
/// backend-defined order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub total_hit_count: u64,
    #[serde(default)]
    pub items: Vec<DataItem>,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn count_query_is_deterministic() {
        let a = SearchRequest::count("P1");
        let b = SearchRequest::count("P1");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn count_query_wire_shape() {
        let request = SearchRequest::count("P1");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "documentType": "protocolTree-P1",
                "rules": [[{
                    "field": "type",
                    "operator": "EQUALS",
                    "value": "observablefeature"
                }]]
            })
        );
    }

    #[test]
    fn filtered_query_appends_opaque_search_group() {
        let request = SearchRequest::filtered("P1", "body weight");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "documentType": "protocolTree-P1",
                "rules": [
                    [{
                        "field": "type",
                        "operator": "EQUALS",
                        "value": "observablefeature"
                    }],
                    [{ "operator": "SEARCH", "value": "body weight" }]
                ]
            })
        );
    }

    #[test]
    fn sort_and_cap_are_pass_through() {
        let request = SearchRequest::count("P1")
            .with_sort(SortRule {
                field: "name".to_string(),
                order: SortOrder::Asc,
            })
            .with_max_results(20);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["sortRule"], json!({ "field": "name", "order": "ASC" }));
        assert_eq!(value["maxResults"], json!(20));
    }

    #[test]
    fn response_decodes_backend_payload() {
        let json = r#"{
            "totalHitCount": 42,
            "items": [
                { "name": "Weight", "description": "Body weight in kg" },
                { "name": "Height", "description": "" }
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_hit_count, 42);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].name, "Weight");
    }

    proptest! {
        /// The free-text term is carried verbatim, never parsed or rewritten.
        #[test]
        fn filtered_query_carries_text_verbatim(text in "\\PC*") {
            let request = SearchRequest::filtered("P1", &text);
            let last_group = request.rules.last().unwrap();
            prop_assert_eq!(last_group.len(), 1);
            prop_assert_eq!(last_group[0].field.as_deref(), None);
            prop_assert_eq!(last_group[0].operator, Operator::Search);
            prop_assert_eq!(last_group[0].value.as_str(), text.as_str());
        }
    }
}
