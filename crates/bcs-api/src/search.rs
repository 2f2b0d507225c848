//! Client for the structured search backend and the suggestion source.

use std::time::Duration;

use tracing::debug;

use bcs_model::{SearchRequest, SearchResponse, Suggestion};

use crate::error::{ApiError, Result};

/// HTTP request timeout for searches.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for executing structured queries.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a new search client against a server base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::from)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    /// The search endpoint URL.
    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    /// Execute a structured query.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        debug!(document_type = %request.document_type, "executing search");

        let response = self
            .client
            .post(self.search_url())
            .json(request)
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(ApiError::from)
    }

    /// Fetch typeahead suggestions: a capped free-text search over items of
    /// `item_type` in the given scope. Best-effort by contract; callers
    /// treat failures as "no suggestions".
    pub async fn suggest(
        &self,
        item_type: &str,
        scope_id: &str,
        query_text: &str,
        max_items: usize,
    ) -> Result<Vec<Suggestion>> {
        let request = suggest_request(item_type, scope_id, query_text, max_items);
        let response = self.search(&request).await?;
        Ok(response.items.into_iter().map(Suggestion::from).collect())
    }
}

/// Build the capped suggestion query.
fn suggest_request(
    item_type: &str,
    scope_id: &str,
    query_text: &str,
    max_items: usize,
) -> SearchRequest {
    let mut request = SearchRequest::items_of_type(scope_id, item_type);
    request
        .rules
        .push(vec![bcs_model::QueryRule::search(query_text)]);
    request.with_max_results(max_items)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn search_url_is_built_from_the_base() {
        let client = SearchClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.search_url(), "http://localhost:8080/search");
    }

    #[test]
    fn suggest_request_is_typed_scoped_and_capped() {
        let request = suggest_request("observablefeature", "1", "wei", 20);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "documentType": "protocolTree-1",
                "rules": [
                    [{
                        "field": "type",
                        "operator": "EQUALS",
                        "value": "observablefeature"
                    }],
                    [{ "operator": "SEARCH", "value": "wei" }]
                ],
                "maxResults": 20
            })
        );
    }
}
