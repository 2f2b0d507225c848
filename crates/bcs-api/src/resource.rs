//! Client for the v1 REST resource lookup service.

use std::time::Duration;

use tracing::debug;

use bcs_model::{Dataset, DatasetCollection, DatasetSummary};

use crate::error::{ApiError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for resolving datasets through the REST API.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ResourceClient {
    /// Create a new resource client against a server base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    /// The dataset entity URL.
    fn dataset_url(&self, id: &str) -> String {
        format!("{}/api/v1/dataset/{id}", self.base_url)
    }

    /// The dataset collection URL.
    fn datasets_url(&self) -> String {
        format!("{}/api/v1/dataset", self.base_url)
    }

    /// Fetch one dataset with its protocol reference expanded.
    pub async fn get_dataset(&self, id: &str) -> Result<Dataset> {
        debug!(id, "fetching dataset metadata");

        let response = self
            .client
            .get(self.dataset_url(id))
            .query(&[("expand", "ProtocolUsed")])
            .send()
            .await
            .map_err(ApiError::from)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("dataset {id}")));
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        response.json::<Dataset>().await.map_err(ApiError::from)
    }

    /// List all datasets available for selection.
    pub async fn list_datasets(&self) -> Result<Vec<DatasetSummary>> {
        debug!("listing datasets");

        let response = self
            .client
            .get(self.datasets_url())
            .send()
            .await
            .map_err(ApiError::from)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        let collection = response
            .json::<DatasetCollection>()
            .await
            .map_err(ApiError::from)?;
        Ok(collection.items)
    }
}

/// Strip a trailing slash so URL formatting stays predictable.
fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_urls_are_built_from_the_base() {
        let client = ResourceClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.dataset_url("42"),
            "http://localhost:8080/api/v1/dataset/42"
        );
        assert_eq!(client.datasets_url(), "http://localhost:8080/api/v1/dataset");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ResourceClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.datasets_url(), "http://localhost:8080/api/v1/dataset");
    }
}
