use reqwest::header::{ACCEPT, CONTENT_TYPE};
use sdkmaker_core::{DocumentFetcher, FetchedDocument, SdkError};
use serde_json::json;

const ACCEPT_FORMATS: &str = "application/json, application/yaml, text/yaml";

/// Transport fetcher backed by reqwest. Any transport failure or non-2xx
/// status is a single terminal network error; there is no retry policy.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, SdkError> {
        let network_error = |cause: &reqwest::Error| {
            SdkError::network(
                "fetch",
                "failed to fetch the API description",
                json!({ "url": url, "cause": cause.to_string() }),
            )
        };

        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_FORMATS)
            .send()
            .await
            .map_err(|e| network_error(&e))?
            .error_for_status()
            .map_err(|e| network_error(&e))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let content = response.text().await.map_err(|e| network_error(&e))?;

        Ok(FetchedDocument {
            content,
            content_type,
        })
    }
}
