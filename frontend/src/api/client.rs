use reqwest::Client;
use serde::Serialize;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else if let Some(cached) = config::cached_base_url() {
            cached
        } else {
            config::await_api_base_url().await
        };
        // Endpoint paths below carry their own leading slash.
        base.trim_end_matches('/').to_string()
    }

    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.client.post(format!("{}{}", base_url, path)).json(body);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::invalid_response(format!("Request failed with status {}", status)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn resolved_base_url_prefers_explicit_base() {
        let client = ApiClient::new_with_base_url("http://localhost:9000");
        assert_eq!(client.resolved_base_url().await, "http://localhost:9000");
    }

    #[tokio::test]
    async fn resolved_base_url_trims_trailing_slash() {
        let client = ApiClient::new_with_base_url("http://localhost:9000/");
        assert_eq!(client.resolved_base_url().await, "http://localhost:9000");
    }

    #[tokio::test]
    async fn post_json_maps_transport_failures_to_request_failed() {
        let client = ApiClient::new_with_base_url("http://127.0.0.1:1");
        let err = client
            .post_json("/api/auth/register", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.code, "REQUEST_FAILED");
        assert!(err.error.starts_with("Request failed:"));
    }
}
