use async_trait::async_trait;
use std::time::Duration;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::http(format!("HTTP {}: {}", status, error_body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::http(format!("Failed to parse response: {}", e)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_post_json_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({ "prompt": "hi" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/api/embeddings", server.uri());
        let response = client
            .post_json(
                &url,
                vec![("Content-Type", "application/json")],
                &serde_json::json!({ "prompt": "hi" }),
            )
            .await
            .unwrap();

        assert_eq!(response, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_post_json_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/api/generate", server.uri());
        let result = client.post_json(&url, vec![], &serde_json::json!({})).await;

        match result {
            Err(DomainError::Http { message }) => {
                assert!(message.contains("500"));
                assert!(message.contains("model not loaded"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_json_invalid_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/api/generate", server.uri());
        let result = client.post_json(&url, vec![], &serde_json::json!({})).await;

        assert!(matches!(result, Err(DomainError::Http { .. })));
    }

    #[test]
    fn test_with_timeout_builds() {
        assert!(HttpClient::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
