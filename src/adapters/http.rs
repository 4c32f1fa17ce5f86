use crate::domain::model::{ContactMessage, SubmitFailure};
use crate::domain::ports::{ConfigProvider, ContactEndpoint};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;

/// reqwest-backed contact endpoint. No local timeout: the transport default applies.
#[derive(Debug, Clone)]
pub struct HttpContactEndpoint {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl HttpContactEndpoint {
    pub fn new(endpoint: &str, headers: &HashMap<String, String>) -> Result<Self> {
        validate_url("endpoint", endpoint)?;

        Ok(Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            headers: build_header_map(headers)?,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.endpoint(), config.headers())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_json<T: Serialize + ?Sized + Sync>(
        &self,
        body: &T,
    ) -> std::result::Result<(), SubmitFailure> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .headers(request_headers(&self.headers))
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        tracing::debug!("Contact endpoint response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitFailure::from_status(status.as_u16()))
        }
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactEndpoint {
    async fn probe(&self) -> std::result::Result<(), SubmitFailure> {
        self.post_json(&serde_json::json!({ "test": true })).await
    }

    async fn submit(&self, message: &ContactMessage) -> std::result::Result<(), SubmitFailure> {
        self.post_json(message).await
    }
}

/// Configured headers with `Content-Type` forced to JSON; `.json()` keeps an existing value.
fn request_headers(configured: &HeaderMap) -> HeaderMap {
    let mut headers = configured.clone();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ContactError::InvalidConfigValueError {
                field: "headers".to_string(),
                value: key.clone(),
                reason: format!("Invalid header name: {}", e),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ContactError::InvalidConfigValueError {
                field: format!("headers.{}", key),
                value: "<redacted>".to_string(),
                reason: format!("Invalid header value: {}", e),
            }
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

fn classify_transport_error(err: reqwest::Error) -> SubmitFailure {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        SubmitFailure::Network(err.to_string())
    } else if err.is_decode() || err.is_body() {
        SubmitFailure::Unknown(format!("malformed response: {}", err))
    } else {
        SubmitFailure::Unknown(err.to_string())
    }
}
