use serde_json::Value;
use tracing::{debug, info};

use crate::{error::ClientError, request::UpRequest};

/// Sends "up" requests to the inference-management service.
#[derive(Debug, Clone, Default)]
pub struct InferenceClient {
    http: reqwest::Client,
}

impl InferenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub async fn up(&self, request: &UpRequest) -> Result<Value, ClientError> {
        info!(url = %request.url, model = %request.payload.model, "requesting inference up");

        let response = self
            .http
            .post(&request.url)
            .json(&request.payload)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "inference service responded");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(%err, "failed to read error response body");
                    String::new()
                }
            };
            return Err(ClientError::HttpStatus { status, body });
        }

        Ok(response.json::<Value>().await?)
    }
}
