//! Ollama gateway client for Soapbox.
//!
//! Implements [`ModelGateway`] over the Ollama HTTP API:
//! - `POST /api/generate` — one non-streaming generation round-trip
//! - `GET /api/tags` — model listing, used by `soapbox doctor`
//!
//! The client timeout is deliberately generous (default 30 minutes): local
//! inference on modest hardware can take that long for a single prompt.
//! Transport failures (non-2xx, network, timeout) surface as `GatewayError`
//! and are never conflated with unparseable-but-delivered text.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use soapbox_core::error::GatewayError;
use soapbox_core::gateway::{GenerationRequest, GenerationResponse, ModelGateway};

/// Default HTTP timeout for one generation round-trip, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 1800;

/// A gateway that talks to a locally reachable Ollama server.
pub struct OllamaGateway {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaGateway {
    /// Create a gateway with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a gateway with an explicit round-trip timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn map_transport_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(e.to_string())
        } else {
            GatewayError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl ModelGateway for OllamaGateway {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GatewayError> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(model = %request.model, prompt_len = request.prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status().as_u16();

        if status == 404 {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::ModelNotFound(format!(
                "{}: {}",
                request.model, body
            )));
        }

        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "Gateway returned error");
            return Err(GatewayError::ApiError {
                status_code: status,
                message: body,
            });
        }

        let mut generated: GenerationResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        generated.response = generated.response.trim().to_string();

        debug!(raw_len = generated.response.len(), "Received generation response");
        Ok(generated)
    }

    async fn list_models(&self) -> std::result::Result<Vec<String>, GatewayError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::ApiError {
                status_code: status,
                message: body,
            });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn health_check(&self) -> std::result::Result<bool, GatewayError> {
        Ok(self.list_models().await.is_ok())
    }
}

/// Wire shape of `GET /api/tags`.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}
