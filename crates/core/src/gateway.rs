//! ModelGateway trait — the abstraction over text-generation backends.
//!
//! A gateway knows how to send one prompt to an inference service and return
//! the raw generated text. No semantic contract is placed on the content
//! beyond "text that may contain JSON"; parsing is the caller's problem.
//!
//! Implementations: Ollama (`soapbox-gateway`), scripted mocks in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Generation options forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 = deterministic)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_num_predict")]
    pub num_predict: u32,
}

fn default_temperature() -> f32 {
    0.0
}

fn default_num_predict() -> u32 {
    200
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            num_predict: default_num_predict(),
        }
    }
}

/// A single generation request.
///
/// Serializes to exactly the wire shape the backend expects:
/// `{model, prompt, stream, options}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The model to use
    pub model: String,

    /// The full prompt text
    pub prompt: String,

    /// Whether to stream the response; always false for this pipeline
    pub stream: bool,

    /// Backend generation options
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Create a non-streaming request with default options.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options: GenerationOptions::default(),
        }
    }

    /// Set the generation options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// A complete generation response.
///
/// The backend returns more fields (timings, context); only the generated
/// text matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text
    #[serde(default)]
    pub response: String,
}

/// The core gateway trait.
///
/// The extraction loop calls `generate()` without knowing which backend is
/// behind it. Transport failures surface as `GatewayError` and are distinct
/// from unparseable-but-delivered text, which arrives as a normal response.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// A human-readable name for this gateway (e.g. "ollama").
    fn name(&self) -> &str;

    /// Send one prompt and get the complete generated text back.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GatewayError>;

    /// List model names available on this backend.
    async fn list_models(&self) -> std::result::Result<Vec<String>, GatewayError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the backend?
    async fn health_check(&self) -> std::result::Result<bool, GatewayError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGateway;

    #[async_trait]
    impl ModelGateway for EchoGateway {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: GenerationRequest,
        ) -> std::result::Result<GenerationResponse, GatewayError> {
            Ok(GenerationResponse {
                response: request.prompt,
            })
        }
    }

    #[test]
    fn request_wire_shape() {
        let req = GenerationRequest::new("test-model", "Say hi");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"model\":\"test-model\""));
        assert!(json.contains("\"stream\":false"));
        assert!(json.contains("\"temperature\":0.0"));
        assert!(json.contains("\"num_predict\":200"));
    }

    #[test]
    fn response_tolerates_extra_fields() {
        let parsed: GenerationResponse = serde_json::from_str(
            r#"{"model":"m","created_at":"2024-01-01T00:00:00Z","response":"hello","done":true}"#,
        )
        .unwrap();
        assert_eq!(parsed.response, "hello");
    }

    #[test]
    fn response_defaults_to_empty_text() {
        let parsed: GenerationResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.response.is_empty());
    }

    #[tokio::test]
    async fn default_trait_methods() {
        let gw = EchoGateway;
        assert_eq!(gw.name(), "echo");
        assert!(gw.list_models().await.unwrap().is_empty());
        assert!(gw.health_check().await.unwrap());

        let resp = gw.generate(GenerationRequest::new("m", "ping")).await.unwrap();
        assert_eq!(resp.response, "ping");
    }
}
