//! Shared test helpers for convergence-loop tests.

use std::sync::Mutex;

use async_trait::async_trait;

use soapbox_core::error::GatewayError;
use soapbox_core::gateway::{GenerationRequest, GenerationResponse, ModelGateway};

/// A mock gateway that returns a sequence of scripted outcomes.
///
/// Each call to `generate` returns the next entry in the queue and records
/// the prompt it was sent. Panics if more calls are made than entries
/// provided.
pub struct ScriptedGateway {
    script: Mutex<Vec<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
    call_count: Mutex<usize>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            script: Mutex::new(script),
            prompts: Mutex::new(Vec::new()),
            call_count: Mutex::new(0),
        }
    }

    /// Script from plain response texts (all calls succeed at transport level).
    pub fn responses(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GatewayError> {
        let mut count = self.call_count.lock().unwrap();
        let script = self.script.lock().unwrap();

        if *count >= script.len() {
            panic!(
                "ScriptedGateway: no more responses (call #{}, have {})",
                *count + 1,
                script.len()
            );
        }

        self.prompts.lock().unwrap().push(request.prompt);
        let outcome = script[*count].clone();
        *count += 1;

        outcome.map(|response| GenerationResponse { response })
    }
}

/// Build a `{"claims": [...]}` response body from claim texts.
pub fn claims_json(texts: &[&str]) -> String {
    let claims: Vec<serde_json::Value> = texts
        .iter()
        .map(|t| {
            serde_json::json!({
                "claim_text": t,
                "claim_type": "EVENT",
                "checkability": "HIGH",
                "evidence_hints": ["hint"]
            })
        })
        .collect();
    serde_json::json!({ "claims": claims }).to_string()
}
