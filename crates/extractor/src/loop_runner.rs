//! The claim convergence loop.
//!
//! Repeatedly prompts the gateway until exactly [`TARGET_CLAIMS`] novel,
//! length-bounded claims are accepted or the retry budget runs out. Parse
//! failures tighten the prompt and burn an attempt; a successful-but-short
//! attempt switches to the follow-up prompt; transport errors abort the
//! statement. Exhaustion pads the result with sentinels so downstream
//! consumers always see a fixed-arity claim list.

use std::sync::Arc;

use tracing::{debug, info, warn};

use soapbox_core::error::GatewayError;
use soapbox_core::gateway::{GenerationOptions, GenerationRequest, ModelGateway};
use soapbox_core::{AcceptedClaim, AttemptLog, Statement};

use crate::state::ExtractionState;
use crate::{filter, parse, prompts};

/// Every statement yields exactly this many claims.
pub const TARGET_CLAIMS: usize = 4;

/// Default cap on statement characters fed to the model.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1500;

/// Result of extracting one statement's claims.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Exactly [`TARGET_CLAIMS`] entries, sentinels last.
    pub claims: Vec<AcceptedClaim>,

    /// One entry per gateway round-trip, in order.
    pub attempts: Vec<AttemptLog>,

    /// False when padding was needed.
    pub converged: bool,
}

/// The extraction engine: one gateway, one model, fixed guardrails.
pub struct ClaimExtractor {
    gateway: Arc<dyn ModelGateway>,
    model: String,
    max_words: usize,
    retries: u32,
    max_input_chars: usize,
    options: GenerationOptions,
}

impl ClaimExtractor {
    /// Create an extractor with default guardrails (25 words, 2 retries).
    pub fn new(gateway: Arc<dyn ModelGateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
            max_words: 25,
            retries: 2,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            options: GenerationOptions::default(),
        }
    }

    /// Set the maximum words allowed per claim.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the number of additional attempts after the first.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the statement-character cap fed to the model.
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Set the generation options sent with every request.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Extract exactly [`TARGET_CLAIMS`] claims for one statement.
    ///
    /// Makes at most `1 + retries` gateway calls. Transport errors
    /// propagate; malformed model output never does.
    pub async fn extract(
        &self,
        statement: &Statement,
    ) -> std::result::Result<ExtractionOutcome, GatewayError> {
        let clipped: String = statement.text.chars().take(self.max_input_chars).collect();

        let mut state = ExtractionState::new(
            prompts::extraction_prompt(&clipped, TARGET_CLAIMS, self.max_words),
            TARGET_CLAIMS,
        );

        let total_attempts = 1 + self.retries;
        info!(statement_id = %statement.id, "Extracting claims");

        for attempt in 1..=total_attempts {
            let request = GenerationRequest::new(&self.model, state.prompt())
                .with_options(self.options.clone());
            let raw = self.gateway.generate(request).await?.response;
            let raw_len = raw.chars().count();

            match parse::extract_json_object(&raw) {
                Err(failure) => {
                    debug!(statement_id = %statement.id, attempt, %failure, "Attempt did not parse");
                    state.log_attempt(AttemptLog::failed(attempt, raw_len, failure.to_string()));
                    state.tighten_prompt();
                    continue;
                }
                Ok(obj) => {
                    state.log_attempt(AttemptLog::ok(attempt, raw_len));

                    let proposed = parse::claims_from_object(&obj);
                    let survivors =
                        filter::filter_novel(proposed, state.banned(), self.max_words);
                    debug!(
                        statement_id = %statement.id,
                        attempt,
                        survivors = survivors.len(),
                        "Attempt parsed"
                    );
                    state.promote_batch(survivors);

                    if state.is_converged() {
                        let (claims, attempts) = state.into_output();
                        return Ok(ExtractionOutcome {
                            claims,
                            attempts,
                            converged: true,
                        });
                    }

                    if attempt < total_attempts {
                        let followup = prompts::followup_prompt(
                            &clipped,
                            state.accepted(),
                            state.missing(),
                            self.max_words,
                        );
                        state.replace_prompt(followup);
                    }
                }
            }
        }

        warn!(
            statement_id = %statement.id,
            missing = state.missing(),
            "Retry budget exhausted, padding with sentinels"
        );
        let (claims, attempts) = state.into_output();
        Ok(ExtractionOutcome {
            claims,
            attempts,
            converged: false,
        })
    }
}
