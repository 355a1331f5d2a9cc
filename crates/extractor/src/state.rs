//! The accumulator threaded through the convergence loop.
//!
//! One `ExtractionState` is constructed fresh per statement and carries
//! everything that survives between attempts: the accepted claims, the
//! banned-key set, the attempt log, and the prompt the next attempt will
//! send. Nothing here is shared across statements.

use std::collections::HashSet;

use soapbox_core::{AcceptedClaim, AttemptLog, RawClaim};

use crate::filter::normalized_key;
use crate::prompts::JSON_ONLY_REMINDER;

/// Mutable extraction state for one statement.
#[derive(Debug)]
pub struct ExtractionState {
    accepted: Vec<AcceptedClaim>,
    banned: HashSet<String>,
    attempts: Vec<AttemptLog>,
    prompt: String,
    target: usize,
}

impl ExtractionState {
    /// Start accumulating with the first-attempt prompt.
    pub fn new(initial_prompt: String, target: usize) -> Self {
        Self {
            accepted: Vec::new(),
            banned: HashSet::new(),
            attempts: Vec::new(),
            prompt: initial_prompt,
            target,
        }
    }

    /// The prompt the next attempt will send.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Keys of every claim promoted so far.
    pub fn banned(&self) -> &HashSet<String> {
        &self.banned
    }

    /// Claims accepted so far, in promotion order.
    pub fn accepted(&self) -> &[AcceptedClaim] {
        &self.accepted
    }

    /// How many claims are still needed.
    pub fn missing(&self) -> usize {
        self.target.saturating_sub(self.accepted.len())
    }

    /// Exactly `target` claims accepted.
    pub fn is_converged(&self) -> bool {
        self.accepted.len() >= self.target
    }

    /// Append one attempt's diagnostic record.
    pub fn log_attempt(&mut self, log: AttemptLog) {
        self.attempts.push(log);
    }

    /// Append the JSON-only reminder to the carried prompt.
    ///
    /// Reminders accumulate when failures repeat; that is intentional.
    pub fn tighten_prompt(&mut self) {
        self.prompt.push_str(JSON_ONLY_REMINDER);
    }

    /// Replace the carried prompt (used for follow-up prompts).
    pub fn replace_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Promote survivors until the batch is exhausted or the target is hit.
    ///
    /// Each promotion bans the claim's key immediately, so a batch carrying
    /// the same claim twice promotes it once. Survivors beyond the target
    /// are discarded and *not* banned; a later attempt may re-propose them.
    pub fn promote_batch(&mut self, survivors: Vec<RawClaim>) {
        for claim in survivors {
            if self.is_converged() {
                break;
            }
            let key = normalized_key(&claim.claim_text);
            if !self.banned.insert(key) {
                continue;
            }
            self.accepted
                .push(AcceptedClaim::promoted(self.accepted.len() + 1, claim));
        }
    }

    /// Finish: pad with sentinels up to the target and hand back the claims
    /// and the attempt log.
    pub fn into_output(mut self) -> (Vec<AcceptedClaim>, Vec<AttemptLog>) {
        while self.accepted.len() < self.target {
            self.accepted.push(AcceptedClaim::sentinel());
        }
        (self.accepted, self.attempts)
    }
}
