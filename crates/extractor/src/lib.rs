//! Claim extraction engine for Soapbox.
//!
//! Given one statement, produce exactly four deduplicated, length-bounded,
//! novel factual claims from a model that may under-produce, over-produce,
//! or emit malformed output. The pieces:
//!
//! - [`prompts`] — extraction and follow-up prompt rendering
//! - [`parse`] — tolerant JSON extraction from raw model text
//! - [`filter`] — normalization, dedup, and novelty filtering
//! - [`state`] — the accumulator threaded through the loop
//! - [`ClaimExtractor`] — the retry/convergence loop itself

pub mod filter;
mod loop_runner;
pub mod parse;
pub mod prompts;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use loop_runner::{ClaimExtractor, ExtractionOutcome, TARGET_CLAIMS};
