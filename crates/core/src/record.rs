//! Output record types.
//!
//! One `ExtractionRecord` is appended to the JSONL output per statement.
//! The attempt log is purely diagnostic; consumers key off `claims`, which
//! is always length 4.

use serde::{Deserialize, Serialize};

use crate::claim::AcceptedClaim;
use crate::statement::Statement;

/// Diagnostic record for one gateway round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptLog {
    /// 1-based attempt number
    pub attempt: u32,

    /// Length of the raw model response in characters
    pub raw_len: usize,

    /// Parse failure message, absent when the response parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl AttemptLog {
    /// Record a successful parse.
    pub fn ok(attempt: u32, raw_len: usize) -> Self {
        Self {
            attempt,
            raw_len,
            parse_error: None,
        }
    }

    /// Record a parse failure.
    pub fn failed(attempt: u32, raw_len: usize, reason: impl Into<String>) -> Self {
        Self {
            attempt,
            raw_len,
            parse_error: Some(reason.into()),
        }
    }
}

/// Per-record metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// One entry per gateway round-trip, in order
    pub attempts: Vec<AttemptLog>,
}

/// One line of JSONL output: a statement plus its four extracted claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub statement_id: String,
    pub politician: String,
    pub topic: String,
    pub statement: String,
    pub claims: Vec<AcceptedClaim>,
    pub model: String,
    pub meta: RecordMeta,
}

impl ExtractionRecord {
    /// Assemble a record from a statement and the loop's output.
    pub fn new(
        statement: &Statement,
        claims: Vec<AcceptedClaim>,
        model: impl Into<String>,
        attempts: Vec<AttemptLog>,
    ) -> Self {
        Self {
            statement_id: statement.id.clone(),
            politician: statement.politician.clone(),
            topic: statement.topic.clone(),
            statement: statement.text.clone(),
            claims,
            model: model.into(),
            meta: RecordMeta { attempts },
        }
    }
}
