//! Claim domain types.
//!
//! A `RawClaim` is what one model response proposes; an `AcceptedClaim` is a
//! raw claim promoted into the final result set. The final set for a
//! statement always holds exactly four accepted claims, padded with sentinel
//! entries when the model under-produces.

use serde::{Deserialize, Serialize};

/// Text used for padding entries when extraction under-produces.
pub const SENTINEL_CLAIM_TEXT: &str = "No additional checkable claim found in the statement.";

/// Coarse category of what a claim asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimType {
    Date,
    Number,
    Law,
    Event,
    Org,
    Other,
}

impl ClaimType {
    /// Parse a model-supplied label, falling back to `Other`.
    ///
    /// Model output is noisy; an unknown label is not worth dropping the
    /// claim over.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "DATE" => Self::Date,
            "NUMBER" => Self::Number,
            "LAW" => Self::Law,
            "EVENT" => Self::Event,
            "ORG" => Self::Org,
            _ => Self::Other,
        }
    }
}

/// How easily a claim can be checked against public sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Checkability {
    High,
    Med,
    Low,
}

impl Checkability {
    /// Parse a model-supplied label, falling back to `Med`.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Self::High,
            "MED" | "MEDIUM" => Self::Med,
            "LOW" => Self::Low,
            _ => Self::Med,
        }
    }
}

/// A claim as proposed by one model response, before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClaim {
    /// The claim text
    pub claim_text: String,

    /// What kind of fact the claim asserts
    pub claim_type: ClaimType,

    /// How checkable the claim is
    pub checkability: Checkability,

    /// Hints for where evidence might be found
    #[serde(default)]
    pub evidence_hints: Vec<String>,
}

impl RawClaim {
    /// Create a raw claim with no evidence hints.
    pub fn new(text: impl Into<String>, claim_type: ClaimType, checkability: Checkability) -> Self {
        Self {
            claim_text: text.into(),
            claim_type,
            checkability,
            evidence_hints: Vec::new(),
        }
    }
}

/// A claim promoted into a statement's final result set.
///
/// Real claims carry a sequential id (`C1`..`C4`); padding sentinels carry
/// no id and set `is_padding` so downstream consumers never have to match
/// on the sentinel text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedClaim {
    /// Sequential id assigned at promotion time; absent on padding entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,

    /// The claim text
    pub claim_text: String,

    /// What kind of fact the claim asserts
    pub claim_type: ClaimType,

    /// How checkable the claim is
    pub checkability: Checkability,

    /// Hints for where evidence might be found
    #[serde(default)]
    pub evidence_hints: Vec<String>,

    /// True when this entry is a padding sentinel, not real model output
    #[serde(default)]
    pub is_padding: bool,
}

impl AcceptedClaim {
    /// Promote a raw claim, assigning the 1-based sequential id `C{position}`.
    pub fn promoted(position: usize, raw: RawClaim) -> Self {
        Self {
            claim_id: Some(format!("C{position}")),
            claim_text: raw.claim_text,
            claim_type: raw.claim_type,
            checkability: raw.checkability,
            evidence_hints: raw.evidence_hints,
            is_padding: false,
        }
    }

    /// Create a padding sentinel entry.
    pub fn sentinel() -> Self {
        Self {
            claim_id: None,
            claim_text: SENTINEL_CLAIM_TEXT.into(),
            claim_type: ClaimType::Other,
            checkability: Checkability::Low,
            evidence_hints: Vec::new(),
            is_padding: true,
        }
    }
}
