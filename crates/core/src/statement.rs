//! Statement domain type.
//!
//! A statement is one persona utterance as loaded from the input file.
//! Immutable once loaded; the extraction loop never mutates it.

use serde::{Deserialize, Serialize};

/// A single input statement to extract claims from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement identifier (e.g. "D-S1", "S3")
    pub id: String,

    /// Speaker or party label, empty when unknown
    #[serde(default)]
    pub politician: String,

    /// Topic hint, empty when unknown
    #[serde(default)]
    pub topic: String,

    /// The statement text itself
    pub text: String,
}

impl Statement {
    /// Create a statement with empty politician and topic.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            politician: String::new(),
            topic: String::new(),
            text: text.into(),
        }
    }

    /// Set the politician label.
    pub fn with_politician(mut self, politician: impl Into<String>) -> Self {
        self.politician = politician.into();
        self
    }

    /// Set the topic hint.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }
}
