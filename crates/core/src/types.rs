use serde::{Deserialize, Serialize};
use std::fmt;

/// A single chat message from a parsed transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unix timestamp of the message. The engine relies only on ordering.
    pub timestamp: i64,

    /// Display name of the sender. Service lines carry the reserved
    /// "System" author.
    pub author: String,

    /// Message content. Free of line breaks after preprocessing.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(timestamp: i64, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: author.into(),
            text: text.into(),
        }
    }
}

/// The letter-count pattern a crossword clue declares for its answer,
/// e.g. `(4,5)` for a two-word answer of four and five letters.
///
/// Immutable once built; group order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumeration(Vec<u32>);

impl Enumeration {
    /// Creates an enumeration from parsed word lengths.
    ///
    /// Returns `None` for an empty sequence; a clue always declares at
    /// least one word length.
    pub fn new(lengths: Vec<u32>) -> Option<Self> {
        if lengths.is_empty() {
            None
        } else {
            Some(Self(lengths))
        }
    }

    /// Word lengths in declaration order.
    pub fn lengths(&self) -> &[u32] {
        &self.0
    }

    /// Number of words in the answer.
    pub fn word_count(&self) -> usize {
        self.0.len()
    }

    /// Total letter count across all words.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for Enumeration {
    // Renders the export form, e.g. "( 4, 5 )".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "( {} )", groups.join(", "))
    }
}

/// One export row per detected clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRow {
    /// Formatted message date.
    pub date: String,

    /// Author of the clue message.
    pub author: String,

    /// Raw clue text.
    pub clue: String,

    /// Enumeration in display form, e.g. `( 4, 5 )`.
    pub enumeration: String,

    /// Sum of the enumeration word lengths.
    pub enumeration_total: u32,

    /// Best candidate answer, or empty.
    pub answer1: String,

    /// Second candidate answer, or empty.
    pub answer2: String,

    /// Third candidate answer, or empty.
    pub answer3: String,
}
