use crate::enumeration;
use cluemine_core::constants::MIN_CLUE_TEXT_LEN;
use cluemine_core::{Enumeration, Message};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ENUM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d*[,-])*\d*\)").expect("enumeration pattern regex"));

/// A message annotated with its clue analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedMessage {
    /// The underlying message.
    pub message: Message,

    /// Present when the message was identified as a clue.
    pub clue: Option<ClueMark>,
}

/// Clue metadata attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueMark {
    /// Declared letter-count pattern of the answer.
    pub enumeration: Enumeration,

    /// Ranked candidate answers, best first, at most three. Empty until
    /// the search phase has run.
    pub answers: Vec<String>,
}

impl From<Message> for MarkedMessage {
    fn from(message: Message) -> Self {
        Self {
            message,
            clue: None,
        }
    }
}

impl MarkedMessage {
    /// Whether this message was identified as a clue.
    pub fn is_clue(&self) -> bool {
        self.clue.is_some()
    }
}

/// Wraps raw messages and flags clue candidates in one pass.
pub fn mark_messages(messages: Vec<Message>) -> Vec<MarkedMessage> {
    mark_clues(messages.into_iter().map(MarkedMessage::from).collect())
}

/// Flags clue candidates in a marked message list.
///
/// A message becomes a clue when it carries a parenthesized enumeration
/// pattern, its text is long enough to rule out trivial matches like a
/// lone `(1)`, and the pattern parses into at least one word length.
/// Existing marks are left untouched, so the pass can run over an
/// already-marked list without changing it.
pub fn mark_clues(messages: Vec<MarkedMessage>) -> Vec<MarkedMessage> {
    messages
        .into_iter()
        .map(|mut marked| {
            if marked.clue.is_none() {
                marked.clue = detect_clue(&marked.message.text);
            }
            marked
        })
        .collect()
}

fn detect_clue(text: &str) -> Option<ClueMark> {
    let matched = ENUM_PATTERN.find(text)?;
    if !is_probably_a_good_clue(text) {
        return None;
    }
    let parsed = enumeration::parse_enumeration(matched.as_str()).ok()?;
    Some(ClueMark {
        enumeration: parsed,
        answers: Vec::new(),
    })
}

// Filters out trivial false positives like a bare "(1)".
fn is_probably_a_good_clue(text: &str) -> bool {
    text.len() > MIN_CLUE_TEXT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> Message {
        Message::new(0, "Alice", text)
    }

    #[test]
    fn marks_messages_with_enumerations() {
        let marked = mark_messages(vec![
            message("Capital of France (5)"),
            message("morning all"),
            message("Stringed instrument, not quite up-right? (6)"),
        ]);

        assert!(marked[0].is_clue());
        assert!(!marked[1].is_clue());
        assert!(marked[2].is_clue());

        let mark = marked[0].clue.as_ref().unwrap();
        assert_eq!(mark.enumeration.lengths(), &[5]);
        assert_eq!(mark.enumeration.total(), 5);
        assert!(mark.answers.is_empty());
    }

    #[test]
    fn multi_word_enumerations_keep_group_order() {
        let marked = mark_messages(vec![message("Opposite of come together? (4,5)")]);
        let mark = marked[0].clue.as_ref().unwrap();
        assert_eq!(mark.enumeration.lengths(), &[4, 5]);
        assert_eq!(mark.enumeration.total(), 9);
    }

    #[test]
    fn short_messages_are_not_clues() {
        // "(1)" alone matches the pattern but fails the length heuristic.
        let marked = mark_messages(vec![message("(1)"), message("ok (2)")]);
        assert!(!marked[0].is_clue());
        assert!(!marked[1].is_clue());
    }

    #[test]
    fn malformed_enumerations_are_not_clues() {
        let marked = mark_messages(vec![
            message("weird brackets () in here"),
            message("also strange (,) punctuation"),
        ]);
        assert!(!marked[0].is_clue());
        assert!(!marked[1].is_clue());
    }

    #[test]
    fn remarking_leaves_existing_marks_untouched() {
        let mut first = mark_messages(vec![message("Capital of France (5)")]);
        first[0].clue.as_mut().unwrap().answers = vec!["PARIS".to_string()];

        let second = mark_clues(first.clone());
        assert_eq!(second, first);
    }
}
