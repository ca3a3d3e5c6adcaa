use crate::normalize;
use cluemine_core::constants::{AFFIRMATION_TOKENS, ANNOTATION_CHARS};
use std::collections::HashSet;

/// Classifies messages as positive acknowledgments.
///
/// The token set is closed and injected at construction; matching is exact
/// per whitespace-separated token after symbol stripping.
pub struct AffirmationClassifier {
    tokens: HashSet<String>,
}

impl AffirmationClassifier {
    /// Creates a classifier with the built-in token set.
    pub fn new() -> Self {
        Self::with_tokens(
            AFFIRMATION_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
        )
    }

    /// Creates a classifier with a custom token set.
    pub fn with_tokens(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Returns true if any token of the message matches the affirmation set.
    pub fn is_affirmation(&self, text: &str) -> bool {
        normalize::strip_symbols(text)
            .split(' ')
            .any(|word| self.tokens.contains(word))
    }
}

impl Default for AffirmationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if the text looks like clue annotation markup rather than
/// prose, based on indicator characters.
pub fn is_probable_annotation(text: &str) -> bool {
    text.chars().any(|c| ANNOTATION_CHARS.contains(&c))
}
