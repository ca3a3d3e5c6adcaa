use crate::normalize;
use cluemine_core::Enumeration;

/// Finds every word sequence in `text` whose per-word letter counts align
/// with the enumeration.
///
/// The scan is greedy, non-overlapping, and left to right: each word either
/// extends the current partial match or resets it, and a word that
/// completes a match cannot also begin the next one. Duplicate candidates
/// appear when the text repeats a matching sequence.
pub fn find_candidates(text: &str, enumeration: &Enumeration) -> Vec<String> {
    let normalized = normalize::letters_and_spaces(text);
    let lengths = enumeration.lengths();

    let mut candidates = Vec::new();
    let mut current = String::new();
    let mut pointer = 0;

    for word in normalized.split(' ') {
        if pointer == lengths.len() {
            candidates.push(current.trim().to_string());
            current.clear();
            pointer = 0;
        }
        current.push_str(word);
        if word.len() == lengths[pointer] as usize {
            pointer += 1;
            current.push(' ');
        } else {
            current.clear();
            pointer = 0;
        }
    }
    if pointer == lengths.len() {
        candidates.push(current.trim().to_string());
    }

    candidates
}
