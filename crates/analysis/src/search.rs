use crate::classify::{self, AffirmationClassifier};
use crate::detect::MarkedMessage;
use crate::matcher;
use crate::rank;
use cluemine_core::constants::{EARLY_EXIT_MIN_GAP, MAX_ANSWERS};
use cluemine_core::{Enumeration, SearchConfig};
use tracing::debug;

/// Runs both search passes and returns the answer-annotated list.
///
/// The context pass visits every clue in order with an expanding forward
/// window and the affirmation shortcut enabled. The brute-force fallback
/// then revisits only the clues the first pass left unanswered, with a
/// wider window and no shortcut. Answers are written back by the
/// orchestrator, never by a scan through a shared index.
pub fn find_answers(
    messages: Vec<MarkedMessage>,
    config: &SearchConfig,
    classifier: &AffirmationClassifier,
) -> Vec<MarkedMessage> {
    let messages = context_pass(messages, config, classifier);
    fallback_pass(messages, config, classifier)
}

/// First pass: expanding window with the affirmation early exit.
fn context_pass(
    mut messages: Vec<MarkedMessage>,
    config: &SearchConfig,
    classifier: &AffirmationClassifier,
) -> Vec<MarkedMessage> {
    for index in 0..messages.len() {
        if !messages[index].is_clue() {
            continue;
        }

        let mut depth = config.context_initial_depth;
        let mut answers = scan_window(&messages, index, depth, true, classifier);
        while answers.is_empty() && depth < config.context_max_depth {
            depth += config.depth_step;
            answers = scan_window(&messages, index, depth, true, classifier);
        }

        if answers.is_empty() {
            debug!(clue_index = index, "context pass found no candidates");
        }
        set_answers(&mut messages, index, answers);
    }
    messages
}

/// Second pass: brute-force forward accumulation for still-empty clues.
fn fallback_pass(
    mut messages: Vec<MarkedMessage>,
    config: &SearchConfig,
    classifier: &AffirmationClassifier,
) -> Vec<MarkedMessage> {
    for index in 0..messages.len() {
        let unanswered = matches!(&messages[index].clue, Some(mark) if mark.answers.is_empty());
        if !unanswered {
            continue;
        }

        let mut depth = config.fallback_initial_depth;
        let mut answers = scan_window(&messages, index, depth, false, classifier);
        while answers.is_empty() && depth < config.fallback_max_depth {
            depth += config.depth_step;
            answers = scan_window(&messages, index, depth, false, classifier);
        }

        set_answers(&mut messages, index, answers);
    }
    messages
}

/// Scans up to `depth` messages after the clue for enumeration-aligned
/// candidates, returning them ranked and truncated to the answer limit.
fn scan_window(
    messages: &[MarkedMessage],
    clue_index: usize,
    depth: usize,
    allow_early_exit: bool,
    classifier: &AffirmationClassifier,
) -> Vec<String> {
    let Some(mark) = &messages[clue_index].clue else {
        return Vec::new();
    };
    let enumeration = &mark.enumeration;
    let limit = (clue_index + depth).min(messages.len());

    let mut collected = Vec::new();
    for index in clue_index + 1..limit {
        if messages[index].is_clue() {
            continue;
        }
        let text = &messages[index].message.text;

        // An affirmation a few messages in usually means the answer was
        // already said; probe backward for it instead of scanning on.
        if allow_early_exit
            && classifier.is_affirmation(text)
            && index > clue_index + EARLY_EXIT_MIN_GAP
        {
            collected = backward_probe(messages, clue_index, index, enumeration);
            break;
        }

        collected.extend(matcher::find_candidates(text, enumeration));
    }

    let mut ranked = rank::rank_candidates(&collected, classifier);
    ranked.truncate(MAX_ANSWERS);
    ranked
}

/// Walks back from just before the affirmation toward the clue, returning
/// the candidates of the first non-annotation message that yields any.
fn backward_probe(
    messages: &[MarkedMessage],
    clue_index: usize,
    affirmation_index: usize,
    enumeration: &Enumeration,
) -> Vec<String> {
    for index in (clue_index + 1..affirmation_index).rev() {
        let text = &messages[index].message.text;
        if classify::is_probable_annotation(text) {
            continue;
        }
        let candidates = matcher::find_candidates(text, enumeration);
        if !candidates.is_empty() {
            return candidates;
        }
    }
    Vec::new()
}

fn set_answers(messages: &mut [MarkedMessage], index: usize, answers: Vec<String>) {
    if let Some(mark) = &mut messages[index].clue {
        mark.answers = answers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect;
    use cluemine_core::Message;

    fn transcript(texts: &[&str]) -> Vec<MarkedMessage> {
        detect::mark_messages(
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| Message::new(i as i64, "Alice", *text))
                .collect(),
        )
    }

    fn answers(messages: &[MarkedMessage], index: usize) -> Vec<String> {
        messages[index].clue.as_ref().unwrap().answers.clone()
    }

    #[test]
    fn finds_an_answer_confirmed_by_a_thumbs_up() {
        let messages = transcript(&[
            "Capital of France (5)",
            "hmm no idea",
            "is it in europe",
            "PARIS",
            "👍",
        ]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0), vec!["PARIS".to_string()]);
    }

    #[test]
    fn affirmation_shortcut_prefers_the_message_before_it() {
        // MAYBE and HORSE also have five letters, but the affirmation
        // points at WHALE and the backward probe discards the rest.
        let messages = transcript(&[
            "Ocean giant (5)",
            "maybe horse",
            "not sure at all",
            "WHALE",
            "yes",
        ]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0), vec!["WHALE".to_string()]);
    }

    #[test]
    fn backward_probe_skips_annotation_lines() {
        let messages = transcript(&[
            "Ocean giant (5)",
            "some chatter here",
            "WHALE",
            "W****  <- pattern so far",
            "yep",
        ]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0), vec!["WHALE".to_string()]);
    }

    #[test]
    fn window_expands_until_the_answer_is_in_reach() {
        let mut texts = vec!["Striped animal (5)"];
        texts.extend(["filler text ok"; 8]);
        texts.push("ZEBRA");
        let messages = transcript(&texts);

        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0), vec!["ZEBRA".to_string()]);
    }

    #[test]
    fn fallback_pass_ignores_the_affirmation_shortcut() {
        // The early affirmation derails the context pass every rescan; the
        // fallback accumulates forward anyway and reaches TIGER.
        let messages = transcript(&[
            "Big cat (5)",
            "hm",
            "erm",
            "yes I am thinking",
            "TIGER",
        ]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0), vec!["TIGER".to_string()]);
    }

    #[test]
    fn clue_messages_are_never_answer_sources() {
        let messages = transcript(&[
            "First clue (5)",
            "Second one, WOULD maybe fit here (8)",
            "ZEBRA",
        ]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0), vec!["ZEBRA".to_string()]);
    }

    #[test]
    fn unanswerable_clues_stay_empty() {
        let messages = transcript(&["Impossible thing (7)", "no", "not a single idea"]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert!(answers(&found, 0).is_empty());
    }

    #[test]
    fn candidates_are_capped_at_three() {
        let messages = transcript(&[
            "Five letters (5)",
            "ALPHA",
            "BRAVO",
            "DELTA",
            "EAGLE",
        ]);
        let found = find_answers(
            messages,
            &SearchConfig::default(),
            &AffirmationClassifier::new(),
        );
        assert_eq!(answers(&found, 0).len(), 3);
    }
}
