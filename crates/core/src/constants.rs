//! Heuristic constants and search defaults.

/// Tokens that classify a message as a positive acknowledgment.
pub const AFFIRMATION_TOKENS: &[&str] = &[
    "👍",
    "👍🏻",
    "👍🏼",
    "👍🏽",
    "👍🏾",
    "👍🏿",
    "YES",
    "YESS",
    "YESSS",
    "YEAH",
    "YEAHH",
    "YUP",
    "YUPP",
    "YUPPP",
    "YEH",
    "YAH",
    "YAS",
    "YEP",
    "YEPP",
    "NICE",
    "ADHE",
    "ADHEY",
    "CORRECT",
];

/// Tokens that would classify a message as a rejection.
///
/// Reserved configuration data; no component consults this list.
pub const NEGATIVE_TOKENS: &[&str] = &["NOPE", "NO", "NOT WHAT I", "NOT REALLY"];

/// Characters that mark a message as clue annotation rather than prose.
pub const ANNOTATION_CHARS: &[char] = &['-', '>', '<', '~', '*', '+', '\u{2190}'];

/// Author name WhatsApp exports use for service messages.
pub const SYSTEM_AUTHOR: &str = "System";

/// Placeholder texts left behind by message deletion.
pub const DELETION_PLACEHOLDERS: &[&str] =
    &["This message was deleted", "You deleted this message"];

/// A message must be longer than this for an enumeration match to count as a clue.
pub const MIN_CLUE_TEXT_LEN: usize = 6;

/// Maximum candidate answers kept per clue.
pub const MAX_ANSWERS: usize = 3;

/// Initial forward window of the context search pass.
pub const CONTEXT_INITIAL_DEPTH: usize = 7;

/// Window growth per rescan.
pub const DEPTH_STEP: usize = 5;

/// The context pass stops growing its window at this depth.
pub const CONTEXT_MAX_DEPTH: usize = 25;

/// Initial forward window of the brute-force fallback pass.
pub const FALLBACK_INITIAL_DEPTH: usize = 10;

/// The fallback pass stops growing its window at this depth.
pub const FALLBACK_MAX_DEPTH: usize = 35;

/// An affirmation must sit more than this many positions past the clue to
/// trigger the early exit.
pub const EARLY_EXIT_MIN_GAP: usize = 2;
