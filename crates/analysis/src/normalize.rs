use once_cell::sync::Lazy;
use regex::Regex;

static SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[&/\\#,+()$~%.'":*?<>{}]"#).expect("symbol set regex"));

static NON_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z ]").expect("letter filter regex"));

/// Uppercases and strips the punctuation set consulted before affirmation
/// checks.
///
/// `!` is deliberately absent from the set: "YES!" does not reduce to a
/// bare affirmation token.
pub fn strip_symbols(text: &str) -> String {
    SYMBOLS.replace_all(text, "").to_uppercase()
}

/// Uppercases and strips everything except ASCII letters and spaces.
///
/// Answer matching runs on this form.
pub fn letters_and_spaces(text: &str) -> String {
    NON_LETTERS.replace_all(text, "").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_symbols_removes_listed_punctuation() {
        assert_eq!(strip_symbols("he said: 'yes' (maybe)"), "HE SAID YES MAYBE");
        assert_eq!(strip_symbols("a,b.c~d"), "ABCD");
    }

    #[test]
    fn strip_symbols_keeps_exclamation_marks() {
        assert_eq!(strip_symbols("yes!"), "YES!");
    }

    #[test]
    fn strip_symbols_keeps_emoji() {
        assert_eq!(strip_symbols("👍"), "👍");
    }

    #[test]
    fn letters_and_spaces_drops_digits_and_punctuation() {
        assert_eq!(letters_and_spaces("It's CAT-DOG 42!"), "ITS CATDOG ");
        assert_eq!(letters_and_spaces("plain words"), "PLAIN WORDS");
    }
}
