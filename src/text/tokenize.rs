// Caption tokenization: strip punctuation, lowercase, split on whitespace.
//
// Corpus statistics and store lookups must agree exactly on what a "word"
// is, so every consumer goes through this one path. Punctuation is deleted,
// not replaced with whitespace: "don't" becomes "dont" rather than "don t",
// and boundary punctuation simply vanishes.

use std::sync::OnceLock;

use regex_lite::Regex;

/// The 32-character ASCII punctuation class.
fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[[:punct:]]").expect("static punctuation class"))
}

/// Delete every ASCII punctuation character from a string.
///
/// Only the ASCII set is stripped; typographic punctuation like `¡` or
/// `—` passes through untouched.
pub fn strip_punctuation(text: &str) -> String {
    punctuation().replace_all(text, "").into_owned()
}

/// Split a caption into cleaned tokens.
///
/// Strips punctuation, lowercases, and splits on whitespace runs. Token
/// order and repeats are preserved; empty input (or input that is all
/// punctuation and whitespace) yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(text)
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_boundary_punctuation() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn internal_punctuation_deletes_without_splitting() {
        assert_eq!(strip_punctuation("don't"), "dont");
        assert_eq!(tokenize("Don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn plain_words_round_trip_to_lowercase() {
        assert_eq!(tokenize("The Quick Fox"), vec!["the", "quick", "fox"]);
    }

    #[test]
    fn empty_and_punctuation_only_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("?!... --- ..").is_empty());
    }

    #[test]
    fn order_and_repeats_are_preserved() {
        assert_eq!(tokenize("the cat the"), vec!["the", "cat", "the"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(tokenize("a  b\t c\n d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn only_ascii_punctuation_is_stripped() {
        // The inverted exclamation mark is not in the ASCII set.
        assert_eq!(tokenize("¡Hola, señor!"), vec!["¡hola", "señor"]);
    }

    #[test]
    fn every_ascii_punctuation_character_vanishes() {
        let all = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
        assert_eq!(strip_punctuation(all), "");
    }
}
