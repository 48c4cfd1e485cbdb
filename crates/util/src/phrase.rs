//! # Phrase Text Processing
//!
//! Tokenization and normalization for seed-phrase input. The bulk-paste path
//! and the manual-edit path deliberately normalize differently: pasted tokens
//! are lower-cased, manual edits are only trimmed. Callers must not unify the
//! two.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Splits a pasted phrase into normalized word tokens.
///
/// Every run of whitespace (spaces, tabs, any number of newlines) collapses to
/// a single delimiter, so a phrase pasted across multiple lines parses the
/// same as one pasted on a single line. Each token is trimmed and
/// lower-cased; empty tokens are dropped.
///
/// # Example
/// ```rust
/// use mnemo_util::tokenize_phrase;
///
/// let tokens = tokenize_phrase("Abandon ability\n\nable   ABOUT");
/// assert_eq!(tokens, vec!["abandon", "ability", "able", "about"]);
/// ```
pub fn tokenize_phrase(text: &str) -> Vec<String> {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    collapsed
        .split(' ')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Normalizes a manually typed word: trims surrounding whitespace only.
///
/// Case is preserved on this path; only the paste path folds case.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_paste_parses_like_single_line() {
        let multiline = "abandon ability\nable about\nabove absent absorb abstract absurd abuse access accident";
        let single = "abandon ability able about above absent absorb abstract absurd abuse access accident";
        assert_eq!(tokenize_phrase(multiline), tokenize_phrase(single));
        assert_eq!(tokenize_phrase(multiline).len(), 12);
    }

    #[test]
    fn tokens_are_lowercased_and_trimmed() {
        assert_eq!(tokenize_phrase("  ABANDON\tAbility "), vec!["abandon", "ability"]);
    }

    #[test]
    fn whitespace_only_input_yields_no_tokens() {
        assert!(tokenize_phrase("").is_empty());
        assert!(tokenize_phrase(" \n\t \n").is_empty());
    }

    #[test]
    fn repeated_newlines_collapse_to_one_delimiter() {
        assert_eq!(tokenize_phrase("a\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn manual_normalization_keeps_case() {
        assert_eq!(normalize_word("  Abandon "), "Abandon");
        assert_eq!(normalize_word(""), "");
    }
}
