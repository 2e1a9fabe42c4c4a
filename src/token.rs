use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("letter run pattern is valid"));

static ENGLISH_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("english word pattern is valid"));

/// A candidate word found in page text. `start..end` is its byte span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: String, start: usize, end: usize) -> Self {
        Self { text, start, end }
    }
}

/// Splits text into runs of ASCII letters.
///
/// A run touching an ASCII digit or underscore is dropped entirely, so
/// `"abc123"` and `"snake_case"` yield nothing while `"café"` yields `"caf"`.
pub fn tokenize(text: &str) -> Vec<Token> {
    LETTER_RUN
        .find_iter(text)
        .filter(|m| !touches_word_char(text, m.start(), m.end()))
        .map(|m| Token::new(m.as_str().to_string(), m.start(), m.end()))
        .collect()
}

/// True when `s` is a single word made only of ASCII letters.
pub fn is_english_word(s: &str) -> bool {
    ENGLISH_WORD.is_match(s)
}

fn touches_word_char(text: &str, start: usize, end: usize) -> bool {
    let is_word_char = |c: char| c.is_ascii_digit() || c == '_';
    text[..start].chars().next_back().is_some_and(is_word_char)
        || text[end..].chars().next().is_some_and(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(texts("The cats, the dogs!"), vec!["The", "cats", "the", "dogs"]);
        assert!(texts("").is_empty());
        assert!(texts("  123 ... ").is_empty());
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("so   running");
        assert_eq!(tokens[1], Token::new("running".to_string(), 5, 12));
    }

    #[test]
    fn test_tokenize_word_boundaries() {
        assert!(texts("abc123 snake_case").is_empty());
        assert_eq!(texts("café don't"), vec!["caf", "don", "t"]);
        assert_eq!(texts("naïve"), vec!["na", "ve"]);
    }

    #[test]
    fn test_is_english_word() {
        assert!(is_english_word("Studying"));
        assert!(!is_english_word(""));
        assert!(!is_english_word("two words"));
        assert!(!is_english_word("naïve"));
        assert!(!is_english_word("x1"));
    }
}
