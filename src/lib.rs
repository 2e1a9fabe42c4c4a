pub mod config;
pub mod data;
pub mod error;
pub mod language;
pub mod languages;
pub mod lemmatizer;
pub mod lexicon;
pub mod matcher;
pub mod roots;
pub mod rules;
pub mod token;
pub mod variants;

use std::collections::HashSet;
use std::sync::LazyLock;

pub use config::{Config, MatchOptions};
pub use error::{Error, Result};
pub use language::Language;
pub use lemmatizer::{Capture, Lemmatizer};
pub use lexicon::Lexicon;
pub use matcher::{Check, Matcher, VocabularyIndex};
pub use token::Token;

static DEFAULT_MATCHER: LazyLock<Matcher> = LazyLock::new(Matcher::default);

/// Lemma of a captured word using the built-in English tables and rules.
pub fn reduce(word: &str) -> String {
    DEFAULT_MATCHER.lemmatizer().lemmatize(word)
}

/// Whether `token` is a form of any word in `vocabulary`, with default options.
pub fn is_member(vocabulary: &HashSet<String>, token: &str) -> bool {
    DEFAULT_MATCHER.is_member(vocabulary, token)
}

pub fn expand(word: &str) -> HashSet<String> {
    variants::expand(Language::English, word)
}

pub fn roots(word: &str) -> HashSet<String> {
    roots::roots(Language::English, word)
}
