use std::fmt;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::lexicon::Lexicon;
use crate::rules::RuleSet;
use crate::token;

/// Reduces inflected words to a single canonical lemma.
///
/// The irregular tables are consulted first; otherwise one suffix rule from
/// the language's rule set is applied. Two rule sets exist: the narrow
/// capture set used before a word is stored, and a broader matching set that
/// also undoes comparatives, superlatives and `-ly` adverbs.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    language: Language,
    lexicon: Arc<Lexicon>,
}

impl Lemmatizer {
    pub fn new(language: Language) -> Self {
        Self::with_lexicon(language, Lexicon::builtin())
    }

    pub fn with_lexicon(language: Language, lexicon: Arc<Lexicon>) -> Self {
        Self { language, lexicon }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Lemma of a freshly captured word.
    ///
    /// Empty and whitespace-only input comes back unchanged. Anything else is
    /// lowercased and trimmed before lookup, so `"Studying "` gives `"study"`.
    pub fn lemmatize(&self, word: &str) -> String {
        self.reduce_with(word, self.language.rules().capture_rules())
    }

    /// Lemma under the broader matching rules (`"bigger"` -> `"big"`).
    pub fn lemmatize_for_matching(&self, word: &str) -> String {
        self.reduce_with(word, self.language.rules().matching_rules())
    }

    pub fn lemmatize_batch<I, W>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        words.into_iter().map(|w| self.lemmatize(w.as_ref())).collect()
    }

    fn reduce_with(&self, word: &str, rules: &RuleSet) -> String {
        let lower = word.to_lowercase().trim().to_string();
        if lower.is_empty() {
            return word.to_string();
        }

        if let Some(base) = self.lexicon.lookup(&lower) {
            return base.to_string();
        }

        rules.apply(&lower).unwrap_or(lower)
    }

    /// Validates a user selection and reduces it for storage.
    pub fn capture(&self, selection: &str) -> Result<Capture> {
        let original = selection.trim();
        if original.is_empty() {
            return Err(Error::EmptySelection);
        }
        if !token::is_english_word(original) {
            return Err(Error::NotAWord(original.to_string()));
        }

        let lemma = self.lemmatize(original);
        debug!("captured '{}' -> '{}'", original, lemma);
        Ok(Capture {
            original: original.to_string(),
            lemma,
        })
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// A captured word: what the user selected and what gets stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub original: String,
    pub lemma: String,
}

impl Capture {
    pub fn is_reduced(&self) -> bool {
        self.original != self.lemma
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reduced() {
            write!(f, "{} → {}", self.original, self.lemma)
        } else {
            write!(f, "{}", self.lemma)
        }
    }
}
