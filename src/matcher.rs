//! Decides whether a page token is a form of a word in the user's vocabulary.
//!
//! A token matches when any of these holds:
//!
//! 1. its lowercase form is stored;
//! 2. one of its generated variants is stored (the token is a root of a stored form);
//! 3. one of its generated roots is stored (the token inflects a stored root);
//! 4. it is one of the generated variants of some stored word;
//! 5. with [`MatchOptions::bridge_lemmas`], it shares a matching-rule lemma
//!    with some stored word.
//!
//! Checks 4 and 5 expand every stored word, so [`Matcher::is_member`] costs
//! O(|vocabulary|) per token. For a full page scan build a
//! [`VocabularyIndex`] once; it precomputes those expansions and answers each
//! token with a handful of hash lookups.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use crate::config::{Config, MatchOptions};
use crate::language::Language;
use crate::lemmatizer::Lemmatizer;
use crate::roots;
use crate::token::{self, Token};
use crate::variants;

/// Which check accepted a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Direct,
    Variant,
    Root,
    StoredVariant,
    Lemma,
}

#[derive(Debug, Clone)]
pub struct Matcher {
    lemmatizer: Lemmatizer,
    options: MatchOptions,
}

impl Matcher {
    pub fn new(language: Language) -> Self {
        Self::with_options(language, MatchOptions::default())
    }

    pub fn with_options(language: Language, options: MatchOptions) -> Self {
        Self::with_lemmatizer(Lemmatizer::new(language), options)
    }

    pub fn with_lemmatizer(lemmatizer: Lemmatizer, options: MatchOptions) -> Self {
        Self { lemmatizer, options }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_options(config.language, config.matching)
    }

    pub fn language(&self) -> Language {
        self.lemmatizer.language()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    pub fn is_member<S: BuildHasher>(&self, vocabulary: &HashSet<String, S>, token: &str) -> bool {
        self.explain(vocabulary, token).is_some()
    }

    /// Like [`Matcher::is_member`], reporting the first check that accepted the token.
    pub fn explain<S: BuildHasher>(&self, vocabulary: &HashSet<String, S>, token: &str) -> Option<Check> {
        let token = token.trim();
        if token.is_empty() || vocabulary.is_empty() {
            return None;
        }
        let lower = token.to_lowercase();

        let check = self
            .token_checks(token, &lower, |w| vocabulary.contains(w))
            .or_else(|| {
                vocabulary
                    .iter()
                    .any(|w| self.expand(w).contains(&lower))
                    .then_some(Check::StoredVariant)
            })
            .or_else(|| {
                if !self.options.bridge_lemmas {
                    return None;
                }
                let lemma = self.lemmatizer.lemmatize_for_matching(&lower);
                vocabulary
                    .iter()
                    .any(|w| self.lemmatizer.lemmatize_for_matching(w) == lemma)
                    .then_some(Check::Lemma)
            });

        if let Some(check) = check {
            trace!(token, ?check, "vocabulary match");
        }
        check
    }

    /// Builds a scan cache over `words`.
    pub fn index<I, W>(&self, words: I) -> VocabularyIndex
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut index = VocabularyIndex {
            matcher: self.clone(),
            words: HashSet::new(),
            variants: HashSet::new(),
            lemmas: HashSet::new(),
        };
        for word in words {
            index.insert(word.as_ref());
        }
        debug!(
            "indexed {} vocabulary words into {} variants",
            index.words.len(),
            index.variants.len()
        );
        index
    }

    // Checks 1-3 only look at the token's own expansions.
    fn token_checks(&self, token: &str, lower: &str, stored: impl Fn(&str) -> bool) -> Option<Check> {
        if stored(lower) {
            return Some(Check::Direct);
        }
        if self.expand(token).iter().any(|v| stored(v.to_lowercase().as_str())) {
            return Some(Check::Variant);
        }
        if self.roots(lower).iter().any(|r| stored(r.as_str())) {
            return Some(Check::Root);
        }
        None
    }

    fn expand(&self, word: &str) -> HashSet<String> {
        variants::expand(self.language(), word)
    }

    fn roots(&self, word: &str) -> HashSet<String> {
        if self.options.undouble_roots {
            roots::roots_with_undoubling(self.language(), word)
        } else {
            roots::roots(self.language(), word)
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// A vocabulary snapshot with every stored word's variants precomputed.
///
/// Gives the same answers as [`Matcher::is_member`] over the same words and
/// options. Words are stored lowercased and trimmed.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    matcher: Matcher,
    words: HashSet<String>,
    variants: HashSet<String>,
    lemmas: HashSet<String>,
}

impl VocabularyIndex {
    /// Adds a word. Returns false if it was empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.words.contains(&word) {
            return false;
        }
        self.variants.extend(self.matcher.expand(&word));
        if self.matcher.options.bridge_lemmas {
            self.lemmas.insert(self.matcher.lemmatizer.lemmatize_for_matching(&word));
        }
        self.words.insert(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn contains(&self, token: &str) -> bool {
        self.explain(token).is_some()
    }

    pub fn explain(&self, token: &str) -> Option<Check> {
        let token = token.trim();
        if token.is_empty() || self.words.is_empty() {
            return None;
        }
        let lower = token.to_lowercase();

        self.matcher
            .token_checks(token, &lower, |w| self.words.contains(w))
            .or_else(|| self.variants.contains(&lower).then_some(Check::StoredVariant))
            .or_else(|| {
                let bridged = self.matcher.options.bridge_lemmas
                    && self.lemmas.contains(&self.matcher.lemmatizer.lemmatize_for_matching(&lower));
                bridged.then_some(Check::Lemma)
            })
    }

    /// Tokens of `text` that belong to the vocabulary, in page order.
    pub fn highlight(&self, text: &str) -> Vec<Token> {
        let mut seen: HashMap<String, bool> = HashMap::new();
        let hits: Vec<Token> = token::tokenize(text)
            .into_iter()
            .filter(|t| {
                *seen
                    .entry(t.text.to_lowercase())
                    .or_insert_with(|| self.contains(&t.text))
            })
            .collect();
        debug!("highlight: {} hits over {} distinct tokens", hits.len(), seen.len());
        hits
    }
}
