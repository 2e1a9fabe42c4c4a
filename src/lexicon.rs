use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;
use crate::data;
use crate::error::{Error, Result};

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let lexicon = Lexicon {
        verbs: Lexicon::normalize_table(data::load_irregular_verbs()),
        plurals: Lexicon::normalize_table(data::load_irregular_plurals()),
    };
    debug!(
        "loaded built-in lexicon: {} irregular verb forms, {} irregular plurals",
        lexicon.verbs.len(),
        lexicon.plurals.len()
    );
    Arc::new(lexicon)
});

/// The two irregular exception tables consulted before any suffix rule.
///
/// Both tables map a lowercase surface form to its base form and are never
/// mutated once built, so one instance is shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub verbs: HashMap<String, String>,
    pub plurals: HashMap<String, String>,
}

impl Lexicon {
    /// Process-wide lexicon built from the embedded tables.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a lexicon from caller-supplied JSON objects of `form -> base`.
    pub fn from_json(verbs_json: &str, plurals_json: &str) -> Result<Self> {
        let verbs = serde_json::from_str(verbs_json).map_err(|source| Error::Table {
            table: "irregular verb",
            source,
        })?;
        let plurals = serde_json::from_str(plurals_json).map_err(|source| Error::Table {
            table: "irregular plural",
            source,
        })?;
        Ok(Self {
            verbs: Lexicon::normalize_table(verbs),
            plurals: Lexicon::normalize_table(plurals),
        })
    }

    // Keys and values are compared against lowercased input, so fold them once here.
    fn normalize_table(d: HashMap<String, String>) -> HashMap<String, String> {
        d.into_iter()
            .filter_map(|(k, v)| {
                let k = k.trim().to_lowercase();
                let v = v.trim().to_lowercase();
                if k.is_empty() || v.is_empty() {
                    None
                } else {
                    Some((k, v))
                }
            })
            .collect()
    }

    pub fn irregular_verb(&self, word: &str) -> Option<&str> {
        self.verbs.get(word).map(String::as_str)
    }

    pub fn irregular_plural(&self, word: &str) -> Option<&str> {
        self.plurals.get(word).map(String::as_str)
    }

    /// Verb table first, then plural table. `word` must already be lowercase.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.irregular_verb(word).or_else(|| self.irregular_plural(word))
    }
}
