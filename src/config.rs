use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::language::Language;

/// Switches for the vocabulary matcher. Both are off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// Also match when token and stored word share a lemma under the
    /// matching rules, which bridges irregular forms ("ran" / "run").
    pub bridge_lemmas: bool,
    /// Undouble `-ed`/`-ing` roots, so "stopped" reaches "stop".
    pub undouble_roots: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Language,
    pub matching: MatchOptions,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.language, Language::English);
        assert!(!config.matching.bridge_lemmas);
        assert!(!config.matching.undouble_roots);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_json(r#"{"matching": {"bridge_lemmas": true}}"#).unwrap();
        assert!(config.matching.bridge_lemmas);
        assert!(!config.matching.undouble_roots);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = Config::from_json(r#"{"matching": {"fuzzy": true}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
