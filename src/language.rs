use serde::{Deserialize, Serialize};
use crate::languages::{LanguageRules, english::English};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }

    pub fn rules(&self) -> &'static dyn LanguageRules {
        match self {
            Language::English => &English,
        }
    }
}
