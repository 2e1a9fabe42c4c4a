use std::collections::HashSet;
use crate::rules::RuleSet;

/// Per-language morphology: the suffix tables fed to the rule engine and the
/// forward inflection generator.
pub trait LanguageRules: Send + Sync {
    /// Rules applied to a freshly captured word before it is stored.
    fn capture_rules(&self) -> &'static RuleSet;

    /// Broader reduction used when comparing lemmas during matching.
    fn matching_rules(&self) -> &'static RuleSet;

    /// Multi-candidate rules recovering plausible roots of an inflected token.
    fn root_rules(&self) -> &'static RuleSet;

    /// Adds plausible inflected forms of `lower` (already lowercase) to `out`.
    fn inflect(&self, lower: &str, out: &mut HashSet<String>);
}

pub mod english;
