use std::collections::HashSet;
use crate::language::Language;
use crate::rules::RuleSet;

/// Plausible roots of an inflected `word`, including the lowercase word itself.
///
/// Unlike the lemmatizer every suffix family (plural, past, progressive,
/// degree) contributes its own candidate, and no sibilant or length checks
/// narrow the `-es`, `-ed` and `-ing` strips.
pub fn roots(language: Language, word: &str) -> HashSet<String> {
    collect(language.rules().root_rules(), word)
}

/// Same as [`roots`], also undoubling `-ed`/`-ing` remainders (`"stopped"` -> `"stop"`).
pub fn roots_with_undoubling(language: Language, word: &str) -> HashSet<String> {
    collect(&language.rules().root_rules().with_undoubling(true), word)
}

fn collect(rules: &RuleSet, word: &str) -> HashSet<String> {
    let lower = word.to_lowercase();
    let mut out: HashSet<String> = rules.candidates(&lower).into_iter().collect();
    out.insert(lower);
    out
}
