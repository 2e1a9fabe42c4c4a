use std::collections::HashSet;
use crate::language::Language;

/// Plausible inflected surface forms of `word`.
///
/// Always contains `word` itself plus its lowercase and uppercase spellings.
/// The rest is generated from the lowercase form without any dictionary, so
/// the set holds invalid strings too ("plaied"); it is meant for membership
/// lookups only.
pub fn expand(language: Language, word: &str) -> HashSet<String> {
    let lower = word.to_lowercase();
    let mut out = HashSet::new();
    out.insert(word.to_string());
    out.insert(word.to_uppercase());
    language.rules().inflect(&lower, &mut out);
    out.insert(lower);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_contains_case_variants() {
        let forms = expand(Language::English, "Play");
        for f in ["Play", "play", "PLAY"] {
            assert!(forms.contains(f), "missing {}", f);
        }
    }

    #[test]
    fn test_expand_play() {
        let forms = expand(Language::English, "play");
        for f in ["plays", "plaied", "playing", "plaier", "plaiest", "plaies"] {
            assert!(forms.contains(f), "missing {}", f);
        }
        assert!(!forms.contains("played"));
    }

    #[test]
    fn test_expand_word_ending_in_s_skips_plural() {
        let forms = expand(Language::English, "bus");
        assert!(!forms.contains("buss"));
        assert!(forms.contains("buses"));
        assert!(forms.contains("bused"));
    }
}
