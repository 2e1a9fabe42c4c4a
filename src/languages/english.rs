use std::collections::HashSet;
use crate::rules::{Firing, RuleSet, Strategy, SuffixRule};
use super::LanguageRules;

const PLURAL: u8 = 0;
const PAST: u8 = 1;
const PROGRESSIVE: u8 = 2;
const DEGREE: u8 = 3;

pub static CAPTURE_RULES: RuleSet = RuleSet {
    name: "english-capture",
    guard: 3,
    firing: Firing::FirstMatch,
    undouble: true,
    rules: &[
        SuffixRule::new("ies", Strategy::Replace("y")).longer_than(4),
        SuffixRule::new("es", Strategy::StripIfBaseEndsWith(&["ch", "sh", "x", "s"])).longer_than(3),
        SuffixRule::new("s", Strategy::Strip).longer_than(3).except(&["ss"]),
        SuffixRule::new("ed", Strategy::StripUndouble).longer_than(4),
        SuffixRule::new("ing", Strategy::StripUndouble).longer_than(5),
    ],
};

pub static MATCHING_RULES: RuleSet = RuleSet {
    name: "english-matching",
    guard: 3,
    firing: Firing::FirstMatch,
    undouble: true,
    rules: &[
        SuffixRule::new("ies", Strategy::Replace("y")).longer_than(4),
        SuffixRule::new("es", Strategy::StripIfBaseEndsWith(&["ch", "sh", "x", "s", "z"])).longer_than(3),
        SuffixRule::new("s", Strategy::Strip).longer_than(3).except(&["ss", "us"]),
        SuffixRule::new("ed", Strategy::StripUndouble).longer_than(4),
        SuffixRule::new("ing", Strategy::StripUndoubleOrRestoreE).longer_than(5),
        SuffixRule::new("er", Strategy::UndoubleOnly).longer_than(4),
        SuffixRule::new("est", Strategy::UndoubleOnly).longer_than(5),
        SuffixRule::new("ly", Strategy::Strip).longer_than(4),
    ],
};

// Undoubling is off here: "stopped" yields "stopp", not "stop".
pub static ROOT_RULES: RuleSet = RuleSet {
    name: "english-roots",
    guard: 0,
    firing: Firing::PerFamily,
    undouble: false,
    rules: &[
        SuffixRule::new("ies", Strategy::Replace("y")).family(PLURAL),
        SuffixRule::new("es", Strategy::Strip).family(PLURAL),
        SuffixRule::new("s", Strategy::Strip).longer_than(3).family(PLURAL),
        SuffixRule::new("ied", Strategy::Replace("y")).family(PAST),
        SuffixRule::new("ed", Strategy::StripUndouble).family(PAST),
        SuffixRule::new("ying", Strategy::Replace("y")).family(PROGRESSIVE),
        SuffixRule::new("ing", Strategy::StripUndouble).family(PROGRESSIVE),
        SuffixRule::new("iest", Strategy::Replace("y")).family(DEGREE),
        SuffixRule::new("ier", Strategy::Replace("y")).family(DEGREE),
        SuffixRule::new("est", Strategy::Strip).family(DEGREE),
        SuffixRule::new("er", Strategy::Strip).family(DEGREE),
    ],
};

const SIBILANTS: [&str; 5] = ["s", "sh", "ch", "x", "z"];

pub struct English;

impl LanguageRules for English {
    fn capture_rules(&self) -> &'static RuleSet {
        &CAPTURE_RULES
    }

    fn matching_rules(&self) -> &'static RuleSet {
        &MATCHING_RULES
    }

    fn root_rules(&self) -> &'static RuleSet {
        &ROOT_RULES
    }

    fn inflect(&self, word: &str, out: &mut HashSet<String>) {
        let y_stem = word.strip_suffix('y');

        // plural
        if !word.ends_with('s') {
            out.insert(format!("{}s", word));
            out.insert(format!("{}es", word));
        }

        // past tense
        if word.ends_with('e') {
            out.insert(format!("{}d", word));
        } else if let Some(stem) = y_stem {
            out.insert(format!("{}ied", stem));
        } else if word.ends_with('c') {
            out.insert(format!("{}ked", word));
        } else {
            out.insert(format!("{}ed", word));
        }

        // progressive; e- and y-endings keep their last letter
        if word.ends_with('c') {
            out.insert(format!("{}king", word));
        } else {
            out.insert(format!("{}ing", word));
        }

        // comparative and superlative
        if let Some(stem) = y_stem {
            out.insert(format!("{}ier", stem));
            out.insert(format!("{}iest", stem));
        } else if word.ends_with('e') {
            out.insert(format!("{}r", word));
            out.insert(format!("{}st", word));
        } else {
            out.insert(format!("{}er", word));
            out.insert(format!("{}est", word));
        }

        // third person singular
        if SIBILANTS.iter().any(|s| word.ends_with(s)) {
            out.insert(format!("{}es", word));
        } else if let Some(stem) = y_stem {
            out.insert(format!("{}ies", stem));
        } else {
            out.insert(format!("{}s", word));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inflected(word: &str) -> HashSet<String> {
        let mut out = HashSet::new();
        English.inflect(word, &mut out);
        out
    }

    #[test]
    fn test_inflect_regular() {
        let forms = inflected("walk");
        for f in ["walks", "walkes", "walked", "walking", "walker", "walkest"] {
            assert!(forms.contains(f), "missing {}", f);
        }
    }

    #[test]
    fn test_inflect_endings() {
        let forms = inflected("happy");
        for f in ["happies", "happied", "happying", "happier", "happiest"] {
            assert!(forms.contains(f), "missing {}", f);
        }

        // e-endings keep the e in the progressive
        let forms = inflected("bake");
        for f in ["baked", "bakeing", "baker", "bakest"] {
            assert!(forms.contains(f), "missing {}", f);
        }
        assert!(!forms.contains("baking"));

        let forms = inflected("panic");
        assert!(forms.contains("panicked"));
        assert!(forms.contains("panicking"));
    }

    #[test]
    fn test_inflect_sibilants() {
        let forms = inflected("watch");
        assert!(forms.contains("watches"));
        let forms = inflected("glass");
        assert!(forms.contains("glasses"));
        assert!(!forms.contains("glasss"));
    }

    #[test]
    fn test_root_rules_families() {
        let got = ROOT_RULES.candidates("studies");
        assert_eq!(got, vec!["study".to_string()]);

        // "-es" is stripped without the sibilant check
        let got = ROOT_RULES.candidates("tapes");
        assert_eq!(got, vec!["tap".to_string()]);

        let got = ROOT_RULES.candidates("happier");
        assert_eq!(got, vec!["happy".to_string()]);
    }

    #[test]
    fn test_capture_and_matching_sets_differ() {
        assert_eq!(CAPTURE_RULES.apply("quickly"), None);
        assert_eq!(MATCHING_RULES.apply("quickly").as_deref(), Some("quick"));
        assert_eq!(CAPTURE_RULES.apply("buzzes").as_deref(), Some("buzze"));
        assert_eq!(MATCHING_RULES.apply("buzzes").as_deref(), Some("buzz"));
        assert_eq!(MATCHING_RULES.apply("bigger").as_deref(), Some("big"));
        assert_eq!(MATCHING_RULES.apply("biggest").as_deref(), Some("big"));
    }
}
