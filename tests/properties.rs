//! Property tests for totality, reflexivity and cache equivalence.

use std::collections::HashSet;
use proptest::prelude::*;
use vocabmark_rs::{expand, is_member, reduce, roots, Language, Lexicon, MatchOptions, Matcher};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Nothing panics on arbitrary input.
    #[test]
    fn never_panics_on_arbitrary_input(input in any::<String>()) {
        let _ = reduce(&input);
        let _ = expand(&input);
        let _ = roots(&input);
        let v: HashSet<String> = ["cat", "study"].iter().map(|s| s.to_string()).collect();
        let _ = is_member(&v, &input);
    }

    /// A word is always among its own variants and roots.
    #[test]
    fn expanders_are_reflexive(word in "[a-zA-Z]{0,12}") {
        prop_assert!(expand(&word).contains(&word));
        prop_assert!(roots(&word).contains(&word.to_lowercase()));
    }

    /// Short words only go through the irregular tables.
    #[test]
    fn short_words_only_change_through_tables(word in "[a-zA-Z]{1,3}") {
        let lower = word.to_lowercase();
        let expected = Lexicon::builtin().lookup(&lower).map(str::to_string).unwrap_or(lower);
        prop_assert_eq!(reduce(&word), expected);
    }

    /// A stored word is always a member of its own vocabulary.
    #[test]
    fn stored_words_match_themselves(word in "[a-z]{1,10}", upper in any::<bool>()) {
        let v: HashSet<String> = std::iter::once(word.clone()).collect();
        let token = if upper { word.to_uppercase() } else { word };
        prop_assert!(is_member(&v, &token));
    }

    /// The scan cache answers exactly like the uncached matcher.
    #[test]
    fn index_agrees_with_matcher(
        words in prop::collection::vec("[a-z]{1,8}", 0..6),
        token in "[a-zA-Z]{0,10}",
        bridge_lemmas in any::<bool>(),
        undouble_roots in any::<bool>(),
    ) {
        let matcher = Matcher::with_options(
            Language::English,
            MatchOptions { bridge_lemmas, undouble_roots },
        );
        let v: HashSet<String> = words.iter().cloned().collect();
        let index = matcher.index(&words);
        prop_assert_eq!(index.explain(&token), matcher.explain(&v, &token));
    }
}
