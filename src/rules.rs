//! Suffix rule engine shared by every reduction path.
//!
//! A [`RuleSet`] is an ordered table of [`SuffixRule`]s. The same table shape
//! drives the single-answer lemmatizer (first matching rule wins) and the
//! multi-answer root expander (first matching rule per family, all families
//! independently). Each rule names what to do with the remainder once its
//! suffix is stripped.

/// What a rule does with the remainder left after stripping its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Keep the remainder as-is.
    Strip,
    /// Append a replacement to the remainder (`studies` -> `stud` + `y`).
    Replace(&'static str),
    /// Fire only when the remainder ends with one of the listed endings.
    StripIfBaseEndsWith(&'static [&'static str]),
    /// Keep the remainder, dropping one letter of a final doubled consonant
    /// when the rule set undoubles.
    StripUndouble,
    /// Like `StripUndouble`, and otherwise restore a silent `e` after a
    /// consonant-vowel-consonant remainder (`making` -> `make`).
    StripUndoubleOrRestoreE,
    /// Fire only when the remainder ends in a doubled consonant.
    UndoubleOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    /// The word must be strictly longer than this many characters.
    pub min_len: usize,
    /// Words ending with any of these are left to later rules.
    pub except: &'static [&'static str],
    pub strategy: Strategy,
    pub family: u8,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, strategy: Strategy) -> Self {
        Self {
            suffix,
            min_len: 0,
            except: &[],
            strategy,
            family: 0,
        }
    }

    pub const fn longer_than(self, min_len: usize) -> Self {
        Self { min_len, ..self }
    }

    pub const fn except(self, except: &'static [&'static str]) -> Self {
        Self { except, ..self }
    }

    pub const fn family(self, family: u8) -> Self {
        Self { family, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Firing {
    /// At most one rule fires per word.
    FirstMatch,
    /// At most one rule fires per family; families are independent.
    PerFamily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub name: &'static str,
    /// Words of at most this many characters are never touched.
    pub guard: usize,
    pub firing: Firing,
    /// Whether `StripUndouble*` rules drop a doubled final consonant.
    pub undouble: bool,
    pub rules: &'static [SuffixRule],
}

impl RuleSet {
    pub const fn with_undoubling(self, undouble: bool) -> Self {
        Self { undouble, ..self }
    }

    /// The result of the first rule that fires, if any.
    pub fn apply(&self, word: &str) -> Option<String> {
        if char_len(word) <= self.guard {
            return None;
        }
        self.rules.iter().find_map(|rule| self.fire(rule, word))
    }

    /// Every candidate the set produces for `word`, in rule order.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        if char_len(word) <= self.guard {
            return Vec::new();
        }
        match self.firing {
            Firing::FirstMatch => self.apply(word).into_iter().collect(),
            Firing::PerFamily => {
                let mut fired: Vec<u8> = Vec::new();
                let mut out = Vec::new();
                for rule in self.rules {
                    if fired.contains(&rule.family) {
                        continue;
                    }
                    if let Some(candidate) = self.fire(rule, word) {
                        fired.push(rule.family);
                        out.push(candidate);
                    }
                }
                out
            }
        }
    }

    fn fire(&self, rule: &SuffixRule, word: &str) -> Option<String> {
        let base = word.strip_suffix(rule.suffix)?;
        if char_len(word) <= rule.min_len || rule.except.iter().any(|e| word.ends_with(e)) {
            return None;
        }

        let out = match rule.strategy {
            Strategy::Strip => base.to_string(),
            Strategy::Replace(tail) => format!("{}{}", base, tail),
            Strategy::StripIfBaseEndsWith(endings) => {
                if !endings.iter().any(|e| base.ends_with(e)) {
                    return None;
                }
                base.to_string()
            }
            Strategy::StripUndouble => match undouble(base) {
                Some(shorter) if self.undouble => shorter.to_string(),
                _ => base.to_string(),
            },
            Strategy::StripUndoubleOrRestoreE => match undouble(base) {
                Some(shorter) if self.undouble => shorter.to_string(),
                _ if !base.ends_with('e') && ends_cvc(base) => format!("{}e", base),
                _ => base.to_string(),
            },
            Strategy::UndoubleOnly => undouble(base)?.to_string(),
        };

        if out.is_empty() { None } else { Some(out) }
    }
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c.to_ascii_lowercase())
}

/// `base` without the second letter of a final doubled consonant.
pub fn undouble(base: &str) -> Option<&str> {
    let mut rev = base.chars().rev();
    let last = rev.next()?;
    let prev = rev.next()?;
    if last == prev && is_consonant(last) {
        Some(&base[..base.len() - last.len_utf8()])
    } else {
        None
    }
}

// w, x and y never take a silent e: "snowing", "fixing", "playing".
fn ends_cvc(base: &str) -> bool {
    let tail: Vec<char> = base.chars().rev().take(3).collect();
    match tail.as_slice() {
        [c2, v, c1] => {
            is_consonant(*c1) && is_vowel(*v) && is_consonant(*c2) && !matches!(*c2, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}
