//! Atomic token conditions and the sets rules are built from.
//!
//! Whether a [`ConditionSet`] is read as "all must hold" or "any may hold"
//! is decided by the rule class using it, never by the set itself.

use regex::Regex;

use crate::tokenizer::Token;

use super::pos::{pos_equals, FeaturePath};

#[derive(Debug, Clone)]
pub enum Condition {
    /// Truncated POS path equals this path exactly.
    Pos(FeaturePath),
    Surface(&'static str),
    SurfacePattern(Regex),
    Reading(&'static str),
    ReadingPattern(Regex),
    BaseForm(&'static str),
    BaseFormPattern(Regex),
}

impl Condition {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Condition::Pos(path) => pos_equals(token, *path),
            Condition::Surface(s) => token.surface == *s,
            Condition::SurfacePattern(re) => re.is_match(&token.surface),
            Condition::Reading(s) => token.reading == *s,
            Condition::ReadingPattern(re) => re.is_match(&token.reading),
            Condition::BaseForm(s) => token.base_form == *s,
            Condition::BaseFormPattern(re) => re.is_match(&token.base_form),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConditionSet(Vec<Condition>);

impl ConditionSet {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self(conditions)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn conditions(&self) -> &[Condition] {
        &self.0
    }

    /// Every condition holds. Vacuously true for an empty set.
    pub fn matches_all(&self, token: &Token) -> bool {
        self.0.iter().all(|c| c.matches(token))
    }

    /// At least one condition holds. False for an empty set.
    pub fn matches_any(&self, token: &Token) -> bool {
        self.0.iter().any(|c| c.matches(token))
    }
}

/// `POS == path && surface == surface`, the shape most rules use.
pub fn pos_surface(path: FeaturePath, surface: &'static str) -> ConditionSet {
    ConditionSet::new(vec![Condition::Pos(path), Condition::Surface(surface)])
}

/// `POS == path && base_form == base`.
pub fn pos_base_form(path: FeaturePath, base: &'static str) -> ConditionSet {
    ConditionSet::new(vec![Condition::Pos(path), Condition::BaseForm(base)])
}

/// `POS == path` alone.
pub fn pos_only(path: FeaturePath) -> ConditionSet {
    ConditionSet::new(vec![Condition::Pos(path)])
}

/// `surface == surface` alone.
pub fn surface_only(surface: &'static str) -> ConditionSet {
    ConditionSet::new(vec![Condition::Surface(surface)])
}

/// One surface-only set per element, for continuous rules spelled out by surface.
pub fn surface_sequence(surfaces: &[&'static str]) -> Vec<ConditionSet> {
    surfaces.iter().map(|&s| surface_only(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::super::pos::{AUXILIARY_VERB, NOUN_GENERAL, VERB_INDEPENDENT};
    use super::*;

    fn herb() -> Token {
        Token::new(
            "ハーブ",
            "ハーブ",
            "ハーブ",
            &["名詞", "一般", "*", "*", "*", "*", "ハーブ", "ハーブ", "ハーブ"],
        )
    }

    fn shiyo() -> Token {
        Token::new(
            "しよ",
            "シヨ",
            "する",
            &["動詞", "自立", "*", "*", "サ変・スル", "未然ウ接続", "する", "シヨ", "シヨ"],
        )
    }

    #[test]
    fn exact_conditions() {
        let t = herb();
        assert!(Condition::Pos(NOUN_GENERAL).matches(&t));
        assert!(Condition::Surface("ハーブ").matches(&t));
        assert!(Condition::Reading("ハーブ").matches(&t));
        assert!(!Condition::Surface("ハーブティー").matches(&t));
        assert!(!Condition::Pos(AUXILIARY_VERB).matches(&t));
    }

    #[test]
    fn pattern_conditions() {
        let t = herb();
        let re = Regex::new(r"^ハ").unwrap();
        assert!(Condition::SurfacePattern(re.clone()).matches(&t));
        assert!(Condition::ReadingPattern(re).matches(&t));
        let re = Regex::new(r"^(ー+|～+)$").unwrap();
        assert!(!Condition::SurfacePattern(re).matches(&t));
        let re = Regex::new(r"^(する|やる)$").unwrap();
        assert!(Condition::BaseFormPattern(re).matches(&shiyo()));
    }

    #[test]
    fn all_and_any() {
        let t = shiyo();
        let set = pos_base_form(VERB_INDEPENDENT, "する");
        assert!(set.matches_all(&t));
        assert!(set.matches_any(&t));

        let mixed = ConditionSet::new(vec![
            Condition::Pos(VERB_INDEPENDENT),
            Condition::BaseForm("やる"),
        ]);
        assert!(!mixed.matches_all(&t));
        assert!(mixed.matches_any(&t));
    }

    #[test]
    fn empty_set_semantics() {
        let t = herb();
        assert!(ConditionSet::empty().matches_all(&t));
        assert!(!ConditionSet::empty().matches_any(&t));
    }

    #[test]
    fn surface_sequence_builds_one_set_per_surface() {
        let seq = surface_sequence(&["壱", "百", "満点"]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[2].conditions().len(), 1);
        assert!(matches!(seq[2].conditions()[0], Condition::Surface("満点")));
    }
}
