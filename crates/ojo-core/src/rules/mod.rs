//! Rule Registry: the four immutable, priority-ordered rule catalogs.
//!
//! The driver consults them in a fixed order per token position:
//! sentence-ending rules, continuous rules, exclude rules, then single-token
//! rules. A registry is validated once when it is built and never mutated
//! afterwards, so one `Arc<RuleRegistry>` can serve any number of concurrent
//! conversions.

mod builtin;
pub mod condition;
pub mod pos;


use serde::Serialize;
use tracing::debug;

use crate::tokenizer::Token;

pub use condition::{Condition, ConditionSet};

/// Placeholder in a continuous rule's template, replaced by the first matched surface.
pub const PLACEHOLDER: &str = "@1";

/// Semantic category of a sentence-ending particle combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeaningClass {
    Hope,
    Poem,
    Prohibition,
    Coercion,
    Past,
    Unknown,
}

impl MeaningClass {
    pub fn as_str(self) -> &'static str {
        match self {
            MeaningClass::Hope => "hope",
            MeaningClass::Poem => "poem",
            MeaningClass::Prohibition => "prohibition",
            MeaningClass::Coercion => "coercion",
            MeaningClass::Past => "past",
            MeaningClass::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MeaningClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replaces one token.
///
/// `before_ignore` and `after_ignore` are read as "any": a match against the
/// neighbouring token vetoes the rule.
#[derive(Debug, Clone)]
pub struct SingleTokenRule {
    pub trigger: ConditionSet,
    pub before_ignore: ConditionSet,
    pub after_ignore: ConditionSet,
    /// Only fire when the next token is a sentence separator or absent.
    pub sentence_end_only: bool,
    pub long_note: bool,
    pub kuten_promotion: bool,
    pub disable_prefix: bool,
    pub replacement: &'static str,
}

impl SingleTokenRule {
    pub fn new(trigger: ConditionSet, replacement: &'static str) -> Self {
        Self {
            trigger,
            before_ignore: ConditionSet::empty(),
            after_ignore: ConditionSet::empty(),
            sentence_end_only: false,
            long_note: false,
            kuten_promotion: false,
            disable_prefix: false,
            replacement,
        }
    }

    pub fn before_ignore(mut self, set: ConditionSet) -> Self {
        self.before_ignore = set;
        self
    }

    pub fn after_ignore(mut self, set: ConditionSet) -> Self {
        self.after_ignore = set;
        self
    }

    pub fn sentence_end_only(mut self) -> Self {
        self.sentence_end_only = true;
        self
    }

    pub fn long_note(mut self) -> Self {
        self.long_note = true;
        self
    }

    pub fn kuten(mut self) -> Self {
        self.kuten_promotion = true;
        self
    }

    pub fn no_prefix(mut self) -> Self {
        self.disable_prefix = true;
        self
    }
}

/// Replaces a fixed-length run of tokens. Each step is read as "all".
#[derive(Debug, Clone)]
pub struct ContinuousRule {
    pub steps: Vec<ConditionSet>,
    pub long_note: bool,
    pub kuten_promotion: bool,
    pub template: &'static str,
}

impl ContinuousRule {
    pub fn new(steps: Vec<ConditionSet>, template: &'static str) -> Self {
        Self {
            steps,
            long_note: false,
            kuten_promotion: false,
            template,
        }
    }

    pub fn long_note(mut self) -> Self {
        self.long_note = true;
        self
    }

    pub fn kuten(mut self) -> Self {
        self.kuten_promotion = true;
        self
    }

    /// True when every step matches the token at `start + k`.
    pub fn matches_at(&self, tokens: &[Token], start: usize) -> bool {
        if tokens.len() < start + self.steps.len() {
            return false;
        }
        self.steps
            .iter()
            .zip(&tokens[start..])
            .all(|(step, token)| step.matches_all(token))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Noun + verb (+ auxiliary) + sentence-ending particle.
#[derive(Debug, Clone)]
pub struct SentenceEndingRule {
    /// Read as "any".
    pub openers: Vec<ConditionSet>,
    /// Read as "any".
    pub verbs: Vec<ConditionSet>,
    /// Auxiliary after the verb, read as "all". Skipped when absent unless
    /// `require_auxiliary` is set.
    pub auxiliary: Option<ConditionSet>,
    pub require_auxiliary: bool,
    /// Checked in order; each class's sets are read as "any".
    pub endings: Vec<(MeaningClass, Vec<ConditionSet>)>,
    pub phrases: Vec<(MeaningClass, Vec<&'static str>)>,
}

impl SentenceEndingRule {
    pub fn is_opener(&self, token: &Token) -> bool {
        self.openers.iter().any(|set| set.matches_all(token))
    }

    pub fn is_verb(&self, token: &Token) -> bool {
        self.verbs.iter().any(|set| set.matches_all(token))
    }

    pub fn is_auxiliary(&self, token: &Token) -> bool {
        self.auxiliary
            .as_ref()
            .is_some_and(|set| set.matches_all(token))
    }

    /// Meaning class of a closing particle, `Unknown` when none applies.
    pub fn classify(&self, token: &Token) -> MeaningClass {
        self.endings
            .iter()
            .find(|(_, sets)| sets.iter().any(|set| set.matches_all(token)))
            .map(|(class, _)| *class)
            .unwrap_or(MeaningClass::Unknown)
    }

    pub fn phrases(&self, class: MeaningClass) -> &[&'static str] {
        self.phrases
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, p)| p.as_slice())
            .unwrap_or(&[])
    }
}

/// Leaves a matching token untouched. Read as "all".
#[derive(Debug, Clone)]
pub struct ExcludeRule {
    pub trigger: ConditionSet,
}

impl ExcludeRule {
    pub fn new(trigger: ConditionSet) -> Self {
        Self { trigger }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid rule pattern: {0}")]
    BadPattern(#[from] regex::Error),

    #[error("{catalog} rule #{index} has an empty trigger")]
    EmptyTrigger { catalog: &'static str, index: usize },

    #[error("continuous rule #{index} has no steps")]
    EmptyContinuousRule { index: usize },

    #[error("sentence-ending rule #{index} has no {part} conditions")]
    EmptySentenceEndingRule { index: usize, part: &'static str },

    #[error("meaning class `{0}` has ending conditions but no phrases")]
    MissingPhrases(MeaningClass),

    #[error("meaning class `{0}` has an empty phrase list")]
    EmptyPhrases(MeaningClass),

    #[error("meaning class `unknown` cannot carry ending conditions")]
    UnknownClass,
}

#[derive(Debug, Clone)]
pub struct RuleRegistry {
    exclude: Vec<ExcludeRule>,
    single: Vec<SingleTokenRule>,
    continuous: Vec<ContinuousRule>,
    sentence_ending: Vec<SentenceEndingRule>,
}

impl RuleRegistry {
    /// The built-in catalogs.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_catalogs(
            builtin::exclude_rules()?,
            builtin::single_rules(),
            builtin::continuous_rules(),
            builtin::sentence_ending_rules(),
        )
    }

    /// Assemble a registry from caller-built catalogs, validating every rule.
    pub fn from_catalogs(
        exclude: Vec<ExcludeRule>,
        single: Vec<SingleTokenRule>,
        continuous: Vec<ContinuousRule>,
        sentence_ending: Vec<SentenceEndingRule>,
    ) -> Result<Self, RegistryError> {
        // An empty "all" set matches every token, so it is never a valid trigger.
        if let Some(index) = exclude.iter().position(|r| r.trigger.is_empty()) {
            return Err(RegistryError::EmptyTrigger {
                catalog: "exclude",
                index,
            });
        }
        if let Some(index) = single.iter().position(|r| r.trigger.is_empty()) {
            return Err(RegistryError::EmptyTrigger {
                catalog: "single-token",
                index,
            });
        }
        if let Some(index) = continuous.iter().position(ContinuousRule::is_empty) {
            return Err(RegistryError::EmptyContinuousRule { index });
        }
        for (index, rule) in sentence_ending.iter().enumerate() {
            validate_sentence_ending(index, rule)?;
        }

        debug!(
            exclude = exclude.len(),
            single = single.len(),
            continuous = continuous.len(),
            sentence_ending = sentence_ending.len(),
            "rule registry built"
        );
        Ok(Self {
            exclude,
            single,
            continuous,
            sentence_ending,
        })
    }

    pub fn exclude_rules(&self) -> &[ExcludeRule] {
        &self.exclude
    }

    pub fn single_rules(&self) -> &[SingleTokenRule] {
        &self.single
    }

    pub fn continuous_rules(&self) -> &[ContinuousRule] {
        &self.continuous
    }

    pub fn sentence_ending_rules(&self) -> &[SentenceEndingRule] {
        &self.sentence_ending
    }

    pub fn is_excluded(&self, token: &Token) -> bool {
        self.exclude.iter().any(|r| r.trigger.matches_all(token))
    }
}

fn validate_sentence_ending(index: usize, rule: &SentenceEndingRule) -> Result<(), RegistryError> {
    if rule.openers.is_empty() {
        return Err(RegistryError::EmptySentenceEndingRule {
            index,
            part: "opener",
        });
    }
    if rule.verbs.is_empty() {
        return Err(RegistryError::EmptySentenceEndingRule { index, part: "verb" });
    }
    if rule.endings.is_empty() {
        return Err(RegistryError::EmptySentenceEndingRule {
            index,
            part: "ending",
        });
    }
    if rule.require_auxiliary && rule.auxiliary.is_none() {
        return Err(RegistryError::EmptySentenceEndingRule {
            index,
            part: "auxiliary",
        });
    }
    for (class, _) in &rule.endings {
        if *class == MeaningClass::Unknown {
            return Err(RegistryError::UnknownClass);
        }
        match rule.phrases.iter().find(|(c, _)| c == class) {
            None => return Err(RegistryError::MissingPhrases(*class)),
            Some((_, phrases)) if phrases.is_empty() => {
                return Err(RegistryError::EmptyPhrases(*class))
            }
            Some(_) => {}
        }
    }
    Ok(())
}
