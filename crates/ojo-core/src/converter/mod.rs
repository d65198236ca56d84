//! Conversion driver: one forward pass over the token sequence.
//!
//! At each cursor position the stages are tried in priority order (ASCII
//! literal, sentence-ending rule, continuous rule, exclude rule, single-token
//! rule). The first stage that produces output decides the text and the last
//! token it consumed; the cursor then moves one past that token. Nothing in
//! a pass can fail: unmatched tokens are emitted as they are.

pub mod explain;
mod options;
pub mod prefix;

pub(crate) mod testutil;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::embellish::{long_note, promote_kuten};
use crate::random::{choose_or_forced, RandomSource, SystemRandom};
use crate::rules::pos::{
    is_sentence_separator, pos_equals, pos_starts_with, NOUN_GENERAL, NOUN_SA_CONNECTING,
};
use crate::rules::{
    MeaningClass, RegistryError, RuleRegistry, SentenceEndingRule, SingleTokenRule, PLACEHOLDER,
};
use crate::tokenizer::{Token, TokenizeError, Tokenizer};
use crate::unicode::is_alnum_word;

pub use explain::{format_text, ExplainResult, ExplainStep, Stage};
pub use options::{ConvertOptions, Overrides};
pub use prefix::{HONORIFIC, POLITE_SUFFIX};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("tokenizer failed: {0}")]
    Tokenize(#[from] TokenizeError),
}

/// Tokenizer plus a shared, read-only rule registry.
pub struct Converter {
    registry: Arc<RuleRegistry>,
    tokenizer: Box<dyn Tokenizer>,
}

impl Converter {
    pub fn new(registry: Arc<RuleRegistry>, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            registry,
            tokenizer,
        }
    }

    pub fn with_builtin_rules(tokenizer: Box<dyn Tokenizer>) -> Result<Self, RegistryError> {
        Ok(Self::new(Arc::new(RuleRegistry::builtin()?), tokenizer))
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// Convert `text`, drawing randomness from a fresh entropy-seeded source.
    pub fn convert(&self, text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
        self.convert_with_rng(text, options, &mut SystemRandom::new())
    }

    pub fn convert_with_rng(
        &self,
        text: &str,
        options: &ConvertOptions,
        rng: &mut dyn RandomSource,
    ) -> Result<String, ConvertError> {
        let _span = debug_span!("convert", bytes = text.len()).entered();
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(convert_tokens(&self.registry, &tokens, options, rng))
    }

    /// Like [`convert_with_rng`](Self::convert_with_rng), recording which
    /// stage produced each chunk of output.
    pub fn explain(
        &self,
        text: &str,
        options: &ConvertOptions,
        rng: &mut dyn RandomSource,
    ) -> Result<ExplainResult, ConvertError> {
        let _span = debug_span!("explain", bytes = text.len()).entered();
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(explain_tokens(&self.registry, text, &tokens, options, rng))
    }
}

/// Convert an already tokenized sequence.
pub fn convert_tokens(
    registry: &RuleRegistry,
    tokens: &[Token],
    options: &ConvertOptions,
    rng: &mut dyn RandomSource,
) -> String {
    Driver::new(registry, tokens, options, rng).run(None)
}

/// [`convert_tokens`] with a per-chunk trace. `input` is echoed into the result.
pub fn explain_tokens(
    registry: &RuleRegistry,
    input: &str,
    tokens: &[Token],
    options: &ConvertOptions,
    rng: &mut dyn RandomSource,
) -> ExplainResult {
    let mut steps = Vec::new();
    let output = Driver::new(registry, tokens, options, rng).run(Some(&mut steps));
    ExplainResult {
        input: input.to_string(),
        output,
        steps,
    }
}

/// What one stage emitted and the last token index it consumed.
struct Emit {
    text: String,
    last: usize,
    stage: Stage,
    rule: Option<usize>,
    meaning: Option<MeaningClass>,
}

impl Emit {
    fn new(text: String, last: usize, stage: Stage) -> Self {
        Self {
            text,
            last,
            stage,
            rule: None,
            meaning: None,
        }
    }

    fn rule(mut self, index: usize) -> Self {
        self.rule = Some(index);
        self
    }
}

struct Driver<'a> {
    registry: &'a RuleRegistry,
    tokens: &'a [Token],
    options: &'a ConvertOptions,
    rng: &'a mut dyn RandomSource,
    /// The previous token received the honorific prefix.
    honorific: bool,
}

impl<'a> Driver<'a> {
    fn new(
        registry: &'a RuleRegistry,
        tokens: &'a [Token],
        options: &'a ConvertOptions,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            registry,
            tokens,
            options,
            rng,
            honorific: false,
        }
    }

    fn run(mut self, mut trace: Option<&mut Vec<ExplainStep>>) -> String {
        let mut out = String::new();
        let mut cursor = 0;
        while cursor < self.tokens.len() {
            let emit = self.step(cursor);
            debug!(
                start = cursor,
                end = emit.last,
                stage = emit.stage.as_str(),
                "emit"
            );
            if let Some(steps) = trace.as_deref_mut() {
                steps.push(ExplainStep {
                    start: cursor,
                    end: emit.last,
                    stage: emit.stage,
                    rule: emit.rule,
                    meaning: emit.meaning,
                    source: self.tokens[cursor..=emit.last]
                        .iter()
                        .map(|t| t.surface.as_str())
                        .collect(),
                    output: emit.text.clone(),
                });
            }
            out.push_str(&emit.text);
            cursor = emit.last + 1;
        }
        out
    }

    fn step(&mut self, i: usize) -> Emit {
        let tokens = self.tokens;
        let token = &tokens[i];
        if is_alnum_word(&token.surface) {
            return Emit::new(token.surface.clone(), i, Stage::Literal);
        }
        if let Some(emit) = self.sentence_ending(i) {
            return emit;
        }
        if let Some(emit) = self.continuous(i) {
            return emit;
        }
        if self.registry.is_excluded(token) {
            return Emit::new(token.surface.clone(), i, Stage::Exclude);
        }
        self.single(i)
    }

    fn sentence_ending(&mut self, start: usize) -> Option<Emit> {
        let registry = self.registry;
        registry
            .sentence_ending_rules()
            .iter()
            .enumerate()
            .find_map(|(index, rule)| {
                let (text, last, meaning) = self.match_sentence_ending(rule, start)?;
                Some(Emit {
                    text,
                    last,
                    stage: Stage::SentenceEnding,
                    rule: Some(index),
                    meaning: Some(meaning),
                })
            })
    }

    /// Noun, verb, auxiliary (optional unless the rule requires it), then a
    /// classifying particle.
    ///
    /// Every step needs a following token to exist; running out abandons the rule.
    fn match_sentence_ending(
        &mut self,
        rule: &SentenceEndingRule,
        start: usize,
    ) -> Option<(String, usize, MeaningClass)> {
        let tokens = self.tokens;
        let opener = &tokens[start];
        if !rule.is_opener(opener) {
            return None;
        }
        tokens.get(start + 1)?;
        let honorific =
            pos_equals(opener, NOUN_GENERAL) || pos_starts_with(opener, NOUN_SA_CONNECTING);
        let mut text = if honorific {
            format!("{HONORIFIC}{}", opener.surface)
        } else {
            opener.surface.clone()
        };

        let mut i = start + 1;
        if !rule.is_verb(&tokens[i]) {
            return None;
        }
        tokens.get(i + 1)?;
        i += 1;

        if rule.is_auxiliary(&tokens[i]) {
            tokens.get(i + 1)?;
            i += 1;
        } else if rule.require_auxiliary {
            return None;
        }

        let meaning = rule.classify(&tokens[i]);
        if meaning == MeaningClass::Unknown {
            return None;
        }
        let phrase = choose_or_forced(
            &mut *self.rng,
            rule.phrases(meaning),
            self.options.overrides.sentence_ending_candidate.or(Some(0)),
        )?;
        text.push_str(phrase);
        Some((text, i, meaning))
    }

    fn continuous(&mut self, start: usize) -> Option<Emit> {
        let tokens = self.tokens;
        let registry = self.registry;
        let (index, rule) = registry
            .continuous_rules()
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches_at(tokens, start))?;

        let mut last = start + rule.len() - 1;
        let head = &tokens[start];
        let head_text = if prefix::is_eligible(head) {
            format!("{HONORIFIC}{}", head.surface)
        } else {
            head.surface.clone()
        };
        let mut text = rule.template.replace(PLACEHOLDER, &head_text);

        // A promoted period and a long note never appear together.
        if rule.kuten_promotion {
            if let Some((glyph, pos)) = promote_kuten(tokens, last, self.options, &mut *self.rng) {
                text.push_str(glyph);
                return Some(Emit::new(text, pos, Stage::Continuous).rule(index));
            }
        }
        if rule.long_note {
            if let Some((note, pos)) =
                long_note(tokens, last, &self.options.overrides, &mut *self.rng)
            {
                text.push_str(&note);
                last = pos;
            }
        }
        Some(Emit::new(text, last, Stage::Continuous).rule(index))
    }

    fn single(&mut self, i: usize) -> Emit {
        let tokens = self.tokens;
        let registry = self.registry;
        let token = &tokens[i];
        let prev = i.checked_sub(1).map(|p| &tokens[p]);
        let next = tokens.get(i + 1);

        let (mut text, mut last, mut kuten, stage, rule) =
            match select_single(registry.single_rules(), token, prev, next) {
                Some((index, rule)) => {
                    let mut text = rule.replacement.to_string();
                    let mut last = i;
                    if rule.long_note {
                        if let Some((note, pos)) =
                            long_note(tokens, i, &self.options.overrides, &mut *self.rng)
                        {
                            text.push_str(&note);
                            last = pos;
                        }
                    }
                    if !rule.disable_prefix {
                        (text, self.honorific) = prefix::apply(tokens, i, text, self.honorific);
                    }
                    (text, last, rule.kuten_promotion, Stage::SingleRule, Some(index))
                }
                None => {
                    let (text, applied) =
                        prefix::apply(tokens, i, token.surface.clone(), self.honorific);
                    self.honorific = applied;
                    (text, i, false, Stage::Passthrough, None)
                }
            };

        if prefix::wants_polite_suffix(tokens, i, last) {
            text.push_str(POLITE_SUFFIX);
            kuten = true;
        }
        if kuten {
            if let Some((glyph, pos)) = promote_kuten(tokens, last, self.options, &mut *self.rng) {
                text.push_str(glyph);
                last = pos;
            }
        }

        Emit {
            text,
            last,
            stage,
            rule,
            meaning: None,
        }
    }
}

/// The first rule whose trigger matches, unless its gates veto it.
///
/// A vetoed rule means "no rule" for this token; later rules are not tried.
fn select_single<'r>(
    rules: &'r [SingleTokenRule],
    token: &Token,
    prev: Option<&Token>,
    next: Option<&Token>,
) -> Option<(usize, &'r SingleTokenRule)> {
    let (index, rule) = rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.trigger.matches_all(token))?;

    if prev.is_some_and(|p| rule.before_ignore.matches_any(p)) {
        return None;
    }
    if next.is_some_and(|n| rule.after_ignore.matches_any(n)) {
        return None;
    }
    if rule.sentence_end_only && next.is_some_and(|n| !is_sentence_separator(n)) {
        return None;
    }
    Some((index, rule))
}
