//! Randomized, style-consistent embellishments.
//!
//! Two effects exist. A *long note* stretches a word that is followed by an
//! exclamation or question mark (`ですわ～～！！！`). *Kuten promotion*
//! sometimes turns a closing `。` into `！` or `❗`. Both take their
//! randomness from a caller-supplied [`RandomSource`] and honour the test
//! overrides in [`Overrides`].

pub mod marks;

use tracing::debug;

use crate::converter::{ConvertOptions, Overrides};
use crate::random::{choose_or_forced, RandomSource};
use crate::rules::pos::{is_kuten, EXCLAMATION_QUESTION_MARKS};
use crate::tokenizer::Token;

use marks::{Mark, MarkMeaning};

pub const WAVY_DASH: char = '～';

/// Exclusive upper bound for random wavy-dash and mark counts.
pub const MAX_COUNT: usize = 3;

/// Half the time the period survives.
pub const KUTEN_POOL: [&str; 4] = ["。", "。", "！", "❗"];

fn trigger_meaning(token: &Token) -> Option<MarkMeaning> {
    if !EXCLAMATION_QUESTION_MARKS.contains(&token.surface.as_str()) {
        return None;
    }
    let glyph = token.surface.chars().next()?;
    marks::lookup(glyph).map(|m| m.meaning)
}

fn draw_count(forced: Option<usize>, rng: &mut dyn RandomSource) -> usize {
    forced.unwrap_or_else(|| rng.index(MAX_COUNT))
}

/// Long note for the word ending at `pos`.
///
/// Returns the suffix and the index of the last mark token it absorbed, or
/// `None` when the next token is not a lone `！`/`？`/`!`/`?`.
pub fn long_note(
    tokens: &[Token],
    pos: usize,
    overrides: &Overrides,
    rng: &mut dyn RandomSource,
) -> Option<(String, usize)> {
    let meaning = trigger_meaning(tokens.get(pos + 1)?)?;

    let wavy = draw_count(overrides.wavy_count, rng);
    let repeat = draw_count(overrides.mark_count, rng);
    let sampled: Mark = *choose_or_forced(rng, &marks::pool(meaning), overrides.mark_style)?;

    let mut note = String::new();
    note.extend(std::iter::repeat(WAVY_DASH).take(wavy));
    // The trigger itself supplies the first mark.
    note.extend(std::iter::repeat(sampled.glyph).take(repeat.saturating_sub(1)));

    let mut last = pos;
    for (j, token) in tokens.iter().enumerate().skip(pos + 1) {
        if !marks::is_mark_run(&token.surface) {
            break;
        }
        for c in token.surface.chars() {
            let glyph = marks::lookup(c)
                .and_then(|m| marks::find(sampled.style, m.meaning))
                .map_or(c, |m| m.glyph);
            note.push(glyph);
        }
        last = j;
    }

    debug!(wavy, repeat, style = ?sampled.style, last, "long note");
    Some((note, last))
}

/// Maybe replace the `。` right after `pos`.
///
/// Returns the chosen glyph and the index of the consumed period.
pub fn promote_kuten(
    tokens: &[Token],
    pos: usize,
    options: &ConvertOptions,
    rng: &mut dyn RandomSource,
) -> Option<(&'static str, usize)> {
    if options.disable_kuten_promotion {
        return None;
    }
    let next = pos + 1;
    if !tokens.get(next).is_some_and(is_kuten) {
        return None;
    }
    let glyph = *choose_or_forced(rng, &KUTEN_POOL, options.overrides.kuten_choice)?;
    debug!(glyph, "kuten promotion");
    Some((glyph, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use crate::rules::pos::is_sentence_separator;
    use crate::tokenizer::parse_mecab;

    fn forced(wavy: usize, repeat: usize, style: usize) -> Overrides {
        Overrides {
            wavy_count: Some(wavy),
            mark_count: Some(repeat),
            mark_style: Some(style),
            ..Overrides::default()
        }
    }

    fn desu_then(marks: &[&str]) -> Vec<Token> {
        let mut mecab = String::from("です\t助動詞,*,*,*,特殊・デス,基本形,です,デス,デス\n");
        for m in marks {
            mecab.push_str(&format!("{m}\t記号,一般,*,*,*,*,{m},{m},{m}\n"));
        }
        parse_mecab(&mecab).unwrap()
    }

    #[test]
    fn no_trigger_no_note() {
        let tokens = desu_then(&["。"]);
        let mut rng = SequenceRandom::new(vec![1]);
        assert!(long_note(&tokens, 0, &Overrides::default(), &mut rng).is_none());
        assert!(long_note(&tokens, 1, &Overrides::default(), &mut rng).is_none());
    }

    #[test]
    fn every_separator_mark_starts_a_note() {
        for mark in EXCLAMATION_QUESTION_MARKS {
            let tokens = desu_then(&[mark]);
            assert!(is_sentence_separator(&tokens[1]), "{mark}");
            let mut rng = SequenceRandom::new(vec![0]);
            assert!(long_note(&tokens, 0, &forced(1, 1, 0), &mut rng).is_some(), "{mark}");
        }
    }

    #[test]
    fn forced_counts_full_width() {
        let tokens = desu_then(&["！"]);
        let mut rng = SequenceRandom::new(Vec::new());
        let (note, last) = long_note(&tokens, 0, &forced(2, 3, 0), &mut rng).unwrap();
        assert_eq!(note, "～～！！！");
        assert_eq!(last, 1);
    }

    #[test]
    fn following_marks_are_restyled() {
        let tokens = desu_then(&["！", "？", "!?", "❗❓"]);
        let mut rng = SequenceRandom::new(Vec::new());
        let (note, last) = long_note(&tokens, 0, &forced(1, 1, 0), &mut rng).unwrap();
        assert_eq!(note, "～！？！？！？");
        assert_eq!(last, 4);

        let (note, _) = long_note(&tokens, 0, &forced(1, 1, 2), &mut rng).unwrap();
        assert_eq!(note, "～❗❓❗❓❗❓");
    }

    #[test]
    fn scan_stops_at_mixed_token() {
        let tokens = desu_then(&["！", "！寿司"]);
        let mut rng = SequenceRandom::new(Vec::new());
        let (note, last) = long_note(&tokens, 0, &forced(0, 0, 1), &mut rng).unwrap();
        assert_eq!(note, "!");
        assert_eq!(last, 1);
    }

    #[test]
    fn multi_glyph_token_is_not_a_trigger() {
        let tokens = desu_then(&["！！"]);
        let mut rng = SequenceRandom::new(Vec::new());
        assert!(long_note(&tokens, 0, &Overrides::default(), &mut rng).is_none());
    }

    #[test]
    fn random_draws_follow_sequence_order() {
        // wavy, repeat, then style.
        let tokens = desu_then(&["?"]);
        let mut rng = SequenceRandom::new(vec![1, 2, 3]);
        let (note, _) = long_note(&tokens, 0, &Overrides::default(), &mut rng).unwrap();
        assert_eq!(note, "～⁉⁉");
    }

    #[test]
    fn kuten_promotion_forced_and_disabled() {
        let tokens = parse_mecab(
            "悲しい\t形容詞,自立,*,*,形容詞・イ段,基本形,悲しい,カナシイ,カナシイ\n\
             。\t記号,句点,*,*,*,*,。,。,。\n",
        )
        .unwrap();
        let mut rng = SequenceRandom::new(Vec::new());
        let mut options = ConvertOptions::default();
        options.overrides.kuten_choice = Some(3);
        assert_eq!(promote_kuten(&tokens, 0, &options, &mut rng), Some(("❗", 1)));
        assert_eq!(promote_kuten(&tokens, 1, &options, &mut rng), None);

        options.disable_kuten_promotion = true;
        assert_eq!(promote_kuten(&tokens, 0, &options, &mut rng), None);
    }

    #[test]
    fn kuten_pool_is_uniform_over_slots() {
        let tokens = parse_mecab("だ\t助動詞,*,*,*,特殊・ダ,基本形,だ,ダ,ダ\n。\t記号,句点,*,*,*,*,。,。,。\n")
            .unwrap();
        let options = ConvertOptions::default();
        let picks: Vec<&str> = (0..4)
            .map(|i| {
                let mut rng = SequenceRandom::new(vec![i]);
                promote_kuten(&tokens, 0, &options, &mut rng).unwrap().0
            })
            .collect();
        assert_eq!(picks, KUTEN_POOL);
    }
}
