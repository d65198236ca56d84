//! Part-of-speech feature paths (IPADIC) and comparisons against token paths.

use crate::tokenizer::Token;

pub type FeaturePath = &'static [&'static str];

pub const PRONOUN_GENERAL: FeaturePath = &["名詞", "代名詞", "一般"];
pub const NOUN_GENERAL: FeaturePath = &["名詞", "一般"];
pub const NOUN_PROPER: FeaturePath = &["名詞", "固有名詞"];
pub const NOUN_PROPER_GENERAL: FeaturePath = &["名詞", "固有名詞", "一般"];
pub const NOUN_DEPENDENT_GENERAL: FeaturePath = &["名詞", "非自立", "一般"];
pub const NOUN_SA_CONNECTING: FeaturePath = &["名詞", "サ変接続"];
pub const ADNOMINAL: FeaturePath = &["連体詞"];
pub const ADJECTIVE_INDEPENDENT: FeaturePath = &["形容詞", "自立"];
pub const INTERJECTION: FeaturePath = &["感動詞"];
pub const VERB_INDEPENDENT: FeaturePath = &["動詞", "自立"];
pub const VERB_DEPENDENT: FeaturePath = &["動詞", "非自立"];
pub const AUXILIARY_VERB: FeaturePath = &["助動詞"];
pub const PARTICLE_SENTENCE_ENDING: FeaturePath = &["助詞", "終助詞"];
pub const PARTICLE_ADVERBIAL: FeaturePath = &["助詞", "副助詞"];
pub const PARTICLE_PARALLEL: FeaturePath = &["助詞", "並立助詞"];
pub const PARTICLE_ADVERBIAL_PARALLEL_ENDING: FeaturePath =
    &["助詞", "副助詞／並立助詞／終助詞"];
pub const PARTICLE_CONJUNCTIVE: FeaturePath = &["助詞", "接続助詞"];
pub const PARTICLE_CASE_GENERAL: FeaturePath = &["助詞", "格助詞", "一般"];
pub const PREFIX_NOUN_CONNECTING: FeaturePath = &["接頭詞", "名詞接続"];
pub const KUTEN: FeaturePath = &["記号", "句点"];
pub const TOTEN: FeaturePath = &["記号", "読点"];

/// Exclamation and question marks, full and half width.
///
/// They close a clause the way a period or comma does and are what a long
/// note trails into.
pub const EXCLAMATION_QUESTION_MARKS: [&str; 4] = ["！", "!", "？", "?"];

/// Exact comparison of a token's truncated POS path, length included.
pub fn pos_equals(token: &Token, path: FeaturePath) -> bool {
    let pos = token.pos();
    pos.len() == path.len() && pos.iter().zip(path).all(|(a, b)| a == b)
}

/// True when the token's truncated POS path begins with `prefix`.
///
/// A path shorter than `prefix` never matches.
pub fn pos_starts_with(token: &Token, prefix: FeaturePath) -> bool {
    let pos = token.pos();
    pos.len() >= prefix.len() && pos.iter().zip(prefix).all(|(a, b)| a == b)
}

/// A plain full-width period.
pub fn is_kuten(token: &Token) -> bool {
    pos_equals(token, KUTEN) && token.surface == "。"
}

/// Period, comma, or a single exclamation/question mark.
pub fn is_sentence_separator(token: &Token) -> bool {
    pos_equals(token, KUTEN)
        || pos_equals(token, TOTEN)
        || EXCLAMATION_QUESTION_MARKS.contains(&token.surface.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(surface: &str, features: &[&str]) -> Token {
        Token::new(surface, "", surface, features)
    }

    #[test]
    fn equals_ignores_wildcard_tail() {
        let t = token("これ", &["名詞", "代名詞", "一般", "*", "*", "*"]);
        assert!(pos_equals(&t, PRONOUN_GENERAL));
        assert!(!pos_equals(&t, NOUN_GENERAL));
    }

    #[test]
    fn equals_requires_same_length() {
        let t = token("ハーブ", &["名詞", "一般", "*"]);
        assert!(!pos_equals(&t, &["名詞"]));
        assert!(!pos_equals(&t, &["名詞", "一般", "人名"]));
    }

    #[test]
    fn starts_with_guards_short_paths() {
        let short = token("x", &["名詞", "*", "*"]);
        assert!(!pos_starts_with(&short, NOUN_PROPER));
        let empty = token("x", &[]);
        assert!(!pos_starts_with(&empty, NOUN_PROPER));
        let proper = token("サロメ", &["名詞", "固有名詞", "人名", "名", "*"]);
        assert!(pos_starts_with(&proper, NOUN_PROPER));
    }

    #[test]
    fn separators() {
        assert!(is_sentence_separator(&token("。", &["記号", "句点", "*"])));
        assert!(is_sentence_separator(&token("、", &["記号", "読点", "*"])));
        assert!(is_sentence_separator(&token("!", &["名詞", "サ変接続", "*"])));
        assert!(!is_sentence_separator(&token("❗", &["記号", "一般", "*"])));
        assert!(is_kuten(&token("。", &["記号", "句点", "*"])));
        assert!(!is_kuten(&token("．", &["記号", "句点", "*"])));
    }
}
