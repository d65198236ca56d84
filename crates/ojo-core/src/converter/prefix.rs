//! Honorific お and the polite suffix.

use crate::rules::pos::{
    is_sentence_separator, pos_equals, pos_starts_with, ADJECTIVE_INDEPENDENT, NOUN_GENERAL,
    NOUN_PROPER, NOUN_SA_CONNECTING, PREFIX_NOUN_CONNECTING, VERB_INDEPENDENT,
};
use crate::tokenizer::Token;
use crate::unicode::starts_with_o_sound;

pub const HONORIFIC: &str = "お";

/// Appended to an adjective that closes a clause.
pub const POLITE_SUFFIX: &str = "ですわ";

/// Common or proper noun whose reading does not already open with オ.
pub fn is_eligible(token: &Token) -> bool {
    (pos_equals(token, NOUN_GENERAL) || pos_starts_with(token, NOUN_PROPER))
        && !starts_with_o_sound(&token.reading)
}

/// Prefix `text` with お when the token at `i` calls for it.
///
/// `applied` says whether the previous token received the prefix. Returns the
/// text and the state to carry into the next token.
pub fn apply(tokens: &[Token], i: usize, text: String, applied: bool) -> (String, bool) {
    let token = &tokens[i];
    if !is_eligible(token) {
        return (text, false);
    }
    // プレイする: the noun is half of a compound verb.
    if tokens
        .get(i + 1)
        .is_some_and(|next| pos_equals(next, VERB_INDEPENDENT))
    {
        return (text, applied);
    }
    // Only the head of a noun run is prefixed; the run stays "applied".
    if applied {
        return (text, true);
    }
    if let Some(prev) = i.checked_sub(1).map(|p| &tokens[p]) {
        // A literal お already precedes, or a compound such as 横断歩道.
        if pos_equals(prev, PREFIX_NOUN_CONNECTING) || pos_equals(prev, NOUN_SA_CONNECTING) {
            return (text, false);
        }
    }
    (format!("{HONORIFIC}{text}"), true)
}

/// An independent adjective directly before a sentence separator.
pub fn wants_polite_suffix(tokens: &[Token], i: usize, last: usize) -> bool {
    pos_equals(&tokens[i], ADJECTIVE_INDEPENDENT)
        && tokens.get(last + 1).is_some_and(is_sentence_separator)
}
