//! Character-level classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

fn hiragana_char_to_katakana(c: char) -> char {
    if is_hiragana(c) {
        char::from_u32(c as u32 + 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// True for a non-empty word made only of ASCII letters and digits.
///
/// Such words (`grass`, `abc123`) are emitted untouched by the converter.
pub fn is_alnum_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// True when a reading starts with the オ sound.
///
/// Readings from IPADIC are katakana, but hiragana readings from other
/// analyzers are accepted too. Words read with a leading オ (お嬢様, 大型)
/// are treated as already polite and never get another お.
pub fn starts_with_o_sound(reading: &str) -> bool {
    reading
        .chars()
        .next()
        .is_some_and(|c| hiragana_char_to_katakana(c) == 'オ')
}
