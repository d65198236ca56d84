//! Exclamation and question glyphs, by style and meaning.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkStyle {
    FullWidth,
    HalfWidth,
    Pictographic,
    /// ‼ and ⁉. The question side has no double glyph of its own, so ⁉ stands in.
    DoublePictographic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkMeaning {
    Exclamation,
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub glyph: char,
    pub style: MarkStyle,
    pub meaning: MarkMeaning,
}

const fn mark(glyph: char, style: MarkStyle, meaning: MarkMeaning) -> Mark {
    Mark {
        glyph,
        style,
        meaning,
    }
}

/// Style order inside each meaning is the order of the override index.
pub const MARKS: [Mark; 8] = [
    mark('！', MarkStyle::FullWidth, MarkMeaning::Exclamation),
    mark('!', MarkStyle::HalfWidth, MarkMeaning::Exclamation),
    mark('❗', MarkStyle::Pictographic, MarkMeaning::Exclamation),
    mark('‼', MarkStyle::DoublePictographic, MarkMeaning::Exclamation),
    mark('？', MarkStyle::FullWidth, MarkMeaning::Question),
    mark('?', MarkStyle::HalfWidth, MarkMeaning::Question),
    mark('❓', MarkStyle::Pictographic, MarkMeaning::Question),
    mark('⁉', MarkStyle::DoublePictographic, MarkMeaning::Question),
];

pub fn lookup(glyph: char) -> Option<Mark> {
    MARKS.iter().copied().find(|m| m.glyph == glyph)
}

/// Every style of one meaning, in table order.
pub fn pool(meaning: MarkMeaning) -> Vec<Mark> {
    MARKS.iter().copied().filter(|m| m.meaning == meaning).collect()
}

pub fn find(style: MarkStyle, meaning: MarkMeaning) -> Option<Mark> {
    MARKS
        .iter()
        .copied()
        .find(|m| m.style == style && m.meaning == meaning)
}

/// A non-empty surface made only of exclamation/question glyphs.
pub fn is_mark_run(surface: &str) -> bool {
    !surface.is_empty() && surface.chars().all(|c| lookup(c).is_some())
}
