/// Per-call conversion knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Never turn `。` into `！`/`❗`. Promotion can change the tone of the
    /// source text, so production callers may want it off.
    pub disable_kuten_promotion: bool,
    pub overrides: Overrides,
}

/// Fixed values replacing random draws, for reproducible output.
///
/// `None` means "draw at random". An index outside its pool is ignored and a
/// random draw is made instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Number of `～` in a long note.
    pub wavy_count: Option<usize>,
    /// Number of marks in a long note, counting the triggering one.
    pub mark_count: Option<usize>,
    /// Index into the mark styles (full-width, half-width, pictographic, double).
    pub mark_style: Option<usize>,
    /// Index into the kuten promotion pool `["。", "。", "！", "❗"]`.
    pub kuten_choice: Option<usize>,
    /// Index into a meaning class's candidate phrases.
    pub sentence_ending_candidate: Option<usize>,
}

impl Overrides {
    /// All three long-note draws pinned.
    pub fn long_note(wavy: usize, marks: usize, style: usize) -> Self {
        Self {
            wavy_count: Some(wavy),
            mark_count: Some(marks),
            mark_style: Some(style),
            kuten_choice: None,
            sentence_ending_candidate: None,
        }
    }
}
