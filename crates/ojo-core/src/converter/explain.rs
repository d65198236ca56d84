use serde::Serialize;

use crate::rules::MeaningClass;

/// Which part of the pipeline produced a chunk of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// ASCII word, copied as is.
    Literal,
    SentenceEnding,
    Continuous,
    Exclude,
    SingleRule,
    /// No rule matched; only the prefix and suffix heuristics ran.
    Passthrough,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Literal => "literal",
            Stage::SentenceEnding => "sentence_ending",
            Stage::Continuous => "continuous",
            Stage::Exclude => "exclude",
            Stage::SingleRule => "single_rule",
            Stage::Passthrough => "passthrough",
        }
    }
}

/// One emitted chunk: tokens `start..=end` became `output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainStep {
    pub start: usize,
    pub end: usize,
    pub stage: Stage,
    /// Index of the rule within its catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<MeaningClass>,
    pub source: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub steps: Vec<ExplainStep>,
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;

    let mut out = String::new();
    out.push_str(&format!(
        "=== \"{}\" ({} steps) ===\n",
        result.input,
        result.steps.len()
    ));
    for step in &result.steps {
        let span = if step.start == step.end {
            format!("[{}]", step.start)
        } else {
            format!("[{}..{}]", step.start, step.end)
        };
        let pad_width = 16;
        let display_width = UnicodeWidthStr::width(step.source.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", step.source, " ".repeat(pad_width - display_width))
        } else {
            step.source.clone()
        };
        let mut label = step.stage.as_str().to_string();
        if let Some(rule) = step.rule {
            label.push_str(&format!("#{rule}"));
        }
        if let Some(meaning) = step.meaning {
            label.push_str(&format!("({meaning})"));
        }
        out.push_str(&format!(
            "  {:<9} {} -> {}  {}\n",
            span, padded, step.output, label
        ));
    }
    out.push_str(&format!("=> {}\n", result.output));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExplainResult {
        ExplainResult {
            input: "野球しようぜ".into(),
            output: "お野球をいたしませんこと".into(),
            steps: vec![ExplainStep {
                start: 0,
                end: 3,
                stage: Stage::SentenceEnding,
                rule: Some(0),
                meaning: Some(MeaningClass::Hope),
                source: "野球しようぜ".into(),
                output: "お野球をいたしませんこと".into(),
            }],
        }
    }

    #[test]
    fn text_lists_each_step() {
        let text = format_text(&sample());
        assert!(text.contains("[0..3]"));
        assert!(text.contains("sentence_ending#0(hope)"));
        assert!(text.ends_with("=> お野球をいたしませんこと\n"));
    }

    #[test]
    fn stage_and_meaning_labels() {
        let result = sample();
        assert_eq!(result.steps[0].stage.as_str(), "sentence_ending");
        assert_eq!(MeaningClass::Hope.to_string(), "hope");
    }
}
