//! Boundary to the external morphological analyzer.
//!
//! The converter only ever sees [`Token`]s. Where they come from is the
//! [`Tokenizer`]'s business: a MeCab child process, or text that is already
//! MeCab output.

mod mecab;

use std::io;

use serde::{Deserialize, Serialize};

pub use mecab::{align_with_source, parse_mecab, MecabTokenizer, PretokenizedInput};

/// Wildcard entry in a feature list. It and everything after it mean "unspecified".
pub const WILDCARD: &str = "*";

/// One morpheme from the analyzer. Never mutated after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub reading: String,
    pub base_form: String,
    /// Full IPADIC feature list, e.g. `名詞,一般,*,*,*,*,ハーブ,ハーブ,ハーブ`.
    pub features: Vec<String>,
}

impl Token {
    pub fn new(surface: &str, reading: &str, base_form: &str, features: &[&str]) -> Self {
        Self {
            surface: surface.to_string(),
            reading: reading.to_string(),
            base_form: base_form.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Text the analyzer skipped (spaces, line breaks), carried through verbatim.
    pub fn filler(surface: &str) -> Self {
        Self::new(surface, "", surface, &["記号", "空白"])
    }

    /// Part-of-speech path: the feature list truncated at the first `*`.
    pub fn pos(&self) -> &[String] {
        let end = self
            .features
            .iter()
            .position(|f| f == WILDCARD)
            .unwrap_or(self.features.len());
        &self.features[..end]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("failed to start analyzer `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("analyzer exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("analyzer output is not valid UTF-8")]
    Encoding,

    #[error("malformed analyzer output at line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("token {surface:?} not found in input after byte {offset}")]
    Misaligned { surface: String, offset: usize },
}

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}
