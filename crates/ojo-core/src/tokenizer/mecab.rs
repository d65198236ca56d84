//! MeCab (IPADIC) output format and the MeCab child-process tokenizer.
//!
//! Each token line is `surface\tPOS,POS1,POS2,POS3,ctype,cform,base,reading,pron`.
//! `EOS` closes every input line.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, debug_span};

use super::{Token, TokenizeError, Tokenizer, WILDCARD};

const EOS: &str = "EOS";
const BASE_FORM_COLUMN: usize = 6;
const READING_COLUMN: usize = 7;

/// Parse MeCab output, dropping `EOS` markers.
pub fn parse_mecab(output: &str) -> Result<Vec<Token>, TokenizeError> {
    parse_lines(output, false)
}

fn parse_lines(output: &str, eos_as_newline: bool) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    for (i, line) in output.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        if line == EOS {
            if eos_as_newline {
                tokens.push(Token::filler("\n"));
            }
            continue;
        }
        tokens.push(parse_line(line).ok_or_else(|| TokenizeError::Malformed {
            line: i + 1,
            content: line.to_string(),
        })?);
    }
    Ok(tokens)
}

fn parse_line(line: &str) -> Option<Token> {
    let (surface, feature_str) = line.split_once('\t')?;
    if surface.is_empty() {
        return None;
    }
    let features: Vec<String> = feature_str.split(',').map(str::to_string).collect();

    // Unknown words carry only seven columns and a `*` base form.
    let base_form = match features.get(BASE_FORM_COLUMN) {
        Some(b) if b != WILDCARD => b.clone(),
        _ => surface.to_string(),
    };
    let reading = match features.get(READING_COLUMN) {
        Some(r) if r != WILDCARD => r.clone(),
        _ => String::new(),
    };

    Some(Token {
        surface: surface.to_string(),
        reading,
        base_form,
        features,
    })
}

/// Re-insert the source text the analyzer skipped.
///
/// MeCab drops whitespace and line breaks. Every gap between consecutive
/// token surfaces becomes a [`Token::filler`], so concatenating the surfaces
/// of the result reproduces `text` exactly.
pub fn align_with_source(text: &str, tokens: Vec<Token>) -> Result<Vec<Token>, TokenizeError> {
    let mut aligned = Vec::with_capacity(tokens.len());
    let mut offset = 0;
    for token in tokens {
        let rest = &text[offset..];
        let Some(idx) = rest.find(token.surface.as_str()) else {
            return Err(TokenizeError::Misaligned {
                surface: token.surface,
                offset,
            });
        };
        if idx > 0 {
            aligned.push(Token::filler(&rest[..idx]));
        }
        offset += idx + token.surface.len();
        aligned.push(token);
    }
    if offset < text.len() {
        aligned.push(Token::filler(&text[offset..]));
    }
    Ok(aligned)
}

/// Runs a MeCab-compatible analyzer once per call.
#[derive(Debug, Clone)]
pub struct MecabTokenizer {
    command: String,
    args: Vec<String>,
}

impl MecabTokenizer {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    fn run(&self, text: &str) -> Result<String, TokenizeError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TokenizeError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("analyzer stdin unavailable"))?;
        let mut input = text.to_string();
        if !input.ends_with('\n') {
            input.push('\n');
        }
        // Feed stdin from a separate thread so a full stdout pipe cannot deadlock us.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| io::Error::other("analyzer stdin writer panicked"))?;

        // An analyzer that dies early also breaks the pipe; its status says why.
        if !output.status.success() {
            return Err(TokenizeError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;
        String::from_utf8(output.stdout).map_err(|_| TokenizeError::Encoding)
    }
}

impl Default for MecabTokenizer {
    fn default() -> Self {
        Self::new("mecab", Vec::new())
    }
}

impl Tokenizer for MecabTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let _span = debug_span!("mecab", command = %self.command, bytes = text.len()).entered();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let output = self.run(text)?;
        let tokens = align_with_source(text, parse_mecab(&output)?)?;
        debug!(tokens = tokens.len(), "tokenized");
        Ok(tokens)
    }
}

/// Treats the input itself as MeCab output, for `mecab < in.txt | ojosama --pretokenized`.
///
/// Each `EOS` becomes a line break, since the original text is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PretokenizedInput;

impl Tokenizer for PretokenizedInput {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        parse_lines(text, true)
    }
}
