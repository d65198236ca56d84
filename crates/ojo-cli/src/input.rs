//! Where input text comes from and how its bytes are decoded.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tracing::warn;

use crate::cli::Charcode;
use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Given on the command line; never re-decoded.
    Text(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Text(_) => "<text>".to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }
}

/// `--text` wins over files; with neither, stdin is read.
pub fn sources(text: Option<String>, files: &[PathBuf]) -> Vec<Source> {
    if let Some(text) = text {
        return vec![Source::Text(text)];
    }
    if files.is_empty() {
        return vec![Source::Stdin];
    }
    files.iter().cloned().map(Source::File).collect()
}

pub fn read_source(
    source: &Source,
    charcode: Charcode,
    stdin: &mut dyn Read,
) -> Result<String, CliError> {
    let label = source.label();
    let bytes = match source {
        Source::Text(text) => return Ok(text.clone()),
        Source::File(path) => fs::read(path).map_err(|source| CliError::Input {
            path: label.clone(),
            source,
        })?,
        Source::Stdin => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .map_err(|source| CliError::Input {
                    path: label.clone(),
                    source,
                })?;
            buf
        }
    };
    decode(bytes, charcode, &label)
}

/// UTF-8 must be valid. Shift_JIS decoding is lossy: bad sequences become U+FFFD.
pub fn decode(bytes: Vec<u8>, charcode: Charcode, label: &str) -> Result<String, CliError> {
    match charcode {
        Charcode::Utf8 => String::from_utf8(bytes).map_err(|_| CliError::Decode {
            path: label.to_string(),
        }),
        Charcode::Sjis => {
            let (text, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&bytes);
            if had_errors {
                warn!(input = label, "malformed Shift_JIS replaced");
            }
            Ok(text.into_owned())
        }
    }
}
