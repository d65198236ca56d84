use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

/// Input text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Charcode {
    #[default]
    Utf8,
    /// Shift_JIS, decoded with encoding_rs.
    Sjis,
}

#[derive(Debug, Parser)]
#[command(
    name = "ojosama",
    version,
    about = "Convert text to ojosama (お嬢様) style",
    after_help = "Examples:\n  ojosama -t これはハーブです\n  ojosama sample.txt\n  mecab < sample.txt | ojosama --pretokenized"
)]
pub struct Cli {
    /// Input text; when omitted, FILES are read in order, then stdin
    #[arg(short, long)]
    pub text: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Encoding of file and stdin input
    #[arg(long, value_enum, default_value_t = Charcode::Utf8)]
    pub charcode: Charcode,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Treat input as MeCab (IPADIC) output instead of running the analyzer
    #[arg(long)]
    pub pretokenized: bool,

    /// Analyzer command, overriding the settings file
    #[arg(long, value_name = "PATH")]
    pub mecab: Option<String>,

    /// Never turn "。" into "！" or "❗"
    #[arg(long)]
    pub no_kuten_promotion: bool,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print which rule produced each chunk instead of the converted text
    #[arg(long, conflicts_with = "explain_json")]
    pub explain: bool,

    /// Like --explain, as one JSON object per input
    #[arg(long)]
    pub explain_json: bool,

    /// Load settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Print the default settings TOML and exit
    #[arg(long)]
    pub export_settings: bool,

    /// Validate a settings TOML file and exit
    #[arg(long, value_name = "FILE")]
    pub validate_settings: Option<PathBuf>,

    /// Write JSON trace logs here (builds with the `trace` feature only)
    #[arg(long, value_name = "DIR")]
    pub trace_dir: Option<PathBuf>,

    /// Input files
    pub files: Vec<PathBuf>,
}
