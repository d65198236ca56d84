//! Rewrites Japanese text into ojōsama (お嬢様) speech.
//!
//! The input is tokenized by an external morphological analyzer
//! (MeCab-compatible, IPADIC feature layout). The [`converter`] walks the
//! token sequence once, consulting the [`rules`] registry and the
//! [`embellish`] engine to decide what to emit for each token or span.

pub mod converter;
pub mod embellish;
pub mod random;
pub mod rules;
pub mod settings;
pub mod tokenizer;
pub mod unicode;

pub use converter::{ConvertError, ConvertOptions, Converter, Overrides};
pub use rules::RuleRegistry;
pub use tokenizer::{Token, Tokenizer};
