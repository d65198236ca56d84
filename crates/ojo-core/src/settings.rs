//! Runtime settings loaded from TOML.
//!
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!   and checked by `build.rs`
//! - `parse_settings_toml` parses and validates a custom file
//! - Test overrides ([`Overrides`](crate::Overrides)) are never read from here

use serde::Deserialize;

use crate::converter::ConvertOptions;
use crate::tokenizer::MecabTokenizer;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

/// Parse the embedded defaults.
pub fn default_settings() -> Result<Settings, SettingsError> {
    parse_settings_toml(DEFAULT_SETTINGS_TOML)
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub convert: ConvertSettings,
    pub tokenizer: TokenizerSettings,
}

impl Settings {
    /// Production conversion options: no overrides.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            disable_kuten_promotion: self.convert.disable_kuten_promotion,
            ..ConvertOptions::default()
        }
    }

    pub fn tokenizer(&self) -> MecabTokenizer {
        MecabTokenizer::new(
            self.tokenizer.command.clone(),
            self.tokenizer.args.clone(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    #[serde(default)]
    pub disable_kuten_promotion: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.tokenizer.command.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "tokenizer.command".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(i) = s.tokenizer.args.iter().position(|a| a.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("tokenizer.args[{i}]"),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
