use std::fs;
use std::io::Write;
use std::path::Path;

use ojo_core::settings::{self, Settings};

use crate::CliError;

fn read_settings(path: &Path) -> Result<Settings, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::SettingsRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(settings::parse_settings_toml(&content)?)
}

/// The file at `path`, or the embedded defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    match path {
        Some(path) => read_settings(path),
        None => Ok(settings::default_settings()?),
    }
}

pub fn settings_export(out: &mut dyn Write) -> Result<(), CliError> {
    out.write_all(settings::default_toml().as_bytes())
        .map_err(CliError::stdout)
}

pub fn settings_validate(path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    let s = read_settings(path)?;
    writeln!(
        out,
        "OK: tokenizer.command={}, convert.disable_kuten_promotion={}",
        s.tokenizer.command, s.convert.disable_kuten_promotion
    )
    .map_err(CliError::stdout)
}
