//! Command-line front end for `ojo_core`.
//!
//! The binary is a thin shell around [`run`]; everything it does is reachable
//! from here with injected stdin/stdout so it can be tested in-process.

pub mod cli;
pub mod commands;
pub mod input;
pub mod trace_init;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use ojo_core::converter::ConvertError;
use ojo_core::random::SystemRandom;
use ojo_core::rules::RegistryError;
use ojo_core::settings::SettingsError;

use cli::Cli;
use commands::convert_ops::{build_converter, ConvertJob, OutputFormat};

pub const EXIT_OK: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_CONVERT: i32 = 2;
pub const EXIT_INPUT: i32 = 3;
pub const EXIT_OUTPUT: i32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read settings {path}: {source}")]
    SettingsRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("rule table: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not valid UTF-8 (try --charcode sjis)")]
    Decode { path: String },

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize explain output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SettingsRead { .. } | CliError::Settings(_) => EXIT_USAGE,
            CliError::Registry(_) | CliError::Convert(_) => EXIT_CONVERT,
            CliError::Input { .. } | CliError::Decode { .. } => EXIT_INPUT,
            CliError::Output { .. } | CliError::Json(_) => EXIT_OUTPUT,
        }
    }

    pub(crate) fn stdout(source: io::Error) -> Self {
        CliError::Output {
            path: "<stdout>".to_string(),
            source,
        }
    }
}

pub fn run(cli: &Cli, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<(), CliError> {
    if let Some(shell) = cli.completions {
        commands::write_completions(shell, stdout);
        return stdout.flush().map_err(CliError::stdout);
    }
    if cli.export_settings {
        return commands::config_ops::settings_export(stdout);
    }
    if let Some(path) = &cli.validate_settings {
        return commands::config_ops::settings_validate(path, stdout);
    }

    let settings = commands::config_ops::load_settings(cli.settings.as_deref())?;
    let converter = build_converter(cli, &settings)?;
    let mut options = settings.convert_options();
    if cli.no_kuten_promotion {
        options.disable_kuten_promotion = true;
    }
    let job = ConvertJob {
        converter: &converter,
        options,
        format: OutputFormat::from_cli(cli),
        charcode: cli.charcode,
    };
    let mut rng = match cli.seed {
        Some(seed) => SystemRandom::seeded(seed),
        None => SystemRandom::new(),
    };
    let sources = input::sources(cli.text.clone(), &cli.files);

    match &cli.out {
        Some(path) => {
            let label = path.display().to_string();
            let output_error = |source| CliError::Output {
                path: label.clone(),
                source,
            };
            let mut file = BufWriter::new(File::create(path).map_err(output_error)?);
            job.run(&sources, &mut rng, stdin, &mut file, &label)?;
            file.flush().map_err(output_error)
        }
        None => {
            job.run(&sources, &mut rng, stdin, stdout, "<stdout>")?;
            stdout.flush().map_err(CliError::stdout)
        }
    }
}
