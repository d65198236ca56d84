use std::io::{Read, Write};

use ojo_core::converter::{format_text, ConvertOptions, Converter};
use ojo_core::random::RandomSource;
use ojo_core::settings::Settings;
use ojo_core::tokenizer::{MecabTokenizer, PretokenizedInput, Tokenizer};
use tracing::debug;

use crate::cli::{Charcode, Cli};
use crate::input::{read_source, Source};
use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Explain,
    ExplainJson,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.explain_json {
            OutputFormat::ExplainJson
        } else if cli.explain {
            OutputFormat::Explain
        } else {
            OutputFormat::Text
        }
    }
}

/// Analyzer from the settings, unless `--pretokenized` or `--mecab` say otherwise.
pub fn build_converter(cli: &Cli, settings: &Settings) -> Result<Converter, CliError> {
    let tokenizer: Box<dyn Tokenizer> = if cli.pretokenized {
        Box::new(PretokenizedInput)
    } else {
        let tokenizer = match &cli.mecab {
            Some(command) => MecabTokenizer::new(command.clone(), settings.tokenizer.args.clone()),
            None => settings.tokenizer(),
        };
        debug!(?tokenizer, "analyzer");
        Box::new(tokenizer)
    };
    Ok(Converter::with_builtin_rules(tokenizer)?)
}

pub struct ConvertJob<'a> {
    pub converter: &'a Converter,
    pub options: ConvertOptions,
    pub format: OutputFormat,
    pub charcode: Charcode,
}

impl ConvertJob<'_> {
    /// Convert every source in order, writing each result to `out` as soon as it is ready.
    pub fn run(
        &self,
        sources: &[Source],
        rng: &mut dyn RandomSource,
        stdin: &mut dyn Read,
        out: &mut dyn Write,
        out_label: &str,
    ) -> Result<(), CliError> {
        for source in sources {
            let text = read_source(source, self.charcode, stdin)?;
            let rendered = self.render(&text, rng)?;
            out.write_all(rendered.as_bytes())
                .map_err(|source| CliError::Output {
                    path: out_label.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    fn render(&self, text: &str, rng: &mut dyn RandomSource) -> Result<String, CliError> {
        match self.format {
            OutputFormat::Text => Ok(self.converter.convert_with_rng(text, &self.options, rng)?),
            OutputFormat::Explain => {
                let result = self.converter.explain(text, &self.options, rng)?;
                Ok(format_text(&result))
            }
            OutputFormat::ExplainJson => {
                let result = self.converter.explain(text, &self.options, rng)?;
                let mut json = serde_json::to_string(&result)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}
