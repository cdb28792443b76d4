//! Command implementations for the Trisect CLI.

use std::io::{self, Write};

use anyhow::Context;
use log::{debug, info};

use crate::analysis::capability::Capability;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TrisectConfig;
use crate::text_tokenizer::TextTokenizer;

/// Execute a CLI command.
pub fn execute_command(args: TrisectArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let tokenizer = TextTokenizer::with_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Some(Command::Tokenize(tokenize_args)) => {
            tokenize(&tokenizer, tokenize_args, &args, &mut out)
        }
        Some(Command::Capabilities) => show_capabilities(&tokenizer, &args, &mut out),
        None => tokenize(&tokenizer, &TokenizeArgs::default(), &args, &mut out),
    }
}

/// Build the configuration from the config file and command line overrides.
pub fn load_config(args: &TrisectArgs) -> anyhow::Result<TrisectConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            TrisectConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => TrisectConfig::default(),
    };

    if let Some(dictionary) = &args.dictionary {
        config.lindera.dictionary = dictionary.clone();
    }
    config.validate().context("invalid configuration")?;

    Ok(config)
}

/// Tokenize text and write the results.
pub fn tokenize<W: Write>(
    tokenizer: &TextTokenizer,
    tokenize_args: &TokenizeArgs,
    args: &TrisectArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let text = tokenize_args.text();
    info!("tokenizing {} characters", text.chars().count());

    let results = match tokenize_args.method.method() {
        Some(method) => TokenizeResults::Single {
            method,
            result: tokenizer.tokenize_with(method, text),
        },
        None => TokenizeResults::All(tokenizer.tokenize_all(text)),
    };

    write_tokenize_output(out, &TokenizeOutput { text, results }, args)?;
    Ok(())
}

/// Write which capabilities are available.
pub fn show_capabilities<W: Write>(
    tokenizer: &TextTokenizer,
    args: &TrisectArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let statuses: Vec<CapabilityStatus> = Capability::ALL
        .into_iter()
        .map(|capability| CapabilityStatus::new(capability, tokenizer.is_available(capability)))
        .collect();

    write_capabilities(out, &statuses, args)?;
    Ok(())
}
