//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::analysis::capability::Capability;
use crate::analysis::outcome::Tokenization;
use crate::cli::args::{OutputFormat, TrisectArgs};
use crate::error::Result;
use crate::text_tokenizer::{Method, TokenizationReport};

/// Results of a tokenize command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TokenizeResults {
    /// Every method was run.
    All(TokenizationReport),
    /// A single method was run.
    Single { method: Method, result: Tokenization },
}

impl TokenizeResults {
    /// The outcomes in declaration order.
    pub fn entries(&self) -> Vec<(Method, &Tokenization)> {
        match self {
            TokenizeResults::All(report) => report.iter().collect(),
            TokenizeResults::Single { method, result } => vec![(*method, result)],
        }
    }
}

/// Result structure for the tokenize command.
#[derive(Debug, Serialize)]
pub struct TokenizeOutput<'a> {
    pub text: &'a str,
    pub results: TokenizeResults,
}

/// Availability of one capability.
#[derive(Debug, Serialize)]
pub struct CapabilityStatus {
    pub capability: Capability,
    pub library: &'static str,
    pub feature: &'static str,
    pub available: bool,
    pub install: String,
}

impl CapabilityStatus {
    /// Describe a capability and whether a provider is installed for it.
    pub fn new(capability: Capability, available: bool) -> Self {
        Self {
            capability,
            library: capability.library(),
            feature: capability.feature(),
            available,
            install: capability.install_command(),
        }
    }
}

/// Write tokenize results in the selected format.
pub fn write_tokenize_output<W: Write>(
    out: &mut W,
    output: &TokenizeOutput<'_>,
    args: &TrisectArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_tokenize_human(out, output, args),
        OutputFormat::Json => write_json(out, output, args),
    }
}

/// Write capability availability in the selected format.
pub fn write_capabilities<W: Write>(
    out: &mut W,
    statuses: &[CapabilityStatus],
    args: &TrisectArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for status in statuses {
                if status.available {
                    writeln!(out, "{} ({}): available", status.capability, status.feature)?;
                } else {
                    writeln!(
                        out,
                        "{} ({}): not available. Install: {}",
                        status.capability, status.feature, status.install
                    )?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, &statuses, args),
    }
}

fn write_tokenize_human<W: Write>(
    out: &mut W,
    output: &TokenizeOutput<'_>,
    args: &TrisectArgs,
) -> Result<()> {
    let banner = "*".repeat(20);

    if args.verbosity() > 0 {
        writeln!(out, "{banner}")?;
        writeln!(out, "Text: {}", output.text)?;
        writeln!(out)?;
        writeln!(out, "{banner}")?;
        writeln!(out, "Tokenizing")?;
        writeln!(out, "{banner}")?;
    }

    for (method, result) in output.results.entries() {
        writeln!(out, "Method: {method}")?;
        writeln!(out, "Tokens: {result}")?;
        writeln!(out)?;
    }

    if args.verbosity() > 0 {
        writeln!(out, "{}", "=".repeat(40))?;
    }

    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    args: &TrisectArgs,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
