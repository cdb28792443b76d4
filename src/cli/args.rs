//! Command line argument parsing for the Trisect CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::text_tokenizer::Method;

/// Text used when no text is given on the command line.
pub const SAMPLE_TEXT: &str = "Здравствуйте! 123 Это. текст. для! токенизации! тест;;;";

/// Trisect - compare three tokenization strategies side by side
#[derive(Parser, Debug, Clone)]
#[command(name = "trisect")]
#[command(about = "Compare three tokenization strategies side by side")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TrisectArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, env = "TRISECT_CONFIG", value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Lindera dictionary URI (overrides the configuration file)
    #[arg(long, env = "TRISECT_DICTIONARY", value_name = "URI", global = true)]
    pub dictionary: Option<String>,

    /// Subcommand to execute (defaults to tokenizing the sample text)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl TrisectArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text with one or all methods
    Tokenize(TokenizeArgs),

    /// Show which optional capabilities are available
    Capabilities,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Text to tokenize (defaults to a sample sentence)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Tokenization method
    #[arg(short = 'm', long, default_value = "all")]
    pub method: MethodArg,
}

impl TokenizeArgs {
    /// The text to tokenize.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or(SAMPLE_TEXT)
    }
}

/// Methods selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodArg {
    /// Run every method
    #[default]
    All,
    /// Regex splitter
    Simple,
    /// UAX #29 word segmentation
    Unicode,
    /// Lindera morphological analysis
    Lindera,
}

impl MethodArg {
    /// The single method selected, or `None` for all of them.
    pub fn method(&self) -> Option<Method> {
        match self {
            MethodArg::All => None,
            MethodArg::Simple => Some(Method::Simple),
            MethodArg::Unicode => Some(Method::Unicode),
            MethodArg::Lindera => Some(Method::Lindera),
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_tokenize_command() {
        let args = TrisectArgs::try_parse_from([
            "trisect",
            "tokenize",
            "Hello! 123 test.",
            "--method",
            "simple",
        ])
        .unwrap();

        if let Some(Command::Tokenize(tokenize_args)) = args.command {
            assert_eq!(tokenize_args.text(), "Hello! 123 test.");
            assert_eq!(tokenize_args.method, MethodArg::Simple);
            assert_eq!(tokenize_args.method.method(), Some(Method::Simple));
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_tokenize_defaults_to_sample_text() {
        let args = TrisectArgs::try_parse_from(["trisect", "tokenize"]).unwrap();

        if let Some(Command::Tokenize(tokenize_args)) = args.command {
            assert_eq!(tokenize_args.text(), SAMPLE_TEXT);
            assert_eq!(tokenize_args.method.method(), None);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = TrisectArgs::try_parse_from(["trisect"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_global_flags() {
        let args = TrisectArgs::try_parse_from([
            "trisect",
            "capabilities",
            "-f",
            "json",
            "--pretty",
            "--dictionary",
            "embedded://unidic",
        ])
        .unwrap();

        assert!(matches!(args.command, Some(Command::Capabilities)));
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.dictionary.as_deref(), Some("embedded://unidic"));
    }

    #[test]
    fn test_verbosity() {
        let args = TrisectArgs::try_parse_from(["trisect", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = TrisectArgs::try_parse_from(["trisect", "-q", "-v"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let result = TrisectArgs::try_parse_from(["trisect", "tokenize", "x", "-m", "bogus"]);
        assert!(result.is_err());
    }
}
