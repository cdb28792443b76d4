//! The result of running one tokenization method.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TrisectError;

/// Outcome of one tokenization method.
///
/// A method never fails: problems are reported as one of the diagnostic
/// variants. [`token_list`](Tokenization::token_list) flattens any outcome to
/// a list of strings, where a diagnostic becomes a single-element list.
///
/// ```
/// use trisect::analysis::outcome::Tokenization;
///
/// let ok = Tokenization::Tokens(vec!["a".to_string(), "!".to_string()]);
/// assert_eq!(ok.token_list(), vec!["a", "!"]);
///
/// let failed = Tokenization::Failed("boom".to_string());
/// assert_eq!(failed.token_list(), vec!["boom"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Tokenization {
    /// Tokens in their original order.
    Tokens(Vec<String>),
    /// The input text was empty or missing.
    Invalid(String),
    /// The capability, or a resource it needs, is not installed.
    Unavailable(String),
    /// The capability failed while processing the text.
    Failed(String),
}

impl Tokenization {
    /// Classify an error raised while tokenizing.
    ///
    /// `context` prefixes the text of processing failures, e.g.
    /// `"Lindera tokenization error"`.
    pub fn from_error(context: &str, error: &TrisectError) -> Self {
        match error {
            TrisectError::InvalidInput(_) => Tokenization::Invalid(error.to_string()),
            TrisectError::CapabilityUnavailable { .. } | TrisectError::ResourceMissing { .. } => {
                Tokenization::Unavailable(error.to_string())
            }
            other => Tokenization::Failed(format!("{context}: {}", other.detail())),
        }
    }

    /// Check if this outcome holds real tokens.
    pub fn is_tokens(&self) -> bool {
        matches!(self, Tokenization::Tokens(_))
    }

    /// The tokens, if any were produced.
    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            Tokenization::Tokens(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// The diagnostic text, if this outcome is not a token list.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Tokenization::Tokens(_) => None,
            Tokenization::Invalid(msg)
            | Tokenization::Unavailable(msg)
            | Tokenization::Failed(msg) => Some(msg),
        }
    }

    /// The outcome as a list of strings: the tokens, or the diagnostic alone.
    pub fn token_list(&self) -> Vec<String> {
        self.clone().into_token_list()
    }

    /// Consume the outcome into a list of strings.
    pub fn into_token_list(self) -> Vec<String> {
        match self {
            Tokenization::Tokens(tokens) => tokens,
            Tokenization::Invalid(msg)
            | Tokenization::Unavailable(msg)
            | Tokenization::Failed(msg) => vec![msg],
        }
    }
}

impl fmt::Display for Tokenization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.token_list())
    }
}
