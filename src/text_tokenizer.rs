//! Run text through every tokenization method and collect the results.
//!
//! [`TextTokenizer`] exposes three methods:
//!
//! - [`simple_tokenize`](TextTokenizer::simple_tokenize): the regex splitter, always available
//! - [`unicode_tokenize`](TextTokenizer::unicode_tokenize): UAX #29 word segmentation
//! - [`lindera_tokenize`](TextTokenizer::lindera_tokenize): dictionary-based morphological analysis
//!
//! and [`tokenize_all`](TextTokenizer::tokenize_all), which runs all three.
//! None of them fail: invalid input, a missing capability, a missing
//! dictionary, or a processing error are all reported as a [`Tokenization`].
//!
//! # Examples
//!
//! ```
//! use trisect::text_tokenizer::TextTokenizer;
//!
//! let tokenizer = TextTokenizer::new();
//! let report = tokenizer.tokenize_all("Hello! 123 test.");
//!
//! assert_eq!(
//!     report.simple.token_list(),
//!     vec!["Hello", "!", "123", "test", "."]
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::capability::{Capability, CapabilityRegistry};
use crate::analysis::outcome::Tokenization;
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::config::TrisectConfig;
use crate::error::{Result, TrisectError};

/// The tokenization methods, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Regex splitter.
    Simple,
    /// UAX #29 word segmentation.
    Unicode,
    /// Lindera morphological analysis.
    Lindera,
}

impl Method {
    /// All methods in declaration order.
    pub const ALL: [Method; 3] = [Method::Simple, Method::Unicode, Method::Lindera];

    /// The method identifier used as a result key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Simple => "simple",
            Method::Unicode => "unicode",
            Method::Lindera => "lindera",
        }
    }

    /// The optional capability this method depends on.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Method::Simple => None,
            Method::Unicode => Some(Capability::Unicode),
            Method::Lindera => Some(Capability::Lindera),
        }
    }

    fn failure_context(&self) -> &'static str {
        match self {
            Method::Simple => "Simple tokenization error",
            Method::Unicode => "Unicode tokenization error",
            Method::Lindera => "Lindera tokenization error",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TrisectError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| TrisectError::other(format!("unknown tokenization method '{s}'")))
    }
}

/// Results of [`TextTokenizer::tokenize_all`], one field per method.
///
/// Serializes with the keys `simple`, `unicode`, `lindera` in that order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationReport {
    pub simple: Tokenization,
    pub unicode: Tokenization,
    pub lindera: Tokenization,
}

impl TokenizationReport {
    /// The outcome of one method.
    pub fn get(&self, method: Method) -> &Tokenization {
        match method {
            Method::Simple => &self.simple,
            Method::Unicode => &self.unicode,
            Method::Lindera => &self.lindera,
        }
    }

    /// Iterate over the outcomes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Method, &Tokenization)> {
        Method::ALL.into_iter().map(move |method| (method, self.get(method)))
    }

    /// Flatten to `(method identifier, token list)` pairs in declaration order.
    pub fn into_token_lists(self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            (Method::Simple.as_str(), self.simple.into_token_list()),
            (Method::Unicode.as_str(), self.unicode.into_token_list()),
            (Method::Lindera.as_str(), self.lindera.into_token_list()),
        ]
    }
}

/// Runs text through the simple tokenizer and the optional capabilities.
///
/// Capability availability is fixed when the tokenizer is built and never
/// re-checked; tokenization calls do not change the tokenizer's state.
#[derive(Clone, Debug)]
pub struct TextTokenizer {
    simple: SimpleTokenizer,
    registry: CapabilityRegistry,
}

impl TextTokenizer {
    /// Create a tokenizer with the default configuration, probing the
    /// capabilities compiled into this build.
    pub fn new() -> Self {
        Self::with_config(&TrisectConfig::default())
    }

    /// Create a tokenizer whose capabilities use the given configuration.
    pub fn with_config(config: &TrisectConfig) -> Self {
        Self::with_registry(CapabilityRegistry::detect(config))
    }

    /// Create a tokenizer from an explicit set of capability providers.
    pub fn with_registry(registry: CapabilityRegistry) -> Self {
        TextTokenizer {
            simple: SimpleTokenizer::new(),
            registry,
        }
    }

    /// Check if a capability is available to this tokenizer.
    pub fn is_available(&self, capability: Capability) -> bool {
        self.registry.is_available(capability)
    }

    /// Split text into word runs and single punctuation characters.
    ///
    /// Empty or missing text yields the invalid input diagnostic.
    pub fn simple_tokenize<'a, T: Into<Option<&'a str>>>(&self, text: T) -> Tokenization {
        let text = match validate_input(text.into()) {
            Ok(text) => text,
            Err(e) => return Tokenization::from_error(Method::Simple.failure_context(), &e),
        };

        match self.simple.tokenize(text) {
            Ok(stream) => Tokenization::Tokens(stream.map(|token| token.text).collect()),
            Err(e) => Tokenization::from_error(Method::Simple.failure_context(), &e),
        }
    }

    /// Tokenize with the Unicode word segmentation capability.
    pub fn unicode_tokenize<'a, T: Into<Option<&'a str>>>(&self, text: T) -> Tokenization {
        self.delegate(Method::Unicode, Capability::Unicode, text.into())
    }

    /// Tokenize with the Lindera capability.
    ///
    /// A missing dictionary is reported separately from the capability
    /// itself being absent.
    pub fn lindera_tokenize<'a, T: Into<Option<&'a str>>>(&self, text: T) -> Tokenization {
        self.delegate(Method::Lindera, Capability::Lindera, text.into())
    }

    /// Tokenize with a single method.
    pub fn tokenize_with<'a, T: Into<Option<&'a str>>>(
        &self,
        method: Method,
        text: T,
    ) -> Tokenization {
        match method {
            Method::Simple => self.simple_tokenize(text),
            Method::Unicode => self.unicode_tokenize(text),
            Method::Lindera => self.lindera_tokenize(text),
        }
    }

    /// Run every method on the same text.
    pub fn tokenize_all<'a, T: Into<Option<&'a str>>>(&self, text: T) -> TokenizationReport {
        let text = text.into();
        TokenizationReport {
            simple: self.simple_tokenize(text),
            unicode: self.unicode_tokenize(text),
            lindera: self.lindera_tokenize(text),
        }
    }

    fn delegate(&self, method: Method, capability: Capability, text: Option<&str>) -> Tokenization {
        let Some(provider) = self.registry.provider(capability) else {
            return Tokenization::from_error(
                method.failure_context(),
                &capability.unavailable_error(),
            );
        };
        let text = match validate_input(text) {
            Ok(text) => text,
            Err(e) => return Tokenization::from_error(method.failure_context(), &e),
        };

        debug!("tokenizing {} bytes with {}", text.len(), provider.name());
        match provider.tokenize(text) {
            Ok(stream) => Tokenization::Tokens(stream.map(|token| token.text).collect()),
            Err(e) => {
                warn!("{capability} tokenization failed: {e}");
                Tokenization::from_error(method.failure_context(), &e)
            }
        }
    }
}

impl Default for TextTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject missing or empty text. Whitespace-only text is valid.
fn validate_input(text: Option<&str>) -> Result<&str> {
    text.filter(|text| !text.is_empty())
        .ok_or_else(|| TrisectError::invalid_input("input text must be a non-empty string."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenize() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        assert_eq!(
            tokenizer.simple_tokenize("Hello! 123 test.").token_list(),
            vec!["Hello", "!", "123", "test", "."]
        );
        assert_eq!(
            tokenizer.simple_tokenize("тест;;;").token_list(),
            vec!["тест", ";", ";", ";"]
        );
    }

    #[test]
    fn test_simple_tokenize_invalid_input() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        let expected = vec!["Error: input text must be a non-empty string."];
        assert_eq!(tokenizer.simple_tokenize("").token_list(), expected);
        assert_eq!(tokenizer.simple_tokenize(None::<&str>).token_list(), expected);
        assert_eq!(
            tokenizer.simple_tokenize(""),
            Tokenization::Invalid(expected[0].to_string())
        );
    }

    #[test]
    fn test_validate_input() {
        assert_eq!(validate_input(Some("  ")).unwrap(), "  ");
        for text in [None, Some("")] {
            let error = validate_input(text).unwrap_err();
            assert!(matches!(error, TrisectError::InvalidInput(_)));
            assert_eq!(error.to_string(), "Error: input text must be a non-empty string.");
        }
    }

    #[test]
    fn test_whitespace_only_is_valid_but_empty() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        assert_eq!(tokenizer.simple_tokenize("   "), Tokenization::Tokens(vec![]));
    }

    #[test]
    fn test_unavailable_capabilities() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        assert!(!tokenizer.is_available(Capability::Unicode));

        assert_eq!(
            tokenizer.unicode_tokenize("text").token_list(),
            vec!["unicode-segmentation is not enabled. Install: cargo build --features unicode"]
        );
        assert_eq!(
            tokenizer.lindera_tokenize("text").token_list(),
            vec!["lindera is not enabled. Install: cargo build --features lindera"]
        );
    }

    #[test]
    fn test_unavailable_takes_precedence_over_invalid_input() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        assert!(matches!(
            tokenizer.lindera_tokenize(""),
            Tokenization::Unavailable(_)
        ));
    }

    #[test]
    fn test_tokenize_with_dispatch() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        for method in Method::ALL {
            let text = "a, b";
            let expected = match method {
                Method::Simple => tokenizer.simple_tokenize(text),
                Method::Unicode => tokenizer.unicode_tokenize(text),
                Method::Lindera => tokenizer.lindera_tokenize(text),
            };
            assert_eq!(tokenizer.tokenize_with(method, text), expected);
        }
    }

    #[test]
    fn test_report_order() {
        let tokenizer = TextTokenizer::with_registry(CapabilityRegistry::new());
        let report = tokenizer.tokenize_all("x");
        let keys: Vec<Method> = report.iter().map(|(method, _)| method).collect();
        assert_eq!(keys, Method::ALL.to_vec());

        let json = serde_json::to_string(&report).unwrap();
        let simple = json.find("\"simple\"").unwrap();
        let unicode = json.find("\"unicode\"").unwrap();
        let lindera = json.find("\"lindera\"").unwrap();
        assert!(simple < unicode && unicode < lindera);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("simple".parse::<Method>().unwrap(), Method::Simple);
        assert_eq!("lindera".parse::<Method>().unwrap(), Method::Lindera);
        assert!("bogus".parse::<Method>().is_err());
        assert_eq!(Method::Unicode.capability(), Some(Capability::Unicode));
        assert_eq!(Method::Simple.capability(), None);
    }

    #[cfg(feature = "unicode")]
    #[test]
    fn test_default_unicode_capability() {
        let tokenizer = TextTokenizer::new();
        assert!(tokenizer.is_available(Capability::Unicode));
        assert_eq!(
            tokenizer.unicode_tokenize("Hello, world!").token_list(),
            vec!["Hello", ",", "world", "!"]
        );
    }
}
