//! Regex-based word and punctuation tokenizer.

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// The fixed splitting rule: maximal runs of word characters, or any single
/// character that is neither a word character nor whitespace.
///
/// `\w` is Unicode-aware (UTS #18 Annex C): alphabetic characters of any
/// script, combining marks, decimal digits, connector punctuation such as `_`,
/// and join controls.
///
/// Whitespace is Unicode White_Space plus the information separators
/// U+001C to U+001F, which `\s` alone does not cover.
pub const SIMPLE_PATTERN: &str = r"\b\w+\b|[^\w\s\x1C-\x1F]";

static SIMPLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SIMPLE_PATTERN).expect("simple tokenizer pattern should be valid"));

/// A tokenizer that emits word runs and single punctuation characters in
/// left-to-right order. Whitespace produces no tokens.
///
/// # Examples
///
/// ```
/// use trisect::analysis::tokenizer::Tokenizer;
/// use trisect::analysis::tokenizer::simple::SimpleTokenizer;
///
/// let tokenizer = SimpleTokenizer::new();
/// let texts: Vec<String> = tokenizer
///     .tokenize("Hello! 123 test.")
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(texts, vec!["Hello", "!", "123", "test", "."]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Create a new simple tokenizer.
    pub fn new() -> Self {
        SimpleTokenizer
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        SIMPLE_REGEX.as_str()
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = SIMPLE_REGEX
            .find_iter(text)
            .map(|mat| Token::with_offsets(mat.as_str(), 0, mat.start(), mat.end()))
            // Matches are never pure whitespace, this only guards the rule.
            .filter(|token| !token.is_blank())
            .enumerate()
            .map(|(position, mut token)| {
                token.position = position;
                token
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
