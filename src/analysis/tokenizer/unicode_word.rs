//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Unlike the simple tokenizer it keeps contractions such as
//! `can't` and decimal numbers such as `3.14` together, while every
//! punctuation segment is still reported as its own token.
//!
//! # Examples
//!
//! ```
//! use trisect::analysis::tokenizer::Tokenizer;
//! use trisect::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, ",");
//! assert_eq!(tokens[2].text, "world");
//! assert_eq!(tokens[3].text, "!");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Whitespace segments are dropped; words, numbers and punctuation are kept
/// in their original order.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.trim().is_empty())
            .enumerate()
            .map(|(position, (start_offset, segment))| {
                Token::with_offsets(segment, position, start_offset, start_offset + segment.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}
