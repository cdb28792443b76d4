//! Tokenizer implementations.
//!
//! Tokenizers break text into [`Token`](crate::analysis::token::Token)s. The
//! simple tokenizer is always compiled in; the other two are optional
//! capabilities behind cargo features.
//!
//! # Available Tokenizers
//!
//! - [`simple::SimpleTokenizer`] - Word runs plus single punctuation characters
//! - [`unicode_word::UnicodeWordTokenizer`] - UAX #29 word boundaries (requires `unicode` feature)
//! - [`lindera::LinderaTokenizer`] - Dictionary-based morphological analysis (requires `lindera` feature)
//!
//! # Examples
//!
//! ```
//! use trisect::analysis::tokenizer::Tokenizer;
//! use trisect::analysis::tokenizer::simple::SimpleTokenizer;
//!
//! let tokenizer = SimpleTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world!").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that a tokenizer can be shared
/// behind an `Arc` in a [`CapabilityRegistry`](crate::analysis::capability::CapabilityRegistry).
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use trisect::analysis::token::{Token, TokenStream};
/// use trisect::analysis::tokenizer::Tokenizer;
/// use trisect::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod simple;

#[cfg(feature = "unicode")]
pub mod unicode_word;

#[cfg(feature = "lindera")]
pub mod lindera;

pub use simple::SimpleTokenizer;

#[cfg(feature = "unicode")]
pub use unicode_word::UnicodeWordTokenizer;

#[cfg(feature = "lindera")]
pub use lindera::LinderaTokenizer;
