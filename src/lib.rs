//! # Trisect
//!
//! Run a piece of text through three tokenization strategies and compare the
//! results side by side.
//!
//! ## Features
//!
//! - A regex splitter that is always available
//! - UAX #29 word segmentation (`unicode` feature, on by default)
//! - Dictionary-based morphological analysis with Lindera (`lindera` feature)
//! - Problems are reported as results, never as errors or panics

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod text_tokenizer;

pub mod prelude {
    pub use crate::analysis::capability::{Capability, CapabilityRegistry};
    pub use crate::analysis::outcome::Tokenization;
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::TrisectConfig;
    pub use crate::error::{Result, TrisectError};
    pub use crate::text_tokenizer::{Method, TextTokenizer, TokenizationReport};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
