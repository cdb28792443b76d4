//! Text analysis building blocks.
//!
//! Tokens and tokenizers, the optional capability registry, and the tagged
//! outcome every tokenization method reports.

pub mod capability;
pub mod outcome;
pub mod token;
pub mod tokenizer;
