//! Legacy input parsing.

pub mod tokenizer;

pub use tokenizer::{QuoteFault, Token, split_tokens, tokenize};
