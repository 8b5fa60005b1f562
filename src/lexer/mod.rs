//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens. It handles:
//!
//! - Position tracking (line and column of every token)
//! - Maximal-munch classification of operators and punctuation
//! - Recognition of keywords, identifiers and integer literals
//! - Precise reporting of the first unrecognised character

pub mod classifier;
pub mod cursor;
pub mod lexer;
pub mod tokens;


/// `tracing` target for everything the lexer logs.
pub const LOG_TARGET: &str = "minic::lexer";
