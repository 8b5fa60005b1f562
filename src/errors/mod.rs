//! Error types for lexical analysis.
//!
//! This module defines the single error type raised by the tokenizer. It
//! includes:
//!
//! - The error structure with line/column information
//! - The two causes of a lexical failure
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
