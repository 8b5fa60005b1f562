use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{config::LexerConfig, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("in", TokenKind::In);
        map
    };
}

/// Resolves an identifier-shaped lexeme to its reserved kind, or `Id`.
///
/// Matching is exact and case-sensitive. `in` is only reserved when the
/// config asks for it.
pub fn resolve_keyword(lexeme: &str, config: &LexerConfig) -> TokenKind {
    match RESERVED_LOOKUP.get(lexeme) {
        Some(TokenKind::In) if !config.reserve_in => TokenKind::Id,
        Some(kind) => *kind,
        None => TokenKind::Id,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Id,
    Num,

    // Reserved
    If,
    Else,
    While,
    For,
    Return,
    In,

    OpSuma,  // +
    OpResta, // -
    OpMult,  // *
    OpDiv,   // /
    OpAsign, // =
    OpRel,   // == != < > <= >=
    OpLog,   // && ||

    ParIzq,    // (
    ParDer,    // )
    LlaveIzq,  // {
    LlaveDer,  // }
    PuntoComa, // ;
    Coma,      // ,
}

impl TokenKind {
    /// Stable external name, independent of how the token is spelled.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Id => "ID",
            TokenKind::Num => "NUM",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Return => "RETURN",
            TokenKind::In => "IN",
            TokenKind::OpSuma => "OP_SUMA",
            TokenKind::OpResta => "OP_RESTA",
            TokenKind::OpMult => "OP_MULT",
            TokenKind::OpDiv => "OP_DIV",
            TokenKind::OpAsign => "OP_ASIGN",
            TokenKind::OpRel => "OP_REL",
            TokenKind::OpLog => "OP_LOG",
            TokenKind::ParIzq => "PAR_IZQ",
            TokenKind::ParDer => "PAR_DER",
            TokenKind::LlaveIzq => "LLAVE_IZQ",
            TokenKind::LlaveDer => "LLAVE_DER",
            TokenKind::PuntoComa => "PUNTO_COMA",
            TokenKind::Coma => "COMA",
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Return
                | TokenKind::In
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({}, {}, line={}, column={})",
            self.kind,
            self.value,
            self.line(),
            self.column()
        )
    }
}

impl Token {
    pub fn lexeme(&self) -> &str {
        &self.value
    }

    /// Line of the lexeme's first character, 1-based.
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    /// Column of the lexeme's first character, 1-based.
    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}
