use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::tokens::TokenKind;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\r\n]+").unwrap();
    static ref NUMBER: Regex = Regex::new("^[0-9]+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
}

/// Two-character operators. Tried before any one-character reading of the
/// same first character.
const PAIRED_OPERATORS: [(char, char, TokenKind); 6] = [
    ('=', '=', TokenKind::OpRel),
    ('!', '=', TokenKind::OpRel),
    ('<', '=', TokenKind::OpRel),
    ('>', '=', TokenKind::OpRel),
    ('&', '&', TokenKind::OpLog),
    ('|', '|', TokenKind::OpLog),
];

fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '+' => TokenKind::OpSuma,
        '-' => TokenKind::OpResta,
        '*' => TokenKind::OpMult,
        '/' => TokenKind::OpDiv,
        '=' => TokenKind::OpAsign,
        '<' | '>' => TokenKind::OpRel,
        '(' => TokenKind::ParIzq,
        ')' => TokenKind::ParDer,
        '{' => TokenKind::LlaveIzq,
        '}' => TokenKind::LlaveDer,
        ';' => TokenKind::PuntoComa,
        ',' => TokenKind::Coma,
        _ => return None,
    };

    Some(kind)
}

/// What the input at the current offset starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A token of `len` bytes. Identifier-shaped lexemes come back as `Id`
    /// and still need keyword resolution.
    Token { kind: TokenKind, len: usize },
    /// A run of insignificant whitespace, newlines included.
    Whitespace { len: usize },
    /// Nothing matches here.
    Rejected(ErrorImpl),
    End,
}

/// Finds the longest token starting at the beginning of `remainder`.
///
/// Only the leading character and at most one character of lookahead decide
/// the rule; digit, identifier and whitespace runs are then measured with an
/// anchored pattern.
pub fn classify(remainder: &str) -> Classification {
    let mut chars = remainder.chars();
    let Some(first) = chars.next() else {
        return Classification::End;
    };
    let next = chars.next();

    match first {
        ' ' | '\t' | '\r' | '\n' => Classification::Whitespace {
            len: run_length(&WHITESPACE, remainder),
        },
        '0'..='9' => Classification::Token {
            kind: TokenKind::Num,
            len: run_length(&NUMBER, remainder),
        },
        'a'..='z' | 'A'..='Z' | '_' => Classification::Token {
            kind: TokenKind::Id,
            len: run_length(&IDENTIFIER, remainder),
        },
        _ => classify_operator(first, next),
    }
}

fn classify_operator(first: char, next: Option<char>) -> Classification {
    if let Some(second) = next {
        if let Some((_, _, kind)) = PAIRED_OPERATORS
            .iter()
            .find(|(a, b, _)| *a == first && *b == second)
        {
            return Classification::Token { kind: *kind, len: 2 };
        }
    }

    if let Some(kind) = single_char_kind(first) {
        return Classification::Token {
            kind,
            len: first.len_utf8(),
        };
    }

    if PAIRED_OPERATORS.iter().any(|(a, _, _)| *a == first) {
        return Classification::Rejected(ErrorImpl::IncompleteOperator {
            operator: first,
            found: next,
        });
    }

    Classification::Rejected(ErrorImpl::UnrecognisedToken { token: first })
}

// Callers only reach here once the leading character matched, so the
// pattern always matches at least one character.
fn run_length(pattern: &Regex, remainder: &str) -> usize {
    pattern.find(remainder).map_or(1, |m| m.end())
}
