#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod repl;

extern crate regex;

pub use config::{LexerConfig, LogConfig};
pub use errors::errors::LexicalError;
pub use lexer::lexer::{tokenize, tokenize_with};
pub use lexer::tokens::{Token, TokenKind};

/// A location in the source buffer.
///
/// `offset` is a 0-based byte offset; `line` and `column` are 1-based and
/// count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves past one consumed character.
    pub fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the 1-based `line` without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)? as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 2), Some("second"));
        assert_eq!(get_line_at_position(source, 3), Some(""));
        assert_eq!(get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(get_line_at_position(source, 0), None);
        assert_eq!(get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_position_advance() {
        let mut pos = Position::start();
        for c in "ab\n c".chars() {
            pos.advance(c);
        }

        assert_eq!(pos.offset, 5);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
    }
}

/// Renders a lexical error against the source it came from:
///
/// ```text
/// Error: UnrecognisedToken
/// -> input.mc
///    |
///  1 | x = @y;
///    | ----^
/// ```
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file_name));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
