//! Interactive tokenizing session.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{config::LexerConfig, lexer::lexer::tokenize_with};

pub const PROMPT: &str = "code> ";

/// Reads one line at a time from `input` and writes its tokens to `output`.
///
/// Stops on `quit` (any case) or end of input. A lexical error is reported
/// and the session carries on with the next line.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &LexerConfig,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        match tokenize_with(&line, config) {
            Ok(tokens) => {
                writeln!(output, "Tokens:")?;
                for (i, token) in tokens.iter().enumerate() {
                    writeln!(output, "{}: {}", i + 1, token)?;
                }
            }
            Err(error) => {
                debug!(target: "minic::repl", %error, "line rejected");
                writeln!(output, "Error: {}", error)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run_repl(input.as_bytes(), &mut output, &LexerConfig::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_numbered_tokens() {
        let output = session("x = 1;\nquit\n");

        assert_eq!(
            output,
            "code> Tokens:\n\
             1: Token(ID, x, line=1, column=1)\n\
             2: Token(OP_ASIGN, =, line=1, column=3)\n\
             3: Token(NUM, 1, line=1, column=5)\n\
             4: Token(PUNTO_COMA, ;, line=1, column=6)\n\
             code> "
        );
    }

    #[test]
    fn test_error_does_not_end_session() {
        let output = session("a @ b\nb\nQUIT\nc\n");

        assert!(output.contains("Error: unexpected character '@' at line 1, column 3"));
        assert!(output.contains("1: Token(ID, b, line=1, column=1)"));
        assert!(!output.contains("Token(ID, c"));
    }

    #[test]
    fn test_blank_lines_and_end_of_input() {
        let output = session("\n   \n");

        assert_eq!(output, "code> code> code> \n");
    }
}
