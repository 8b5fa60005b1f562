//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way the command-line tool does:
//! whole programs in, token sequences or rendered diagnostics out.

use minic::{render_error, tokenize, tokenize_with, LexerConfig, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn names(source: &str) -> Vec<&'static str> {
    kinds(source).iter().map(|kind| kind.name()).collect()
}

#[test]
fn test_if_statement() {
    assert_eq!(
        names("if (x == 10) { return y + 5; }"),
        vec![
            "IF",
            "PAR_IZQ",
            "ID",
            "OP_REL",
            "NUM",
            "PAR_DER",
            "LLAVE_IZQ",
            "RETURN",
            "ID",
            "OP_SUMA",
            "NUM",
            "PUNTO_COMA",
            "LLAVE_DER",
        ]
    );
}

#[test]
fn test_operator_line() {
    assert_eq!(
        names("+ - * / = == != < > <= >= && ||"),
        vec![
            "OP_SUMA", "OP_RESTA", "OP_MULT", "OP_DIV", "OP_ASIGN", "OP_REL", "OP_REL", "OP_REL",
            "OP_REL", "OP_REL", "OP_REL", "OP_LOG", "OP_LOG",
        ]
    );
}

#[test]
fn test_multiline_program_positions() {
    let source = "
if (x == 10) {
    while y > 5 {
        z = x + y * 2;
        return z;
    }
}
";
    let tokens = tokenize(source).unwrap();

    let first = &tokens[0];
    assert_eq!(first.kind, TokenKind::If);
    assert_eq!((first.line(), first.column()), (2, 1));

    let while_token = tokens
        .iter()
        .find(|token| token.kind == TokenKind::While)
        .unwrap();
    assert_eq!((while_token.line(), while_token.column()), (3, 5));

    let two = tokens.iter().find(|token| token.value == "2").unwrap();
    assert_eq!((two.line(), two.column()), (4, 21));

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::LlaveDer);
    assert_eq!((last.line(), last.column()), (7, 1));
}

#[test]
fn test_for_in_loop_with_reserved_in() {
    let config = LexerConfig::new().with_reserved_in(true);
    let tokens = tokenize_with("for (i in items) { total = total + i; }", &config).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::For);
    assert_eq!(tokens[3].kind, TokenKind::In);

    let tokens = tokenize("for (i in items) {}").unwrap();
    assert_eq!(tokens[3].kind, TokenKind::Id);
}

#[test]
fn test_logical_condition() {
    assert_eq!(
        kinds("while (a != b && c >= 0 || d) { f(a, b); }"),
        vec![
            TokenKind::While,
            TokenKind::ParIzq,
            TokenKind::Id,
            TokenKind::OpRel,
            TokenKind::Id,
            TokenKind::OpLog,
            TokenKind::Id,
            TokenKind::OpRel,
            TokenKind::Num,
            TokenKind::OpLog,
            TokenKind::Id,
            TokenKind::ParDer,
            TokenKind::LlaveIzq,
            TokenKind::Id,
            TokenKind::ParIzq,
            TokenKind::Id,
            TokenKind::Coma,
            TokenKind::Id,
            TokenKind::ParDer,
            TokenKind::PuntoComa,
            TokenKind::LlaveDer,
        ]
    );
}

#[test]
fn test_error_stops_tokenization() {
    let error = tokenize("x = @invalid;").unwrap_err();

    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 5);
    assert_eq!(error.character(), Some('@'));
}

#[test]
fn test_tokenize_twice_is_identical() {
    let source = "if (a <= b) { return a; } else { return b; }";

    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn test_tokenize_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("x{} = {};", i, i);
                tokenize(&source).map(|tokens| tokens.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 4);
    }
}

#[test]
fn test_render_unrecognised_character() {
    let source = "x = @y;";
    let error = tokenize(source).unwrap_err();

    assert_eq!(
        render_error(&error, source, "input.mc"),
        "Error: UnrecognisedToken\n\
         -> input.mc\n  \
         |\n\
         1 | x = @y;\n  \
         | ----^\n"
    );
}

#[test]
fn test_render_indented_incomplete_operator() {
    let source = "x = 1;\n    if (!y) {}";
    let error = tokenize(source).unwrap_err();

    assert_eq!(
        render_error(&error, source, "input.mc"),
        "Error: IncompleteOperator (`!` is only valid as `!=`)\n\
         -> input.mc\n  \
         |\n\
         2 | if (!y) {}\n  \
         | ----^\n"
    );
}
