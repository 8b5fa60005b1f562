use tracing::{debug, trace};

use crate::{config::LexerConfig, errors::errors::Error, Span, MK_TOKEN};

use super::{
    classifier::{classify, Classification},
    cursor::Cursor,
    tokens::{resolve_keyword, Token, TokenKind},
    LOG_TARGET,
};

/// State for a single tokenize call.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    config: LexerConfig,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, config: LexerConfig) -> Lexer<'src> {
        Lexer {
            cursor: Cursor::new(source),
            tokens: vec![],
            config,
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!(
            target: LOG_TARGET,
            kind = %token.kind,
            lexeme = %token.value,
            reserved = token.kind.is_reserved(),
            line = token.line(),
            column = token.column(),
            "token"
        );
        self.tokens.push(token);
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.at_eof()
    }

    /// Consumes the next token or whitespace run.
    fn step(&mut self) -> Result<(), Error> {
        let start = self.cursor.position();

        match classify(self.cursor.remainder()) {
            Classification::Whitespace { len } => {
                self.cursor.advance_n(len);
            }
            Classification::Token { kind, len } => {
                let value = self.cursor.advance_n(len);
                let kind = match kind {
                    TokenKind::Id => resolve_keyword(value, &self.config),
                    kind => kind,
                };

                self.push(MK_TOKEN!(
                    kind,
                    String::from(value),
                    Span {
                        start,
                        end: self.cursor.position()
                    }
                ));
            }
            Classification::Rejected(cause) => {
                let error = Error::new(cause, start);
                debug!(target: LOG_TARGET, %error, "lexical error");
                return Err(error);
            }
            Classification::End => {}
        }

        Ok(())
    }

    pub fn run(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            self.step()?;
        }

        Ok(self.tokens)
    }
}

/// Tokenizes `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenizes the whole of `source`, failing on the first character that
/// starts no token.
#[tracing::instrument(target = "minic::lexer", level = "debug", skip(source), fields(len = source.len()))]
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source, *config).run()?;
    debug!(target: LOG_TARGET, count = tokens.len(), "tokenized");
    Ok(tokens)
}
