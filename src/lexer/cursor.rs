use crate::Position;

/// Read position over a source buffer.
///
/// `pos` always describes the next unconsumed character.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            pos: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    /// Consumes `len` bytes, updating line and column for each character.
    ///
    /// `len` must land on a character boundary.
    pub fn advance_n(&mut self, len: usize) -> &'src str {
        let consumed = &self.source[self.pos.offset..self.pos.offset + len];
        for c in consumed.chars() {
            self.pos.advance(c);
        }
        consumed
    }
}
