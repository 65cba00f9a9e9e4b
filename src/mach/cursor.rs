use crate::lang::{Program, Token};

/// ## Position into one immutable program
///
/// Control flow jumps both ways by block id, so the cursor can look
/// around and reposition itself anywhere in the program.
///
/// A function body is a slice of the program it was declared in. Its
/// cursor carries the slice's starting index so positions still name
/// tokens of the whole program.

#[derive(Debug, Clone)]
pub struct Cursor {
    program: Program,
    index: usize,
    offset: usize,
}

impl Cursor {
    pub fn new(program: Program) -> Cursor {
        Cursor::with_offset(program, 0)
    }

    pub fn with_offset(program: Program, offset: usize) -> Cursor {
        Cursor {
            program,
            index: 0,
            offset,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// 0-based index of the current token.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the first token in the enclosing program.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based position of the current token in the enclosing program,
    /// as used in error messages.
    pub fn position(&self) -> usize {
        self.offset + self.index + 1
    }

    pub fn current(&self) -> Option<&Token> {
        self.program.get(self.index)
    }

    pub fn peek(&self, offset: isize) -> Option<&Token> {
        let index = self.index as isize + offset;
        if index < 0 {
            return None;
        }
        self.program.get(index as usize)
    }

    pub fn advance(&mut self, n: usize) {
        self.index = (self.index + n).min(self.program.len());
    }

    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.program.len());
    }

    /// Land on the first token after the current one matching `predicate`.
    /// The position is unchanged when nothing matches.
    pub fn seek_forward<F: Fn(&Token) -> bool>(&mut self, predicate: F) -> bool {
        let found = self
            .program
            .iter()
            .enumerate()
            .skip(self.index + 1)
            .find(|(_, token)| predicate(*token));
        match found {
            Some((index, _)) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Land on the nearest token before the current one matching `predicate`.
    pub fn seek_backward<F: Fn(&Token) -> bool>(&mut self, predicate: F) -> bool {
        let end = self.index.min(self.program.len());
        match self.program.tokens()[..end].iter().rposition(predicate) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.program.len()
    }
}
