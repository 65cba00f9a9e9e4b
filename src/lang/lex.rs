use super::{LexError, Opcode, Program, Token};

/// Split `s` on whitespace and map every word through the keyword table.
///
/// Opcodes that require a block id take the following word as that id.
/// No block matching happens here; that is left to the evaluator.
pub fn lex(s: &str) -> Result<Program, LexError> {
    RaysLexer::new(s).collect::<Result<Vec<Token>, LexError>>().map(Program::from)
}

struct RaysLexer<'a> {
    words: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> RaysLexer<'a> {
    fn new(s: &'a str) -> RaysLexer<'a> {
        RaysLexer {
            words: s.split_whitespace().enumerate(),
        }
    }

    fn block_id(&mut self, opcode: &Opcode, position: usize) -> Result<Option<&'a str>, LexError> {
        if !opcode.requires_id() {
            return Ok(None);
        }
        match self.words.next() {
            Some((_, id)) => Ok(Some(id)),
            None => Err(lex_error!(MissingBlockId, opcode.clone(), position)),
        }
    }
}

impl<'a> Iterator for RaysLexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, word) = self.words.next()?;
        let position = index + 1;
        let opcode = match Opcode::from_keyword(word) {
            Some(opcode) => opcode,
            None => return Some(Err(lex_error!(UnknownToken, word.to_string(), position))),
        };
        Some(
            self.block_id(&opcode, position)
                .and_then(|id| Token::new(opcode, id)),
        )
    }
}
