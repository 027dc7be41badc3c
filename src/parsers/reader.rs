use crate::errors::{Error, Result};
use crate::grammar::Terminal;
use crate::lexer::TokenStream;

/// A read cursor over a token stream. The cursor only moves forward.
pub struct Reader<'a> {
    input: &'a TokenStream,
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a TokenStream) -> Reader<'a> {
        Reader { input, cursor: 0 }
    }

    /// Returns the lookahead terminal without consuming it. Reading past the
    /// end-of-input marker is an error.
    pub fn lookahead(&self) -> Result<Terminal> {
        self.input.get(self.cursor).ok_or(Error::ExhaustedInput)
    }

    /// Consumes the lookahead terminal
    pub fn next(&mut self) -> Result<Terminal> {
        let lookahead = self.lookahead()?;
        self.cursor += 1;

        Ok(lookahead)
    }
}
