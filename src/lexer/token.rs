use crate::errors::{Error, Result};
use crate::grammar::Terminal;
use std::fmt;

/// A sequence of terminals ending in exactly one end-of-input marker
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct TokenStream {
    terminals: Vec<Terminal>,
}

impl TokenStream {
    /// Creates a token stream, returning an error unless the end-of-input
    /// marker appears once, as the last terminal
    pub fn new(terminals: Vec<Terminal>) -> Result<TokenStream> {
        let Some((last, rest)) = terminals.split_last() else {
            return Err(Error::MalformedTokenStream);
        };

        if *last != Terminal::EndOfInput || rest.contains(&Terminal::EndOfInput) {
            return Err(Error::MalformedTokenStream);
        }

        Ok(TokenStream { terminals })
    }

    /// Returns the terminal at position i, if there is one
    pub fn get(&self, i: usize) -> Option<Terminal> {
        self.terminals.get(i).copied()
    }

    /// Returns the number of terminals, including the end-of-input marker
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Always false, since a token stream contains at least the end-of-input
    /// marker
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Returns the terminals in the stream
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, t) in self.terminals.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", t)?;
        }

        Ok(())
    }
}
