mod token;

use crate::errors::Result;
use crate::grammar::Terminal;
use crate::register::SymbolRegister;

pub use token::TokenStream;

/// A lexer for a single line of input
pub struct Lexer {
    input: Vec<char>,
    cursor: usize,
}

impl Lexer {
    /// Returns a new lexer for the given line
    pub fn new(input: &str) -> Lexer {
        Lexer {
            input: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Scans the whole line into a token stream. Every identifier is
    /// collapsed into an `id` terminal, and its text is registered.
    pub fn tokenize(mut self, register: &mut SymbolRegister) -> Result<TokenStream> {
        let mut terminals = Vec::new();

        while let Some(t) = self.next_terminal(register)? {
            terminals.push(t);
        }
        terminals.push(Terminal::EndOfInput);

        TokenStream::new(terminals)
    }

    /// Returns the next terminal, if any
    fn next_terminal(&mut self, register: &mut SymbolRegister) -> Result<Option<Terminal>> {
        self.discard_whitespace();

        let Some(lookahead) = self.lookahead() else {
            return Ok(None);
        };

        if lookahead.is_ascii_alphabetic() {
            let name = self.lex_identifier();
            register.register(&name)?;
            return Ok(Some(Terminal::Id));
        }

        Ok(Some(Terminal::from_char(self.read())))
    }

    /// Reads and discards any whitespace characters
    fn discard_whitespace(&mut self) {
        while let Some(lookahead) = self.lookahead() {
            if !is_space(lookahead) {
                break;
            }
            self.read();
        }
    }

    /// Lexes an identifier, which is an ASCII letter followed by any sequence
    /// of ASCII letters and digits
    fn lex_identifier(&mut self) -> String {
        let mut name = vec![self.read()];

        while let Some(lookahead) = self.lookahead() {
            if !lookahead.is_ascii_alphanumeric() {
                break;
            }
            name.push(self.read());
        }

        name.into_iter().collect()
    }

    /// Returns the lookahead character
    fn lookahead(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Reads and returns the next input character. The caller must ensure
    /// the lookahead is valid.
    fn read(&mut self) -> char {
        let c = self.input[self.cursor];
        self.cursor += 1;

        c
    }
}

/// Returns true for the ASCII whitespace characters, including vertical tab
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Removes all whitespace from a line of input
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !is_space(*c)).collect()
}
