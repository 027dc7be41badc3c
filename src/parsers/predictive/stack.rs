use crate::grammar::{NonTerminal, Symbol, Terminal};

/// A stack for an iterative predictive parser automaton
#[derive(Debug)]
pub struct Stack {
    elements: Vec<Symbol>,
}

impl Stack {
    /// Creates a new stack holding the end-of-input marker with the start
    /// symbol above it
    pub fn new(start: NonTerminal) -> Stack {
        Stack {
            elements: vec![
                Symbol::Terminal(Terminal::EndOfInput),
                Symbol::NonTerminal(start),
            ],
        }
    }

    /// Pops the symbol at the top of the stack
    pub fn pop(&mut self) -> Option<Symbol> {
        self.elements.pop()
    }

    /// Pushes the symbols of a production body in reverse order, so that the
    /// first symbol of the body ends up on top
    pub fn push_body(&mut self, body: &[Symbol]) {
        self.elements.extend(body.iter().rev());
    }

    /// Returns the symbols on the stack, from bottom to top
    pub fn symbols(&self) -> &[Symbol] {
        &self.elements
    }
}
