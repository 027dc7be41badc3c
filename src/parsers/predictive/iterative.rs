use super::stack::Stack;
use crate::errors::Result;
use crate::grammar::{ParseTable, Production, Symbol, Terminal};
use crate::lexer::TokenStream;
use crate::parsers::reader::Reader;
use crate::parsers::{Rejection, Verdict};
use std::fmt;

/// A top-down, iterative predictive parser driven by an LL(1) parse table
pub struct Parser<'t> {
    table: &'t ParseTable,
}

/// The action taken for one symbol popped from the stack
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Action<'t> {
    Match(Terminal),
    Expand(&'t Production),
    Reject(Rejection),
}

/// A record of one iteration of the parser, for diagnostics
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Step<'t> {
    /// The stack from bottom to top, before the top symbol was popped
    pub stack: Vec<Symbol>,
    pub lookahead: Terminal,
    pub action: Action<'t>,
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "stack [")?;
        for (i, s) in self.stack.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "] lookahead {} -> ", self.lookahead)?;

        match &self.action {
            Action::Match(t) => write!(f, "match {}", t),
            Action::Expand(p) => write!(f, "expand {}", p),
            Action::Reject(r) => write!(f, "reject: {}", r),
        }
    }
}

impl<'t> Parser<'t> {
    /// Creates a new parser for the given table
    pub fn new(table: &'t ParseTable) -> Parser<'t> {
        Parser { table }
    }

    /// Parses a token stream
    pub fn parse(&self, input: &TokenStream) -> Result<Verdict> {
        self.run(input, None)
    }

    /// Parses a token stream, also returning every step the parser took
    pub fn parse_traced(&self, input: &TokenStream) -> Result<(Verdict, Vec<Step<'t>>)> {
        let mut steps = Vec::new();
        let verdict = self.run(input, Some(&mut steps))?;

        Ok((verdict, steps))
    }

    fn run(&self, input: &TokenStream, mut trace: Option<&mut Vec<Step<'t>>>) -> Result<Verdict> {
        // Algorithm adapted from Aho et al (2007) p.227

        let mut stack = Stack::new(self.table.start());
        let mut reader = Reader::new(input);

        while let Some(top) = stack.pop() {
            let before = trace.is_some().then(|| {
                let mut symbols = stack.symbols().to_vec();
                symbols.push(top);
                symbols
            });

            let lookahead = reader.lookahead()?;

            let action = match top {
                Symbol::Terminal(t) if t == lookahead => {
                    reader.next()?;
                    Action::Match(t)
                }
                // The end-of-input marker only surfaces once a whole
                // statement has been derived
                Symbol::Terminal(Terminal::EndOfInput) => {
                    Action::Reject(Rejection::PrematureEnd { found: lookahead })
                }
                Symbol::Terminal(expected) => Action::Reject(Rejection::TerminalMismatch {
                    expected,
                    found: lookahead,
                }),
                // Otherwise pop the non-terminal and push the elements of
                // its body onto the stack in reverse order. ϵ-productions
                // push nothing.
                Symbol::NonTerminal(non_terminal) => {
                    match self.table.lookup(non_terminal, lookahead) {
                        Some(p) => {
                            stack.push_body(&p.body);
                            Action::Expand(p)
                        }
                        None => Action::Reject(Rejection::NoDerivation {
                            non_terminal,
                            lookahead,
                        }),
                    }
                }
            };

            let rejection = match action {
                Action::Reject(r) => Some(r),
                _ => None,
            };

            if let Some(steps) = trace.as_deref_mut() {
                steps.push(Step {
                    stack: before.unwrap_or_default(),
                    lookahead,
                    action,
                });
            }

            if let Some(r) = rejection {
                return Ok(Verdict::Rejected(r));
            }
        }

        // The stack can only empty by matching the end-of-input marker at
        // its bottom, so all of the input has been consumed
        Ok(Verdict::Accepted)
    }
}
