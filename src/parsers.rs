pub mod predictive;
mod reader;

use crate::grammar::{NonTerminal, Terminal};
use std::fmt;

/// The outcome of parsing a single input line
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    /// Returns true if the input was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// The reason an input line was rejected. The first rejection on a line is
/// final; no recovery is attempted.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Rejection {
    /// A terminal on top of the stack did not match the lookahead
    TerminalMismatch { expected: Terminal, found: Terminal },
    /// The parse table has no production for the non-terminal on top of the
    /// stack and the lookahead
    NoDerivation {
        non_terminal: NonTerminal,
        lookahead: Terminal,
    },
    /// A complete statement was derived, but input remains before the
    /// end-of-input marker
    PrematureEnd { found: Terminal },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::TerminalMismatch { expected, found } => {
                write!(f, "expected '{}' but found '{}'", expected, found)
            }
            Rejection::NoDerivation {
                non_terminal,
                lookahead,
            } => write!(f, "no table entry for [{}, {}]", non_terminal, lookahead),
            Rejection::PrematureEnd { found } => write!(
                f,
                "derivation complete but found '{}' before end of input",
                found
            ),
        }
    }
}
