use std::fmt;

/// A terminal grammar symbol, including the end-of-input marker
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum Terminal {
    Id,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LeftParen,
    RightParen,
    Equals,
    EndOfInput,
    /// Any other single character. Never holds one of the operator
    /// characters above when built with `from_char`.
    Other(char),
}

impl Terminal {
    /// Builds the single-character terminal for c
    pub fn from_char(c: char) -> Terminal {
        match c {
            '+' => Terminal::Plus,
            '-' => Terminal::Minus,
            '*' => Terminal::Star,
            '/' => Terminal::Slash,
            '%' => Terminal::Percent,
            '(' => Terminal::LeftParen,
            ')' => Terminal::RightParen,
            '=' => Terminal::Equals,
            _ => Terminal::Other(c),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Terminal::Id => write!(f, "id"),
            Terminal::Plus => write!(f, "+"),
            Terminal::Minus => write!(f, "-"),
            Terminal::Star => write!(f, "*"),
            Terminal::Slash => write!(f, "/"),
            Terminal::Percent => write!(f, "%"),
            Terminal::LeftParen => write!(f, "("),
            Terminal::RightParen => write!(f, ")"),
            Terminal::Equals => write!(f, "="),
            Terminal::EndOfInput => write!(f, "$"),
            Terminal::Other(c) => write!(f, "{}", c),
        }
    }
}

/// A non-terminal of the assignment statement grammar
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum NonTerminal {
    Stmt,
    Expr,
    ExprTail,
    Term,
    TermTail,
    Factor,
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            NonTerminal::Stmt => "Stmt",
            NonTerminal::Expr => "Expr",
            NonTerminal::ExprTail => "ExprTail",
            NonTerminal::Term => "Term",
            NonTerminal::TermTail => "TermTail",
            NonTerminal::Factor => "Factor",
        };

        write!(f, "{}", name)
    }
}

/// A grammar symbol
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Symbol {
    /// Returns true if the symbol is a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

impl From<Terminal> for Symbol {
    fn from(t: Terminal) -> Symbol {
        Symbol::Terminal(t)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nt: NonTerminal) -> Symbol {
        Symbol::NonTerminal(nt)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::NonTerminal(nt) => write!(f, "{}", nt),
        }
    }
}
