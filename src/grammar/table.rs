use super::symbol::{NonTerminal, Symbol, Terminal};
use std::collections::HashMap;
use std::fmt;

/// A production of the grammar. An empty body is an ϵ-production.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Production {
    pub head: NonTerminal,
    pub body: Vec<Symbol>,
}

impl Production {
    /// Returns true if this is an ϵ-production
    pub fn is_e(&self) -> bool {
        self.body.is_empty()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} →", self.head)?;
        if self.is_e() {
            return write!(f, " ϵ");
        }

        for s in &self.body {
            write!(f, " {}", s)?;
        }

        Ok(())
    }
}

/// The LL(1) parse table for assignment statements:
///
/// ```text
/// Stmt     → id = Expr
/// Expr     → Term ExprTail
/// ExprTail → + Factor ExprTail | - Factor ExprTail | * Term ExprTail | ϵ
/// Term     → Factor TermTail
/// TermTail → / Factor TermTail | % Factor TermTail | ϵ
/// Factor   → ( Expr ) | id
/// ```
///
/// The ϵ-entries are keyed only on the terminals listed in `new`, which is
/// not the full FOLLOW set of a conventional expression grammar.
pub struct ParseTable {
    start: NonTerminal,
    entries: HashMap<(NonTerminal, Terminal), Production>,
}

impl Default for ParseTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTable {
    /// Builds the parse table
    pub fn new() -> ParseTable {
        use NonTerminal::*;
        use Terminal::*;

        let id = Symbol::Terminal(Id);
        let t = Symbol::Terminal;
        let nt = Symbol::NonTerminal;

        let mut table = ParseTable {
            start: Stmt,
            entries: HashMap::new(),
        };

        table.set(Stmt, Id, vec![id, t(Equals), nt(Expr)]);

        table.set(Expr, Id, vec![nt(Term), nt(ExprTail)]);
        table.set(Expr, LeftParen, vec![nt(Term), nt(ExprTail)]);

        table.set(ExprTail, Plus, vec![t(Plus), nt(Factor), nt(ExprTail)]);
        table.set(ExprTail, Minus, vec![t(Minus), nt(Factor), nt(ExprTail)]);
        table.set(ExprTail, Star, vec![t(Star), nt(Term), nt(ExprTail)]);
        table.set(ExprTail, RightParen, vec![]);
        table.set(ExprTail, EndOfInput, vec![]);

        table.set(Term, Id, vec![nt(Factor), nt(TermTail)]);
        table.set(Term, LeftParen, vec![nt(Factor), nt(TermTail)]);

        table.set(TermTail, Plus, vec![]);
        table.set(TermTail, Minus, vec![]);
        table.set(TermTail, Star, vec![]);
        table.set(TermTail, Slash, vec![t(Slash), nt(Factor), nt(TermTail)]);
        table.set(TermTail, Percent, vec![t(Percent), nt(Factor), nt(TermTail)]);
        table.set(TermTail, RightParen, vec![]);
        table.set(TermTail, EndOfInput, vec![]);

        table.set(Factor, LeftParen, vec![t(LeftParen), nt(Expr), t(RightParen)]);
        table.set(Factor, Id, vec![id]);

        table
    }

    fn set(&mut self, head: NonTerminal, lookahead: Terminal, body: Vec<Symbol>) {
        self.entries
            .insert((head, lookahead), Production { head, body });
    }

    /// Returns the production to expand nt by when the lookahead is t, if
    /// there is one
    pub fn lookup(&self, nt: NonTerminal, t: Terminal) -> Option<&Production> {
        self.entries.get(&(nt, t))
    }

    /// Returns the start symbol
    pub fn start(&self) -> NonTerminal {
        self.start
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries, ordered by non-terminal and then by lookahead
    pub fn entries(&self) -> Vec<(NonTerminal, Terminal, &Production)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|((nt, t), p)| (*nt, *t, p))
            .collect();
        entries.sort_by_key(|(nt, t, _)| (*nt, *t));

        entries
    }
}
