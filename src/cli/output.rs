use crate::parsers::Verdict;

/// Formats the lines written to the output file
pub trait Presenter {
    /// Returns the line reporting the verdict for one input line
    fn verdict(&self, verdict: &Verdict) -> String;

    /// Returns the line introducing the symbol table
    fn symbol_table_header(&self) -> String;

    /// Returns the line for one symbol table entry
    fn symbol_entry(&self, name: &str, address: usize) -> String;
}

/// Plain English output
pub struct PlainText;

impl Presenter for PlainText {
    fn verdict(&self, verdict: &Verdict) -> String {
        match verdict {
            Verdict::Accepted => "accepted: input conforms to the grammar".to_string(),
            Verdict::Rejected(r) => format!("rejected: {}", r),
        }
    }

    fn symbol_table_header(&self) -> String {
        "symbol table:".to_string()
    }

    fn symbol_entry(&self, name: &str, address: usize) -> String {
        format!("name: {}, address: {}", name, address)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar::{NonTerminal, Terminal};
    use crate::parsers::Rejection;

    #[test]
    fn test_plain_text() {
        let p = PlainText;
        assert_eq!(
            p.verdict(&Verdict::Accepted),
            "accepted: input conforms to the grammar"
        );
        assert_eq!(
            p.verdict(&Verdict::Rejected(Rejection::TerminalMismatch {
                expected: Terminal::Equals,
                found: Terminal::Plus,
            })),
            "rejected: expected '=' but found '+'"
        );
        assert_eq!(
            p.verdict(&Verdict::Rejected(Rejection::NoDerivation {
                non_terminal: NonTerminal::Expr,
                lookahead: Terminal::EndOfInput,
            })),
            "rejected: no table entry for [Expr, $]"
        );
        assert_eq!(
            p.verdict(&Verdict::Rejected(Rejection::PrematureEnd {
                found: Terminal::RightParen,
            })),
            "rejected: derivation complete but found ')' before end of input"
        );
        assert_eq!(p.symbol_table_header(), "symbol table:");
        assert_eq!(p.symbol_entry("x", 1000), "name: x, address: 1000");
    }
}
