use ll1check::grammar::{NonTerminal, ParseTable, Terminal};
use ll1check::lexer::{Lexer, TokenStream};
use ll1check::parsers::predictive::Parser;
use ll1check::parsers::{Rejection, Verdict};
use ll1check::register::SymbolRegister;
use proptest::prelude::*;
mod common;

fn stream(terminals: &[Terminal]) -> TokenStream {
    TokenStream::new(terminals.to_vec()).expect("bad token stream")
}

#[test]
fn test_scenarios() -> std::result::Result<(), Box<dyn std::error::Error>> {
    use Terminal::*;

    let table = ParseTable::new();
    let parser = Parser::new(&table);

    let v = parser.parse(&stream(&[Id, Equals, Id, Plus, Id, EndOfInput]))?;
    assert_eq!(v, Verdict::Accepted);

    let v = parser.parse(&stream(&[
        Id, Equals, LeftParen, Id, Plus, Id, RightParen, Star, Id, EndOfInput,
    ]))?;
    assert_eq!(v, Verdict::Accepted);

    let v = parser.parse(&stream(&[Id, Equals, Plus, Id, EndOfInput]))?;
    assert_eq!(
        v,
        Verdict::Rejected(Rejection::NoDerivation {
            non_terminal: NonTerminal::Expr,
            lookahead: Plus,
        })
    );

    let v = parser.parse(&stream(&[Id, Equals, EndOfInput]))?;
    assert_eq!(
        v,
        Verdict::Rejected(Rejection::NoDerivation {
            non_terminal: NonTerminal::Expr,
            lookahead: EndOfInput,
        })
    );

    let v = parser.parse(&stream(&[Id, Equals, Id, RightParen, EndOfInput]))?;
    assert_eq!(
        v,
        Verdict::Rejected(Rejection::PrematureEnd { found: RightParen })
    );

    let v = parser.parse(&common::tokens("x = 1"))?;
    assert!(!v.is_accepted());

    Ok(())
}

#[test]
fn test_statements_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let table = ParseTable::new();
    let parser = Parser::new(&table);

    let accepted: Vec<bool> = common::read_test_file("statements.txt")
        .lines()
        .map(|line| parser.parse(&common::tokens(line)).map(|v| v.is_accepted()))
        .collect::<Result<_, _>>()?;

    assert_eq!(
        accepted,
        vec![true, true, false, false, false, false, true, false]
    );

    Ok(())
}

fn statement_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            "[a-c][a-c0-9]{0,2}",
            Just("+".to_string()),
            Just("-".to_string()),
            Just("*".to_string()),
            Just("/".to_string()),
            Just("%".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("=".to_string()),
            Just("1".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn prop_parse_is_deterministic(text in statement_text()) {
        let first_table = ParseTable::new();
        let second_table = ParseTable::new();

        let mut register = SymbolRegister::default();
        let input = Lexer::new(&text).tokenize(&mut register).unwrap();

        let first = Parser::new(&first_table).parse(&input).unwrap();
        let second = Parser::new(&second_table).parse(&input).unwrap();
        prop_assert_eq!(first, second);

        let (traced, _) = Parser::new(&first_table).parse_traced(&input).unwrap();
        prop_assert_eq!(first, traced);
    }

    #[test]
    fn prop_register_does_not_affect_verdict(text in statement_text(), base in 0usize..10_000) {
        let table = ParseTable::new();
        let parser = Parser::new(&table);

        let a = Lexer::new(&text).tokenize(&mut SymbolRegister::default()).unwrap();
        let b = Lexer::new(&text).tokenize(&mut SymbolRegister::new(base, 16)).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(parser.parse(&a).unwrap(), parser.parse(&b).unwrap());
    }
}
