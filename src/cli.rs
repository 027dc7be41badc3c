pub mod args;
pub mod output;

use crate::errors::{Error, Result};
use crate::grammar::ParseTable;
use crate::lexer::{strip_whitespace, Lexer, TokenStream};
use crate::parsers::predictive::Parser;
use crate::parsers::Verdict;
use crate::register::SymbolRegister;
use args::Options;
use output::{PlainText, Presenter};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Checks every line of the input file and appends the verdicts, followed by
/// the symbol table, to the output file
pub fn run(options: &Options) -> Result<()> {
    let lines = read_lines(&options.input)?;

    let table = ParseTable::new();
    let mut register = SymbolRegister::new(options.base_address, options.stride);
    let verdicts = check_lines(&lines, &table, &mut register, options.trace)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&options.output)
        .map_err(|source| Error::OpenOutput {
            path: options.output.clone(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    write_report(&mut writer, &PlainText, &verdicts, &register)
        .and_then(|_| writer.flush())
        .map_err(|source| Error::WriteOutput {
            path: options.output.clone(),
            source,
        })
}

/// Reads the input file, with all whitespace removed from each line. Bytes
/// that aren't valid UTF-8 are replaced with U+FFFD, and are then rejected by
/// the grammar like any other stray character.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(strip_whitespace)
        .collect();
    if lines.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }

    Ok(lines)
}

/// Tokenizes every line, registering the identifiers in each, and then
/// parses each line in turn. Every step of each parse is printed to stderr
/// if trace is true.
pub fn check_lines(
    lines: &[String],
    table: &ParseTable,
    register: &mut SymbolRegister,
    trace: bool,
) -> Result<Vec<Verdict>> {
    let inputs = lines
        .iter()
        .map(|line| Lexer::new(line).tokenize(register))
        .collect::<Result<Vec<TokenStream>>>()?;

    let parser = Parser::new(table);
    let mut verdicts = Vec::with_capacity(inputs.len());

    for (i, input) in inputs.iter().enumerate() {
        if trace {
            let (verdict, steps) = parser.parse_traced(input)?;
            eprintln!("line {}: {}", i + 1, input);
            for step in steps {
                eprintln!("line {}: {}", i + 1, step);
            }
            verdicts.push(verdict);
        } else {
            verdicts.push(parser.parse(input)?);
        }
    }

    Ok(verdicts)
}

/// Writes one line per verdict, then the symbol table
pub fn write_report<W: Write>(
    out: &mut W,
    presenter: &dyn Presenter,
    verdicts: &[Verdict],
    register: &SymbolRegister,
) -> std::io::Result<()> {
    for v in verdicts {
        writeln!(out, "{}", presenter.verdict(v))?;
    }

    writeln!(out, "{}", presenter.symbol_table_header())?;
    for entry in register.dump() {
        writeln!(out, "{}", presenter.symbol_entry(&entry.name, entry.address))?;
    }

    Ok(())
}
