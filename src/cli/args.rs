use crate::register::{DEFAULT_BASE_ADDRESS, DEFAULT_STRIDE};
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Checks each line of the input file against the assignment statement
/// grammar and appends the results to the output file
pub struct Options {
    /// File of statements, one per line
    pub input: PathBuf,

    /// File to append results and the symbol table to
    pub output: PathBuf,

    /// Address assigned to the first identifier
    #[arg(long, default_value_t = DEFAULT_BASE_ADDRESS)]
    pub base_address: usize,

    /// Address increment between identifiers
    #[arg(long, default_value_t = DEFAULT_STRIDE,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub stride: usize,

    /// Print every parser step to stderr
    #[arg(long)]
    pub trace: bool,
}
