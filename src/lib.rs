pub mod cli;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parsers;
pub mod register;
