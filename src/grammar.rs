mod symbol;
mod table;

pub use symbol::{NonTerminal, Symbol, Terminal};
pub use table::{ParseTable, Production};
