mod iterative;
mod stack;

pub use iterative::{Action, Parser, Step};
