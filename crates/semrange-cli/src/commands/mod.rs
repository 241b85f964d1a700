//! Subcommands of the semrange binary

pub mod check;
pub mod filter;
pub mod parse;
pub mod sort;
