//! Semantic version range parsing and satisfaction checks
//!
//! Range text such as `^1.2.3`, `~1.2`, `1.0 - 2.0`, `3.*` or
//! `>=1.2.7 <3.0.0 || 4.x` is tokenized, handed to the first recognizer that
//! accepts its shape, and turned into a small AST of comparator leaves joined
//! by conjunctions and disjunctions. The AST answers whether a concrete
//! [`Version`] lies in the range.

mod comparator;
mod error;
mod lexer;
mod parser;
pub mod range;
pub mod recognizer;
mod semver;
mod token;
mod version;

pub use comparator::Comparator;
pub use error::{RangeError, Result};
pub use lexer::tokenize;
pub use parser::RangeParser;
pub use range::{ComparatorVersion, Conjunction, Disjunction, MatchAll, Range, RangeNode};
pub use recognizer::{chunk_by, Recognizer, RECOGNIZERS};
pub use semver::Semver;
pub use token::{render_tokens, Token, TokenType};
pub use version::{Label, LabelBuilder, Precedence, Version, VersionBuilder};
