//! Core language definition for ZHRL
//!
//! This crate contains the reader, the parser, the AST and value types, and
//! the environment model for the ZHRL language. It does not evaluate
//! anything; the evaluator and primitive library live in the `interp` crate.

pub mod environment;
pub mod error;
pub mod interner;
pub mod language;
pub mod lexer;
pub mod parser;
pub mod reader;

// Re-export commonly used items for convenience
pub use environment::{Binding, Environment};
pub use error::{Error, Position, Result, SyntaxError};
pub use interner::InternedSymbol;
pub use language::{ClosureCell, ExprC, PrimOp, Term, Value};
pub use parser::{parse, parse_str};
pub use reader::{read, read_all};
