//! ZHRL runtime - evaluator and primitive library
//!
//! This crate provides the execution side of ZHRL:
//! - Tree-walking evaluator over `zhrl::ExprC`
//! - The primitive operators and top-level environment
//! - Whole-program entry points used by the `zhrl` binary

pub mod interpreter;
pub mod stdlib;

use zhrl::{Result, Value, parse, parse_str, read_all};

// Re-export interpreter types
pub use interpreter::{apply, eval};

// Re-export the primitive library
pub use stdlib::{apply_primitive, top_env};

/// Read, parse, and evaluate one expression, then serialize the result.
pub fn top_interp(source: &str) -> Result<String> {
    let expr = parse_str(source)?;
    let value = eval(&expr, &top_env())?;
    Ok(value.to_string())
}

/// Evaluate every top-level expression of a program in order.
///
/// Each expression starts from the top-level environment; the value of the
/// last one is returned, or `None` for an empty program. The whole program is
/// parsed before anything runs, so a syntax error anywhere evaluates nothing.
pub fn run_program(source: &str) -> Result<Option<Value>> {
    let exprs = read_all(source)?
        .iter()
        .map(parse)
        .collect::<Result<Vec<_>>>()?;

    let env = top_env();
    let mut last = None;
    for expr in &exprs {
        last = Some(eval(expr, &env)?);
    }
    Ok(last)
}
