//! Primitive operators and the top-level environment
//!
//! Every primitive takes exactly two arguments and checks their kinds before
//! computing anything.

use zhrl::{Environment, Error, InternedSymbol, PrimOp, Result, Value};

/// Build the environment every program starts in.
pub fn top_env() -> Environment {
    let mut env = Environment::new();
    for op in PrimOp::ALL {
        env = env.bind(InternedSymbol::new(op.name()), Value::Primitive(op));
    }
    env.bind(InternedSymbol::new("true"), Value::Bool(true))
        .bind(InternedSymbol::new("false"), Value::Bool(false))
}

pub fn apply_primitive(op: PrimOp, args: &[Value]) -> Result<Value> {
    let [a, b] = args else {
        return Err(Error::Arity {
            callee: op.name().to_string(),
            expected: op.arity(),
            got: args.len(),
        });
    };

    match op {
        PrimOp::Add => eval_arithmetic(op, a, b, |x, y| Ok(x + y)),
        PrimOp::Sub => eval_arithmetic(op, a, b, |x, y| Ok(x - y)),
        PrimOp::Mul => eval_arithmetic(op, a, b, |x, y| Ok(x * y)),
        PrimOp::Div => eval_arithmetic(op, a, b, |x, y| {
            if y == 0.0 {
                Err(Error::DivideByZero)
            } else {
                Ok(x / y)
            }
        }),
        PrimOp::Le => {
            let (x, y) = (extract_num(op, a)?, extract_num(op, b)?);
            Ok(Value::Bool(x <= y))
        }
        PrimOp::Equal => Ok(Value::Bool(values_equal(a, b))),
    }
}

// ============================================================================
// Helper Functions for Arithmetic and Comparison
// ============================================================================

fn extract_num(op: PrimOp, value: &Value) -> Result<f64> {
    match value {
        Value::Num(n) => Ok(*n),
        other => Err(Error::Type(format!(
            "{}: expected number, got {} {other}",
            op.name(),
            other.type_name()
        ))),
    }
}

fn eval_arithmetic<F>(op: PrimOp, a: &Value, b: &Value, f: F) -> Result<Value>
where
    F: Fn(f64, f64) -> Result<f64>,
{
    let x = extract_num(op, a)?;
    let y = extract_num(op, b)?;
    f(x, y).map(Value::Num)
}

/// Same kind and same contents. Procedures never compare equal.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Num(x), Value::Num(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        _ => false,
    }
}
