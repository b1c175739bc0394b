use zhrl::{Environment, Error, ExprC, Result, Value};

use crate::stdlib::apply_primitive;

// ============================================================================
// Evaluator
// ============================================================================

/// Reduce `expr` to a value under `env`.
///
/// Evaluation recurses on the host stack; there is no tail-call elimination,
/// so unbounded recursion in a ZHRL program exhausts the host stack.
pub fn eval(expr: &ExprC, env: &Environment) -> Result<Value> {
    match expr {
        ExprC::NumLit(n) => Ok(Value::Num(*n)),
        ExprC::StrLit(s) => Ok(Value::Str(s.clone())),
        ExprC::Id(name) => env.lookup(*name),

        ExprC::Lam { params, body } => Ok(Value::closure(
            params.clone(),
            body.clone(),
            env.clone(),
        )),

        ExprC::If { test, then, els } => match eval(test, env)? {
            Value::Bool(true) => eval(then, env),
            Value::Bool(false) => eval(els, env),
            other => Err(Error::Type(format!(
                "if: test must be a boolean, got {} {other}",
                other.type_name()
            ))),
        },

        ExprC::App { func, args } => {
            let func = eval(func, env)?;
            let args = args
                .iter()
                .map(|arg| eval(arg, env))
                .collect::<Result<Vec<_>>>()?;
            apply(&func, &args)
        }
    }
}

/// Apply a function value to already evaluated arguments
pub fn apply(func: &Value, args: &[Value]) -> Result<Value> {
    match func {
        // The body runs in the closure's own scope, not the caller's.
        Value::Closure(closure) => {
            let call_env = closure.env.extend(&closure.params, args)?;
            eval(&closure.body, &call_env)
        }
        Value::Primitive(op) => apply_primitive(*op, args),
        other => Err(Error::NotCallable(other.to_string())),
    }
}
