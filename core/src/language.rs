use std::fmt;
use std::sync::Arc;

use crate::environment::Environment;
use crate::interner::InternedSymbol;

// ============================================================================
// Terms
// ============================================================================

/// Reader output: the nested structure of `{ }` groups before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Number(f64),
    /// Quoted string, quotes stripped and escapes processed
    String(String),
    Symbol(String),
    List(Vec<Term>),
}

// ============================================================================
// Abstract Syntax
// ============================================================================

/// ZHRL expression forms. Built once by the parser, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprC {
    NumLit(f64),
    StrLit(String),
    Id(InternedSymbol),
    If {
        test: Box<ExprC>,
        then: Box<ExprC>,
        els: Box<ExprC>,
    },
    /// Parameters are unique; shared with every closure the form produces.
    Lam {
        params: Arc<[InternedSymbol]>,
        body: Arc<ExprC>,
    },
    App {
        func: Box<ExprC>,
        args: Vec<ExprC>,
    },
}

impl ExprC {
    pub fn id(name: &str) -> Self {
        ExprC::Id(InternedSymbol::new(name))
    }

    pub fn lam(params: Vec<InternedSymbol>, body: ExprC) -> Self {
        ExprC::Lam {
            params: params.into(),
            body: Arc::new(body),
        }
    }

    pub fn app(func: ExprC, args: Vec<ExprC>) -> Self {
        ExprC::App {
            func: Box::new(func),
            args,
        }
    }
}

// ============================================================================
// Runtime Values
// ============================================================================

/// The fixed set of built-in operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimOp {
    Add,
    Sub,
    Mul,
    Div,
    Le,
    Equal,
}

impl PrimOp {
    pub const ALL: [PrimOp; 6] = [
        PrimOp::Add,
        PrimOp::Sub,
        PrimOp::Mul,
        PrimOp::Div,
        PrimOp::Le,
        PrimOp::Equal,
    ];

    /// Name the operator is bound to in the top-level environment
    pub fn name(self) -> &'static str {
        match self {
            PrimOp::Add => "+",
            PrimOp::Sub => "-",
            PrimOp::Mul => "*",
            PrimOp::Div => "/",
            PrimOp::Le => "<=",
            PrimOp::Equal => "equal?",
        }
    }

    pub fn arity(self) -> usize {
        2
    }
}

#[derive(Clone)]
pub struct ClosureCell {
    pub params: Arc<[InternedSymbol]>,
    pub body: Arc<ExprC>,
    pub env: Environment,
}

// Environments can be large and are shared by many closures; keep Debug short.
impl fmt::Debug for ClosureCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureCell")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("env", &"<environment>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub enum Value {
    Num(f64),
    Str(String),
    Bool(bool),
    Closure(Arc<ClosureCell>),
    Primitive(PrimOp),
}

// Closures are equal only to themselves; this is host-level identity, not the
// language's `equal?`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Arc::ptr_eq(a, b),
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn closure(params: Arc<[InternedSymbol]>, body: Arc<ExprC>, env: Environment) -> Self {
        Value::Closure(Arc::new(ClosureCell { params, body, env }))
    }

    /// Kind name used in type errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Num(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Closure(_) => "procedure",
            Value::Primitive(_) => "primop",
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            c => result.push(c),
        }
    }
    result
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Number(n) => write!(f, "{n}"),
            Term::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Term::Symbol(s) => write!(f, "{s}"),
            Term::List(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Serialization of a value as the REPL and `top_interp` show it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Closure(_) => write!(f, "#<procedure>"),
            Value::Primitive(_) => write!(f, "#<primop>"),
        }
    }
}
