//! Parser: `Term` trees to `ExprC`.
//!
//! Special forms are recognised by their head symbol:
//!
//! ```text
//! {if test then else}
//! {lam {param ...} body}
//! {var {name = expr} ... body}
//! {func arg ...}
//! ```
//!
//! `var` is desugared here into an immediately applied `lam`, so the
//! evaluator never sees it.

use rustc_hash::FxHashSet;

use crate::error::{Result, SyntaxError};
use crate::interner::InternedSymbol;
use crate::language::{ExprC, Term};
use crate::reader::read;

pub const RESERVED: [&str; 4] = ["var", "if", "lam", "="];

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Parse a single term into an expression
pub fn parse(term: &Term) -> Result<ExprC> {
    match term {
        Term::Number(n) => Ok(ExprC::NumLit(*n)),
        Term::String(s) => Ok(ExprC::StrLit(s.clone())),
        Term::Symbol(name) => Ok(ExprC::Id(parse_symbol(name)?)),
        Term::List(items) => match items.as_slice() {
            [] => Err(SyntaxError::EmptyApplication.into()),
            [Term::Symbol(head), rest @ ..] if head == "if" => parse_if(rest),
            [Term::Symbol(head), rest @ ..] if head == "lam" => parse_lam(rest),
            [Term::Symbol(head), rest @ ..] if head == "var" => parse_var(rest),
            [func, args @ ..] => {
                let func = parse(func)?;
                let args = args.iter().map(parse).collect::<Result<Vec<_>>>()?;
                Ok(ExprC::app(func, args))
            }
        },
    }
}

/// Read and parse source text holding exactly one expression
pub fn parse_str(input: &str) -> Result<ExprC> {
    parse(&read(input)?)
}

fn parse_symbol(name: &str) -> Result<InternedSymbol> {
    if is_reserved(name) {
        return Err(SyntaxError::ReservedWord(name.to_string()).into());
    }
    Ok(InternedSymbol::new(name))
}

fn parse_if(rest: &[Term]) -> Result<ExprC> {
    let [test, then, els] = rest else {
        return Err(SyntaxError::MalformedIf.into());
    };
    Ok(ExprC::If {
        test: Box::new(parse(test)?),
        then: Box::new(parse(then)?),
        els: Box::new(parse(els)?),
    })
}

fn parse_lam(rest: &[Term]) -> Result<ExprC> {
    let [Term::List(params), body] = rest else {
        return Err(SyntaxError::MalformedLam.into());
    };
    let params = parse_params(params.iter())?;
    Ok(ExprC::lam(params, parse(body)?))
}

fn parse_var(rest: &[Term]) -> Result<ExprC> {
    let Some((body, clauses)) = rest.split_last() else {
        return Err(SyntaxError::MalformedVar.into());
    };
    if clauses.is_empty() {
        return Err(SyntaxError::MalformedVar.into());
    }

    let mut names = Vec::with_capacity(clauses.len());
    let mut exprs = Vec::with_capacity(clauses.len());
    for clause in clauses {
        match clause {
            Term::List(parts) => match parts.as_slice() {
                [name, Term::Symbol(eq), expr] if eq == "=" => {
                    names.push(name);
                    exprs.push(expr);
                }
                _ => return Err(SyntaxError::MalformedVar.into()),
            },
            _ => return Err(SyntaxError::MalformedVar.into()),
        }
    }

    let params = parse_params(names.into_iter())?;
    let lam = ExprC::lam(params, parse(body)?);
    let args = exprs
        .into_iter()
        .map(parse)
        .collect::<Result<Vec<_>>>()?;
    Ok(ExprC::app(lam, args))
}

fn parse_params<'a>(terms: impl Iterator<Item = &'a Term>) -> Result<Vec<InternedSymbol>> {
    let mut seen = FxHashSet::default();
    let mut params = Vec::new();
    for term in terms {
        let Term::Symbol(name) = term else {
            return Err(SyntaxError::InvalidParameter(term.to_string()).into());
        };
        let sym = parse_symbol(name)?;
        if !seen.insert(sym) {
            return Err(SyntaxError::DuplicateParameter(name.clone()).into());
        }
        params.push(sym);
    }
    Ok(params)
}
