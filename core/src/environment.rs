//! Environment for variable bindings
//!
//! An Environment is an append-only sequence of bindings. Lookup scans from
//! the most recent binding backwards, so later bindings shadow earlier ones.
//! Extending never mutates the receiver: it returns a new Environment that
//! shares the old one as a prefix, which is what lets a closure hold on to
//! the exact scope it was created in.

use im::Vector;

use crate::error::{Error, Result};
use crate::interner::InternedSymbol;
use crate::language::Value;

#[derive(Clone, Debug)]
pub struct Binding {
    pub name: InternedSymbol,
    pub value: Value,
}

/// Cheap to clone: the bindings live in a persistent vector.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vector<Binding>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: Vector::new(),
        }
    }

    /// Return a copy of this environment with one more binding
    pub fn bind(&self, name: InternedSymbol, value: Value) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.push_back(Binding { name, value });
        Environment { bindings }
    }

    /// Bind each parameter to the argument at the same position.
    ///
    /// The counts must match exactly; a mismatch is an arity error rather
    /// than a silent truncation.
    pub fn extend(&self, params: &[InternedSymbol], args: &[Value]) -> Result<Self> {
        if params.len() != args.len() {
            return Err(Error::Arity {
                callee: "closure".to_string(),
                expected: params.len(),
                got: args.len(),
            });
        }

        let mut bindings = self.bindings.clone();
        for (param, arg) in params.iter().zip(args) {
            bindings.push_back(Binding {
                name: *param,
                value: arg.clone(),
            });
        }
        Ok(Environment { bindings })
    }

    /// Find the most recent binding for `name`
    pub fn lookup(&self, name: InternedSymbol) -> Result<Value> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.name == name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| Error::UnboundName(name.resolve()))
    }

    /// Visible names, most recent first, without the shadowed duplicates
    pub fn names(&self) -> Vec<InternedSymbol> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.bindings
            .iter()
            .rev()
            .filter(|binding| seen.insert(binding.name))
            .map(|binding| binding.name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
