use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static INTERNER: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

/// An identifier interned in the process-wide symbol table.
///
/// Identifiers, lambda parameters, and environment binding names are all
/// `InternedSymbol`s, so name resolution compares integers instead of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InternedSymbol(DefaultSymbol);

impl InternedSymbol {
    /// Intern a name and return its symbol
    pub fn new(s: &str) -> Self {
        let mut interner = INTERNER.write().unwrap_or_else(PoisonError::into_inner);
        InternedSymbol(interner.get_or_intern(s))
    }

    /// Resolve the symbol back to an owned name
    pub fn resolve(&self) -> String {
        self.with_str(str::to_string)
    }

    /// Run `f` against the name without allocating
    pub fn with_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        let interner = INTERNER.read().unwrap_or_else(PoisonError::into_inner);
        let s = interner
            .resolve(self.0)
            .expect("interned symbols always resolve");
        f(s)
    }
}

impl From<&str> for InternedSymbol {
    fn from(s: &str) -> Self {
        InternedSymbol::new(s)
    }
}

impl fmt::Display for InternedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|s| write!(f, "{s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_interns_to_same_symbol() {
        assert_eq!(InternedSymbol::new("equal?"), InternedSymbol::new("equal?"));
    }

    #[test]
    fn test_different_names_intern_apart() {
        assert_ne!(InternedSymbol::new("x"), InternedSymbol::new("y"));
    }

    #[test]
    fn test_resolve_round_trips() {
        let sym = InternedSymbol::from("<=");
        assert_eq!(sym.resolve(), "<=");
        assert_eq!(sym.with_str(str::len), 2);
        assert_eq!(format!("{sym}"), "<=");
    }
}
