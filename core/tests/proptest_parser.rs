use proptest::prelude::*;
use zhrl::{Term, parse, read};

// ============================================================================
// Strategies for Generating Terms
// ============================================================================

fn symbol() -> impl Strategy<Value = String> {
    "[a-z!?<=*/+-][a-z0-9!?<=*/+-]{0,6}".prop_filter("Must not read as a number", |s| {
        s.parse::<f64>().is_err()
    })
}

fn atom() -> impl Strategy<Value = Term> {
    prop_oneof![
        (-1.0e9f64..1.0e9f64).prop_map(Term::Number),
        "[a-zA-Z0-9 {}\"\\\\\n\t]{0,10}".prop_map(Term::String),
        symbol().prop_map(Term::Symbol),
    ]
}

fn nest(leaf: impl Strategy<Value = Term> + 'static) -> impl Strategy<Value = Term> {
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Term::List)
    })
}

fn term() -> impl Strategy<Value = Term> {
    nest(atom())
}

/// Terms whose only spaces are the separators between tokens
fn term_without_strings() -> impl Strategy<Value = Term> {
    nest(prop_oneof![
        (-1.0e9f64..1.0e9f64).prop_map(Term::Number),
        symbol().prop_map(Term::Symbol),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn display_then_read_round_trips(t in term()) {
        let text = t.to_string();
        prop_assert_eq!(read(&text), Ok(t));
    }

    #[test]
    fn parsing_is_deterministic(t in term()) {
        prop_assert_eq!(parse(&t), parse(&t));
    }

    #[test]
    fn numbers_lex_as_numbers(n in -1.0e12f64..1.0e12f64) {
        prop_assert_eq!(read(&n.to_string()), Ok(Term::Number(n)));
    }

    #[test]
    fn whitespace_between_tokens_is_irrelevant(t in term_without_strings(), pad in "[ \t\n]{1,3}") {
        let padded = format!("{pad}{}{pad}", t.to_string().replace(' ', &pad));
        prop_assert_eq!(read(&padded), Ok(t));
    }
}
