//! The canonical digits grammar, end to end.
//!
//! `digits := digit digits | digit` — right recursion stands in for
//! repetition; the engine does not support left-recursive grammars.

use trellis::engine::{ParseState, Production, RuleSet, SilentCollector, Term};
use trellis::foundation::Atom;
use trellis::text::{StrCursor, digit};

struct DigitsGrammar {
    digits: Atom<String>,
    rules: RuleSet<StrCursor>,
}

fn digits_grammar() -> DigitsGrammar {
    let digit_atom = Atom::<char>::new("digit");
    let digits_atom = Atom::<String>::new("digits");

    let mut rules = RuleSet::new();
    rules.insert(&digit_atom, digit());

    let term = Term::alternative([
        Term::sequence([
            Term::reference(&digit_atom),
            Term::reference(&digits_atom),
        ]),
        Term::reference(&digit_atom),
    ]);
    let (d, ds) = (digit_atom.clone(), digits_atom.clone());
    rules.insert(
        &digits_atom,
        Production::from_scope(term, move |scope| {
            let mut out = String::new();
            out.push(*scope.get(&d)?);
            if let Some(rest) = scope.get(&ds) {
                out.push_str(rest);
            }
            Some(out)
        }),
    );

    DigitsGrammar {
        digits: digits_atom,
        rules,
    }
}

#[test]
fn consumes_the_leading_digit_run_exactly() {
    let grammar = digits_grammar();
    let mut collector = SilentCollector;
    let mut state = ParseState::new(StrCursor::new("123abc"), &grammar.rules, &mut collector);

    assert_eq!(state.parse(&grammar.digits).unwrap().as_deref(), Some("123"));
    assert_eq!(state.mark().index(), 3);

    // A second call at index 3 is keyed at the new position: it must not
    // replay the result from index 0.
    assert_eq!(state.parse(&grammar.digits).unwrap(), None);
    assert_eq!(state.mark().index(), 3);
}

#[test]
fn whole_input_of_digits_is_consumed() {
    let grammar = digits_grammar();
    let mut collector = SilentCollector;
    let mut state = ParseState::new(StrCursor::new("90210"), &grammar.rules, &mut collector);

    assert_eq!(
        state.parse(&grammar.digits).unwrap().as_deref(),
        Some("90210")
    );
    assert_eq!(state.mark().index(), 5);
}

#[test]
fn non_digit_input_fails_without_movement() {
    let grammar = digits_grammar();
    let mut collector = SilentCollector;
    let mut state = ParseState::new(StrCursor::new("abc"), &grammar.rules, &mut collector);

    assert_eq!(state.parse(&grammar.digits).unwrap(), None);
    assert_eq!(state.mark().index(), 0);
}

#[test]
fn memoization_makes_the_replay_free() {
    let grammar = digits_grammar();
    let mut collector = SilentCollector;
    let mut state = ParseState::new(StrCursor::new("123abc"), &grammar.rules, &mut collector);

    let first = state.parse(&grammar.digits).unwrap();
    let filled = state.cache_len();

    // Walking the same positions again adds no cache entries; every
    // lookup hits.
    state.restore(trellis::engine::Mark::new(0));
    let second = state.parse(&grammar.digits).unwrap();
    assert_eq!(first, second);
    assert_eq!(state.cache_len(), filled);
}

#[test]
fn grammar_definitions_are_reusable_across_states() {
    let grammar = digits_grammar();
    let mut collector = SilentCollector;

    for (input, expected) in [("1", Some("1")), ("42x", Some("42")), ("", None)] {
        let mut state = ParseState::new(StrCursor::new(input), &grammar.rules, &mut collector);
        assert_eq!(state.parse(&grammar.digits).unwrap().as_deref(), expected);
    }
}
