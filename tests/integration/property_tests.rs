//! Property suites for the backtracking and memoization contracts.

use proptest::prelude::*;

use trellis::engine::{ParseState, Production, RuleSet, SilentCollector, Term};
use trellis::foundation::Atom;
use trellis::text::{StrCursor, digit, letter};

/// Grammar: `pair := digit letter | letter digit`.
fn pair_grammar() -> (Atom<(char, char)>, RuleSet<StrCursor>) {
    let digit_atom = Atom::<char>::new("digit");
    let letter_atom = Atom::<char>::new("letter");
    let pair_atom = Atom::<(char, char)>::new("pair");

    let mut rules = RuleSet::new();
    rules.insert(&digit_atom, digit());
    rules.insert(&letter_atom, letter());

    let term = Term::alternative([
        Term::sequence([Term::reference(&digit_atom), Term::reference(&letter_atom)]),
        Term::sequence([Term::reference(&letter_atom), Term::reference(&digit_atom)]),
    ]);
    let (d, l) = (digit_atom.clone(), letter_atom.clone());
    rules.insert(
        &pair_atom,
        Production::from_scope(term, move |scope| {
            Some((*scope.get(&d)?, *scope.get(&l)?))
        }),
    );

    (pair_atom, rules)
}

proptest! {
    /// A failed parse leaves the cursor exactly where it started.
    #[test]
    fn no_net_cursor_advance_on_failure(input in "\\PC{0,24}") {
        let (pair, rules) = pair_grammar();
        let mut collector = SilentCollector;
        let mut state = ParseState::new(StrCursor::new(input.as_str()), &rules, &mut collector);

        let before = state.mark();
        let outcome = state.parse(&pair).unwrap();
        if outcome.is_none() {
            prop_assert_eq!(state.mark(), before);
        }
    }

    /// Parsing the same atom at the same mark twice yields equal results
    /// and identical post-parse cursor state.
    #[test]
    fn cache_idempotence(input in "\\PC{0,24}") {
        let (pair, rules) = pair_grammar();
        let mut collector = SilentCollector;
        let mut state = ParseState::new(StrCursor::new(input.as_str()), &rules, &mut collector);

        let start = state.mark();
        let first = state.parse(&pair).unwrap();
        let post_first = state.mark();

        state.restore(start);
        let second = state.parse(&pair).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(state.mark(), post_first);
    }

    /// The engine never panics, whatever the input looks like.
    #[test]
    fn parse_never_panics(input in prop::collection::vec(any::<char>(), 0..64)) {
        let source: String = input.into_iter().collect();
        let (pair, rules) = pair_grammar();
        let mut collector = SilentCollector;
        let mut state = ParseState::new(StrCursor::new(source.as_str()), &rules, &mut collector);
        let _ = state.parse(&pair).unwrap();
    }

    /// A successful digit-first pair parse consumes exactly the two
    /// matched characters and binds them under their atoms.
    #[test]
    fn success_consumes_exactly_the_match(
        d in prop::char::range('0', '9'),
        l in prop::char::range('a', 'z'),
        tail in "\\PC{0,8}",
    ) {
        let (pair, rules) = pair_grammar();
        let source = format!("{d}{l}{tail}");
        let mut collector = SilentCollector;
        let mut state = ParseState::new(StrCursor::new(source.as_str()), &rules, &mut collector);

        let outcome = state.parse(&pair).unwrap();
        prop_assert_eq!(outcome, Some((d, l)));
        prop_assert_eq!(state.mark().index(), d.len_utf8() + l.len_utf8());
    }
}
