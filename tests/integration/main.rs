//! End-to-end integration tests.
//!
//! A complete recursive grammar driven through the full stack (foundation
//! atoms and scopes, engine combinators and memo cache, text cursor and
//! terminal rules), plus property suites for the backtracking and
//! memoization contracts.

mod digits_tests;
mod property_tests;
