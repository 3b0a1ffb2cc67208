//! The host-supplied diagnostics seam.
//!
//! The engine carries no diagnostic text of its own. Hosts that want
//! "expected X at position Y" reporting accumulate that state in an
//! [`ErrorCollector`] from inside their terminal rules; the drive loop's
//! only obligation is to call [`finish`] exactly once after a successful
//! top-level parse, so the collector can flush hints gathered in abandoned
//! branches.
//!
//! [`finish`]: ErrorCollector::finish

use crate::cursor::Mark;

/// Sink for diagnostic state accumulated during a parse.
pub trait ErrorCollector {
    /// Called once, with the final cursor position, after a successful
    /// top-level parse.
    fn finish(&mut self, mark: Mark);
}

/// An [`ErrorCollector`] that discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentCollector;

impl ErrorCollector for SilentCollector {
    fn finish(&mut self, _mark: Mark) {}
}
