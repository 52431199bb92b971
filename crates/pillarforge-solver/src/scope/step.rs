//! Step identity.

use std::fmt;

/// Identifies one step of a solver run.
///
/// Step-scoped caches compare the id they were built for with the id they
/// are queried with, and rebuild when the two differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(u64);

impl StepId {
    /// Creates a step id from a step index.
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the step index.
    pub fn index(self) -> u64 {
        self.0
    }

    /// Returns the id of the following step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step#{}", self.0)
    }
}
