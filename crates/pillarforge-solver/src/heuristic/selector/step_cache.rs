//! Step-scoped cache.
//!
//! Holds one computed value together with the step it was computed for.
//! A lookup with a different step id rebuilds the value.

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::scope::StepId;

/// Caches a value for the duration of one step.
///
/// Interior mutability lets selectors populate the cache from `&self`.
/// The cache is `Send` but not `Sync`: one solver run, one thread.
pub struct StepCache<T> {
    slot: RefCell<Option<(StepId, Arc<T>)>>,
}

impl<T> StepCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Returns the value cached for `step`, building it first if needed.
    pub fn get_or_build(&self, step: StepId, build: impl FnOnce() -> T) -> Arc<T> {
        let mut slot = self.slot.borrow_mut();
        match slot.as_ref() {
            Some((cached_step, value)) if *cached_step == step => Arc::clone(value),
            _ => {
                let value = Arc::new(build());
                *slot = Some((step, Arc::clone(&value)));
                value
            }
        }
    }

    /// Returns the step the cached value belongs to, if any.
    pub fn cached_step(&self) -> Option<StepId> {
        self.slot.borrow().as_ref().map(|(step, _)| *step)
    }

    /// Drops the cached value.
    pub fn reset(&self) {
        *self.slot.borrow_mut() = None;
    }
}

impl<T> Default for StepCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for StepCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepCache")
            .field("cached_step", &self.cached_step())
            .finish()
    }
}
