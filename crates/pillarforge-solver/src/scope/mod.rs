//! Scope state handed to selectors by the search loop.
//!
//! - [`SolverScope`]: Per-run state, holds the working solution and the run RNG
//! - [`StepId`]: Generation counter identifying the current step

mod solver;
mod step;

pub use solver::SolverScope;
pub use step::StepId;
