//! Solver-level scope.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pillarforge_config::SolverConfig;

use super::StepId;

/// Top-level scope for one solver run.
///
/// Owns the working solution, the run-scoped RNG and the current step id.
/// Selectors borrow all three from here; they never keep an RNG of their own.
pub struct SolverScope<S> {
    working_solution: S,
    rng: StdRng,
    step_id: StepId,
}

impl<S> SolverScope<S> {
    pub fn new(working_solution: S) -> Self {
        Self {
            working_solution,
            rng: StdRng::from_os_rng(),
            step_id: StepId::default(),
        }
    }

    pub fn with_seed(working_solution: S, seed: u64) -> Self {
        Self {
            working_solution,
            rng: StdRng::seed_from_u64(seed),
            step_id: StepId::default(),
        }
    }

    /// Creates a scope seeded from the configuration, if it carries a seed.
    pub fn from_config(working_solution: S, config: &SolverConfig) -> Self {
        match config.random_seed {
            Some(seed) => Self::with_seed(working_solution, seed),
            None => Self::new(working_solution),
        }
    }

    pub fn working_solution(&self) -> &S {
        &self.working_solution
    }

    pub fn working_solution_mut(&mut self) -> &mut S {
        &mut self.working_solution
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn step_id(&self) -> StepId {
        self.step_id
    }

    /// Ends the current step; anything cached for it becomes stale.
    pub fn complete_step(&mut self) -> StepId {
        self.step_id = self.step_id.next();
        self.step_id
    }

    /// Borrows what a selector needs for one selection call.
    pub fn selection_parts(&mut self) -> (&S, StepId, &mut StdRng) {
        (&self.working_solution, self.step_id, &mut self.rng)
    }

    pub fn into_working_solution(self) -> S {
        self.working_solution
    }
}
