//! PillarForge Solver Engine
//!
//! This crate provides the selection side of pillar moves:
//! - Entity selectors feeding the partitioner
//! - Per-step pillar partitioning by value tuple
//! - Subpillar enumeration and sampling
//! - Configuration wiring (`PillarSelectorFactory`)
//! - Solver and step scopes handing solution, step id and RNG to selectors

pub mod heuristic;
pub mod scope;

pub use heuristic::{
    ConfiguredPillarSelector, DefaultPillarSelector, EntityReference, EntitySelector,
    FromSolutionEntitySelector, Pillar, PillarSelector, PillarSelectorFactory, StepCache,
    SubPillarIter, SubPillarPolicy, ValueTuple,
};
pub use scope::{SolverScope, StepId};
