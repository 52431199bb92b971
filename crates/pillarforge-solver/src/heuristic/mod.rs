//! Heuristic components for solving
//!
//! This module contains the selectors that enumerate pillars and subpillars
//! for pillar change and pillar swap moves.

pub mod selector;

pub use selector::{
    ConfiguredPillarSelector, DefaultPillarSelector, EntityReference, EntitySelector,
    FromSolutionEntitySelector, Pillar, PillarSelector, PillarSelectorFactory, StepCache,
    SubPillarIter, SubPillarPolicy, ValueTuple,
};
