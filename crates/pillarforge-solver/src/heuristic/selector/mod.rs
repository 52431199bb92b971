//! Selectors for entities and pillars.
//!
//! Selectors enumerate the elements that the solver considers when
//! exploring the solution space.
//!
//! - [`EntitySelector`]: entities of one type, in original order
//! - [`PillarSelector`]: pillars and subpillars, cached per step
//! - [`PillarSelectorFactory`]: validated construction from configuration

pub mod entity;
pub mod pillar;
pub mod pillar_factory;
mod step_cache;
pub mod sub_pillar;
mod value_tuple;

pub use entity::{EntityReference, EntitySelector, FromSolutionEntitySelector};
pub use pillar::{DefaultPillarSelector, Pillar, PillarSelector};
pub use pillar_factory::{ConfiguredPillarSelector, PillarSelectorFactory};
pub use step_cache::StepCache;
pub use sub_pillar::{SubPillarIter, SubPillarPolicy};
pub use value_tuple::{partition_by_value_tuple, ValueTuple};
