//! Domain model descriptors for planning problems
//!
//! Descriptors expose the parts of a user's domain model that selectors
//! need without any runtime type inspection:
//! - `SolutionDescriptor`: the entity types of a solution
//! - `EntityDescriptor`: entity count, variables and ordering capabilities
//! - `VariableDescriptor`: a typed value getter for one planning variable

mod descriptor;
mod variable;

pub use descriptor::{EntityComparator, EntityDescriptor, SolutionDescriptor, VariableDescriptor};
pub use variable::{ShadowVariableKind, VariableType};
