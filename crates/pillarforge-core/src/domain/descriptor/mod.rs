//! Runtime descriptors for solutions, entities and variables.

mod entity;
mod solution;
mod var_descriptor;

pub use entity::{EntityComparator, EntityDescriptor};
pub use solution::SolutionDescriptor;
pub use var_descriptor::VariableDescriptor;
