//! PillarForge Core - Domain descriptors and error types
//!
//! This crate provides the fundamental abstractions shared by the
//! PillarForge selector crates:
//! - Descriptor types for runtime metadata about entities and variables
//! - The entity ordering capability used by sequence subpillars
//! - The error type surfaced by selector construction

pub mod domain;
pub mod error;

pub use domain::{
    EntityComparator, EntityDescriptor, SolutionDescriptor, VariableDescriptor, VariableType,
};
pub use error::{PillarForgeError, Result};
