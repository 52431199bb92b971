//! Solution descriptor.

use std::fmt;

use super::EntityDescriptor;

/// Describes a planning solution at runtime.
///
/// The position of an entity descriptor in this descriptor is its
/// descriptor index, as carried by entity references.
pub struct SolutionDescriptor<S, V> {
    /// Name of the solution type.
    pub type_name: &'static str,
    /// Descriptors for all entity types in this solution.
    pub entity_descriptors: Vec<EntityDescriptor<S, V>>,
}

impl<S, V> SolutionDescriptor<S, V> {
    /// Creates a new SolutionDescriptor.
    pub fn new(type_name: &'static str) -> Self {
        SolutionDescriptor {
            type_name,
            entity_descriptors: Vec::new(),
        }
    }

    /// Adds an entity descriptor.
    pub fn with_entity(mut self, descriptor: EntityDescriptor<S, V>) -> Self {
        self.entity_descriptors.push(descriptor);
        self
    }

    /// Finds an entity descriptor and its index by type name.
    pub fn find_entity_descriptor(&self, type_name: &str) -> Option<(usize, &EntityDescriptor<S, V>)> {
        self.entity_descriptors
            .iter()
            .enumerate()
            .find(|(_, d)| d.type_name == type_name)
    }

    /// Returns the entity descriptor at the given index.
    pub fn entity_descriptor(&self, index: usize) -> Option<&EntityDescriptor<S, V>> {
        self.entity_descriptors.get(index)
    }

    /// Returns the number of entity types.
    pub fn entity_descriptor_count(&self) -> usize {
        self.entity_descriptors.len()
    }
}

impl<S, V> Clone for SolutionDescriptor<S, V> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            entity_descriptors: self.entity_descriptors.clone(),
        }
    }
}

impl<S, V> fmt::Debug for SolutionDescriptor<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionDescriptor")
            .field("type_name", &self.type_name)
            .field("entities", &self.entity_descriptors)
            .finish()
    }
}
