//! Entity descriptor.

use std::cmp::Ordering;
use std::fmt;

use super::VariableDescriptor;

/// A total order over the entities of one collection, by entity index.
///
/// Used to sort pillar members for sequence subpillars.
pub type EntityComparator<S> = fn(&S, usize, usize) -> Ordering;

/// Describes a planning entity type at runtime.
pub struct EntityDescriptor<S, V> {
    /// Name of the entity type.
    pub type_name: &'static str,
    /// Number of entities of this type in a solution.
    entity_count: fn(&S) -> usize,
    /// Variable descriptors for this entity, in declaration order.
    variable_descriptors: Vec<VariableDescriptor<S, V>>,
    /// Natural ordering of the entity type, if it has one.
    natural_order: Option<EntityComparator<S>>,
    /// Comparators that configuration can refer to by name.
    comparators: Vec<(&'static str, EntityComparator<S>)>,
    /// Entities rejected by this filter are pinned and never selected.
    movable_filter: Option<fn(&S, usize) -> bool>,
}

impl<S, V> EntityDescriptor<S, V> {
    /// Creates a new EntityDescriptor.
    pub fn new(type_name: &'static str, entity_count: fn(&S) -> usize) -> Self {
        EntityDescriptor {
            type_name,
            entity_count,
            variable_descriptors: Vec::new(),
            natural_order: None,
            comparators: Vec::new(),
            movable_filter: None,
        }
    }

    /// Adds a variable descriptor.
    pub fn with_variable(mut self, descriptor: VariableDescriptor<S, V>) -> Self {
        self.variable_descriptors.push(descriptor);
        self
    }

    /// Declares the natural ordering of this entity type.
    pub fn with_natural_order(mut self, comparator: EntityComparator<S>) -> Self {
        self.natural_order = Some(comparator);
        self
    }

    /// Registers a comparator under a name usable from configuration.
    pub fn with_comparator(mut self, name: &'static str, comparator: EntityComparator<S>) -> Self {
        self.comparators.push((name, comparator));
        self
    }

    /// Sets the filter deciding which entities may be moved.
    pub fn with_movable_filter(mut self, filter: fn(&S, usize) -> bool) -> Self {
        self.movable_filter = Some(filter);
        self
    }

    /// Returns the movable filter, if any.
    pub fn movable_filter(&self) -> Option<fn(&S, usize) -> bool> {
        self.movable_filter
    }

    /// Returns the number of entities of this type in the solution.
    pub fn entity_count(&self, solution: &S) -> usize {
        (self.entity_count)(solution)
    }

    /// Returns the entity count accessor.
    pub fn entity_count_fn(&self) -> fn(&S) -> usize {
        self.entity_count
    }

    /// Returns all variable descriptors in declaration order.
    pub fn variable_descriptors(&self) -> &[VariableDescriptor<S, V>] {
        &self.variable_descriptors
    }

    /// Returns genuine (non-shadow) variable descriptors.
    pub fn genuine_variable_descriptors(&self) -> impl Iterator<Item = &VariableDescriptor<S, V>> {
        self.variable_descriptors
            .iter()
            .filter(|v| v.variable_type.is_genuine())
    }

    /// Finds a variable descriptor by name.
    pub fn find_variable(&self, name: &str) -> Option<&VariableDescriptor<S, V>> {
        self.variable_descriptors.iter().find(|v| v.name == name)
    }

    /// Returns the natural ordering, if the entity type declares one.
    pub fn natural_order(&self) -> Option<EntityComparator<S>> {
        self.natural_order
    }

    /// Finds a registered comparator by name.
    pub fn find_comparator(&self, name: &str) -> Option<EntityComparator<S>> {
        self.comparators
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }
}

impl<S, V> Clone for EntityDescriptor<S, V> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            entity_count: self.entity_count,
            variable_descriptors: self.variable_descriptors.clone(),
            natural_order: self.natural_order,
            comparators: self.comparators.clone(),
            movable_filter: self.movable_filter,
        }
    }
}

impl<S, V> fmt::Debug for EntityDescriptor<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("type_name", &self.type_name)
            .field("variables", &self.variable_descriptors.len())
            .field("natural_order", &self.natural_order.is_some())
            .field("comparators", &self.comparators.len())
            .field("movable_filter", &self.movable_filter.is_some())
            .finish()
    }
}
