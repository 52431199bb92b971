//! Entity selectors for iterating over planning entities

use std::fmt::{self, Debug};

use pillarforge_config::SelectionCacheType;

/// A reference to an entity within a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityReference {
    /// Index of the entity descriptor.
    pub descriptor_index: usize,
    /// Index of the entity within its collection.
    pub entity_index: usize,
}

impl EntityReference {
    /// Creates a new entity reference.
    pub fn new(descriptor_index: usize, entity_index: usize) -> Self {
        Self {
            descriptor_index,
            entity_index,
        }
    }
}

/// Trait for selecting entities from a planning solution.
///
/// Entity selectors provide an iteration order over the entities that
/// the solver will consider for moves. They own their caching and filtering.
pub trait EntitySelector<S>: Send + Debug {
    /// Returns an iterator over entity references in original order.
    fn iter<'a>(&'a self, solution: &'a S) -> Box<dyn Iterator<Item = EntityReference> + 'a>;

    /// Returns the approximate number of entities.
    fn size(&self, solution: &S) -> usize;

    /// Returns the descriptor index of the entities this selector yields.
    fn descriptor_index(&self) -> usize;

    /// Returns how long this selector may reuse its selection.
    fn cache_type(&self) -> SelectionCacheType {
        SelectionCacheType::JustInTime
    }

    /// Returns true if this selector may return the same entity multiple times.
    fn is_never_ending(&self) -> bool {
        false
    }
}

/// An entity selector that iterates over all entities of one collection.
///
/// Reads the entity count from the solution on every call, so the selection
/// is always current. An optional movable filter skips pinned entities.
pub struct FromSolutionEntitySelector<S> {
    /// The descriptor index to select from.
    descriptor_index: usize,
    /// Number of entities in the collection.
    entity_count: fn(&S) -> usize,
    /// Entities rejected by this filter are skipped.
    movable_filter: Option<fn(&S, usize) -> bool>,
    /// Reported cache type, at most `Step`; the selection itself is never cached.
    cache_type: SelectionCacheType,
}

impl<S> FromSolutionEntitySelector<S> {
    /// Creates a new entity selector for the given descriptor index.
    pub fn new(descriptor_index: usize, entity_count: fn(&S) -> usize) -> Self {
        Self {
            descriptor_index,
            entity_count,
            movable_filter: None,
            cache_type: SelectionCacheType::JustInTime,
        }
    }

    /// Creates an entity selector that skips entities the filter rejects.
    pub fn with_movable_filter(mut self, filter: fn(&S, usize) -> bool) -> Self {
        self.movable_filter = Some(filter);
        self
    }

    /// Sets the cache type reported by this selector.
    ///
    /// Advisory only: wider types are clamped to `Step`, since the entities
    /// are read from the solution on every call.
    pub fn with_cache_type(mut self, cache_type: SelectionCacheType) -> Self {
        self.cache_type = cache_type.min(SelectionCacheType::Step);
        self
    }
}

impl<S> Debug for FromSolutionEntitySelector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromSolutionEntitySelector")
            .field("descriptor_index", &self.descriptor_index)
            .field("movable_filter", &self.movable_filter.is_some())
            .field("cache_type", &self.cache_type)
            .finish()
    }
}

impl<S> EntitySelector<S> for FromSolutionEntitySelector<S> {
    fn iter<'a>(&'a self, solution: &'a S) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        let count = (self.entity_count)(solution);
        let desc_idx = self.descriptor_index;

        match self.movable_filter {
            Some(filter) => Box::new(
                (0..count)
                    .filter(move |&i| filter(solution, i))
                    .map(move |i| EntityReference::new(desc_idx, i)),
            ),
            None => Box::new((0..count).map(move |i| EntityReference::new(desc_idx, i))),
        }
    }

    fn size(&self, solution: &S) -> usize {
        match self.movable_filter {
            Some(_) => self.iter(solution).count(),
            None => (self.entity_count)(solution),
        }
    }

    fn descriptor_index(&self) -> usize {
        self.descriptor_index
    }

    fn cache_type(&self) -> SelectionCacheType {
        self.cache_type
    }
}
