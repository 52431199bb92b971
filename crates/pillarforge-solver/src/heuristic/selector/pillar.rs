//! Pillar selector for selecting groups of entities with the same variable values.
//!
//! A pillar is a group of entities that share the same values for the
//! grouping variables. Pillar moves operate on a pillar, or on a subpillar
//! of it, changing or swapping all of its entities at once.
//!
//! The partition into pillars is computed once per step and reused until
//! the step id changes.

use std::fmt::{self, Debug};
use std::hash::Hash;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, trace};

use pillarforge_config::{SelectionCacheType, SelectionOrder};
use pillarforge_core::domain::VariableDescriptor;

use crate::scope::StepId;

use super::entity::{EntityReference, EntitySelector};
use super::step_cache::StepCache;
use super::sub_pillar::SubPillarPolicy;
use super::value_tuple::partition_by_value_tuple;

/// A group of entity references that share the same variable values.
///
/// Subpillars use the same type; their members are always a subset of one
/// pillar, in that pillar's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pillar {
    /// The entity references in this pillar.
    pub entities: Vec<EntityReference>,
}

impl Pillar {
    /// Creates a new pillar with the given entities.
    pub fn new(entities: Vec<EntityReference>) -> Self {
        Self { entities }
    }

    /// Returns the number of entities in this pillar.
    pub fn size(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if this pillar is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns an iterator over the entity references.
    pub fn iter(&self) -> impl Iterator<Item = &EntityReference> {
        self.entities.iter()
    }

    /// Returns true if the pillar holds the given entity.
    pub fn contains(&self, entity_ref: &EntityReference) -> bool {
        self.entities.contains(entity_ref)
    }
}

/// Trait for selecting pillars and subpillars of entities.
///
/// Callers pass the working solution, the current step id and the RNG of
/// the run; the selector owns none of them.
pub trait PillarSelector<S>: Send + Debug {
    /// Returns the candidates of the current step.
    ///
    /// Original order yields a finite, reproducible sequence. Random order
    /// yields an endless sequence of samples, or nothing when no pillar
    /// qualifies.
    fn iter<'a, R: Rng>(
        &'a self,
        solution: &'a S,
        step: StepId,
        rng: &'a mut R,
    ) -> Box<dyn Iterator<Item = Pillar> + 'a>;

    /// Returns the number of base pillars that can produce candidates.
    fn size(&self, solution: &S, step: StepId) -> usize;

    /// Returns true if this selector may return the same pillar multiple times.
    fn is_never_ending(&self) -> bool {
        false
    }

    /// Returns the order in which candidates are produced.
    fn selection_order(&self) -> SelectionOrder;

    /// Returns how long the partition is reused.
    fn cache_type(&self) -> SelectionCacheType {
        SelectionCacheType::Step
    }

    /// Returns the descriptor index this selector operates on.
    fn descriptor_index(&self) -> usize;

    /// Drops any cached partition.
    fn reset(&self) {}
}

/// A pillar selector that groups entities by their value tuple.
///
/// Entities come from `ES` in original order and are grouped by the values
/// of the configured variables. The partition is cached per step; pillars
/// that cannot produce a subpillar under the policy are left out of it.
pub struct DefaultPillarSelector<S, V, ES> {
    entity_selector: ES,
    variable_descriptors: Vec<VariableDescriptor<S, V>>,
    sub_pillar_policy: SubPillarPolicy<S>,
    selection_order: SelectionOrder,
    cache: StepCache<Vec<Pillar>>,
}

impl<S, V, ES> DefaultPillarSelector<S, V, ES>
where
    V: Eq + Hash,
    ES: EntitySelector<S>,
{
    /// Creates a selector grouping by `variable_descriptors`.
    ///
    /// Subpillars start disabled and the order is `Original`.
    pub fn new(entity_selector: ES, variable_descriptors: Vec<VariableDescriptor<S, V>>) -> Self {
        Self {
            entity_selector,
            variable_descriptors,
            sub_pillar_policy: SubPillarPolicy::Disabled,
            selection_order: SelectionOrder::Original,
            cache: StepCache::new(),
        }
    }

    /// Sets the subpillar policy.
    pub fn with_sub_pillar_policy(mut self, policy: SubPillarPolicy<S>) -> Self {
        self.sub_pillar_policy = policy;
        self.cache.reset();
        self
    }

    /// Sets the selection order.
    pub fn with_selection_order(mut self, selection_order: SelectionOrder) -> Self {
        self.selection_order = selection_order;
        self
    }

    pub fn entity_selector(&self) -> &ES {
        &self.entity_selector
    }

    pub fn variable_descriptors(&self) -> &[VariableDescriptor<S, V>] {
        &self.variable_descriptors
    }

    pub fn sub_pillar_policy(&self) -> &SubPillarPolicy<S> {
        &self.sub_pillar_policy
    }

    /// Returns the pillars of `step`, partitioning the solution on first use.
    pub fn pillars(&self, solution: &S, step: StepId) -> Arc<Vec<Pillar>> {
        self.cache.get_or_build(step, || self.build_pillars(solution, step))
    }

    fn build_pillars(&self, solution: &S, step: StepId) -> Vec<Pillar> {
        let mut pillars = partition_by_value_tuple(
            solution,
            &self.variable_descriptors,
            self.entity_selector.iter(solution),
        );
        let partition_size = pillars.len();

        pillars.retain(|pillar| self.sub_pillar_policy.size_range(pillar.size()).is_some());
        for pillar in &mut pillars {
            self.sub_pillar_policy.arrange(solution, pillar);
        }

        debug!(
            %step,
            descriptor_index = self.entity_selector.descriptor_index(),
            partition_size,
            candidate_pillars = pillars.len(),
            "Rebuilt pillar partition"
        );
        pillars
    }
}

impl<S, V, ES: Debug> Debug for DefaultPillarSelector<S, V, ES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variables: Vec<_> = self.variable_descriptors.iter().map(|v| v.name).collect();
        f.debug_struct("DefaultPillarSelector")
            .field("entity_selector", &self.entity_selector)
            .field("variables", &variables)
            .field("sub_pillar_policy", &self.sub_pillar_policy)
            .field("selection_order", &self.selection_order)
            .field("cache", &self.cache)
            .finish()
    }
}

impl<S, V, ES> PillarSelector<S> for DefaultPillarSelector<S, V, ES>
where
    V: Eq + Hash,
    ES: EntitySelector<S>,
{
    fn iter<'a, R: Rng>(
        &'a self,
        solution: &'a S,
        step: StepId,
        rng: &'a mut R,
    ) -> Box<dyn Iterator<Item = Pillar> + 'a> {
        let pillars = self.pillars(solution, step);
        let policy = &self.sub_pillar_policy;

        if self.selection_order.is_random() {
            Box::new(RandomPillarIter {
                pillars,
                policy,
                rng,
            })
        } else {
            Box::new((0..pillars.len()).flat_map(move |i| policy.iter_sub_pillars(&pillars[i])))
        }
    }

    fn size(&self, solution: &S, step: StepId) -> usize {
        self.pillars(solution, step).len()
    }

    fn is_never_ending(&self) -> bool {
        self.selection_order.is_random()
    }

    fn selection_order(&self) -> SelectionOrder {
        self.selection_order
    }

    fn descriptor_index(&self) -> usize {
        self.entity_selector.descriptor_index()
    }

    fn reset(&self) {
        self.cache.reset();
    }
}

/// Endless random draws: a pillar uniformly, then one subpillar of it.
struct RandomPillarIter<'a, S, R> {
    pillars: Arc<Vec<Pillar>>,
    policy: &'a SubPillarPolicy<S>,
    rng: &'a mut R,
}

impl<S, R: Rng> Iterator for RandomPillarIter<'_, S, R> {
    type Item = Pillar;

    fn next(&mut self) -> Option<Pillar> {
        if self.pillars.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.pillars.len());
        let sub_pillar = self.policy.sample_sub_pillar(&self.pillars[index], &mut *self.rng)?;
        trace!(pillar = index, size = sub_pillar.size(), "Sampled subpillar");
        Some(sub_pillar)
    }
}

#[cfg(test)]
#[path = "pillar_tests.rs"]
mod tests;
