//! Value tuples and the pillar partition built from them.

use std::collections::HashMap;
use std::hash::Hash;

use smallvec::SmallVec;

use pillarforge_core::domain::VariableDescriptor;

use super::entity::EntityReference;
use super::pillar::Pillar;

/// The values of the grouping variables of one entity, in descriptor order.
///
/// Unassigned values are `None`; two `None`s compare equal, so unassigned
/// entities share a pillar like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueTuple<V>(SmallVec<[Option<V>; 2]>);

impl<V> ValueTuple<V> {
    /// Reads the tuple of the entity at `entity_index`.
    pub fn of<S>(descriptors: &[VariableDescriptor<S, V>], solution: &S, entity_index: usize) -> Self {
        Self(
            descriptors
                .iter()
                .map(|d| d.value(solution, entity_index))
                .collect(),
        )
    }

    /// Returns the values in descriptor order.
    pub fn values(&self) -> &[Option<V>] {
        &self.0
    }
}

/// Partitions entities into pillars by value tuple.
///
/// Walks `entities` once. Pillars come out in order of first occurrence of
/// their tuple, and members keep the order in which they were seen.
pub fn partition_by_value_tuple<S, V, I>(
    solution: &S,
    descriptors: &[VariableDescriptor<S, V>],
    entities: I,
) -> Vec<Pillar>
where
    V: Eq + Hash,
    I: IntoIterator<Item = EntityReference>,
{
    let mut tuple_to_pillar: HashMap<ValueTuple<V>, usize> = HashMap::new();
    let mut pillars: Vec<Vec<EntityReference>> = Vec::new();

    for entity_ref in entities {
        let tuple = ValueTuple::of(descriptors, solution, entity_ref.entity_index);
        let index = *tuple_to_pillar.entry(tuple).or_insert_with(|| {
            pillars.push(Vec::new());
            pillars.len() - 1
        });
        pillars[index].push(entity_ref);
    }

    pillars.into_iter().map(Pillar::new).collect()
}
