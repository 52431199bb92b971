//! Subpillar policy and enumeration.
//!
//! A subpillar is a part of a pillar that a move treats as one unit.
//! [`SubPillarPolicy`] decides which parts are eligible:
//!
//! - `Disabled`: only the whole pillar
//! - `All`: every subset whose size lies within the bounds
//! - `Sequence`: every contiguous run of the comparator-sorted pillar whose
//!   length lies within the bounds
//!
//! Deterministic traversal is exhaustive and reproducible. Random traversal
//! draws one subpillar at a time and never enumerates.

use std::fmt::{self, Debug};

use rand::Rng;
use smallvec::SmallVec;

use pillarforge_core::domain::EntityComparator;

use super::entity::EntityReference;
use super::pillar::Pillar;

/// Which subpillars of a pillar are eligible.
pub enum SubPillarPolicy<S> {
    /// Subpillars are disabled; the whole pillar is the only candidate.
    Disabled,
    /// Any subset within the size bounds.
    All {
        minimum_size: usize,
        maximum_size: usize,
    },
    /// Contiguous runs of the pillar sorted by `comparator`.
    Sequence {
        minimum_size: usize,
        maximum_size: usize,
        comparator: EntityComparator<S>,
    },
}

impl<S> SubPillarPolicy<S> {
    /// Creates a policy with subpillars disabled.
    pub fn without_sub_pillars() -> Self {
        SubPillarPolicy::Disabled
    }

    /// Creates a policy allowing any subset within the bounds.
    ///
    /// A minimum below 1 is raised to 1.
    pub fn with_sub_pillars(minimum_size: usize, maximum_size: usize) -> Self {
        SubPillarPolicy::All {
            minimum_size: minimum_size.max(1),
            maximum_size,
        }
    }

    /// Creates a policy allowing contiguous runs in comparator order.
    ///
    /// A minimum below 1 is raised to 1.
    pub fn sequential(
        minimum_size: usize,
        maximum_size: usize,
        comparator: EntityComparator<S>,
    ) -> Self {
        SubPillarPolicy::Sequence {
            minimum_size: minimum_size.max(1),
            maximum_size,
            comparator,
        }
    }

    /// Returns true unless subpillars are disabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SubPillarPolicy::Disabled)
    }

    /// Returns the minimum subpillar size (1 when disabled).
    pub fn minimum_size(&self) -> usize {
        match self {
            SubPillarPolicy::Disabled => 1,
            SubPillarPolicy::All { minimum_size, .. }
            | SubPillarPolicy::Sequence { minimum_size, .. } => *minimum_size,
        }
    }

    /// Returns the maximum subpillar size (`usize::MAX` when unbounded or disabled).
    pub fn maximum_size(&self) -> usize {
        match self {
            SubPillarPolicy::Disabled => usize::MAX,
            SubPillarPolicy::All { maximum_size, .. }
            | SubPillarPolicy::Sequence { maximum_size, .. } => *maximum_size,
        }
    }

    /// Returns the sequence comparator, if this is a sequence policy.
    pub fn comparator(&self) -> Option<EntityComparator<S>> {
        match self {
            SubPillarPolicy::Sequence { comparator, .. } => Some(*comparator),
            _ => None,
        }
    }

    /// Returns the inclusive size range of subpillars of a pillar of
    /// `pillar_size` entities, or `None` when the pillar has no candidates.
    pub fn size_range(&self, pillar_size: usize) -> Option<(usize, usize)> {
        if pillar_size == 0 {
            return None;
        }
        match self {
            SubPillarPolicy::Disabled => Some((pillar_size, pillar_size)),
            _ => {
                let min = self.minimum_size();
                let max = self.maximum_size().min(pillar_size);
                if min > max {
                    None
                } else {
                    Some((min, max))
                }
            }
        }
    }

    /// Sorts the pillar into sequence order; a no-op for other policies.
    ///
    /// The sort is stable, so entities the comparator considers equal keep
    /// their original order.
    pub fn arrange(&self, solution: &S, pillar: &mut Pillar) {
        if let SubPillarPolicy::Sequence { comparator, .. } = self {
            pillar
                .entities
                .sort_by(|a, b| comparator(solution, a.entity_index, b.entity_index));
        }
    }

    /// Enumerates the subpillars of an arranged pillar in canonical order.
    ///
    /// - `Disabled`: the pillar itself
    /// - `All`: by increasing size, then lexicographically by position
    /// - `Sequence`: by start position, then by increasing length
    pub fn iter_sub_pillars(&self, pillar: &Pillar) -> SubPillarIter {
        let Some((min, max)) = self.size_range(pillar.size()) else {
            return SubPillarIter::Empty;
        };
        match self {
            SubPillarPolicy::Disabled => SubPillarIter::Whole(Some(pillar.clone())),
            SubPillarPolicy::All { .. } => {
                SubPillarIter::Combinations(CombinationIter::new(pillar.entities.clone(), min, max))
            }
            SubPillarPolicy::Sequence { .. } => {
                SubPillarIter::Windows(WindowIter::new(pillar.entities.clone(), min, max))
            }
        }
    }

    /// Draws one subpillar of an arranged pillar at random.
    ///
    /// The size is drawn uniformly from the valid range first. `All` then
    /// draws that many distinct positions uniformly; `Sequence` draws a
    /// start position uniformly. Returns `None` when the pillar has no
    /// candidates.
    pub fn sample_sub_pillar<R: Rng>(&self, pillar: &Pillar, rng: &mut R) -> Option<Pillar> {
        let (min, max) = self.size_range(pillar.size())?;
        let size = if min == max {
            min
        } else {
            rng.random_range(min..=max)
        };
        match self {
            SubPillarPolicy::Disabled => Some(pillar.clone()),
            SubPillarPolicy::All { .. } => {
                let n = pillar.size();
                if size == n {
                    return Some(pillar.clone());
                }
                // Partial Fisher-Yates over positions
                let mut positions: SmallVec<[usize; 16]> = (0..n).collect();
                for i in 0..size {
                    let j = rng.random_range(i..n);
                    positions.swap(i, j);
                }
                positions.truncate(size);
                positions.sort_unstable();
                Some(Pillar::new(
                    positions.iter().map(|&p| pillar.entities[p]).collect(),
                ))
            }
            SubPillarPolicy::Sequence { .. } => {
                let start = rng.random_range(0..=pillar.size() - size);
                Some(Pillar::new(pillar.entities[start..start + size].to_vec()))
            }
        }
    }
}

impl<S> Clone for SubPillarPolicy<S> {
    fn clone(&self) -> Self {
        match self {
            SubPillarPolicy::Disabled => SubPillarPolicy::Disabled,
            SubPillarPolicy::All {
                minimum_size,
                maximum_size,
            } => SubPillarPolicy::All {
                minimum_size: *minimum_size,
                maximum_size: *maximum_size,
            },
            SubPillarPolicy::Sequence {
                minimum_size,
                maximum_size,
                comparator,
            } => SubPillarPolicy::Sequence {
                minimum_size: *minimum_size,
                maximum_size: *maximum_size,
                comparator: *comparator,
            },
        }
    }
}

impl<S> Debug for SubPillarPolicy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubPillarPolicy::Disabled => f.write_str("Disabled"),
            SubPillarPolicy::All {
                minimum_size,
                maximum_size,
            } => f
                .debug_struct("All")
                .field("minimum_size", minimum_size)
                .field("maximum_size", maximum_size)
                .finish(),
            SubPillarPolicy::Sequence {
                minimum_size,
                maximum_size,
                ..
            } => f
                .debug_struct("Sequence")
                .field("minimum_size", minimum_size)
                .field("maximum_size", maximum_size)
                .finish_non_exhaustive(),
        }
    }
}

/// Deterministic subpillar iterator for one pillar.
#[derive(Debug, Clone)]
pub enum SubPillarIter {
    /// No candidates.
    Empty,
    /// The whole pillar, once.
    Whole(Option<Pillar>),
    /// Subsets by size, then lexicographic position.
    Combinations(CombinationIter),
    /// Contiguous windows by start, then length.
    Windows(WindowIter),
}

impl Iterator for SubPillarIter {
    type Item = Pillar;

    fn next(&mut self) -> Option<Pillar> {
        match self {
            SubPillarIter::Empty => None,
            SubPillarIter::Whole(pillar) => pillar.take(),
            SubPillarIter::Combinations(iter) => iter.next(),
            SubPillarIter::Windows(iter) => iter.next(),
        }
    }
}

/// Enumerates position combinations of sizes `min..=max`.
#[derive(Debug, Clone)]
pub struct CombinationIter {
    entities: Vec<EntityReference>,
    positions: Vec<usize>,
    maximum_size: usize,
    done: bool,
}

impl CombinationIter {
    fn new(entities: Vec<EntityReference>, minimum_size: usize, maximum_size: usize) -> Self {
        let done = minimum_size == 0 || minimum_size > maximum_size || maximum_size > entities.len();
        Self {
            entities,
            positions: (0..minimum_size).collect(),
            maximum_size,
            done,
        }
    }

    /// Moves to the next combination of the same size, or the first of the
    /// next size.
    fn advance(&mut self) {
        let n = self.entities.len();
        let k = self.positions.len();
        // Rightmost position that can still move right
        let movable = (0..k).rev().find(|&i| self.positions[i] < n - k + i);
        match movable {
            Some(i) => {
                self.positions[i] += 1;
                for j in i + 1..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
            }
            None if k < self.maximum_size => {
                self.positions = (0..k + 1).collect();
            }
            None => self.done = true,
        }
    }
}

impl Iterator for CombinationIter {
    type Item = Pillar;

    fn next(&mut self) -> Option<Pillar> {
        if self.done {
            return None;
        }
        let sub_pillar = Pillar::new(self.positions.iter().map(|&p| self.entities[p]).collect());
        self.advance();
        Some(sub_pillar)
    }
}

/// Enumerates contiguous windows with lengths `min..=max`.
#[derive(Debug, Clone)]
pub struct WindowIter {
    entities: Vec<EntityReference>,
    start: usize,
    length: usize,
    minimum_size: usize,
    maximum_size: usize,
}

impl WindowIter {
    fn new(entities: Vec<EntityReference>, minimum_size: usize, maximum_size: usize) -> Self {
        Self {
            entities,
            start: 0,
            length: minimum_size,
            minimum_size,
            maximum_size,
        }
    }
}

impl Iterator for WindowIter {
    type Item = Pillar;

    fn next(&mut self) -> Option<Pillar> {
        let n = self.entities.len();
        if self.minimum_size == 0 || self.start + self.minimum_size > n {
            return None;
        }
        let window = Pillar::new(self.entities[self.start..self.start + self.length].to_vec());

        self.length += 1;
        if self.length > self.maximum_size || self.start + self.length > n {
            self.start += 1;
            self.length = self.minimum_size;
        }
        Some(window)
    }
}

#[cfg(test)]
#[path = "sub_pillar_tests.rs"]
mod tests;
