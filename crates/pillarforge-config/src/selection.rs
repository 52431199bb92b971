//! Selection order, cache type and subpillar type.
//!
//! Shared vocabulary of the selector configuration.

use serde::{Deserialize, Serialize};

/// Defines the order in which elements are selected from a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrder {
    /// Inherit the selection order from the parent configuration.
    ///
    /// If there is no parent, defaults to `Random`.
    #[default]
    Inherit,

    /// Select elements in their original order.
    ///
    /// Deterministic and reproducible; each element is selected once per step.
    Original,

    /// Select elements randomly on each call to next().
    ///
    /// The same element may be selected multiple times.
    /// This scales well because it does not require exhaustive enumeration.
    Random,

    /// Select elements in random order by shuffling a cached list.
    Shuffled,
}

impl SelectionOrder {
    /// Resolves the selection order by inheriting from a parent if necessary.
    ///
    /// The result is never `Inherit`.
    pub fn resolve(self, inherited: SelectionOrder) -> SelectionOrder {
        match self {
            SelectionOrder::Inherit => {
                if inherited == SelectionOrder::Inherit {
                    SelectionOrder::Random
                } else {
                    inherited
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this selection order implies random selection.
    pub fn is_random(&self) -> bool {
        matches!(self, SelectionOrder::Random | SelectionOrder::Shuffled)
    }

    /// Converts to a boolean random selection flag.
    ///
    /// Returns `None` for orders that are neither `Random` nor `Original`.
    pub fn to_random_selection(&self) -> Option<bool> {
        match self {
            SelectionOrder::Random => Some(true),
            SelectionOrder::Original => Some(false),
            _ => None,
        }
    }
}

/// How long a selector may reuse what it computed before recomputing it.
///
/// Variants are declared from narrowest to widest, so `Ord` compares scopes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCacheType {
    /// Recompute on every request.
    #[default]
    JustInTime,

    /// Reuse within one step.
    Step,

    /// Reuse within one phase.
    Phase,

    /// Reuse for the whole solver run.
    Solver,
}

impl SelectionCacheType {
    /// Returns the wider of two cache types.
    pub fn max(a: SelectionCacheType, b: SelectionCacheType) -> SelectionCacheType {
        std::cmp::max(a, b)
    }
}

/// How a pillar may be split into subpillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubPillarType {
    /// Only whole pillars are selected.
    None,

    /// Any subset of a pillar within the size bounds.
    All,

    /// Contiguous runs of a pillar sorted by a comparator.
    Sequence,
}
