//! PillarForge - pillar and subpillar selection for local search in Rust
//!
//! Groups planning entities that share the same variable values into
//! pillars, splits pillars into subpillars, and hands them to pillar
//! change and pillar swap moves.
//!
//! # Example
//!
//! ```rust
//! use pillarforge::prelude::*;
//! use pillarforge_test::schedule::{schedule_descriptor, shift_descriptor, Schedule};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [[move_selectors]]
//!     type = "pillar_change_move_selector"
//!     sub_pillar_type = "none"
//!     selection_order = "original"
//! "#).unwrap();
//!
//! let descriptor = schedule_descriptor(shift_descriptor());
//! let selector = PillarSelectorFactory::from_move_selector_config(
//!     config.move_selectors[0].pillar_config(),
//!     &descriptor,
//!     SelectionOrder::Inherit,
//! ).unwrap();
//!
//! let schedule = Schedule::with_employees(&[Some(1), Some(1), Some(2)]);
//! let mut scope = SolverScope::from_config(schedule, &config);
//! let (solution, step, rng) = scope.selection_parts();
//!
//! let sizes: Vec<usize> = selector.iter(solution, step, rng).map(|p| p.size()).collect();
//! assert_eq!(sizes, vec![2, 1]);
//! ```

// Domain descriptors and errors
pub use pillarforge_core::{
    EntityComparator, EntityDescriptor, PillarForgeError, Result, SolutionDescriptor,
    VariableDescriptor, VariableType,
};
pub use pillarforge_core::domain::ShadowVariableKind;

// Configuration
pub use pillarforge_config::{
    ConfigError, EntitySelectorConfig, MoveSelectorConfig, PillarMoveSelectorConfig,
    PillarSelectorConfig, SelectionCacheType, SelectionOrder, SolverConfig, SubPillarType,
};

// Selection
pub use pillarforge_solver::{
    ConfiguredPillarSelector, DefaultPillarSelector, EntityReference, EntitySelector,
    FromSolutionEntitySelector, Pillar, PillarSelector, PillarSelectorFactory, SolverScope,
    StepId, SubPillarPolicy,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        EntityDescriptor, PillarForgeError, SolutionDescriptor, VariableDescriptor,
    };
    pub use super::{
        MoveSelectorConfig, PillarMoveSelectorConfig, PillarSelectorConfig, SelectionCacheType,
        SelectionOrder, SolverConfig, SubPillarType,
    };
    pub use super::{
        EntityReference, Pillar, PillarSelector, PillarSelectorFactory, SolverScope, StepId,
        SubPillarPolicy,
    };
}
