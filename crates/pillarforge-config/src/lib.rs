//! Configuration system for PillarForge.
//!
//! Load pillar move selector configuration from TOML or YAML files to
//! control subpillar splitting, size bounds, caching and selection order
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use pillarforge_config::{MoveSelectorConfig, SolverConfig, SubPillarType};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [[move_selectors]]
//!     type = "pillar_change_move_selector"
//!     sub_pillar_type = "sequence"
//!     sub_pillar_sequence_comparator = "by_start"
//!
//!     [move_selectors.pillar_selector]
//!     minimum_sub_pillar_size = 2
//!     maximum_sub_pillar_size = 4
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! let MoveSelectorConfig::PillarChangeMoveSelector(pillar) = &config.move_selectors[0] else {
//!     panic!("expected a pillar change move selector");
//! };
//! assert_eq!(pillar.sub_pillar_type, Some(SubPillarType::Sequence));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use pillarforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

mod selection;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use selection::{SelectionCacheType, SelectionOrder, SubPillarType};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Move selector configurations.
    #[serde(default)]
    pub move_selectors: Vec<MoveSelectorConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Adds a move selector configuration.
    pub fn with_move_selector(mut self, move_selector: MoveSelectorConfig) -> Self {
        self.move_selectors.push(move_selector);
        self
    }

    /// Checks value ranges that the file format cannot express.
    ///
    /// Cross-field rules (comparator versus subpillar type and so on) are
    /// checked when the selector is built, against the domain model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for selector in &self.move_selectors {
            if let Some(pillar) = selector.pillar_config().pillar_selector.as_ref() {
                pillar.validate()?;
            }
        }
        Ok(())
    }
}

/// Move selector configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveSelectorConfig {
    /// Assigns one value to every entity of a (sub)pillar.
    PillarChangeMoveSelector(PillarMoveSelectorConfig),

    /// Swaps the values of two (sub)pillars.
    PillarSwapMoveSelector(PillarMoveSelectorConfig),
}

impl MoveSelectorConfig {
    /// Returns the pillar part shared by both move selector kinds.
    pub fn pillar_config(&self) -> &PillarMoveSelectorConfig {
        match self {
            MoveSelectorConfig::PillarChangeMoveSelector(c)
            | MoveSelectorConfig::PillarSwapMoveSelector(c) => c,
        }
    }
}

/// Pillar move selector configuration.
///
/// Everything here is optional; omitted subpillar type means `all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PillarMoveSelectorConfig {
    /// Requested minimum cache type.
    pub cache_type: Option<SelectionCacheType>,

    /// Selection order; inherits from the parent when omitted.
    pub selection_order: Option<SelectionOrder>,

    /// Pillar selector configuration.
    pub pillar_selector: Option<PillarSelectorConfig>,

    /// How pillars are split into subpillars.
    pub sub_pillar_type: Option<SubPillarType>,

    /// Name of the comparator ordering sequence subpillars.
    pub sub_pillar_sequence_comparator: Option<String>,

    /// Restricts the pillar grouping to these variables.
    pub variable_name_include: Option<Vec<String>>,
}

impl PillarMoveSelectorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subpillar type.
    pub fn with_sub_pillar_type(mut self, sub_pillar_type: SubPillarType) -> Self {
        self.sub_pillar_type = Some(sub_pillar_type);
        self
    }

    /// Sets the comparator name for sequence subpillars.
    pub fn with_sub_pillar_sequence_comparator(mut self, name: impl Into<String>) -> Self {
        self.sub_pillar_sequence_comparator = Some(name.into());
        self
    }

    /// Sets the pillar selector configuration.
    pub fn with_pillar_selector(mut self, pillar_selector: PillarSelectorConfig) -> Self {
        self.pillar_selector = Some(pillar_selector);
        self
    }

    /// Sets the requested minimum cache type.
    pub fn with_cache_type(mut self, cache_type: SelectionCacheType) -> Self {
        self.cache_type = Some(cache_type);
        self
    }

    /// Sets the selection order.
    pub fn with_selection_order(mut self, selection_order: SelectionOrder) -> Self {
        self.selection_order = Some(selection_order);
        self
    }

    /// Restricts grouping to the named variables.
    pub fn with_variable_names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.variable_name_include = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Pillar selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PillarSelectorConfig {
    /// Entity selector feeding the pillar selector.
    pub entity_selector: Option<EntitySelectorConfig>,

    /// Minimum subpillar size (default: 1).
    pub minimum_sub_pillar_size: Option<usize>,

    /// Maximum subpillar size (default: unbounded).
    pub maximum_sub_pillar_size: Option<usize>,
}

impl PillarSelectorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity selector configuration.
    pub fn with_entity_selector(mut self, entity_selector: EntitySelectorConfig) -> Self {
        self.entity_selector = Some(entity_selector);
        self
    }

    /// Sets the minimum subpillar size.
    pub fn with_minimum_sub_pillar_size(mut self, size: usize) -> Self {
        self.minimum_sub_pillar_size = Some(size);
        self
    }

    /// Sets the maximum subpillar size.
    pub fn with_maximum_sub_pillar_size(mut self, size: usize) -> Self {
        self.maximum_sub_pillar_size = Some(size);
        self
    }

    /// Returns true if either size bound is given.
    pub fn has_size_bounds(&self) -> bool {
        self.minimum_sub_pillar_size.is_some() || self.maximum_sub_pillar_size.is_some()
    }

    /// Checks that the size bounds are positive and ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_sub_pillar_size == Some(0) {
            return Err(ConfigError::Invalid(
                "minimum_sub_pillar_size must be at least 1".to_string(),
            ));
        }
        if self.maximum_sub_pillar_size == Some(0) {
            return Err(ConfigError::Invalid(
                "maximum_sub_pillar_size must be at least 1".to_string(),
            ));
        }
        if let (Some(min), Some(max)) = (self.minimum_sub_pillar_size, self.maximum_sub_pillar_size)
        {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "minimum_sub_pillar_size ({min}) must not exceed maximum_sub_pillar_size ({max})"
                )));
            }
        }
        Ok(())
    }
}

/// Entity selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EntitySelectorConfig {
    /// Entity type name; may be omitted when the solution has one entity type.
    pub entity_class: Option<String>,

    /// Requested cache type of the entity selector.
    pub cache_type: Option<SelectionCacheType>,
}

impl EntitySelectorConfig {
    /// Creates an entity selector configuration for the named entity type.
    pub fn for_entity_class(entity_class: impl Into<String>) -> Self {
        Self {
            entity_class: Some(entity_class.into()),
            cache_type: None,
        }
    }
}

#[cfg(test)]
mod tests;
