//! Builds pillar selectors from configuration.
//!
//! All checks run before anything is built: a contradictory configuration
//! never produces a selector.

use std::hash::Hash;

use tracing::debug;

use pillarforge_config::{
    PillarMoveSelectorConfig, PillarSelectorConfig, SelectionCacheType, SelectionOrder,
    SubPillarType,
};
use pillarforge_core::domain::{EntityDescriptor, SolutionDescriptor, VariableDescriptor};
use pillarforge_core::{PillarForgeError, Result};

use super::entity::FromSolutionEntitySelector;
use super::pillar::DefaultPillarSelector;
use super::sub_pillar::SubPillarPolicy;

/// The selector type produced by [`PillarSelectorFactory`].
pub type ConfiguredPillarSelector<S, V> =
    DefaultPillarSelector<S, V, FromSolutionEntitySelector<S>>;

/// Factory turning a [`PillarSelectorConfig`] into a pillar selector.
#[derive(Debug, Clone)]
pub struct PillarSelectorFactory {
    config: PillarSelectorConfig,
}

impl PillarSelectorFactory {
    pub fn create(config: &PillarSelectorConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &PillarSelectorConfig {
        &self.config
    }

    /// Builds the pillar selector of a pillar change or pillar swap move
    /// selector.
    ///
    /// The move selector's own selection order is resolved against
    /// `inherited_selection_order` first.
    pub fn from_move_selector_config<S, V>(
        config: &PillarMoveSelectorConfig,
        solution_descriptor: &SolutionDescriptor<S, V>,
        inherited_selection_order: SelectionOrder,
    ) -> Result<ConfiguredPillarSelector<S, V>>
    where
        V: Eq + Hash,
    {
        let pillar_config = config.pillar_selector.clone().unwrap_or_default();
        let selection_order = config
            .selection_order
            .unwrap_or_default()
            .resolve(inherited_selection_order);

        Self::create(&pillar_config).build_pillar_selector(
            solution_descriptor,
            config.sub_pillar_type,
            config.sub_pillar_sequence_comparator.as_deref(),
            config.cache_type.unwrap_or_default(),
            selection_order,
            config.variable_name_include.as_deref(),
        )
    }

    /// Validates the configuration and builds the pillar selector.
    ///
    /// # Arguments
    ///
    /// * `sub_pillar_type` - Subpillar mode; `None` means `All`
    /// * `sequence_comparator` - Name of a comparator registered on the entity descriptor
    /// * `minimum_cache_type` - Cache type an ancestor already uses; at most `Step`
    /// * `inherited_selection_order` - Must resolve to `Original` or `Random`
    /// * `variable_names` - Grouping variables; all genuine basic variables when `None`
    ///
    /// # Errors
    ///
    /// `Config` for contradictory or out-of-range settings, `MissingCapability`
    /// when sequence subpillars cannot be ordered, `DomainModel` when the
    /// entity type has nothing to group by.
    pub fn build_pillar_selector<S, V>(
        &self,
        solution_descriptor: &SolutionDescriptor<S, V>,
        sub_pillar_type: Option<SubPillarType>,
        sequence_comparator: Option<&str>,
        minimum_cache_type: SelectionCacheType,
        inherited_selection_order: SelectionOrder,
        variable_names: Option<&[String]>,
    ) -> Result<ConfiguredPillarSelector<S, V>>
    where
        V: Eq + Hash,
    {
        if sub_pillar_type != Some(SubPillarType::Sequence) {
            if let Some(name) = sequence_comparator {
                let mode = match sub_pillar_type {
                    Some(mode) => format!("{mode:?}"),
                    None => "absent (defaults to all)".to_string(),
                };
                return Err(PillarForgeError::Config(format!(
                    "sub_pillar_type ({mode}) is not sequence, \
                     yet sub_pillar_sequence_comparator ({name}) is provided"
                )));
            }
        }
        if minimum_cache_type > SelectionCacheType::Step {
            return Err(PillarForgeError::Config(format!(
                "minimum cache_type ({minimum_cache_type:?}) must not be higher than Step \
                 because the pillars change every step"
            )));
        }
        let selection_order = SelectionOrder::Inherit.resolve(inherited_selection_order);
        if selection_order.to_random_selection().is_none() {
            return Err(PillarForgeError::Config(format!(
                "selection_order ({selection_order:?}) is not supported by a pillar selector, \
                 use original or random"
            )));
        }

        let (descriptor_index, entity_descriptor) = self.resolve_entity(solution_descriptor)?;
        let variable_descriptors = resolve_variables(entity_descriptor, variable_names)?;

        let sub_pillar_policy = match sub_pillar_type {
            Some(SubPillarType::None) => {
                if self.config.has_size_bounds() {
                    return Err(PillarForgeError::Config(format!(
                        "sub_pillar_type is none, yet minimum_sub_pillar_size ({:?}) or \
                         maximum_sub_pillar_size ({:?}) is provided",
                        self.config.minimum_sub_pillar_size, self.config.maximum_sub_pillar_size
                    )));
                }
                SubPillarPolicy::without_sub_pillars()
            }
            Some(SubPillarType::Sequence) => {
                let (minimum_size, maximum_size) = self.size_bounds()?;
                let comparator = match sequence_comparator {
                    Some(name) => entity_descriptor.find_comparator(name).ok_or_else(|| {
                        PillarForgeError::MissingCapability(format!(
                            "entity type ({}) has no comparator named ({name})",
                            entity_descriptor.type_name
                        ))
                    })?,
                    None => entity_descriptor.natural_order().ok_or_else(|| {
                        PillarForgeError::MissingCapability(format!(
                            "sub_pillar_type is sequence without sub_pillar_sequence_comparator, \
                             and entity type ({}) has no natural order",
                            entity_descriptor.type_name
                        ))
                    })?,
                };
                SubPillarPolicy::sequential(minimum_size, maximum_size, comparator)
            }
            Some(SubPillarType::All) | None => {
                let (minimum_size, maximum_size) = self.size_bounds()?;
                SubPillarPolicy::with_sub_pillars(minimum_size, maximum_size)
            }
        };

        // The entity selector re-reads the solution on every call; nothing it
        // selects outlives a step.
        let entity_cache_type = self
            .config
            .entity_selector
            .as_ref()
            .and_then(|c| c.cache_type)
            .map_or(minimum_cache_type, |c| SelectionCacheType::max(minimum_cache_type, c))
            .min(SelectionCacheType::Step);
        let mut entity_selector =
            FromSolutionEntitySelector::new(descriptor_index, entity_descriptor.entity_count_fn())
                .with_cache_type(entity_cache_type);
        if let Some(filter) = entity_descriptor.movable_filter() {
            entity_selector = entity_selector.with_movable_filter(filter);
        }

        let variables: Vec<_> = variable_descriptors.iter().map(|v| v.name).collect();
        debug!(
            entity_type = entity_descriptor.type_name,
            ?variables,
            ?sub_pillar_policy,
            ?selection_order,
            "Built pillar selector"
        );

        Ok(DefaultPillarSelector::new(entity_selector, variable_descriptors)
            .with_sub_pillar_policy(sub_pillar_policy)
            .with_selection_order(selection_order))
    }

    fn resolve_entity<'d, S, V>(
        &self,
        solution_descriptor: &'d SolutionDescriptor<S, V>,
    ) -> Result<(usize, &'d EntityDescriptor<S, V>)> {
        let entity_class = self
            .config
            .entity_selector
            .as_ref()
            .and_then(|c| c.entity_class.as_deref());

        match entity_class {
            Some(name) => solution_descriptor.find_entity_descriptor(name).ok_or_else(|| {
                PillarForgeError::Config(format!(
                    "entity_class ({name}) is not an entity type of solution ({})",
                    solution_descriptor.type_name
                ))
            }),
            None => match solution_descriptor.entity_descriptor_count() {
                1 => solution_descriptor
                    .entity_descriptor(0)
                    .map(|descriptor| (0, descriptor))
                    .ok_or_else(|| {
                        PillarForgeError::Config("entity descriptor 0 is missing".to_string())
                    }),
                0 => Err(PillarForgeError::Config(format!(
                    "solution ({}) has no entity types to select pillars from",
                    solution_descriptor.type_name
                ))),
                count => Err(PillarForgeError::Config(format!(
                    "solution ({}) has {count} entity types, \
                     entity_selector.entity_class must name one",
                    solution_descriptor.type_name
                ))),
            },
        }
    }

    fn size_bounds(&self) -> Result<(usize, usize)> {
        self.config
            .validate()
            .map_err(|e| PillarForgeError::Config(e.to_string()))?;
        Ok((
            self.config.minimum_sub_pillar_size.unwrap_or(1),
            self.config.maximum_sub_pillar_size.unwrap_or(usize::MAX),
        ))
    }
}

fn resolve_variables<S, V>(
    entity_descriptor: &EntityDescriptor<S, V>,
    variable_names: Option<&[String]>,
) -> Result<Vec<VariableDescriptor<S, V>>> {
    let Some(names) = variable_names else {
        let basic: Vec<_> = entity_descriptor
            .genuine_variable_descriptors()
            .filter(|v| v.variable_type.is_basic())
            .cloned()
            .collect();
        if basic.is_empty() {
            return Err(PillarForgeError::DomainModel(format!(
                "entity type ({}) has no genuine basic variables to group pillars by",
                entity_descriptor.type_name
            )));
        }
        return Ok(basic);
    };

    names
        .iter()
        .map(|name| {
            let variable = entity_descriptor.find_variable(name).ok_or_else(|| {
                PillarForgeError::Config(format!(
                    "variable_name_include ({name}) is not a variable of entity type ({})",
                    entity_descriptor.type_name
                ))
            })?;
            if !variable.variable_type.is_genuine() {
                return Err(PillarForgeError::Config(format!(
                    "variable_name_include ({name}) is a shadow variable"
                )));
            }
            if variable.variable_type.is_list() {
                return Err(PillarForgeError::Config(format!(
                    "variable_name_include ({name}) is a list variable; \
                     pillars group basic variables only"
                )));
            }
            Ok(variable.clone())
        })
        .collect()
}

#[cfg(test)]
#[path = "pillar_factory_tests.rs"]
mod tests;
