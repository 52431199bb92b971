//! Tests for pillar selector configuration.

use super::*;
use crate::heuristic::selector::entity::EntitySelector;
use crate::heuristic::selector::pillar::PillarSelector;
use crate::scope::StepId;
use pillarforge_config::EntitySelectorConfig;
use pillarforge_core::domain::ShadowVariableKind;
use pillarforge_test::schedule::{
    comparable_shift_descriptor, get_employee, schedule_descriptor, shift_count,
    shift_descriptor, Schedule, Shift,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn no_breaks(_: &Schedule) -> usize {
    0
}

fn is_assigned(s: &Schedule, i: usize) -> bool {
    s.shifts[i].employee.is_some()
}

fn schedule() -> SolutionDescriptor<Schedule, u32> {
    schedule_descriptor(shift_descriptor())
}

fn build(
    config: &PillarSelectorConfig,
    sub_pillar_type: Option<SubPillarType>,
    comparator: Option<&str>,
) -> Result<ConfiguredPillarSelector<Schedule, u32>> {
    PillarSelectorFactory::create(config).build_pillar_selector(
        &schedule(),
        sub_pillar_type,
        comparator,
        SelectionCacheType::JustInTime,
        SelectionOrder::Original,
        None,
    )
}

fn candidates(
    selector: &ConfiguredPillarSelector<Schedule, u32>,
    schedule: &Schedule,
) -> Vec<Vec<usize>> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    selector
        .iter(schedule, StepId::new(0), &mut rng)
        .map(|p| p.iter().map(|r| r.entity_index).collect())
        .collect()
}

#[test]
fn test_comparator_requires_sequence_mode() {
    let config = PillarSelectorConfig::new();

    let err = build(&config, Some(SubPillarType::All), Some("by_start")).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
    assert!(err.to_string().contains("sub_pillar_sequence_comparator"));

    let err = build(&config, None, Some("by_start")).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));

    let err = build(&config, Some(SubPillarType::None), Some("by_start")).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
}

#[test]
fn test_comparator_error_names_the_mode() {
    let config = PillarSelectorConfig::new();

    let absent = build(&config, None, Some("by_start")).unwrap_err().to_string();
    assert!(absent.contains("sub_pillar_type (absent (defaults to all))"));

    let none = build(&config, Some(SubPillarType::None), Some("by_start"))
        .unwrap_err()
        .to_string();
    assert!(none.contains("sub_pillar_type (None)"));
    assert!(!none.contains("Some("));

    let all = build(&config, Some(SubPillarType::All), Some("by_start"))
        .unwrap_err()
        .to_string();
    assert!(all.contains("sub_pillar_type (All)"));
}

#[test]
fn test_cache_type_above_step_is_rejected() {
    let factory = PillarSelectorFactory::create(&PillarSelectorConfig::new());

    for cache_type in [SelectionCacheType::Phase, SelectionCacheType::Solver] {
        let err = factory
            .build_pillar_selector(
                &schedule(),
                None,
                None,
                cache_type,
                SelectionOrder::Original,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, PillarForgeError::Config(_)));
        assert!(err.to_string().contains("must not be higher than Step"));
    }

    let selector = factory
        .build_pillar_selector(
            &schedule(),
            None,
            None,
            SelectionCacheType::Step,
            SelectionOrder::Original,
            None,
        )
        .unwrap();
    assert_eq!(selector.cache_type(), SelectionCacheType::Step);
    assert_eq!(selector.entity_selector().cache_type(), SelectionCacheType::Step);
}

#[test]
fn test_disabled_sub_pillars_reject_size_bounds() {
    let with_min = PillarSelectorConfig::new().with_minimum_sub_pillar_size(2);
    let with_max = PillarSelectorConfig::new().with_maximum_sub_pillar_size(2);

    for config in [with_min, with_max] {
        let err = build(&config, Some(SubPillarType::None), None).unwrap_err();
        assert!(matches!(err, PillarForgeError::Config(_)));
        assert!(err.to_string().contains("sub_pillar_type is none"));
    }

    let selector = build(&PillarSelectorConfig::new(), Some(SubPillarType::None), None).unwrap();
    assert!(!selector.sub_pillar_policy().is_enabled());
}

#[test]
fn test_sequence_without_natural_order_is_missing_capability() {
    let err = build(
        &PillarSelectorConfig::new(),
        Some(SubPillarType::Sequence),
        None,
    )
    .unwrap_err();

    assert!(matches!(err, PillarForgeError::MissingCapability(_)));
    assert!(err.to_string().contains("natural order"));
}

#[test]
fn test_sequence_with_unknown_comparator_is_missing_capability() {
    let err = build(
        &PillarSelectorConfig::new(),
        Some(SubPillarType::Sequence),
        Some("by_length"),
    )
    .unwrap_err();

    assert!(matches!(err, PillarForgeError::MissingCapability(_)));
    assert!(err.to_string().contains("by_length"));
}

#[test]
fn test_sequence_uses_natural_order() {
    let selector = PillarSelectorFactory::create(
        &PillarSelectorConfig::new()
            .with_minimum_sub_pillar_size(2)
            .with_maximum_sub_pillar_size(2),
    )
    .build_pillar_selector(
        &schedule_descriptor(comparable_shift_descriptor()),
        Some(SubPillarType::Sequence),
        None,
        SelectionCacheType::JustInTime,
        SelectionOrder::Original,
        None,
    )
    .unwrap();

    // Start order is B, A, C, D
    let schedule = Schedule::with_shifts(vec![
        Shift::new(0, 20, Some(1)),
        Shift::new(1, 10, Some(1)),
        Shift::new(2, 30, Some(2)),
        Shift::new(3, 40, Some(1)),
    ]);

    assert!(selector.sub_pillar_policy().comparator().is_some());
    assert_eq!(candidates(&selector, &schedule), vec![vec![1, 0], vec![0, 3]]);
}

#[test]
fn test_sequence_uses_named_comparator() {
    let config = PillarSelectorConfig::new()
        .with_minimum_sub_pillar_size(3)
        .with_maximum_sub_pillar_size(3);
    let selector = build(&config, Some(SubPillarType::Sequence), Some("by_start_desc")).unwrap();

    let schedule = Schedule::with_employees(&[Some(1), Some(1), Some(1)]);
    assert_eq!(candidates(&selector, &schedule), vec![vec![2, 1, 0]]);
}

#[test]
fn test_absent_mode_means_all() {
    let selector = build(&PillarSelectorConfig::new(), None, None).unwrap();

    let policy = selector.sub_pillar_policy();
    assert!(policy.is_enabled());
    assert!(policy.comparator().is_none());
    assert_eq!(policy.minimum_size(), 1);
    assert_eq!(policy.maximum_size(), usize::MAX);
}

#[test]
fn test_all_mode_enumerates_bounded_subsets() {
    let config = PillarSelectorConfig::new()
        .with_minimum_sub_pillar_size(1)
        .with_maximum_sub_pillar_size(2);
    let selector = build(&config, Some(SubPillarType::All), None).unwrap();

    // A, B, C, D with values 1, 1, 2, 1
    let schedule = Schedule::with_employees(&[Some(1), Some(1), Some(2), Some(1)]);
    let all = candidates(&selector, &schedule);

    assert_eq!(
        &all[..6],
        &[
            vec![0],
            vec![1],
            vec![3],
            vec![0, 1],
            vec![0, 3],
            vec![1, 3],
        ]
    );
    assert_eq!(&all[6..], &[vec![2]]);
}

#[test]
fn test_invalid_size_bounds_are_rejected() {
    let zero_min = PillarSelectorConfig::new().with_minimum_sub_pillar_size(0);
    let zero_max = PillarSelectorConfig::new().with_maximum_sub_pillar_size(0);
    let inverted = PillarSelectorConfig::new()
        .with_minimum_sub_pillar_size(4)
        .with_maximum_sub_pillar_size(2);

    for config in [zero_min, zero_max, inverted] {
        for mode in [None, Some(SubPillarType::All)] {
            let err = build(&config, mode, None).unwrap_err();
            assert!(matches!(err, PillarForgeError::Config(_)));
        }
    }

    let inverted = PillarSelectorConfig::new()
        .with_minimum_sub_pillar_size(4)
        .with_maximum_sub_pillar_size(2);
    let err = build(&inverted, Some(SubPillarType::Sequence), Some("by_start")).unwrap_err();
    assert!(err.to_string().contains("must not exceed"));
}

#[test]
fn test_entity_class_resolution() {
    let two_types = schedule_descriptor(shift_descriptor())
        .with_entity(EntityDescriptor::new("Break", no_breaks));
    let order = SelectionOrder::Original;
    let cache = SelectionCacheType::JustInTime;

    let err = PillarSelectorFactory::create(&PillarSelectorConfig::new())
        .build_pillar_selector(&two_types, None, None, cache, order, None)
        .unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
    assert!(err.to_string().contains("entity_class"));

    let unknown = PillarSelectorConfig::new()
        .with_entity_selector(EntitySelectorConfig::for_entity_class("Nurse"));
    let err = PillarSelectorFactory::create(&unknown)
        .build_pillar_selector(&two_types, None, None, cache, order, None)
        .unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
    assert!(err.to_string().contains("Nurse"));

    let named = PillarSelectorConfig::new()
        .with_entity_selector(EntitySelectorConfig::for_entity_class("Shift"));
    let selector = PillarSelectorFactory::create(&named)
        .build_pillar_selector(&two_types, None, None, cache, order, None)
        .unwrap();
    assert_eq!(selector.descriptor_index(), 0);
}

#[test]
fn test_solution_without_entity_types_is_rejected() {
    let empty: SolutionDescriptor<Schedule, u32> = SolutionDescriptor::new("Schedule");

    let err = PillarSelectorFactory::create(&PillarSelectorConfig::new())
        .build_pillar_selector(
            &empty,
            None,
            None,
            SelectionCacheType::JustInTime,
            SelectionOrder::Original,
            None,
        )
        .unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
}

#[test]
fn test_variable_resolution() {
    let factory = PillarSelectorFactory::create(&PillarSelectorConfig::new());
    let descriptor = schedule_descriptor(
        shift_descriptor().with_variable(VariableDescriptor::list("tasks")),
    );
    let resolve = |variables: &[String]| {
        factory.build_pillar_selector(
            &descriptor,
            None,
            None,
            SelectionCacheType::JustInTime,
            SelectionOrder::Original,
            Some(variables),
        )
    };

    let err = resolve(&["manager".to_string()]).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
    assert!(err.to_string().contains("manager"));

    let err = resolve(&["employee_inverse".to_string()]).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
    assert!(err.to_string().contains("shadow"));

    let err = resolve(&["tasks".to_string()]).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
    assert!(err.to_string().contains("list variable"));

    let selector = resolve(&["day".to_string()]).unwrap();
    let grouped: Vec<_> = selector.variable_descriptors().iter().map(|v| v.name).collect();
    assert_eq!(grouped, vec!["day"]);
}

#[test]
fn test_default_variables_are_genuine_basic() {
    let descriptor = schedule_descriptor(
        shift_descriptor().with_variable(VariableDescriptor::list("tasks")),
    );

    let selector = PillarSelectorFactory::create(&PillarSelectorConfig::new())
        .build_pillar_selector(
            &descriptor,
            None,
            None,
            SelectionCacheType::JustInTime,
            SelectionOrder::Original,
            None,
        )
        .unwrap();

    let grouped: Vec<_> = selector.variable_descriptors().iter().map(|v| v.name).collect();
    assert_eq!(grouped, vec!["employee", "day"]);
}

#[test]
fn test_entity_without_basic_variables_is_domain_error() {
    let descriptor = schedule_descriptor(
        EntityDescriptor::new("Shift", shift_count)
            .with_variable(VariableDescriptor::list("tasks"))
            .with_variable(VariableDescriptor::shadow(
                "employee_inverse",
                ShadowVariableKind::InverseRelation,
                get_employee,
            )),
    );

    let err = PillarSelectorFactory::create(&PillarSelectorConfig::new())
        .build_pillar_selector(
            &descriptor,
            None,
            None,
            SelectionCacheType::JustInTime,
            SelectionOrder::Original,
            None,
        )
        .unwrap_err();
    assert!(matches!(err, PillarForgeError::DomainModel(_)));
}

#[test]
fn test_selection_order_resolution() {
    let factory = PillarSelectorFactory::create(&PillarSelectorConfig::new());
    let with_order = |order| {
        factory.build_pillar_selector(
            &schedule(),
            None,
            None,
            SelectionCacheType::JustInTime,
            order,
            None,
        )
    };

    let err = with_order(SelectionOrder::Shuffled).unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));

    let inherited = with_order(SelectionOrder::Inherit).unwrap();
    assert_eq!(inherited.selection_order(), SelectionOrder::Random);
    assert!(inherited.is_never_ending());

    let original = with_order(SelectionOrder::Original).unwrap();
    assert_eq!(original.selection_order(), SelectionOrder::Original);
    assert!(!original.is_never_ending());
}

#[test]
fn test_entity_selector_keeps_movable_filter() {
    let descriptor = schedule_descriptor(shift_descriptor().with_movable_filter(is_assigned));
    let selector = PillarSelectorFactory::create(&PillarSelectorConfig::new())
        .build_pillar_selector(
            &descriptor,
            Some(SubPillarType::None),
            None,
            SelectionCacheType::JustInTime,
            SelectionOrder::Original,
            None,
        )
        .unwrap();

    let schedule = Schedule::with_employees(&[Some(1), None, Some(1), None]);
    assert_eq!(selector.entity_selector().size(&schedule), 2);
    assert_eq!(candidates(&selector, &schedule), vec![vec![0, 2]]);
}

#[test]
fn test_entity_selector_cache_type_is_widened() {
    let config = PillarSelectorConfig::new().with_entity_selector(EntitySelectorConfig {
        entity_class: None,
        cache_type: Some(SelectionCacheType::Step),
    });

    let selector = build(&config, None, None).unwrap();

    assert_eq!(selector.entity_selector().cache_type(), SelectionCacheType::Step);
}

#[test]
fn test_entity_selector_cache_type_is_clamped_to_step() {
    for cache_type in [SelectionCacheType::Phase, SelectionCacheType::Solver] {
        let config = PillarSelectorConfig::new().with_entity_selector(EntitySelectorConfig {
            entity_class: None,
            cache_type: Some(cache_type),
        });

        let selector = build(&config, None, None).unwrap();

        assert_eq!(selector.entity_selector().cache_type(), SelectionCacheType::Step);
    }
}

#[test]
fn test_from_move_selector_config() {
    let config = PillarMoveSelectorConfig::new()
        .with_sub_pillar_type(SubPillarType::Sequence)
        .with_sub_pillar_sequence_comparator("by_start")
        .with_selection_order(SelectionOrder::Original)
        .with_variable_names(["employee"])
        .with_pillar_selector(
            PillarSelectorConfig::new()
                .with_minimum_sub_pillar_size(2)
                .with_maximum_sub_pillar_size(2),
        );

    let selector =
        PillarSelectorFactory::from_move_selector_config(&config, &schedule(), SelectionOrder::Random)
            .unwrap();

    let schedule = Schedule::with_shifts(vec![
        Shift::new(0, 20, Some(1)),
        Shift::new(1, 10, Some(1)),
        Shift::new(2, 30, Some(2)),
        Shift::new(3, 40, Some(1)),
    ]);
    assert_eq!(selector.selection_order(), SelectionOrder::Original);
    assert_eq!(candidates(&selector, &schedule), vec![vec![1, 0], vec![0, 3]]);
}

#[test]
fn test_from_move_selector_config_inherits_order() {
    let config = PillarMoveSelectorConfig::new();

    let random =
        PillarSelectorFactory::from_move_selector_config(&config, &schedule(), SelectionOrder::Inherit)
            .unwrap();
    assert_eq!(random.selection_order(), SelectionOrder::Random);

    let original = PillarSelectorFactory::from_move_selector_config(
        &config,
        &schedule(),
        SelectionOrder::Original,
    )
    .unwrap();
    assert_eq!(original.selection_order(), SelectionOrder::Original);

    let phase_cached = PillarMoveSelectorConfig::new().with_cache_type(SelectionCacheType::Phase);
    let err = PillarSelectorFactory::from_move_selector_config(
        &phase_cached,
        &schedule(),
        SelectionOrder::Original,
    )
    .unwrap_err();
    assert!(matches!(err, PillarForgeError::Config(_)));
}
