//! Tests for selector configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42

        [[move_selectors]]
        type = "pillar_change_move_selector"
        cache_type = "step"
        selection_order = "original"
        sub_pillar_type = "all"
        variable_name_include = ["employee"]

        [move_selectors.pillar_selector]
        minimum_sub_pillar_size = 1
        maximum_sub_pillar_size = 3

        [move_selectors.pillar_selector.entity_selector]
        entity_class = "Shift"

        [[move_selectors]]
        type = "pillar_swap_move_selector"
        sub_pillar_type = "none"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_selectors.len(), 2);

    let change = config.move_selectors[0].pillar_config();
    assert_eq!(change.cache_type, Some(SelectionCacheType::Step));
    assert_eq!(change.selection_order, Some(SelectionOrder::Original));
    assert_eq!(change.sub_pillar_type, Some(SubPillarType::All));
    assert_eq!(
        change.variable_name_include,
        Some(vec!["employee".to_string()])
    );
    let pillar = change.pillar_selector.as_ref().unwrap();
    assert_eq!(pillar.maximum_sub_pillar_size, Some(3));
    assert_eq!(
        pillar.entity_selector,
        Some(EntitySelectorConfig::for_entity_class("Shift"))
    );

    assert!(matches!(
        config.move_selectors[1],
        MoveSelectorConfig::PillarSwapMoveSelector(_)
    ));
    assert_eq!(
        config.move_selectors[1].pillar_config().sub_pillar_type,
        Some(SubPillarType::None)
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        move_selectors:
          - type: pillar_swap_move_selector
            selection_order: random
            sub_pillar_type: sequence
            sub_pillar_sequence_comparator: by_start
            pillar_selector:
              minimum_sub_pillar_size: 2
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    let swap = config.move_selectors[0].pillar_config();
    assert_eq!(swap.selection_order, Some(SelectionOrder::Random));
    assert_eq!(
        swap.sub_pillar_sequence_comparator.as_deref(),
        Some("by_start")
    );
    assert_eq!(
        swap.pillar_selector
            .as_ref()
            .and_then(|p| p.minimum_sub_pillar_size),
        Some(2)
    );
}

#[test]
fn test_omitted_fields_default_to_none() {
    let config = SolverConfig::from_toml_str(
        r#"
        [[move_selectors]]
        type = "pillar_change_move_selector"
    "#,
    )
    .unwrap();

    let change = config.move_selectors[0].pillar_config();
    assert_eq!(change, &PillarMoveSelectorConfig::default());
    assert!(config.random_seed.is_none());
}

#[test]
fn test_unknown_sub_pillar_type_is_a_parse_error() {
    let result = SolverConfig::from_toml_str(
        r#"
        [[move_selectors]]
        type = "pillar_change_move_selector"
        sub_pillar_type = "sometimes"
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_zero_minimum_size_rejected() {
    let result = SolverConfig::from_toml_str(
        r#"
        [[move_selectors]]
        type = "pillar_change_move_selector"
        [move_selectors.pillar_selector]
        minimum_sub_pillar_size = 0
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_inverted_size_bounds_rejected() {
    let pillar = PillarSelectorConfig::new()
        .with_minimum_sub_pillar_size(4)
        .with_maximum_sub_pillar_size(2);
    let err = pillar.validate().unwrap_err();
    assert!(err.to_string().contains("must not exceed"));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let config = SolverConfig::load("does-not-exist.toml").unwrap_or_default();
    assert!(config.move_selectors.is_empty());
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_move_selector(MoveSelectorConfig::PillarChangeMoveSelector(
            PillarMoveSelectorConfig::new()
                .with_sub_pillar_type(SubPillarType::Sequence)
                .with_sub_pillar_sequence_comparator("by_start")
                .with_cache_type(SelectionCacheType::Step)
                .with_selection_order(SelectionOrder::Original)
                .with_variable_names(["employee", "day"])
                .with_pillar_selector(
                    PillarSelectorConfig::new()
                        .with_minimum_sub_pillar_size(2)
                        .with_maximum_sub_pillar_size(5),
                ),
        ));

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.move_selectors.len(), 1);
    let pillar = config.move_selectors[0].pillar_config();
    assert_eq!(
        pillar.variable_name_include,
        Some(vec!["employee".to_string(), "day".to_string()])
    );
    assert!(pillar.pillar_selector.as_ref().unwrap().has_size_bounds());
    assert!(config.validate().is_ok());
}
