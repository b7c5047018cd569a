use super::*;

#[test]
fn bundled_tables_parse() {
    let cfg = PlacementConfig::bundled().unwrap();
    assert!(!cfg.defaults.is_empty());
    assert!(!cfg.special.is_empty());
    assert_eq!(
        cfg.defaults.get(GridMode::Diamond, "pro_quarter_cw_1"),
        Some(Vec2::new(0.0, 45.0))
    );
    assert_eq!(
        cfg.special.get(GridMode::Diamond, "A", "layer1_(0,0)_blue"),
        Some(Vec2::new(-25.0, 55.0))
    );
    assert!(cfg.special.has_letter(GridMode::Box, "Λ"));
}

#[test]
fn grid_modes_are_separate_tables() {
    let mut defaults = DefaultPlacements::default();
    defaults.insert(GridMode::Box, "pro_quarter_cw_0", Vec2::new(1.0, 2.0));
    assert_eq!(defaults.get(GridMode::Diamond, "pro_quarter_cw_0"), None);
    assert_eq!(
        defaults.get(GridMode::Box, "pro_quarter_cw_0"),
        Some(Vec2::new(1.0, 2.0))
    );
    assert_eq!(defaults.len(), 1);
}

#[test]
fn missing_grid_sections_default_to_empty() {
    let defaults = DefaultPlacements::from_reader(r#"{ "diamond": {} }"#.as_bytes()).unwrap();
    assert!(defaults.is_empty());
    let special = SpecialPlacements::from_reader("{}".as_bytes()).unwrap();
    assert!(special.is_empty());
}

#[test]
fn malformed_offsets_are_config_errors() {
    let err = DefaultPlacements::from_reader(r#"{ "diamond": { "k": [1] } }"#.as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("config error:"));
    let err = SpecialPlacements::from_reader(r#"{ "box": { "A": [1, 2] } }"#.as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("special placements"));
}

#[test]
fn load_without_paths_uses_bundled_tables() {
    let load = PlacementConfig::load(&ConfigSources::default());
    assert!(load.is_clean());
    assert_eq!(*load.config, PlacementConfig::bundled().unwrap());
}

#[test]
fn load_reports_missing_files_and_keeps_going() {
    let sources = ConfigSources {
        defaults: None,
        special: Some(PathBuf::from("does/not/exist/special.json")),
    };
    let load = PlacementConfig::load(&sources);
    assert_eq!(load.issues.len(), 1);
    assert!(load.issues[0].to_string().contains("open special placements"));
    assert!(load.config.special.is_empty());
    assert!(!load.config.defaults.is_empty());
}
