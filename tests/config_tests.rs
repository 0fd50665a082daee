use rtcontour::config::{load_config_or_default, ConfigFormat, EngineConfig};

#[test]
fn test_defaults_match_clinical_bounds() {
    let config = EngineConfig::default();
    assert_eq!(config.transform.max_rotation_deg, 360.0);
    assert_eq!(config.transform.max_translation_mm, 1000.0);
    assert_eq!(config.report.decimals, 3);
    assert_eq!(config.logging.global_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");

    let mut config = EngineConfig::default();
    config.transform.max_rotation_deg = 180.0;
    config.report.decimals = 5;
    config.save_to_file(&path, ConfigFormat::Toml).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.transform.max_rotation_deg, 180.0);
    assert_eq!(loaded.report.decimals, 5);
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let mut config = EngineConfig::default();
    config.transform.max_translation_mm = 500.0;
    config.save_to_file(&path, ConfigFormat::Json).unwrap();

    // load_from_file sniffs the leading '{' to pick the JSON parser.
    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.transform.max_translation_mm, 500.0);
}

#[test]
fn test_validation_rejects_bad_bounds() {
    let mut config = EngineConfig::default();
    config.transform.max_rotation_deg = 0.0;
    config.transform.max_translation_mm = -1.0;
    config.report.decimals = 99;
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_load_config_or_default_falls_back() {
    let config = load_config_or_default(Some("/nonexistent/engine.toml"));
    assert_eq!(config.transform.max_rotation_deg, 360.0);

    let config = load_config_or_default(None);
    assert_eq!(config.report.decimals, 3);
}
