use super::*;

#[test]
fn defaults_show_loading_text() {
    let cfg = DisplayConfig::default();
    assert!(cfg.show_loading_text);
    assert_eq!(cfg.loading_text, "Loading...");
}

#[test]
fn missing_fields_take_defaults() {
    let cfg = DisplayConfig::from_json_str(r#"{ "show_loading_text": false }"#).unwrap();
    assert!(!cfg.show_loading_text);
    assert_eq!(cfg.loading_text, "Loading...");

    let cfg = DisplayConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, DisplayConfig::default());
}

#[test]
fn unknown_fields_and_bad_json_are_config_errors() {
    let err = DisplayConfig::from_json_str(r#"{ "show_loading": true }"#).unwrap_err();
    assert!(matches!(err, FrameviewError::Config(_)));

    let err = DisplayConfig::from_json_str("{").unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn from_path_reports_missing_file() {
    let missing = std::env::temp_dir().join("frameview_no_such_display_config.json");
    let err = DisplayConfig::from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("frameview_no_such_display_config.json"));
}
