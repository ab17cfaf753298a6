use crate::config::{Config, LabelRule, RendererKind};
use std::collections::HashMap;
use std::path::PathBuf;

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.model_path, PathBuf::from("model.json"));
    assert_eq!(config.options_path, PathBuf::from("options.json"));
    assert_eq!(config.renderer, RendererKind::Progress);
    assert_eq!(config.label_rule, LabelRule::ProbabilityThreshold);
}

#[test]
fn test_config_overrides() {
    let config = config_from(&[
        ("MODEL_PATH", "artifacts/forest.json"),
        ("OPTIONS_PATH", "artifacts/options.toml"),
        ("RENDERER", "Chart"),
        ("LABEL_RULE", "raw"),
    ])
    .unwrap();

    assert_eq!(config.model_path, PathBuf::from("artifacts/forest.json"));
    assert_eq!(config.options_path, PathBuf::from("artifacts/options.toml"));
    assert_eq!(config.renderer, RendererKind::Chart);
    assert_eq!(config.label_rule, LabelRule::RawPrediction);
}

#[test]
fn test_blank_paths_fall_back_to_defaults() {
    let config = config_from(&[("MODEL_PATH", "  "), ("OPTIONS_PATH", "")]).unwrap();

    assert_eq!(config.model_path, PathBuf::from("model.json"));
    assert_eq!(config.options_path, PathBuf::from("options.json"));
}

#[test]
fn test_invalid_renderer_is_fatal() {
    let err = config_from(&[("RENDERER", "sparkline")]).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid RENDERER"));
}

#[test]
fn test_invalid_label_rule_is_fatal() {
    let err = config_from(&[("LABEL_RULE", "coinflip")]).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid LABEL_RULE"));
}
