//! Tests for config loading

use super::*;
use crate::color::Hsv;
use crate::models::QuantifyParams;

#[test]
fn test_template_parses_to_defaults() {
    let config = parse_config(&default_config_yaml()).unwrap();
    assert_eq!(config.defaults, QuantifyDefaults::default());
    assert_eq!(config.defaults.to_params(), QuantifyParams::default());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = parse_config("defaults:\n  root_value_max: 200\n").unwrap();
    assert_eq!(config.defaults.root_value_max, 200);
    assert_eq!(config.defaults.root_saturation_min, 20);
    assert_eq!(config.defaults.stain_lower, Hsv::new(90, 40, 40));
}

#[test]
fn test_empty_config_is_default() {
    assert_eq!(parse_config("").unwrap(), GusConfig::default());
    assert_eq!(parse_config("  \n").unwrap(), GusConfig::default());
}

#[test]
fn test_malformed_config_is_error() {
    assert!(parse_config("defaults:\n  stain_lower: [1, 2]\n").is_err());
    assert!(parse_config("defaults:\n  root_value_max: 300\n").is_err());
}

#[test]
fn test_load_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gus.yml");
    std::fs::write(&path, "defaults:\n  stain_lower: [100, 50, 50]\n").unwrap();

    let handle = load_from_candidates(vec![path]);

    assert!(handle.source.is_some());
    assert!(handle.warnings.is_empty(), "warnings: {:?}", handle.warnings);
    assert_eq!(handle.config.defaults.stain_lower, Hsv::new(100, 50, 50));
}

#[test]
fn test_unparsable_candidate_falls_through() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.yml");
    let good = dir.path().join("good.yml");
    std::fs::write(&bad, "defaults: [not, a, map").unwrap();
    std::fs::write(&good, "defaults:\n  root_saturation_min: 35\n").unwrap();

    let handle = load_from_candidates(vec![bad, good]);

    assert_eq!(handle.config.defaults.root_saturation_min, 35);
    assert_eq!(handle.warnings.len(), 1);
    assert!(handle.warnings[0].starts_with("Failed to parse config"));
}

#[test]
fn test_missing_candidates_use_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let handle = load_from_candidates(vec![dir.path().join("absent.yml")]);

    assert!(handle.source.is_none());
    assert_eq!(handle.config, GusConfig::default());
    assert!(handle.warnings.is_empty());
}

#[test]
fn test_sanitize_clamps_hue() {
    let config = parse_config("defaults:\n  stain_upper: [200, 255, 255]\n").unwrap();
    let mut warnings = Vec::new();
    let config = config.sanitize(&mut warnings);

    assert_eq!(config.defaults.stain_upper.h, 179);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_sanitize_keeps_inverted_bounds_with_warning() {
    let config =
        parse_config("defaults:\n  stain_lower: [140, 40, 40]\n  stain_upper: [90, 255, 255]\n")
            .unwrap();
    let mut warnings = Vec::new();
    let config = config.sanitize(&mut warnings);

    assert_eq!(config.defaults.stain_lower.h, 140);
    assert!(config.defaults.to_params().stain.is_inverted());
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_candidates_start_with_custom_path() {
    let custom = Path::new("/tmp/custom-gus.yml");
    let candidates = config_candidates(Some(custom));
    assert_eq!(candidates[0], custom);
    assert!(candidates
        .iter()
        .any(|p| p.ends_with(Path::new("config").join("gus.yml"))));
}
