use ohmscan_core::consts::{DEFAULT_MERGE_RADIUS, DEFAULT_MIN_BAND_AREA};
use ohmscan_core::detect::{DetectorConfig, MergePolicy};

#[test]
fn test_default_config_values() {
    let config = DetectorConfig::default();
    assert_eq!(config.merge_policy, MergePolicy::KeepLargest);
    assert_eq!(config.min_band_area, DEFAULT_MIN_BAND_AREA);
    assert_eq!(config.merge_radius, DEFAULT_MERGE_RADIUS);
    assert_eq!(config.sigma_color, 80.0);
    assert_eq!(config.sigma_space, 80.0);
}

#[test]
fn test_empty_document_deserializes_to_defaults() {
    let config: DetectorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.merge_policy, MergePolicy::KeepLargest);
    assert_eq!(config.min_band_area, DEFAULT_MIN_BAND_AREA);
}

#[test]
fn test_partial_document_overrides_one_field() {
    let config: DetectorConfig =
        serde_json::from_str(r#"{"merge_policy": "KeepExisting", "min_band_area": 30}"#).unwrap();
    assert_eq!(config.merge_policy, MergePolicy::KeepExisting);
    assert_eq!(config.min_band_area, 30);
    assert_eq!(config.merge_radius, DEFAULT_MERGE_RADIUS);
}

#[test]
fn test_config_roundtrip() {
    let config = DetectorConfig {
        merge_policy: MergePolicy::KeepExisting,
        min_band_area: 25,
        merge_radius: 8,
        sigma_color: 60.0,
        sigma_space: 90.0,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: DetectorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.merge_policy, config.merge_policy);
    assert_eq!(back.min_band_area, config.min_band_area);
    assert_eq!(back.merge_radius, config.merge_radius);
}
