//! Tests for configuration types

use super::*;
use proptest::prelude::*;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://app.wewantwaste.co.uk");
    assert_eq!(config.api.postcode, "NR32");
    assert_eq!(config.api.area, "Lowestoft");
    assert_eq!(config.catalog.page_size.get(), 9);
    assert_eq!(config.catalog.narrow_breakpoint, 100);
    assert_eq!(config.catalog.edge_mask_threshold, 0);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[api]
base_url = "http://localhost:8080"
postcode = "LE10"
area = "Hinckley"

[catalog]
page_size = 6
narrow_breakpoint = 80
edge_mask_threshold = 2
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.postcode, "LE10");
    assert_eq!(config.api.area, "Hinckley");
    assert_eq!(config.catalog.page_size.get(), 6);
    assert_eq!(config.catalog.narrow_breakpoint, 80);
    assert_eq!(config.catalog.edge_mask_threshold, 2);
}

#[test]
fn test_partial_api_section_keeps_other_defaults() {
    let toml = r#"
[api]
postcode = "SW1A"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.api.postcode, "SW1A");
    assert_eq!(config.api.area, "Lowestoft");
    assert_eq!(config.api.base_url, "https://app.wewantwaste.co.uk");
    assert_eq!(config.catalog, CatalogConfig::default());
}

#[test]
fn test_zero_page_size_is_rejected() {
    let toml = r#"
[catalog]
page_size = 0
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err(), "page_size = 0 should fail to parse");
}

#[test]
fn test_negative_breakpoint_is_rejected() {
    let toml = r#"
[catalog]
narrow_breakpoint = -1
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err());
}

// Feature: config-system, Property: any positive page size round-trips from TOML
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_positive_page_size_parses(page_size in 1usize..500) {
        let toml_content = format!("[catalog]\npage_size = {}\n", page_size);
        let config: Result<Config, _> = toml::from_str(&toml_content);

        prop_assert!(config.is_ok(), "Failed to parse page_size {}", page_size);
        prop_assert_eq!(config.unwrap().catalog.page_size.get(), page_size);
    }
}

// Feature: config-system, Property: missing catalog fields use defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_catalog_fields_use_defaults(
        include_section in prop::bool::ANY,
        include_threshold in prop::bool::ANY
    ) {
        let toml_content = match (include_section, include_threshold) {
            (false, _) => String::new(),
            (true, false) => "[catalog]\n".to_string(),
            (true, true) => "[catalog]\nedge_mask_threshold = 3\n".to_string(),
        };

        let config: Config = toml::from_str(&toml_content).unwrap();

        prop_assert_eq!(config.catalog.page_size.get(), 9);
        prop_assert_eq!(config.catalog.narrow_breakpoint, 100);
        let expected_threshold = if include_section && include_threshold { 3 } else { 0 };
        prop_assert_eq!(config.catalog.edge_mask_threshold, expected_threshold);
    }
}
