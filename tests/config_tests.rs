//! Configuration merge tests
//!
//! Options objects are deserialized with serde; these tests drive the same
//! derive through JSON, which is how the JS boundary behaves.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use fixtable::config::{Config, CssSize};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.width, CssSize::Text("100%".to_string()));
    assert_eq!(config.height, CssSize::Text("100%".to_string()));
    assert_eq!(config.theme_class, "fht-default");
    assert!(config.border_collapse);
    assert_eq!(config.fixed_columns, 0);
    assert!(!config.fixed_column);
    assert!(!config.footer);
    assert!(!config.clone_head_to_foot);
    assert!(config.auto_show);
    assert!(!config.auto_resize);
    assert_eq!(config.alt_class, None);
}

#[test]
fn test_empty_object_yields_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert!(config.auto_show);
    assert_eq!(config.fixed_columns, 0);
}

// ============================================================================
// Merging caller options
// ============================================================================

#[test]
fn test_partial_options_merge_over_defaults() {
    let config: Config =
        serde_json::from_str(r#"{"fixedColumns": 2, "footer": true}"#).unwrap();
    assert_eq!(config.fixed_columns, 2);
    assert!(config.footer);
    assert!(config.auto_show, "untouched keys keep their defaults");
}

#[test]
fn test_camel_case_keys() {
    let config: Config = serde_json::from_str(
        r#"{"cloneHeadToFoot": true, "themeClass": "fht-dark", "altClass": "alt", "autoResize": true, "borderCollapse": false}"#,
    )
    .unwrap();
    assert!(config.clone_head_to_foot);
    assert_eq!(config.theme_class, "fht-dark");
    assert_eq!(config.alt_class.as_deref(), Some("alt"));
    assert!(config.auto_resize);
    assert!(!config.border_collapse);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config: Config =
        serde_json::from_str(r#"{"sortable": true, "bogus": 1, "footer": true}"#).unwrap();
    assert!(config.footer, "recognized keys still apply next to unknown ones");
}

#[test]
fn test_width_accepts_number_and_text() {
    let numeric: Config = serde_json::from_str(r#"{"width": 500}"#).unwrap();
    assert_eq!(numeric.width, CssSize::Px(500.0));
    assert!(!numeric.width.is_percent());
    assert_eq!(numeric.width.to_css(), "500px");

    let percent: Config = serde_json::from_str(r#"{"width": "85%"}"#).unwrap();
    assert!(percent.width.is_percent());
    assert_eq!(percent.width.as_px(), None);
    assert_eq!(percent.width.to_css(), "85%");
}

// ============================================================================
// Fixed-column resolution
// ============================================================================

#[test]
fn test_explicit_count_wins() {
    let config: Config =
        serde_json::from_str(r#"{"fixedColumns": 3, "fixedColumn": true}"#).unwrap();
    assert_eq!(config.resolved_fixed_columns(5), 3);
}

#[test]
fn test_legacy_alias_forces_one() {
    let config: Config = serde_json::from_str(r#"{"fixedColumn": true}"#).unwrap();
    assert_eq!(config.resolved_fixed_columns(5), 1);
}

#[test]
fn test_marker_count_is_the_fallback() {
    let config = Config::default();
    assert_eq!(config.resolved_fixed_columns(2), 2);
}

#[test]
fn test_unannotated_table_gets_no_fixed_columns() {
    // The hook never ran and the caller set nothing: 0 is the intended
    // forward-compatible default, not an error.
    let config = Config::default();
    assert_eq!(config.resolved_fixed_columns(0), 0);
}
