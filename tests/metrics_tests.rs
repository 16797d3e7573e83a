//! Geometry arithmetic tests
//!
//! Border math, effective widths, pane heights, fixed-column width, and the
//! wheel-offset clamp.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use fixtable::config::CssSize;
use fixtable::metrics::{
    body_pane_height, border_width, effective_width, fixed_column_width,
    max_fixed_column_scroll, parse_px, scrollbar_padding, wheel_target, WHEEL_STEP,
};

// ============================================================================
// Border math
// ============================================================================

#[test]
fn test_border_width_collapsed() {
    assert_eq!(
        border_width(52.0, 50.0, true),
        1.0,
        "collapsed borders are shared, so the measured delta counts double"
    );
}

#[test]
fn test_border_width_separate() {
    assert_eq!(border_width(52.0, 50.0, false), 2.0);
}

// ============================================================================
// Effective width
// ============================================================================

#[test]
fn test_percentage_width_resolves_against_parent() {
    let size = CssSize::Text("100%".to_string());
    assert_eq!(effective_width(&size, 800.0, 17.0), 783.0);
}

#[test]
fn test_pixel_width_subtracts_scrollbar() {
    assert_eq!(effective_width(&CssSize::Px(500.0), 800.0, 17.0), 483.0);
}

#[test]
fn test_pixel_text_width_parses() {
    let size = CssSize::Text("450px".to_string());
    assert_eq!(effective_width(&size, 800.0, 17.0), 433.0);
}

// ============================================================================
// Pane dimensions
// ============================================================================

#[test]
fn test_body_pane_height_subtracts_chrome() {
    assert_eq!(body_pane_height(400.0, 30.0, 20.0, 1.0), 349.0);
}

#[test]
fn test_fixed_column_width_adds_one_border_per_column() {
    assert_eq!(fixed_column_width(&[100.0, 80.0], 2.0), 184.0);
}

#[test]
fn test_fixed_column_width_empty() {
    assert_eq!(fixed_column_width(&[], 2.0), 0.0);
}

#[test]
fn test_max_scroll_zero_when_content_fits() {
    assert_eq!(max_fixed_column_scroll(100.0, 200.0), 0.0);
    assert_eq!(max_fixed_column_scroll(350.0, 200.0), 150.0);
}

#[test]
fn test_scrollbar_padding_takes_the_larger_side() {
    assert_eq!(scrollbar_padding(60.0, 50.0, 17.0), 17.0);
    assert_eq!(scrollbar_padding(100.0, 50.0, 17.0), 25.0);
}

// ============================================================================
// Wheel clamp
// ============================================================================

#[test]
fn test_wheel_steps_down_and_clamps() {
    let max = 300.0;
    let mut margin = 0.0;
    for _ in 0..10 {
        margin = wheel_target(margin, 1.0, max);
    }
    assert_eq!(
        margin, -max,
        "repeated downward notches must never go past -(content - viewport)"
    );
}

#[test]
fn test_wheel_steps_up_and_clamps_at_zero() {
    let max = 300.0;
    let mut margin = -max;
    for _ in 0..10 {
        margin = wheel_target(margin, -1.0, max);
    }
    assert_eq!(margin, 0.0, "repeated upward notches must never overshoot 0");
}

#[test]
fn test_wheel_is_monotonic_per_notch() {
    let max = 500.0;
    let first = wheel_target(0.0, 1.0, max);
    let second = wheel_target(first, 1.0, max);
    assert_eq!(first, -WHEEL_STEP);
    assert_eq!(second, -2.0 * WHEEL_STEP);
    assert!(second < first, "each downward notch moves strictly further");
}

#[test]
fn test_zero_delta_is_ignored() {
    assert_eq!(wheel_target(-120.0, 0.0, 500.0), -120.0);
}

#[test]
fn test_wheel_respects_small_max() {
    // Content barely taller than the viewport: one notch should clamp.
    assert_eq!(wheel_target(0.0, 1.0, 40.0), -40.0);
}

// ============================================================================
// Pixel parsing
// ============================================================================

#[test]
fn test_parse_px_variants() {
    assert_eq!(parse_px("12px"), Some(12.0));
    assert_eq!(parse_px("12.5"), Some(12.5));
    assert_eq!(parse_px(" 12px "), Some(12.0));
    assert_eq!(parse_px("100%"), None);
    assert_eq!(parse_px("auto"), None);
    assert_eq!(parse_px(""), None);
}
