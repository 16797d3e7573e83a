//! Pane geometry arithmetic.
//!
//! Everything here is a pure function of already-measured numbers, kept apart
//! from the DOM so the width/height/clamping rules test natively. The widget
//! measures elements once per setup pass, funnels the numbers through these
//! helpers, and writes the results back as pixel styles.

use crate::config::CssSize;

/// Wheel-notch step in device units.
///
/// 120 per notch is the convention of classic wheel hardware; environments
/// with different wheel-event semantics may want another value, so it is a
/// named constant rather than an inline literal.
pub const WHEEL_STEP: f64 = 120.0;

/// Per-setup measurement of first-row column widths and the border scalar.
///
/// Widths are content widths with the border correction already folded in,
/// indexed by column. Recomputed on every setup pass, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableProps {
    pub thead: Vec<f64>,
    pub tbody: Vec<f64>,
    pub tfoot: Vec<f64>,
    pub border: f64,
}

/// Border-width scalar from a cell's outer and inner widths.
///
/// Collapsed borders are shared between adjacent cells, so the measured
/// difference counts each border twice.
pub fn border_width(outer: f64, inner: f64, border_collapse: bool) -> f64 {
    let divisor = if border_collapse { 2.0 } else { 1.0 };
    (outer - inner) / divisor
}

/// Effective pixel width for the table itself.
///
/// Percentages resolve against the parent container; either way the
/// scrollbar's width is reserved out of the result.
pub fn effective_width(size: &CssSize, parent_width: f64, scrollbar_width: f64) -> f64 {
    if size.is_percent() {
        parent_width - scrollbar_width
    } else {
        size.as_px().unwrap_or(parent_width) - scrollbar_width
    }
}

/// Remaining height for the scrollable body pane.
pub fn body_pane_height(
    wrapper_height: f64,
    header_outer_height: f64,
    footer_outer_height: f64,
    border: f64,
) -> f64 {
    wrapper_height - header_outer_height - footer_outer_height - border
}

/// Total width of the fixed-column pane: the leading cells' outer widths
/// plus one border width per frozen column.
pub fn fixed_column_width(leading_cell_outer_widths: &[f64], border: f64) -> f64 {
    let cells: f64 = leading_cell_outer_widths.iter().sum();
    cells + leading_cell_outer_widths.len() as f64 * border
}

/// Maximum upward offset of the fixed-column inner table, in pixels.
pub fn max_fixed_column_scroll(content_height: f64, viewport_height: f64) -> f64 {
    (content_height - viewport_height).max(0.0)
}

/// Next top margin for the fixed-column inner table after one wheel notch.
///
/// A positive `delta_y` (wheel toward the user) scrolls the content down,
/// pushing the margin further negative. The result is clamped to
/// `[-max_scroll, 0]`; a zero delta leaves the margin untouched.
pub fn wheel_target(margin_top: f64, delta_y: f64, max_scroll: f64) -> f64 {
    if delta_y == 0.0 {
        return margin_top;
    }
    let stepped = if delta_y > 0.0 {
        margin_top - WHEEL_STEP
    } else {
        margin_top + WHEEL_STEP
    };
    stepped.clamp(-max_scroll, 0.0)
}

/// Extra right padding for the last header/footer cell, so the fixed panes
/// extend over the body pane's scrollbar.
pub fn scrollbar_padding(inner_width: f64, content_width: f64, scrollbar_width: f64) -> f64 {
    ((inner_width - content_width) / 2.0).max(scrollbar_width)
}

/// Whether a body row (by visible index) takes the alternating-row class.
pub fn is_alt_row(visible_index: usize) -> bool {
    visible_index % 2 == 1
}

/// Parse a pixel length such as `"12px"`, `"12.5"`, or `" 12px "`.
///
/// Returns `None` for percentages and non-numeric text, which callers treat
/// as "not a pixel value" rather than an error.
pub fn parse_px(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.contains('%') {
        return None;
    }
    trimmed.trim_end_matches("px").trim().parse::<f64>().ok()
}
