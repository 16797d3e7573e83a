//! Geometry prober.
//!
//! Two one-shot measurements of the rendering environment, taken once per
//! widget instance before any pane is built:
//!
//! - the *padding model*: whether forcing a cell height via padding changes
//!   the measured height (a content-box quirk some themes trigger);
//! - the *scrollbar width* of the current platform, needed to line the fixed
//!   header up with a body pane that has a native scrollbar.
//!
//! Both probes build transient elements, measure, and remove them before
//! returning; the target table is never touched. A missing document or body
//! is a probe failure and aborts initialization of that table.

#![cfg(target_arch = "wasm32")]

use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::error::{FixTableError, Result};

/// Snapshot of both probe results for one widget instance.
#[derive(Debug, Clone, Copy)]
pub struct Probes {
    /// True when the box model folds padding into measured width/height.
    pub include_padding: bool,
    /// Native scrollbar width in pixels (0 on overlay-scrollbar platforms).
    pub scrollbar_width: f64,
}

/// Run both probes against the current environment.
pub fn run(document: &Document, table_class: &str) -> Result<Probes> {
    Ok(Probes {
        include_padding: probe_padding_model(document, table_class)?,
        scrollbar_width: probe_scrollbar_width(document)?,
    })
}

fn body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or_else(|| FixTableError::Probe("document has no body".into()))
}

/// Determine whether width/height measurements include padding.
///
/// Builds a probe table carrying the target table's classes (theme CSS can
/// change the box model), forces a cell height through padding alone, and
/// compares measured heights before and after.
pub fn probe_padding_model(document: &Document, table_class: &str) -> Result<bool> {
    let body = body(document)?;
    let table = document
        .create_element("table")
        .map_err(|_| FixTableError::Probe("failed to create probe table".into()))?;
    table.set_class_name(&format!("{} {}", crate::classes::TABLE, table_class));
    table.set_inner_html("<tr><td style=\"padding: 10px; font-size: 10px;\">test</td></tr>");
    body.append_child(&table)
        .map_err(|_| FixTableError::Probe("failed to attach probe table".into()))?;

    let result = (|| {
        let td = table.query_selector("td").ok().flatten()?;
        let tr = table.query_selector("tr").ok().flatten()?;
        let default_height = dom::content_height(&td);
        dom::set_px(&td, "height", dom::content_height(&tr));
        let new_height = dom::content_height(&td);
        Some((default_height - new_height).abs() > f64::EPSILON)
    })();

    table.remove();
    result.ok_or_else(|| FixTableError::Probe("padding probe produced no cell".into()))
}

/// Measure the platform's native scrollbar width.
///
/// The usual path compares a fixed-width scroll container against its 100%
/// wide child. Legacy Trident builds cannot report that difference, so they
/// are special-cased with a pair of hidden textareas, one with its scrollbar
/// suppressed.
pub fn probe_scrollbar_width(document: &Document) -> Result<f64> {
    let body = body(document)?;
    let user_agent = web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.user_agent().ok())
        .unwrap_or_default()
        .to_lowercase();

    if user_agent.contains("msie") {
        let make_textarea = |hide_scrollbar: bool| -> Result<Element> {
            let textarea = document
                .create_element("textarea")
                .map_err(|_| FixTableError::Probe("failed to create probe textarea".into()))?;
            let _ = textarea.set_attribute("cols", "10");
            let _ = textarea.set_attribute("rows", "2");
            dom::set_style(&textarea, "position", "absolute");
            dom::set_style(&textarea, "top", "-1000px");
            dom::set_style(&textarea, "left", "-1000px");
            if hide_scrollbar {
                dom::set_style(&textarea, "overflow", "hidden");
            }
            body.append_child(&textarea)
                .map_err(|_| FixTableError::Probe("failed to attach probe textarea".into()))?;
            Ok(textarea)
        };

        let with_scrollbar = make_textarea(false)?;
        let without_scrollbar = make_textarea(true)?;
        // + 2 for the border offset between the two controls
        let width =
            dom::content_width(&with_scrollbar) - dom::content_width(&without_scrollbar) + 2.0;
        with_scrollbar.remove();
        without_scrollbar.remove();
        return Ok(width);
    }

    let outer = dom::create_div(document)?;
    dom::set_px(&outer, "width", 100.0);
    dom::set_px(&outer, "height", 100.0);
    dom::set_style(&outer, "overflow", "auto");
    dom::set_style(&outer, "position", "absolute");
    dom::set_style(&outer, "top", "-1000px");
    dom::set_style(&outer, "left", "-1000px");

    let inner = dom::create_div(document)?;
    dom::set_style(&inner, "width", "100%");
    dom::set_px(&inner, "height", 200.0);
    outer
        .append_child(&inner)
        .map_err(|_| FixTableError::Probe("failed to build probe container".into()))?;
    body.insert_before(&outer, body.first_child().as_ref())
        .map_err(|_| FixTableError::Probe("failed to attach probe container".into()))?;

    let width = 100.0 - dom::content_width(&inner);
    outer.remove();
    Ok(width)
}
