//! Small DOM measurement and construction helpers (wasm32 only).
//!
//! Measurement vocabulary used throughout the widget:
//! - *outer* size: border box (`offsetWidth`/`offsetHeight`);
//! - *inner* size: padding box (`clientWidth`/`clientHeight`);
//! - *content* size: inner size minus padding, read from computed style.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, Event, HtmlDivElement, HtmlElement};

use crate::error::{FixTableError, Result};

pub(crate) fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FixTableError::Probe("no document available".into()))
}

pub(crate) fn create_div(document: &Document) -> Result<HtmlDivElement> {
    document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        .ok_or_else(|| FixTableError::Dom("failed to create div".into()))
}

pub(crate) fn style(el: &Element) -> Option<CssStyleDeclaration> {
    el.dyn_ref::<HtmlElement>().map(HtmlElement::style)
}

/// Set a pixel-valued style property, ignoring style-system refusals.
pub(crate) fn set_px(el: &Element, property: &str, value: f64) {
    if let Some(style) = style(el) {
        let _ = style.set_property(property, &format!("{value}px"));
    }
}

pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(style) = style(el) {
        let _ = style.set_property(property, value);
    }
}

/// Computed style value for `property`, parsed as pixels.
pub(crate) fn computed_px(el: &Element, property: &str) -> f64 {
    web_sys::window()
        .and_then(|w| w.get_computed_style(el).ok().flatten())
        .and_then(|s| s.get_property_value(property).ok())
        .and_then(|v| crate::metrics::parse_px(&v))
        .unwrap_or(0.0)
}

/// Border-box width.
pub(crate) fn outer_width(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_width()))
        .unwrap_or_else(|| el.get_bounding_client_rect().width())
}

/// Border-box height.
pub(crate) fn outer_height(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or_else(|| el.get_bounding_client_rect().height())
}

/// Padding-box width.
pub(crate) fn inner_width(el: &Element) -> f64 {
    f64::from(el.client_width())
}

/// Padding-box height.
pub(crate) fn inner_height(el: &Element) -> f64 {
    f64::from(el.client_height())
}

/// Content-box width.
pub(crate) fn content_width(el: &Element) -> f64 {
    inner_width(el) - computed_px(el, "padding-left") - computed_px(el, "padding-right")
}

/// Content-box height.
pub(crate) fn content_height(el: &Element) -> f64 {
    inner_height(el) - computed_px(el, "padding-top") - computed_px(el, "padding-bottom")
}

/// Nearest ancestor (or self) carrying `class`.
pub(crate) fn closest_with_class(el: &Element, class: &str) -> Option<Element> {
    el.closest(&format!(".{class}")).ok().flatten()
}

/// Synthesize a `scroll` event on `el` so bound handlers re-run.
pub(crate) fn dispatch_scroll(el: &Element) {
    if let Ok(event) = Event::new("scroll") {
        let _ = el.dispatch_event(&event);
    }
}
