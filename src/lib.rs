//! fixtable - fixed-header tables for the web
//!
//! Turns a plain HTML table into a scrollable widget whose header row (and
//! optionally a footer row and the leading columns) stay visually fixed
//! while the body scrolls:
//! - DOM restructuring into synchronized header/body/footer/fixed-column panes
//! - pixel-exact column alignment across panes, scrollbar width accounted for
//! - wheel routing for the fixed-column pane, which has no scrollbar
//! - a wikitext preprocessing hook that flags tables and frozen columns
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { init_fixed_tables } from 'fixtable';
//! await init();
//! const tables = Array.from(document.querySelectorAll('table.fixedheadertable'));
//! const handles = init_fixed_tables(tables, { fixedColumns: 1, footer: true });
//! ```

pub mod classes;
pub mod config;
pub mod error;
pub mod markup;
pub mod metrics;
pub mod normalize;

// DOM modules (wasm32)
pub mod dom;
pub mod probe;
pub mod widget;

use wasm_bindgen::prelude::*;

pub use config::Config;
pub use error::{FixTableError, Result};
pub use widget::FixTable;

/// Build fixed-header widgets for a collection of table elements.
///
/// Elements without a body group, or without a header group even after
/// normalization, are skipped silently. Elements that are not tables, or
/// whose groups are empty after normalization, fail the whole call with a
/// markup error. Returns the handles of the widgets that were built; the
/// configured `create` callback fires once per widget.
///
/// # Errors
/// Returns an error for invalid table markup, an unusable options object,
/// or an environment that cannot be measured.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_fixed_tables(
    tables: js_sys::Array,
    options: JsValue,
) -> std::result::Result<js_sys::Array, JsValue> {
    let config = config::config_from_js(&options)?;
    let create = config::create_callback_from_js(&options);

    let handles = js_sys::Array::new();
    for entry in tables.iter() {
        let table: web_sys::HtmlTableElement = entry
            .dyn_into()
            .map_err(|_| FixTableError::Markup("element is not a table".into()))?;
        // Every widget gets its own configuration value; nothing is shared
        // across tables in one call.
        if let Some(widget) = FixTable::build(table, config.clone(), create.as_ref())? {
            handles.push(&JsValue::from(widget));
        }
    }
    Ok(handles)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
