//! Widget configuration.
//!
//! Options arrive from JavaScript as a plain object; recognized keys are
//! deserialized with serde (camelCase, unknown keys ignored so newer callers
//! keep working against older builds) and merged over the defaults. The
//! `create` callback is not serde-visible and is pulled off the object
//! separately.
//!
//! Every widget instance owns its own resolved `Config`. Settings are fixed
//! at init time; re-initializing an already-built table re-reads the same
//! instance rather than performing a fresh merge.

use serde::{Deserialize, Serialize};

/// A CSS length that is either a pixel count or a string such as `"85%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssSize {
    /// Plain number, interpreted as pixels.
    Px(f64),
    /// Free-form CSS text, typically a percentage.
    Text(String),
}

impl CssSize {
    /// True when the size is a percentage of the parent container.
    pub fn is_percent(&self) -> bool {
        match self {
            CssSize::Px(_) => false,
            CssSize::Text(s) => s.contains('%'),
        }
    }

    /// Pixel value, if the size is numeric (or numeric text like `"450px"`).
    pub fn as_px(&self) -> Option<f64> {
        match self {
            CssSize::Px(v) => Some(*v),
            CssSize::Text(s) => crate::metrics::parse_px(s),
        }
    }

    /// CSS text for assignment to an element style.
    pub fn to_css(&self) -> String {
        match self {
            CssSize::Px(v) => format!("{v}px"),
            CssSize::Text(s) => s.clone(),
        }
    }
}

/// Per-instance widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Wrapper width, percentage or pixels.
    pub width: CssSize,
    /// Wrapper height, percentage or pixels.
    pub height: CssSize,
    /// Theme class added to the wrapper.
    pub theme_class: String,
    /// Whether the table collapses borders; halves the measured border width.
    pub border_collapse: bool,
    /// Number of leading columns to freeze. 0 defers to the markup hook.
    pub fixed_columns: u32,
    /// Legacy alias: `true` forces one fixed column.
    pub fixed_column: bool,
    /// Render a fixed footer pane.
    pub footer: bool,
    /// Footer pane mirrors the header content instead of a native footer.
    pub clone_head_to_foot: bool,
    /// Show the wrapper as soon as setup completes.
    pub auto_show: bool,
    /// Re-run the measurement pass when the container resizes.
    pub auto_resize: bool,
    /// Class applied to odd, visible body rows.
    pub alt_class: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: CssSize::Text("100%".to_string()),
            height: CssSize::Text("100%".to_string()),
            theme_class: "fht-default".to_string(),
            border_collapse: true,
            fixed_columns: 0,
            fixed_column: false,
            footer: false,
            clone_head_to_foot: false,
            auto_show: true,
            auto_resize: false,
            alt_class: None,
        }
    }
}

impl Config {
    /// Resolve the effective fixed-column count.
    ///
    /// Precedence: an explicit `fixed_columns` wins; otherwise the legacy
    /// `fixed_column` alias forces 1; otherwise `marker_count` (header cells
    /// the markup hook flagged) decides. A count of 0 everywhere means no
    /// fixed columns at all, which is the intended default for tables the
    /// hook never annotated.
    pub fn resolved_fixed_columns(&self, marker_count: u32) -> u32 {
        if self.fixed_columns > 0 {
            self.fixed_columns
        } else if self.fixed_column {
            1
        } else {
            marker_count
        }
    }
}

/// Deserialize an options object, tolerating `null`/`undefined`.
///
/// Returns the default configuration when no options are given. The `create`
/// callback is extracted by the caller via `js_sys::Reflect` before this
/// runs, since functions do not survive serde.
#[cfg(target_arch = "wasm32")]
pub fn config_from_js(options: &wasm_bindgen::JsValue) -> crate::error::Result<Config> {
    use crate::error::FixTableError;

    if options.is_null() || options.is_undefined() {
        return Ok(Config::default());
    }
    serde_wasm_bindgen::from_value(options.clone())
        .map_err(|e| FixTableError::Config(e.to_string()))
}

/// Pull the `create` callback off the options object, if present.
#[cfg(target_arch = "wasm32")]
pub fn create_callback_from_js(options: &wasm_bindgen::JsValue) -> Option<js_sys::Function> {
    use wasm_bindgen::JsCast;

    if options.is_null() || options.is_undefined() {
        return None;
    }
    js_sys::Reflect::get(options, &wasm_bindgen::JsValue::from_str("create"))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
}
