//! The fixed-header table widget.
//!
//! `FixTable` is the per-table handle: it owns the resolved configuration,
//! references to every generated pane, and the bound event closures, so
//! state queries and teardown never have to re-walk the document. Handles
//! are created through [`crate::init_fixed_tables`] (a collection at a time)
//! or [`FixTable::attach`] (one table).
//!
//! Setup is fully synchronous; after it returns, the only activity is the
//! scroll/wheel handlers, until `dispose` unbinds them.

pub mod footer;

pub(crate) mod builder;
pub(crate) mod fixed_column;
pub(crate) mod scroll;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, Event, HtmlDivElement, HtmlTableElement, ResizeObserver, WheelEvent};

#[cfg(target_arch = "wasm32")]
use crate::config::Config;
#[cfg(target_arch = "wasm32")]
use crate::error::{FixTableError, Result};
#[cfg(target_arch = "wasm32")]
use crate::probe::{self, Probes};
#[cfg(target_arch = "wasm32")]
use crate::{classes, dom, normalize};

/// Event closures currently bound to the panes.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub(crate) struct Bindings {
    pub(crate) scroll: Option<Closure<dyn FnMut(Event)>>,
    pub(crate) wheel: Option<Closure<dyn FnMut(WheelEvent)>>,
}

/// Shared state reachable from event handlers.
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) config: Config,
    pub(crate) table: HtmlTableElement,
    pub(crate) panes: builder::PaneSet,
    pub(crate) probes: Probes,
    pub(crate) original_class: String,
    pub(crate) original_style: Option<String>,
    pub(crate) bindings: Bindings,
}

/// Handle to one fixed-header table.
#[wasm_bindgen]
pub struct FixTable {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    resize_observer: Option<ResizeObserver>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    resize_closure: Option<Closure<dyn FnMut()>>,
    #[cfg(target_arch = "wasm32")]
    disposed: bool,
}

#[cfg(target_arch = "wasm32")]
impl FixTable {
    /// Build a widget for `table`, or `Ok(None)` when the element is
    /// silently skipped (no body group, or no header rows even after
    /// normalization).
    pub(crate) fn build(
        table: HtmlTableElement,
        config: Config,
        create: Option<&js_sys::Function>,
    ) -> Result<Option<FixTable>> {
        console_error_panic_hook::set_once();
        let document = dom::document()?;

        if table.t_bodies().length() == 0 {
            return Ok(None);
        }
        if table.t_head().is_none() {
            normalize::normalize(&table)?;
            let still_headerless = table
                .t_head()
                .map(|head| head.rows().length() == 0)
                .unwrap_or(true);
            if still_headerless {
                return Ok(None);
            }
        }
        if !builder::is_eligible(&table) {
            return Err(FixTableError::Markup(
                "table needs a non-empty header and body group".into(),
            ));
        }

        // Snapshot attributes and probe the environment before any
        // destructive step, so a probe failure leaves the table untouched.
        let original_class = table.class_name();
        let original_style = table.get_attribute("style");
        let probes = probe::run(&document, &original_class)?;

        let panes = builder::setup_table(
            &document,
            &table,
            &config,
            &probes,
            &original_class,
            original_style.as_deref(),
        )?;

        let auto_resize = config.auto_resize;
        let state = Rc::new(RefCell::new(SharedState {
            config,
            table,
            panes,
            probes,
            original_class,
            original_style,
            bindings: Bindings::default(),
        }));

        let scroll_closure = scroll::bind_body_scroll(&state);
        let wheel_closure = scroll::bind_fixed_column_wheel(&state);
        {
            let mut s = state.borrow_mut();
            s.bindings.scroll = Some(scroll_closure);
            s.bindings.wheel = wheel_closure;
        }

        let mut widget = FixTable {
            state,
            resize_observer: None,
            resize_closure: None,
            disposed: false,
        };
        if auto_resize {
            widget.observe_resize();
        }

        if let Some(create) = create {
            // The callback's `this` is the finished widget's table element.
            let this = widget.state.borrow().table.clone();
            let _ = create.call0(this.as_ref());
        }
        Ok(Some(widget))
    }

    /// Re-run the measurement pass against the stored configuration.
    ///
    /// Panes are reused; only the fixed-column pane's cloned content is
    /// rebuilt, so its wheel handler is rebound afterwards.
    pub(crate) fn re_setup(state: &Rc<RefCell<SharedState>>) -> Result<()> {
        let (document, table, config, probes, original_class, original_style) = {
            let s = state.borrow();
            (
                dom::document()?,
                s.table.clone(),
                s.config.clone(),
                s.probes,
                s.original_class.clone(),
                s.original_style.clone(),
            )
        };
        let panes = builder::setup_table(
            &document,
            &table,
            &config,
            &probes,
            &original_class,
            original_style.as_deref(),
        )?;
        state.borrow_mut().panes = panes;
        let wheel = scroll::bind_fixed_column_wheel(state);
        state.borrow_mut().bindings.wheel = wheel;
        Ok(())
    }

    fn observe_resize(&mut self) {
        let parent = {
            let s = self.state.borrow();
            s.panes.wrapper.parent_element()
        };
        let Some(parent) = parent else { return };

        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = Self::re_setup(&state);
        }) as Box<dyn FnMut()>);
        if let Ok(observer) = ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            observer.observe(&parent);
            self.resize_observer = Some(observer);
            self.resize_closure = Some(closure);
        }
    }

    /// Strip the widget's traces from the original table.
    fn restore_table(table: &HtmlTableElement, original_class: &str, original_style: Option<&str>) {
        if let Ok(spacers) = table.query_selector_all(&format!("div.{}", classes::CELL)) {
            for i in 0..spacers.length() {
                if let Some(spacer) = spacers.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    spacer.remove();
                }
            }
        }
        if let Ok(cells) = table.query_selector_all("th, td") {
            for i in 0..cells.length() {
                let Some(cell) = cells.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                if let Some(style) = dom::style(&cell) {
                    let _ = style.remove_property("width");
                    let _ = style.remove_property("height");
                }
            }
        }
        table.set_class_name(original_class);
        match original_style {
            Some(text) => {
                let _ = table.set_attribute("style", text);
            }
            None => {
                let _ = table.remove_attribute("style");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl FixTable {
    /// Build a widget for a single table element.
    ///
    /// Unlike the collection entry point, a table that would be silently
    /// skipped there is reported as an error here, since the caller asked
    /// for this specific element.
    #[wasm_bindgen]
    pub fn attach(
        table: HtmlTableElement,
        options: JsValue,
    ) -> std::result::Result<FixTable, JsValue> {
        let config = crate::config::config_from_js(&options)?;
        let create = crate::config::create_callback_from_js(&options);
        match Self::build(table, config, create.as_ref())? {
            Some(widget) => Ok(widget),
            None => Err(FixTableError::Markup(
                "table has no usable header or body group".into(),
            )
            .into()),
        }
    }

    /// Re-measure and re-pin pane dimensions (e.g. after content changes).
    #[wasm_bindgen]
    pub fn refresh(&mut self) -> std::result::Result<(), JsValue> {
        if self.disposed {
            return Err(FixTableError::Dom("widget already disposed".into()).into());
        }
        Self::re_setup(&self.state)?;
        Ok(())
    }

    /// Make the wrapper visible.
    #[wasm_bindgen]
    pub fn show(&self) {
        let s = self.state.borrow();
        if let Some(style) = dom::style(&s.panes.wrapper) {
            let _ = style.remove_property("display");
        }
    }

    /// Hide the wrapper.
    #[wasm_bindgen]
    pub fn hide(&self) {
        let s = self.state.borrow();
        dom::set_style(&s.panes.wrapper, "display", "none");
    }

    /// The generated wrapper element.
    #[wasm_bindgen(getter)]
    pub fn wrapper(&self) -> HtmlDivElement {
        self.state.borrow().panes.wrapper.clone()
    }

    /// Effective number of frozen leading columns.
    #[wasm_bindgen(getter, js_name = fixedColumns)]
    pub fn fixed_columns(&self) -> u32 {
        self.state.borrow().panes.fixed_columns
    }

    /// Unbind every handler; with `restore`, also unwrap the original table
    /// and remove the generated panes.
    #[wasm_bindgen]
    pub fn dispose(&mut self, restore: bool) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(observer) = self.resize_observer.take() {
            observer.disconnect();
        }
        self.resize_closure = None;

        let (table, wrapper, original_class, original_style) = {
            let mut s = self.state.borrow_mut();
            if let Some(closure) = s.bindings.scroll.take() {
                scroll::unbind_body_scroll(&s.panes.body_pane, &closure);
            }
            if let Some(closure) = s.bindings.wheel.take() {
                if let Some(target) = &s.panes.fixed_column_table {
                    scroll::unbind_fixed_column_wheel(target, &closure);
                }
            }
            (
                s.table.clone(),
                s.panes.wrapper.clone(),
                s.original_class.clone(),
                s.original_style.clone(),
            )
        };

        if restore {
            if let Some(parent) = wrapper.parent_node() {
                let _ = parent.insert_before(&table, Some(&wrapper));
            }
            wrapper.remove();
            Self::restore_table(&table, &original_class, original_style.as_deref());
        }
    }
}
