//! Scroll synchronizer.
//!
//! Two event sources drive the panes:
//!
//! - native scroll on the body pane, mirrored as negative margins on the
//!   header/footer tables (horizontal) and the fixed-column table (vertical);
//! - wheel input over the fixed-column pane, which has no scrollbar of its
//!   own, translated into body-pane scroll and re-dispatched so the first
//!   handler keeps everything consistent.
//!
//! Handlers recompute from the current scroll offsets every time instead of
//! accumulating deltas, so bursts of events are harmless. Closures are
//! returned to the handle, which owns them until dispose.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, WheelEvent};

use super::SharedState;
use crate::dom as d;
use crate::metrics;

/// Bind the body pane's scroll handler. Returns the closure for later
/// unbinding.
pub(crate) fn bind_body_scroll(state: &Rc<RefCell<SharedState>>) -> Closure<dyn FnMut(Event)> {
    let body_pane: Element = {
        let s = state.borrow();
        s.panes.body_pane.clone().into()
    };
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let s = state.borrow();
        let left = f64::from(s.panes.body_pane.scroll_left());
        let top = f64::from(s.panes.body_pane.scroll_top());

        d::set_px(&s.panes.header_table, "margin-left", -left);
        if s.config.footer || s.config.clone_head_to_foot {
            if let Some(footer_table) = &s.panes.footer_table {
                d::set_px(footer_table, "margin-left", -left);
            }
        }
        if s.panes.fixed_columns > 0 {
            if let Some(column_table) = &s.panes.fixed_column_table {
                d::set_px(column_table, "margin-top", -top);
            }
        }
    }) as Box<dyn FnMut(Event)>);

    let _ = body_pane
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure
}

pub(crate) fn unbind_body_scroll(target: &Element, closure: &Closure<dyn FnMut(Event)>) {
    let _ = target
        .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
}

/// Bind the wheel handler on the fixed-column table, when one exists.
pub(crate) fn bind_fixed_column_wheel(
    state: &Rc<RefCell<SharedState>>,
) -> Option<Closure<dyn FnMut(WheelEvent)>> {
    let target = {
        let s = state.borrow();
        s.panes.fixed_column_table.clone()?
    };
    let state = state.clone();
    let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
        let delta = event.delta_y();
        if delta == 0.0 {
            return;
        }
        // Copy element refs out, then release the borrow: writing scrollTop
        // and re-dispatching `scroll` re-enters the scroll closure, which
        // borrows this state too.
        let (column_table, viewport, body_pane) = {
            let s = state.borrow();
            let (Some(column_table), Some(viewport)) = (
                s.panes.fixed_column_table.clone(),
                s.panes.fixed_column_viewport.clone(),
            ) else {
                return;
            };
            (column_table, viewport, s.panes.body_pane.clone())
        };

        let max = metrics::max_fixed_column_scroll(
            d::outer_height(&column_table),
            d::content_height(&viewport),
        );
        let current = d::computed_px(&column_table, "margin-top");
        let margin = metrics::wheel_target(current, delta, max);

        d::set_px(&column_table, "margin-top", margin);
        body_pane.set_scroll_top((-margin) as i32);
        d::dispatch_scroll(&body_pane);
        event.prevent_default();
    }) as Box<dyn FnMut(WheelEvent)>);

    let _ = target.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    Some(closure)
}

pub(crate) fn unbind_fixed_column_wheel(
    target: &Element,
    closure: &Closure<dyn FnMut(WheelEvent)>,
) {
    let _ = target
        .remove_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
}
