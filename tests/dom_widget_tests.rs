//! End-to-end widget tests (browser only)
//!
//! These run under `wasm-pack test --headless --chrome` (or any
//! wasm-bindgen-test browser runner); they build real tables, attach the
//! widget, and inspect the generated pane structure.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlTableElement};

use fixtable::FixTable;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A 3-column table with a 2-row header and 4 body rows, attached to the
/// document so it has real layout.
fn build_test_table(document: &Document) -> HtmlTableElement {
    let table: HtmlTableElement = document
        .create_element("table")
        .unwrap()
        .dyn_into()
        .unwrap();
    table.set_inner_html(
        "<thead>\
           <tr><th style=\"min-width: 120px\">a</th>\
               <th style=\"min-width: 120px\">b</th>\
               <th style=\"min-width: 120px\">c</th></tr>\
           <tr><th>d</th><th>e</th><th>f</th></tr>\
         </thead>\
         <tbody>\
           <tr><td>1</td><td>2</td><td>3</td></tr>\
           <tr><td>4</td><td>5</td><td>6</td></tr>\
           <tr><td>7</td><td>8</td><td>9</td></tr>\
           <tr><td>10</td><td>11</td><td>12</td></tr>\
         </tbody>",
    );
    let host = document.create_element("div").unwrap();
    host.append_child(&table).unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    table
}

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn test_setup_builds_all_panes() {
    let document = document();
    let table = build_test_table(&document);
    let widget = FixTable::attach(
        table,
        options(&[
            ("fixedColumns", JsValue::from_f64(1.0)),
            ("footer", JsValue::from_bool(true)),
            ("cloneHeadToFoot", JsValue::from_bool(true)),
            ("height", JsValue::from_f64(200.0)),
        ]),
    )
    .unwrap();

    let wrapper = widget.wrapper();
    assert!(wrapper.query_selector("div.fht-thead").unwrap().is_some());
    assert!(wrapper.query_selector("div.fht-tbody").unwrap().is_some());
    assert!(wrapper.query_selector("div.fht-tfoot").unwrap().is_some());
    assert!(wrapper
        .query_selector("div.fht-fixed-column")
        .unwrap()
        .is_some());
    assert_eq!(widget.fixed_columns(), 1);
}

#[wasm_bindgen_test]
fn test_fixed_column_pane_has_one_cell_per_row() {
    let document = document();
    let table = build_test_table(&document);
    let widget = FixTable::attach(
        table,
        options(&[("fixedColumns", JsValue::from_f64(1.0))]),
    )
    .unwrap();

    let pane = widget
        .wrapper()
        .query_selector("div.fht-fixed-column")
        .unwrap()
        .unwrap();

    let header_rows = pane.query_selector_all("thead tr").unwrap();
    assert_eq!(header_rows.length(), 2, "one cloned row per header row");
    for i in 0..header_rows.length() {
        let row: web_sys::Element = header_rows.get(i).unwrap().dyn_into().unwrap();
        assert_eq!(
            row.query_selector_all("th, td").unwrap().length(),
            1,
            "each cloned header row holds exactly the frozen cells"
        );
    }

    let body_rows = pane.query_selector_all("tbody tr").unwrap();
    assert_eq!(body_rows.length(), 4, "one synthetic row per body row");
    for i in 0..body_rows.length() {
        let row: web_sys::Element = body_rows.get(i).unwrap().dyn_into().unwrap();
        assert_eq!(row.query_selector_all("th, td").unwrap().length(), 1);
    }
}

#[wasm_bindgen_test]
fn test_body_scroll_mirrors_into_pane_margins() {
    let document = document();
    let table = build_test_table(&document);
    let widget = FixTable::attach(
        table,
        options(&[
            ("width", JsValue::from_f64(60.0)),
            ("height", JsValue::from_f64(80.0)),
        ]),
    )
    .unwrap();

    let wrapper = widget.wrapper();
    let body_pane = wrapper
        .query_selector("div.fht-tbody")
        .unwrap()
        .unwrap();
    body_pane.set_scroll_left(15);
    // Synchronous re-dispatch: scroll events from scripted scrolling are
    // async, and the handler only reads current offsets anyway.
    let event = web_sys::Event::new("scroll").unwrap();
    body_pane.dispatch_event(&event).unwrap();

    let applied = f64::from(body_pane.scroll_left());
    let header_table = wrapper
        .query_selector("div.fht-thead table")
        .unwrap()
        .unwrap();
    let margin = web_sys::window()
        .unwrap()
        .get_computed_style(&header_table)
        .unwrap()
        .unwrap()
        .get_property_value("margin-left")
        .unwrap();
    assert_eq!(
        margin,
        format!("{}px", -applied),
        "header margin must be the negated horizontal scroll offset"
    );
}

#[wasm_bindgen_test]
fn test_normalize_builds_groups_from_bare_rows() {
    let document = document();
    let table: HtmlTableElement = document
        .create_element("table")
        .unwrap()
        .dyn_into()
        .unwrap();
    table.set_inner_html(
        "<tbody>\
           <tr><th>h1</th><th>h2</th></tr>\
           <tr><td>1</td><td>2</td></tr>\
           <tr><td>3</td><td>4</td></tr>\
           <tr><th>f1</th><th>f2</th></tr>\
         </tbody>",
    );
    document.body().unwrap().append_child(&table).unwrap();

    fixtable::normalize::normalize(&table).unwrap();

    assert_eq!(table.t_head().unwrap().rows().length(), 1);
    assert_eq!(table.t_foot().unwrap().rows().length(), 1);
    let body: web_sys::HtmlTableSectionElement = table
        .t_bodies()
        .item(0)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(body.rows().length(), 2, "only data rows stay in the body");

    // Idempotent: a second pass moves nothing.
    fixtable::normalize::normalize(&table).unwrap();
    assert_eq!(table.t_head().unwrap().rows().length(), 1);
    assert_eq!(table.t_foot().unwrap().rows().length(), 1);
}

#[wasm_bindgen_test]
fn test_dispose_restores_the_original_table() {
    let document = document();
    let table = build_test_table(&document);
    let host = table.parent_element().unwrap();
    let mut widget = FixTable::attach(table.clone(), JsValue::NULL).unwrap();

    widget.dispose(true);

    assert!(
        host.query_selector("div.fht-table-wrapper")
            .unwrap()
            .is_none(),
        "wrapper and panes must be gone after restore"
    );
    assert_eq!(
        table.parent_element().unwrap(),
        host,
        "the table returns to its original parent"
    );
    assert!(!table.class_list().contains("fht-table-init"));
}
