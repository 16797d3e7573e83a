//! Fixed-column pane.
//!
//! Clones the leading cells of every header, body, and footer row into a
//! separate absolutely-positioned pane that ignores horizontal scroll. Row
//! heights and cell widths are pinned from the live body so the clone stays
//! aligned row-for-row with the scrollable pane; cloned body cells are
//! regrouped into synthetic rows of exactly `fixed_columns` cells.
//!
//! The pane has no scrollbar of its own. Vertical wheel input over it is
//! routed back into the body pane by the scroll synchronizer, which is why
//! the mini body table and its viewport div are handed back to the caller.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDivElement, HtmlTableElement, HtmlTableRowElement};

use crate::classes;
use crate::config::Config;
use crate::dom as d;
use crate::error::{FixTableError, Result};
use crate::metrics::{self, TableProps};
use crate::probe::Probes;

/// Elements the scroll synchronizer needs from the built pane.
pub(crate) struct FixedColumnPanes {
    /// The mini body viewport (`div.fht-tbody` inside the pane).
    pub(crate) viewport: HtmlDivElement,
    /// The mini body table whose top margin tracks vertical scroll.
    pub(crate) body_table: Element,
}

fn pin_height(cell: &Element, border: f64, include_padding: bool) {
    let height = if include_padding {
        d::content_height(cell) + border
    } else {
        cell.parent_element()
            .map(|p| d::content_height(&p))
            .unwrap_or(0.0)
            + border
    };
    d::set_px(cell, "height", height);
}

fn pin_width(cell: &Element, border: f64, include_padding: bool, forced: Option<f64>) {
    let width = match forced {
        Some(width) => width + border,
        None if include_padding => d::content_width(cell) + border,
        None => {
            cell.parent_element()
                .map(|p| d::content_width(&p))
                .unwrap_or(0.0)
                + border
        }
    };
    d::set_px(cell, "width", width);
}

/// One mini pane: a positioned div holding a cloned table with one section.
fn mini_pane(
    document: &Document,
    pane_class: &str,
    section_tag: &str,
    original_class: &str,
) -> Result<(HtmlDivElement, Element, Element)> {
    let div = d::create_div(document)?;
    div.set_class_name(pane_class);
    d::set_style(&div, "overflow", "hidden");
    d::set_style(&div, "position", "relative");

    let table = document
        .create_element("table")
        .map_err(|_| FixTableError::Dom("failed to create fixed-column table".into()))?;
    table.set_class_name(&format!("{} {}", classes::TABLE, original_class));
    let section = document
        .create_element(section_tag)
        .map_err(|_| FixTableError::Dom("failed to create fixed-column section".into()))?;
    table
        .append_child(&section)
        .map_err(|_| FixTableError::Dom("failed to assemble fixed-column pane".into()))?;
    div.append_child(&table)
        .map_err(|_| FixTableError::Dom("failed to assemble fixed-column pane".into()))?;
    Ok((div, table, section))
}

fn leading_cells(row: &Element, count: usize) -> Vec<Element> {
    let Some(row) = row.dyn_ref::<HtmlTableRowElement>() else {
        return Vec::new();
    };
    let cells = row.cells();
    (0..cells.length().min(count as u32))
        .filter_map(|i| cells.item(i))
        .collect()
}

fn section_rows(section: &Element) -> Vec<Element> {
    let Ok(rows) = section.query_selector_all("tr") else {
        return Vec::new();
    };
    (0..rows.length())
        .filter_map(|i| rows.get(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .collect()
}

fn append_clone(target: &Element, cell: &Element) -> Result<()> {
    let clone = cell
        .clone_node_with_deep(true)
        .map_err(|_| FixTableError::Dom("failed to clone cell".into()))?;
    target
        .append_child(&clone)
        .map_err(|_| FixTableError::Dom("failed to attach cloned cell".into()))?;
    Ok(())
}

/// Rebuild the fixed-column pane content from the current table state.
///
/// The pane div itself is reused across setup passes; its cloned content is
/// derived data and is rebuilt wholesale each time.
#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
pub(crate) fn setup_fixed_column(
    document: &Document,
    table: &HtmlTableElement,
    pane: &HtmlDivElement,
    _wrapper: &HtmlDivElement,
    config: &Config,
    props: &TableProps,
    probes: &Probes,
    fixed_columns: u32,
    original_class: &str,
) -> Result<FixedColumnPanes> {
    let count = fixed_columns as usize;
    pane.set_inner_html("");

    let fixed_body = d::closest_with_class(table, classes::FIXED_BODY)
        .ok_or_else(|| FixTableError::Dom("fixed-body container missing".into()))?;
    let body_pane = fixed_body
        .query_selector(&format!("div.{}", classes::TBODY))
        .ok()
        .flatten()
        .ok_or_else(|| FixTableError::Dom("body pane missing".into()))?;
    let header_section = fixed_body
        .query_selector(&format!("div.{} thead", classes::THEAD))
        .ok()
        .flatten()
        .ok_or_else(|| FixTableError::Dom("header pane missing".into()))?;

    let (head_div, _head_table, head_section) =
        mini_pane(document, classes::THEAD, "thead", original_class)?;
    let (body_div, body_table, body_section) =
        mini_pane(document, classes::TBODY, "tbody", original_class)?;

    let viewport_height = d::content_height(&body_pane) - probes.scrollbar_width;

    // The cloned header pane is the size source: its cells already carry the
    // pinned widths of the visible header.
    let header_rows = section_rows(&header_section);
    let first_row_leading: Vec<Element> = header_rows
        .first()
        .map(|row| leading_cells(row, count))
        .unwrap_or_default();
    let leading_outer_widths: Vec<f64> =
        first_row_leading.iter().map(|c| d::outer_width(c)).collect();
    let pane_width = metrics::fixed_column_width(&leading_outer_widths, props.border);

    for row in &header_rows {
        for cell in leading_cells(row, count) {
            pin_height(&cell, props.border, probes.include_padding);
            pin_width(&cell, props.border, probes.include_padding, None);
        }
    }
    let column_widths: Vec<f64> = first_row_leading.iter().map(|c| d::content_width(c)).collect();

    // Pin the live body's leading cells to the same column widths.
    let body_rows: Vec<Element> = table
        .t_bodies()
        .item(0)
        .map(|section| section_rows(&section))
        .unwrap_or_default();
    for row in &body_rows {
        for (i, cell) in leading_cells(row, count).iter().enumerate() {
            pin_height(cell, props.border, probes.include_padding);
            pin_width(
                cell,
                props.border,
                probes.include_padding,
                column_widths.get(i).copied(),
            );
        }
    }

    // Mini header: one synthetic row per header row.
    for row in &header_rows {
        let tr = document
            .create_element("tr")
            .map_err(|_| FixTableError::Dom("failed to create fixed-column row".into()))?;
        head_section
            .append_child(&tr)
            .map_err(|_| FixTableError::Dom("failed to attach fixed-column row".into()))?;
        for cell in leading_cells(row, count) {
            append_clone(&tr, &cell)?;
        }
    }
    pane.append_child(&head_div)
        .map_err(|_| FixTableError::Dom("failed to attach fixed-column header".into()))?;

    // Mini body: synthetic rows of exactly `fixed_columns` cells, keeping
    // the alternating-row class of the source row.
    d::set_px(&body_div, "margin-top", -1.0);
    d::set_px(&body_div, "height", viewport_height + props.border + 2.0);
    for row in &body_rows {
        let tr = document
            .create_element("tr")
            .map_err(|_| FixTableError::Dom("failed to create fixed-column row".into()))?;
        if let Some(alt_class) = &config.alt_class {
            if row.class_list().contains(alt_class) {
                let _ = tr.class_list().add_1(alt_class);
            }
        }
        body_section
            .append_child(&tr)
            .map_err(|_| FixTableError::Dom("failed to attach fixed-column row".into()))?;
        for cell in leading_cells(row, count) {
            append_clone(&tr, &cell)?;
        }
    }
    pane.append_child(&body_div)
        .map_err(|_| FixTableError::Dom("failed to attach fixed-column body".into()))?;

    // The pane itself stays zero-height; the child panes render through.
    d::set_px(pane, "height", 0.0);
    d::set_px(pane, "width", pane_width);

    // Footer slice, sized to the mini table so column-spanning cells fit.
    if config.footer || config.clone_head_to_foot {
        if let Some(footer_row) = fixed_body
            .query_selector(&format!("div.{} tr", classes::TFOOT))
            .ok()
            .flatten()
        {
            let (foot_div, foot_table, foot_section) =
                mini_pane(document, classes::TFOOT, "tfoot", original_class)?;
            let tr = document
                .create_element("tr")
                .map_err(|_| FixTableError::Dom("failed to create fixed-column row".into()))?;
            foot_section
                .append_child(&tr)
                .map_err(|_| FixTableError::Dom("failed to attach fixed-column row".into()))?;
            for cell in leading_cells(&footer_row, count) {
                pin_height(&cell, props.border, probes.include_padding);
                append_clone(&tr, &cell)?;
            }
            pane.append_child(&foot_div)
                .map_err(|_| FixTableError::Dom("failed to attach fixed-column footer".into()))?;
            d::set_px(&foot_div, "top", probes.scrollbar_width);
            d::set_px(&foot_div, "width", d::inner_width(&foot_table));
        }
    }

    Ok(FixedColumnPanes {
        viewport: body_div,
        body_table,
    })
}
