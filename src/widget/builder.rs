//! Pane construction.
//!
//! Decomposes a normalized table into the wrapper hierarchy
//!
//! ```text
//! div.fht-table-wrapper
//! ├── div.fht-fixed-column        (only with frozen columns)
//! └── div.fht-fixed-body          (only with frozen columns, else inlined)
//!     ├── div.fht-thead  > table  (cloned header group)
//!     ├── div.fht-tbody  > table  (the original table, header offset away)
//!     └── div.fht-tfoot  > table  (optional footer)
//! ```
//!
//! Setup is idempotent: the wrapper is detected via its class and the table
//! carries an init marker, so a second pass re-measures instead of
//! re-wrapping. All width pinning flows through [`fix_pane_cell_widths`],
//! which plants an `fht-cell` div inside each first-row cell.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDivElement, HtmlTableElement, HtmlTableRowElement};

use crate::classes;
use crate::config::Config;
use crate::dom as d;
use crate::error::{FixTableError, Result};
use crate::metrics::{self, TableProps};
use crate::probe::Probes;
use crate::widget::{fixed_column, footer};

/// References into the built pane structure, captured so later event
/// handling never has to re-walk the DOM.
pub(crate) struct PaneSet {
    pub(crate) wrapper: HtmlDivElement,
    pub(crate) body_pane: HtmlDivElement,
    pub(crate) header_pane: HtmlDivElement,
    pub(crate) header_table: Element,
    pub(crate) footer_pane: Option<HtmlDivElement>,
    pub(crate) footer_table: Option<Element>,
    pub(crate) fixed_column_pane: Option<HtmlDivElement>,
    /// The mini body viewport inside the fixed-column pane.
    pub(crate) fixed_column_viewport: Option<HtmlDivElement>,
    /// The mini body table the wheel handler drives.
    pub(crate) fixed_column_table: Option<Element>,
    pub(crate) fixed_columns: u32,
    pub(crate) props: TableProps,
}

/// A table is eligible once it has a non-empty header group and a non-empty
/// body group. Anything else is a markup error at init time.
pub(crate) fn is_eligible(table: &HtmlTableElement) -> bool {
    let has_header_rows = table
        .t_head()
        .map(|head| head.rows().length() > 0)
        .unwrap_or(false);
    let has_body_rows = table
        .t_bodies()
        .item(0)
        .and_then(|el| el.dyn_into::<web_sys::HtmlTableSectionElement>().ok())
        .map(|body| body.rows().length() > 0)
        .unwrap_or(false);
    has_header_rows && has_body_rows
}

fn wrap_element(
    document: &Document,
    el: &Element,
    class: &str,
    styles: &[(&str, &str)],
) -> Result<HtmlDivElement> {
    let div = d::create_div(document)?;
    div.set_class_name(class);
    for (property, value) in styles {
        d::set_style(&div, property, value);
    }
    let parent = el
        .parent_node()
        .ok_or_else(|| FixTableError::Dom("element has no parent to wrap under".into()))?;
    parent
        .insert_before(&div, Some(el))
        .map_err(|_| FixTableError::Dom("failed to insert wrapper".into()))?;
    div.append_child(el)
        .map_err(|_| FixTableError::Dom("failed to re-parent element".into()))?;
    Ok(div)
}

/// First-row cells of the pane's dominant section (header before footer
/// before body — in the body pane this lands on the hidden original header
/// row, which is what controls the column grid).
fn first_row_cells(pane: &Element) -> Vec<Element> {
    let section = pane
        .query_selector("thead")
        .ok()
        .flatten()
        .or_else(|| pane.query_selector("tfoot").ok().flatten())
        .or_else(|| pane.query_selector("tbody").ok().flatten());
    let Some(row) = section.and_then(|s| s.query_selector("tr").ok().flatten()) else {
        return Vec::new();
    };
    let Some(row) = row.dyn_ref::<HtmlTableRowElement>() else {
        return Vec::new();
    };
    let cells = row.cells();
    (0..cells.length()).filter_map(|i| cells.item(i)).collect()
}

/// Pin first-row cell widths by planting (or reusing) an `fht-cell` div in
/// each cell. Header and footer panes additionally pad their last cell so
/// the pane reaches over the body pane's scrollbar.
pub(crate) fn fix_pane_cell_widths(
    pane: &Element,
    widths: &[f64],
    probes: &Probes,
    pad_last: bool,
) {
    let cells = first_row_cells(pane);
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        let Some(width) = widths.get(i) else { break };
        let spacer = cell.query_selector(&format!("div.{}", classes::CELL)).ok().flatten();
        let spacer = match spacer {
            Some(existing) => existing,
            None => {
                let Some(document) = cell.owner_document() else {
                    continue;
                };
                let Ok(div) = document.create_element("div") else {
                    continue;
                };
                div.set_class_name(classes::CELL);
                if cell.append_child(&div).is_err() {
                    continue;
                }
                div
            }
        };
        d::set_px(&spacer, "width", width.floor());

        if pad_last && i == last {
            let padding = metrics::scrollbar_padding(
                d::inner_width(cell),
                d::content_width(cell),
                probes.scrollbar_width,
            );
            d::set_px(
                cell,
                "padding-right",
                d::computed_px(cell, "padding-right") + padding,
            );
        }
    }
}

/// Measure first-row column widths for every row group, plus the border
/// scalar that corrects for the box model.
pub(crate) fn measure_table_props(table: &HtmlTableElement, border_collapse: bool) -> TableProps {
    let border = table
        .query_selector("th:first-child")
        .ok()
        .flatten()
        .or_else(|| table.query_selector("td:first-child").ok().flatten())
        .map(|cell| metrics::border_width(d::outer_width(&cell), d::inner_width(&cell), border_collapse))
        .unwrap_or(0.0);

    let row_widths = |selector: &str| -> Vec<f64> {
        let Some(row) = table.query_selector(selector).ok().flatten() else {
            return Vec::new();
        };
        let Some(row) = row.dyn_ref::<HtmlTableRowElement>() else {
            return Vec::new();
        };
        let cells = row.cells();
        (0..cells.length())
            .filter_map(|i| cells.item(i))
            .map(|cell| d::content_width(&cell) + border)
            .collect()
    };

    TableProps {
        thead: row_widths("thead tr:first-child"),
        tbody: row_widths("tbody tr:first-child"),
        tfoot: row_widths("tfoot tr:first-child"),
        border,
    }
}

fn apply_alt_rows(table: &HtmlTableElement, alt_class: &str) {
    let Some(body) = table
        .t_bodies()
        .item(0)
        .and_then(|el| el.dyn_into::<web_sys::HtmlTableSectionElement>().ok())
    else {
        return;
    };
    let rows = body.rows();
    let mut visible_index = 0;
    for i in 0..rows.length() {
        let Some(row) = rows.item(i) else { continue };
        if d::outer_height(&row) == 0.0 {
            continue;
        }
        if metrics::is_alt_row(visible_index) {
            let _ = row.class_list().add_1(alt_class);
        }
        visible_index += 1;
    }
}

/// Build (or re-measure) the full pane structure for `table`.
///
/// `original_class`/`original_style` are the table's attributes as they were
/// before the widget ever touched it; every cloned pane table inherits them
/// so theme CSS keeps applying.
#[allow(clippy::too_many_lines)]
pub(crate) fn setup_table(
    document: &Document,
    table: &HtmlTableElement,
    config: &Config,
    probes: &Probes,
    original_class: &str,
    original_style: Option<&str>,
) -> Result<PaneSet> {
    let thead = table
        .t_head()
        .ok_or_else(|| FixTableError::Markup("table has no header group".into()))?;

    // Effective width: reserve the scrollbar out of the configured width so
    // the header pane and the scrolled body line up.
    let parent_width = table
        .parent_element()
        .map(|p| d::content_width(&p))
        .unwrap_or(0.0);
    let effective = metrics::effective_width(&config.width, parent_width, probes.scrollbar_width);
    d::set_px(table, "width", effective);

    let wrapper = match d::closest_with_class(table, classes::WRAPPER) {
        Some(existing) => existing
            .dyn_into::<HtmlDivElement>()
            .map_err(|_| FixTableError::Dom("wrapper is not a div".into()))?,
        None => {
            let _ = table.class_list().add_1(classes::TABLE);
            wrap_element(
                document,
                table,
                classes::WRAPPER,
                &[("overflow", "hidden"), ("position", "relative")],
            )?
        }
    };

    let fixed_columns = config.resolved_fixed_columns(classes::marker_cell_count(&thead));

    let mut fixed_column_pane = wrapper
        .query_selector(&format!("div.{}", classes::FIXED_COLUMN_PANE))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlDivElement>().ok());
    if fixed_columns > 0 && fixed_column_pane.is_none() {
        wrap_element(
            document,
            table,
            classes::FIXED_BODY,
            &[
                ("top", "0"),
                ("left", "0"),
                ("position", "absolute"),
                ("width", "100%"),
            ],
        )?;
        let pane = d::create_div(document)?;
        pane.set_class_name(classes::FIXED_COLUMN_PANE);
        for (property, value) in [
            ("top", "0"),
            ("left", "0"),
            ("z-index", "1"),
            ("position", "absolute"),
        ] {
            d::set_style(&pane, property, value);
        }
        wrapper
            .insert_before(&pane, wrapper.first_child().as_ref())
            .map_err(|_| FixTableError::Dom("failed to attach fixed-column pane".into()))?;
        fixed_column_pane = Some(pane);
    }

    d::set_style(&wrapper, "width", &config.width.to_css());
    d::set_style(&wrapper, "height", &config.height.to_css());
    let _ = wrapper.class_list().add_1(&config.theme_class);

    let first_time = !table.class_list().contains(classes::TABLE_INIT);
    if first_time {
        wrap_element(
            document,
            table,
            classes::TBODY,
            &[("overflow", "auto"), ("position", "relative")],
        )?;
    }
    let body_pane = d::closest_with_class(table, classes::TBODY)
        .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        .ok_or_else(|| FixTableError::Dom("body pane missing".into()))?;

    let props = measure_table_props(table, config.border_collapse);

    fix_pane_cell_widths(&body_pane, &props.tbody, probes, false);

    // Scoped lookup: the fixed-column pane holds mini panes with the same
    // classes, so only the wrapper's own header pane (directly below it or
    // below the fixed-body container) counts.
    let header_pane = match wrapper
        .query_selector(&format!(
            ":scope > div.{thead}, :scope > div.{body} > div.{thead}",
            thead = classes::THEAD,
            body = classes::FIXED_BODY,
        ))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
    {
        Some(existing) => existing,
        None => {
            let pane = d::create_div(document)?;
            pane.set_class_name(classes::THEAD);
            d::set_style(&pane, "overflow", "hidden");
            d::set_style(&pane, "position", "relative");

            let inner = document
                .create_element("table")
                .map_err(|_| FixTableError::Dom("failed to create header table".into()))?;
            inner.set_class_name(&format!("{} {}", classes::TABLE, original_class));
            if let Some(style_text) = original_style {
                let _ = inner.set_attribute("style", style_text);
            }
            let clone = thead
                .clone_node_with_deep(true)
                .map_err(|_| FixTableError::Dom("failed to clone header group".into()))?;
            inner
                .append_child(&clone)
                .map_err(|_| FixTableError::Dom("failed to assemble header pane".into()))?;
            pane.append_child(&inner)
                .map_err(|_| FixTableError::Dom("failed to assemble header pane".into()))?;

            // Header pane sits above the body block; with fixed columns that
            // block is the fixed-body container.
            let host: Element = if fixed_columns > 0 {
                d::closest_with_class(table, classes::FIXED_BODY)
                    .unwrap_or_else(|| wrapper.clone().into())
            } else {
                wrapper.clone().into()
            };
            host.insert_before(&pane, host.first_child().as_ref())
                .map_err(|_| FixTableError::Dom("failed to attach header pane".into()))?;

            // Pin cloned header cells to the live header's widths so the
            // clone cannot reflow to different column boundaries.
            let source_ths = thead.query_selector_all("tr th").ok();
            let clone_ths = inner.query_selector_all("tr th").ok();
            if let (Some(source_ths), Some(clone_ths)) = (source_ths, clone_ths) {
                for i in 0..source_ths.length().min(clone_ths.length()) {
                    let (Some(source), Some(target)) = (
                        source_ths.get(i).and_then(|n| n.dyn_into::<Element>().ok()),
                        clone_ths.get(i).and_then(|n| n.dyn_into::<Element>().ok()),
                    ) else {
                        continue;
                    };
                    d::set_px(&target, "min-width", d::content_width(&source) + 0.5);
                }
            }
            pane
        }
    };
    fix_pane_cell_widths(&header_pane, &props.thead, probes, true);

    // Slide the table up so its own (duplicate) header hides under the pane.
    d::set_px(table, "margin-top", -d::outer_height(&header_pane));

    let mut footer_pane = None;
    let mut footer_height = 0.0;
    if config.footer {
        footer_pane = footer::setup_footer(
            document,
            table,
            &wrapper,
            config,
            &props,
            probes,
            fixed_columns,
        )?;
        if let Some(pane) = &footer_pane {
            footer_height = d::outer_height(pane);
        }
    }

    let header_height = d::outer_height(&thead);
    let body_height = metrics::body_pane_height(
        d::content_height(&wrapper),
        header_height,
        footer_height,
        props.border,
    );
    d::set_px(&body_pane, "height", body_height);

    let _ = table.class_list().add_1(classes::TABLE_INIT);

    if let Some(alt_class) = &config.alt_class {
        apply_alt_rows(table, alt_class);
    }

    let (fixed_column_viewport, fixed_column_table) = match (&fixed_column_pane, fixed_columns) {
        (Some(pane), n) if n > 0 => {
            let built = fixed_column::setup_fixed_column(
                document,
                table,
                pane,
                &wrapper,
                config,
                &props,
                probes,
                n,
                original_class,
            )?;
            (Some(built.viewport), Some(built.body_table))
        }
        _ => (None, None),
    };

    if !config.auto_show {
        d::set_style(&wrapper, "display", "none");
    }

    let header_table = header_pane
        .query_selector("table")
        .ok()
        .flatten()
        .ok_or_else(|| FixTableError::Dom("header pane missing its table".into()))?;
    let footer_table = footer_pane
        .as_ref()
        .and_then(|pane| pane.query_selector("table").ok().flatten());

    Ok(PaneSet {
        wrapper,
        body_pane,
        header_pane,
        header_table,
        footer_pane,
        footer_table,
        fixed_column_pane,
        fixed_column_viewport,
        fixed_column_table,
        fixed_columns,
        props,
    })
}
