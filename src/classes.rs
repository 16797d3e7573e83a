//! CSS class names shared between the markup hook and the widget.
//!
//! The preprocessing hook and the DOM widget communicate through exactly two
//! marker classes: one on the table element ("this table wants fixed
//! headers") and one on individual header cells ("this cell belongs to the
//! fixed column set"). Both sides read the constants below; nothing else in
//! the crate spells these names out.
//!
//! The `fht-*` names are structural classes the widget generates while
//! building panes. They double as re-initialization markers: a table carrying
//! [`TABLE_INIT`] is re-measured instead of rebuilt.

/// Marker injected by the hook on the table element.
pub const FIXED_HEADER_TABLE: &str = "fixedheadertable";

/// Marker injected by the hook on header cells that should be frozen.
pub const FIXED_COLUMN: &str = "fixedcolumn";

/// Outermost generated container.
pub const WRAPPER: &str = "fht-table-wrapper";

/// Applied to the original table and to every cloned pane table.
pub const TABLE: &str = "fht-table";

/// Fixed header pane.
pub const THEAD: &str = "fht-thead";

/// Scrollable body pane.
pub const TBODY: &str = "fht-tbody";

/// Fixed footer pane.
pub const TFOOT: &str = "fht-tfoot";

/// Container holding the header/body/footer panes when fixed columns exist.
pub const FIXED_BODY: &str = "fht-fixed-body";

/// Pane holding the frozen leading columns.
pub const FIXED_COLUMN_PANE: &str = "fht-fixed-column";

/// Width-pinning div appended inside first-row cells.
pub const CELL: &str = "fht-cell";

/// Marks a table whose panes have already been built.
pub const TABLE_INIT: &str = "fht-table-init";

/// Count the header cells carrying the [`FIXED_COLUMN`] marker.
///
/// This is the fallback channel for the fixed-column count: when the caller
/// gives no explicit number, the widget trusts whatever the markup hook
/// annotated. A table the hook never touched yields 0.
#[cfg(target_arch = "wasm32")]
pub fn marker_cell_count(thead: &web_sys::HtmlTableSectionElement) -> u32 {
    use wasm_bindgen::JsCast;

    let mut count = 0;
    let rows = thead.rows();
    for r in 0..rows.length() {
        let Some(row) = rows.item(r) else { continue };
        let Ok(cells) = row.query_selector_all("th, td") else {
            continue;
        };
        for c in 0..cells.length() {
            let Some(cell) = cells.get(c).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            else {
                continue;
            };
            if cell.class_list().contains(FIXED_COLUMN) {
                count += 1;
            }
        }
    }
    count
}
