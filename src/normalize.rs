//! Structure normalizer.
//!
//! Wiki-rendered tables usually arrive as a bare `<tbody>` with the header
//! rows mixed in. Before panes can be built the table needs explicit row
//! groups, so this module reclassifies leading and trailing all-header rows
//! into `<thead>` and `<tfoot>`.
//!
//! The classification itself is pure and operates on per-row cell counts;
//! the DOM shell only snapshots the rows, asks the pure core how many to
//! move, and moves them. Safe to invoke on a table that already has explicit
//! groups.

/// Cell-type counts for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowShape {
    /// `<th>` cells in the row.
    pub header_cells: usize,
    /// `<td>` cells in the row.
    pub data_cells: usize,
}

impl RowShape {
    /// A row qualifies for a header/footer group iff it holds header cells
    /// and nothing else.
    pub fn is_all_header(&self) -> bool {
        self.data_cells == 0 && self.header_cells > 0
    }
}

/// Number of leading rows that belong in the header group.
///
/// The scan stops at the first row containing a data cell; everything before
/// it qualifies.
pub fn leading_header_rows(rows: &[RowShape]) -> usize {
    rows.iter().take_while(|r| r.is_all_header()).count()
}

/// Number of trailing rows that belong in the footer group.
///
/// Scans bottom-up with the same all-header test, but never consumes rows
/// already claimed by the leading header block — an all-header table
/// normalizes to "everything in the header, no footer".
pub fn trailing_footer_rows(rows: &[RowShape], leading: usize) -> usize {
    let free = &rows[leading.min(rows.len())..];
    free.iter().rev().take_while(|r| r.is_all_header()).count()
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlTableElement, HtmlTableRowElement};

    use super::{leading_header_rows, trailing_footer_rows, RowShape};
    use crate::error::{FixTableError, Result};

    fn shape_of(row: &HtmlTableRowElement) -> RowShape {
        let cells = row.cells();
        let mut shape = RowShape {
            header_cells: 0,
            data_cells: 0,
        };
        for i in 0..cells.length() {
            let Some(cell) = cells.item(i) else { continue };
            if cell.tag_name().eq_ignore_ascii_case("th") {
                shape.header_cells += 1;
            } else {
                shape.data_cells += 1;
            }
        }
        shape
    }

    /// Give `table` explicit header and footer groups.
    ///
    /// When a `<thead>` is missing, one is always created (possibly empty —
    /// the caller treats an empty header group as "not tabular" and skips
    /// the table). A `<tfoot>` is created only when at least one trailing
    /// row qualifies.
    pub fn normalize(table: &HtmlTableElement) -> Result<()> {
        let needs_head = table.t_head().is_none();
        let needs_foot = table.t_foot().is_none();
        if !needs_head && !needs_foot {
            return Ok(());
        }

        let Some(body) = table.t_bodies().item(0) else {
            // Nothing to reclassify; the caller's body-group check will skip
            // this table.
            if needs_head {
                table.create_t_head();
            }
            return Ok(());
        };
        let body_rows = body
            .dyn_into::<web_sys::HtmlTableSectionElement>()
            .map_err(|_| FixTableError::Dom("tbody is not a table section".into()))?
            .rows();

        // Snapshot first: the rows collection is live and moving a row would
        // shift every later index.
        let mut rows: Vec<HtmlTableRowElement> = Vec::with_capacity(body_rows.length() as usize);
        for i in 0..body_rows.length() {
            if let Some(row) = body_rows
                .item(i)
                .and_then(|el: Element| el.dyn_into::<HtmlTableRowElement>().ok())
            {
                rows.push(row);
            }
        }
        let shapes: Vec<RowShape> = rows.iter().map(shape_of).collect();

        let leading = if needs_head {
            leading_header_rows(&shapes)
        } else {
            0
        };

        if needs_head {
            let thead = table.create_t_head();
            for row in &rows[..leading] {
                thead
                    .append_child(row)
                    .map_err(|_| FixTableError::Dom("failed to move header row".into()))?;
            }
        }

        if needs_foot {
            let trailing = trailing_footer_rows(&shapes, leading);
            if trailing > 0 {
                let tfoot = table.create_t_foot();
                for row in &rows[rows.len() - trailing..] {
                    tfoot
                        .append_child(row)
                        .map_err(|_| FixTableError::Dom("failed to move footer row".into()))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::normalize;
