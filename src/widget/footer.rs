//! Fixed footer pane.
//!
//! Which footer (if any) gets built is a pure function of three flags; the
//! DOM work below just executes the chosen policy.

/// How the footer pane's content is sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterPolicy {
    /// Footer mirrors the fixed header pane's table exactly.
    CloneHeader,
    /// Footer is built from the table's own footer row group.
    NativeFooter,
    /// No footer pane.
    None,
}

/// Select the footer policy.
///
/// Only two combinations produce a pane: no native footer group plus an
/// explicit request to mirror the header, or a native footer group used
/// as-is. Everything else, including any combination with `footer` off,
/// yields none.
pub fn footer_policy(has_native_tfoot: bool, clone_head_to_foot: bool, footer: bool) -> FooterPolicy {
    if !footer {
        return FooterPolicy::None;
    }
    match (has_native_tfoot, clone_head_to_foot) {
        (false, true) => FooterPolicy::CloneHeader,
        (true, false) => FooterPolicy::NativeFooter,
        _ => FooterPolicy::None,
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use dom::setup_footer;

#[cfg(target_arch = "wasm32")]
mod dom {
    use web_sys::{Document, Element, HtmlDivElement, HtmlTableElement};

    use super::{footer_policy, FooterPolicy};
    use crate::classes;
    use crate::config::Config;
    use crate::dom as d;
    use crate::error::{FixTableError, Result};
    use crate::metrics::TableProps;
    use crate::probe::Probes;
    use crate::widget::builder::fix_pane_cell_widths;

    /// Build or refresh the footer pane for `wrapper`.
    ///
    /// The pane div is created once and reused on later setup passes. Returns
    /// the pane so the caller can measure its height.
    pub(crate) fn setup_footer(
        document: &Document,
        table: &HtmlTableElement,
        wrapper: &Element,
        config: &Config,
        props: &TableProps,
        probes: &Probes,
        fixed_columns: u32,
    ) -> Result<Option<HtmlDivElement>> {
        use wasm_bindgen::JsCast;

        // Scoped lookup: the fixed-column pane holds a mini footer with the
        // same class, so only the wrapper's own footer pane counts.
        let existing = wrapper
            .query_selector(&format!(
                ":scope > div.{tfoot}, :scope > div.{body} > div.{tfoot}",
                tfoot = classes::TFOOT,
                body = classes::FIXED_BODY,
            ))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlDivElement>().ok());

        let has_native_tfoot = table
            .t_foot()
            .map(|tfoot| tfoot.rows().length() > 0)
            .unwrap_or(false);
        let policy = footer_policy(has_native_tfoot, config.clone_head_to_foot, config.footer);

        let pane = match existing {
            Some(pane) => pane,
            None => {
                if policy == FooterPolicy::None {
                    return Ok(None);
                }
                let pane = d::create_div(document)?;
                pane.set_class_name(classes::TFOOT);
                d::set_style(&pane, "overflow", "hidden");
                d::set_style(&pane, "position", "relative");
                let inner = document
                    .create_element("table")
                    .map_err(|_| FixTableError::Dom("failed to create footer table".into()))?;
                inner.set_class_name(&format!("{} {}", classes::TABLE, table.class_name()));
                pane.append_child(&inner)
                    .map_err(|_| FixTableError::Dom("failed to assemble footer pane".into()))?;

                // With fixed columns the footer belongs to the scrolling
                // body block, not the wrapper itself.
                let parent: Element = if fixed_columns > 0 {
                    d::closest_with_class(table, classes::FIXED_BODY)
                        .unwrap_or_else(|| wrapper.clone())
                } else {
                    wrapper.clone()
                };
                parent
                    .append_child(&pane)
                    .map_err(|_| FixTableError::Dom("failed to attach footer pane".into()))?;
                pane
            }
        };

        match policy {
            FooterPolicy::CloneHeader => {
                let header_table = wrapper
                    .query_selector(&format!(
                        ":scope > div.{thead} > table, :scope > div.{body} > div.{thead} > table",
                        thead = classes::THEAD,
                        body = classes::FIXED_BODY,
                    ))
                    .ok()
                    .flatten()
                    .ok_or_else(|| FixTableError::Dom("header pane missing".into()))?;
                pane.set_inner_html("");
                let clone = header_table
                    .clone_node_with_deep(true)
                    .map_err(|_| FixTableError::Dom("failed to clone header table".into()))?;
                pane.append_child(&clone)
                    .map_err(|_| FixTableError::Dom("failed to attach footer clone".into()))?;
            }
            FooterPolicy::NativeFooter => {
                let inner = pane
                    .query_selector("table")
                    .ok()
                    .flatten()
                    .ok_or_else(|| FixTableError::Dom("footer pane missing its table".into()))?;
                if let Some(tfoot) = table.t_foot() {
                    // Moves the footer group out of the original table; the
                    // negative margin visually re-attaches it to the body.
                    inner
                        .append_child(&tfoot)
                        .map_err(|_| FixTableError::Dom("failed to move footer group".into()))?;
                    d::set_px(&inner, "margin-top", -props.border);
                }
                fix_pane_cell_widths(&pane, &props.tfoot, probes, true);
            }
            FooterPolicy::None => {}
        }

        Ok(Some(pane))
    }
}
