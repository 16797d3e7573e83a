//! Wikitext table-markup preprocessing.
//!
//! This is the text half of the system: it runs before the host wiki renders
//! the table, and its only job is to leave marker classes behind for the DOM
//! widget to find. The transform is line-oriented and deliberately dumb — it
//! assumes the table markup is formatted line-by-line, with `{|` opening the
//! table and `!` opening header cells.
//!
//! Output contract: the table-opening line gains the
//! [`classes::FIXED_HEADER_TABLE`] class (merged into an existing `class`
//! attribute if one is present), and the first `fixed_columns` header-cell
//! lines each gain [`classes::FIXED_COLUMN`] the same way. Everything else
//! passes through untouched.

use crate::classes;

/// Container style used when the caller supplies none.
pub const DEFAULT_CONTAINER_STYLE: &str = "overflow: auto; height: 450px; width: 100%";

/// Options accepted by the hook.
#[derive(Debug, Clone, Default)]
pub struct HookOptions {
    /// Free-form style text for the container div.
    pub style: Option<String>,
    /// Leading columns to freeze; 0 leaves header cells unmarked.
    pub fixed_columns: u32,
}

/// Merge `class` into a line's existing `class="…"` attribute, or inject a
/// fresh attribute right after `anchor` if the line has none.
fn merge_or_add_class(line: &str, anchor: &str, class: &str) -> String {
    if line.contains("class=\"") {
        line.replacen("class=\"", &format!("class=\"{class} "), 1)
    } else {
        line.replacen(anchor, &format!("{anchor} class=\"{class}\""), 1)
    }
}

/// Annotate a block of wikitext table markup with the marker classes.
///
/// The first line containing `{|` is marked as a fixed-header table. Then,
/// scanning from the top of the block, up to `fixed_columns` lines containing
/// a header-cell marker (`!`) are each marked as fixed columns. Lines are
/// otherwise passed through unchanged, including trailing whitespace.
pub fn annotate_table_block(input: &str, options: &HookOptions) -> String {
    let mut lines: Vec<String> = input.split('\n').map(str::to_string).collect();

    for line in lines.iter_mut() {
        if line.contains("{|") {
            *line = merge_or_add_class(line, "{|", classes::FIXED_HEADER_TABLE);
            break;
        }
    }

    if options.fixed_columns > 0 {
        let mut marked = 0;
        for line in lines.iter_mut() {
            if line.contains('!') {
                *line = merge_or_add_class(line, "!", classes::FIXED_COLUMN);
                marked += 1;
                if marked >= options.fixed_columns {
                    break;
                }
            }
        }
    }

    lines.join("\n")
}

/// Wrap rendered table HTML in the scrollable container div.
pub fn wrap_in_container(html: &str, options: &HookOptions) -> String {
    let style = match &options.style {
        Some(style) => format!("overflow: auto; {style}"),
        None => DEFAULT_CONTAINER_STYLE.to_string(),
    };
    format!("<div style=\"{style}\">{html}</div>")
}
