// src/core/html.rs
//
// Thin helpers over `scraper` for reading tables: static selectors and the
// cell-text rule shared by header and data cells.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

fn sel(css: &'static str) -> Selector {
    // Only ever called with the literals below.
    Selector::parse(css).expect("static selector")
}

pub static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
pub static THEAD: LazyLock<Selector> = LazyLock::new(|| sel("thead"));
pub static ROW: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
pub static CELL: LazyLock<Selector> = LazyLock::new(|| sel("th, td"));

/// Inner text of an element: each text node trimmed, empties dropped,
/// joined with one space, then whitespace-collapsed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    let joined = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_ws(&joined)
}

/// Text of every `th`/`td` under `el`, document order, at most `limit` cells.
pub fn cell_texts(el: ElementRef<'_>, limit: usize) -> Vec<String> {
    el.select(&CELL).take(limit).map(cell_text).collect()
}

/// Lowercased copies, for case-insensitive row comparison.
pub fn lower_all(cells: &[String]) -> Vec<String> {
    cells.iter().map(|c| c.to_lowercase()).collect()
}
