// src/specs/tables.rs
//! Table extraction: one HTML document → candidate trades.
//!
//! Every `<table>` is tried. A table is read only when its headers resolve
//! `ticker`, `name` and `type`; anything else is skipped without affecting the
//! other tables of the same document.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::config::consts::MAX_HEADER_CELLS;
use crate::core::html::{self, cell_texts, lower_all};
use crate::model::{Field, RawTrade};

use super::headers::{self, HeaderMap};

/// All candidates in a document, table-then-row order.
pub fn extract_document(html_doc: &str) -> Vec<RawTrade> {
    let doc = Html::parse_document(html_doc);
    let mut out = Vec::new();

    for (n, table) in doc.select(&html::TABLE).enumerate() {
        match extract_table(table) {
            Some(mut rows) => {
                debug!("table {n}: {} candidate rows", rows.len());
                out.append(&mut rows);
            }
            None => debug!("table {n}: skipped"),
        }
    }
    out
}

/// Candidates of one table, or `None` when the table has no usable header.
pub fn extract_table(table: ElementRef<'_>) -> Option<Vec<RawTrade>> {
    let headers = header_texts(table);
    if headers.is_empty() {
        return None;
    }

    let map = headers::resolve(&headers);
    if !map.is_usable() {
        debug!(
            "missing {:?} in headers {:?}",
            map.missing_required().iter().map(|f| f.as_str()).collect::<Vec<_>>(),
            headers
        );
        return None;
    }
    // Usable implies at least one resolved column.
    let max_ix = map.max_index()?;

    let mut rows: Vec<Vec<String>> = table
        .select(&html::ROW)
        .map(|tr| cell_texts(tr, usize::MAX))
        .filter(|cells| cells.len() > max_ix)
        .collect();

    // Header row repeated as the first data row.
    if rows.first().is_some_and(|first| lower_all(first) == lower_all(&headers)) {
        rows.remove(0);
    }

    Some(rows.iter().map(|cells| pick(cells, &map)).collect())
}

/// `<thead>` cells when present, else the first row; capped.
pub fn header_texts(table: ElementRef<'_>) -> Vec<String> {
    let from_head = table
        .select(&html::THEAD)
        .next()
        .map(|head| cell_texts(head, MAX_HEADER_CELLS))
        .unwrap_or_default();
    if !from_head.is_empty() {
        return from_head;
    }

    table
        .select(&html::ROW)
        .next()
        .map(|tr| cell_texts(tr, MAX_HEADER_CELLS))
        .unwrap_or_default()
}

fn pick(cells: &[String], map: &HeaderMap) -> RawTrade {
    let mut rec = RawTrade::default();
    for field in Field::ALL {
        let value = map
            .get(field)
            .and_then(|i| cells.get(i))
            .cloned()
            .unwrap_or_default();
        rec.set(field, value);
    }
    rec
}
