// src/scrape.rs
//
// Document and mirror collection. Everything here is best-effort: a failed
// page ends the walk, a failed mirror is skipped, and whatever was gathered so
// far is returned. Deciding that "nothing" is fatal belongs to the runner.

use std::{fs, path::{Path, PathBuf}};

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    core::net,
    error::Result,
    model::RawTrade,
    progress::Progress,
    specs::{mirror, tables},
};

/// One raw HTML document and where it came from.
pub struct Page {
    pub label: String,
    pub html: String,
}

/// Lazily fetched pages, in order.
pub fn url_pages<'a>(client: &'a Client, urls: &'a [String]) -> impl Iterator<Item = Result<Page>> + 'a {
    urls.iter().map(move |url| {
        debug!("GET {url}");
        net::http_get(client, url).map(|html| Page { label: url.clone(), html })
    })
}

/// Saved pages, in order.
pub fn file_pages(paths: &[PathBuf]) -> impl Iterator<Item = Result<Page>> + '_ {
    paths.iter().map(|p| -> Result<Page> {
        Ok(Page { label: p.display().to_string(), html: fs::read_to_string(p)? })
    })
}

/// Extract every page into one candidate batch.
///
/// With `stop_on_empty`, a page after the first that yields no candidates ends
/// the walk (end of pagination). A page that fails to load always ends it.
pub fn collect_pages<I>(
    pages: I,
    stop_on_empty: bool,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<RawTrade>
where
    I: IntoIterator<Item = Result<Page>>,
{
    let mut out: Vec<RawTrade> = Vec::new();
    let pages = pages.into_iter();
    if let (n, Some(m)) = pages.size_hint() {
        if n == m {
            if let Some(p) = progress.as_deref_mut() { p.begin(n); }
        }
    }

    for (i, page) in pages.enumerate() {
        let page = match page {
            Ok(p) => p,
            Err(e) => {
                warn!("page {}: {e}; stopping", i + 1);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Page {} failed: {e}", i + 1));
                }
                break;
            }
        };

        let mut rows = tables::extract_document(&page.html);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&page.label, rows.len());
        }
        if rows.is_empty() && stop_on_empty && i > 0 {
            debug!("{}: no rows; end of pages", page.label);
            break;
        }
        out.append(&mut rows);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

/// Mirror datasets: saved files first, then URLs. Failures are skipped.
pub fn collect_mirrors(
    client: &Client,
    urls: &[String],
    files: &[PathBuf],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<RawTrade> {
    let mut out: Vec<RawTrade> = Vec::new();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len() + files.len());
    }

    let from_files = files.iter().map(|f| (f.display().to_string(), read_json(f)));
    let from_urls = urls.iter().map(|u| (u.clone(), net::get_json(client, u)));

    for (label, payload) in from_files.chain(from_urls) {
        match payload {
            Ok(v) => {
                let mut rows = mirror::map_dataset(&v);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label, rows.len());
                }
                out.append(&mut rows);
            }
            Err(e) => warn!("mirror {label}: {e}"),
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
