// src/publish.rs
//
// Webhook delivery: the report goes out as sequential `{"content": chunk}` posts.

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::info;

use crate::config::consts::CHUNK_LIMIT;
use crate::core::net;
use crate::error::Result;
use crate::report::chunk_report;

#[derive(Serialize)]
struct WebhookMessage<'a> {
    content: &'a str,
}

/// Post `report` in chunks, in order. Stops at the first failed post.
/// Returns the number of chunks delivered.
pub fn post_report(client: &Client, url: &str, report: &str) -> Result<usize> {
    let chunks = chunk_report(report, CHUNK_LIMIT);
    for chunk in &chunks {
        net::post_json(client, url, &WebhookMessage { content: chunk })?;
    }
    info!("posted report in {} chunk(s)", chunks.len());
    Ok(chunks.len())
}
