// src/core/net.rs
//
// Blocking HTTP via reqwest. No retries; callers decide what a failure means.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::consts::{MIRROR_TIMEOUT_SECS, PAGE_TIMEOUT_SECS};
use crate::error::{Error, Result};

pub fn client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(PAGE_TIMEOUT_SECS))
        .build()?)
}

fn check(resp: Response, url: &str) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}

/// GET a page body as text.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = check(client.get(url).send()?, url)?;
    Ok(resp.text()?)
}

/// GET a JSON document (mirror datasets are large; longer timeout).
pub fn get_json(client: &Client, url: &str) -> Result<Value> {
    let resp = client
        .get(url)
        .timeout(Duration::from_secs(MIRROR_TIMEOUT_SECS))
        .send()?;
    let resp = check(resp, url)?;
    Ok(resp.json::<Value>()?)
}

/// POST a JSON body; the response body is ignored.
pub fn post_json<T: Serialize + ?Sized>(client: &Client, url: &str, body: &T) -> Result<()> {
    let resp = client.post(url).json(body).send()?;
    check(resp, url)?;
    Ok(())
}
