// src/normalize.rs
//! Candidate trades → canonical dataset.
//!
//! Applied to the whole batch, whatever the source:
//! 1. ticker uppercased, everything but `A-Z`/`.` removed
//! 2. name/company/type trimmed
//! 3. dates parsed; unparsable → `None`
//! 4. `is_buy` / `is_sell` from independent patterns on `type`
//! 5. records without ticker or filing date dropped
//! 6. exact duplicates collapsed (first occurrence kept)

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::core::sanitize::clean_ticker;
use crate::model::{RawTrade, Trade};

static BUY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)buy|purchase").expect("static regex"));
static SELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)sell|sale").expect("static regex"));

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// US slash dates before `%Y/%m/%d`, and `%y` before `%Y`:
// "01/05/24" must read as 2024-01-05, not year 1 or year 24.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse the date shapes seen on disclosure pages and mirrors.
/// Offset-bearing timestamps become naive UTC; bare dates become midnight.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt);
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `(is_buy, is_sell)`; both, either or neither may hold.
pub fn classify(kind: &str) -> (bool, bool) {
    (BUY.is_match(kind), SELL.is_match(kind))
}

/// Clean and type one candidate; `None` when it fails the required-field filter.
pub fn normalize_one(raw: &RawTrade) -> Option<Trade> {
    let ticker = clean_ticker(&raw.ticker);
    if ticker.is_empty() {
        return None;
    }
    let filing_date = parse_datetime(&raw.filing_date)?;
    let kind = raw.kind.trim().to_string();
    let (is_buy, is_sell) = classify(&kind);

    Some(Trade {
        ticker,
        name: raw.name.trim().to_string(),
        company: raw.company.trim().to_string(),
        kind,
        filing_date,
        transaction_date: parse_datetime(&raw.transaction_date),
        is_buy,
        is_sell,
    })
}

/// Full pipeline over a batch.
pub fn normalize<'a, I>(batch: I) -> Vec<Trade>
where
    I: IntoIterator<Item = &'a RawTrade>,
{
    dedup(batch.into_iter().filter_map(normalize_one))
}

/// Collapse exact duplicates, keeping first-seen order.
pub fn dedup<I: IntoIterator<Item = Trade>>(records: I) -> Vec<Trade> {
    let mut seen: HashSet<Trade> = HashSet::new();
    let mut out = Vec::new();
    for rec in records {
        if seen.insert(rec.clone()) {
            out.push(rec);
        }
    }
    out
}
