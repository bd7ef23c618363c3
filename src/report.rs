// src/report.rs
//! Markdown report and delivery chunking.
//!
//! Two sections: a bullet list of recent filings and a ranked table of the
//! trend window. Each section falls back to a single "No filings …" line
//! when its rows are empty. Name lists are shortened so no line gets near the
//! delivery chunk limit; [`chunk_report`] then only has to cut between lines.

use std::borrow::Cow;
use std::mem::take;

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::aggregate::{DailyRow, TrendRow};
use crate::config::consts::LINE_BUDGET;

/// Room kept for the `… (+N more)` tail when a name list is cut.
const SUFFIX_RESERVE: usize = 24;

/// Clock values printed in the report, as wall-clock time in the report zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportHeader {
    pub now: NaiveDateTime,
    pub tz_label: String,
    pub daily_since: NaiveDateTime,
    pub trend_since: NaiveDateTime,
    pub trend_days: i64,
}

impl ReportHeader {
    pub fn new<Tz: TimeZone>(
        now: &DateTime<Tz>,
        tz_label: &str,
        daily_since: &DateTime<Tz>,
        trend_since: &DateTime<Tz>,
        trend_days: i64,
    ) -> Self {
        Self {
            now: now.naive_local(),
            tz_label: s!(tz_label),
            daily_since: daily_since.naive_local(),
            trend_since: trend_since.naive_local(),
            trend_days,
        }
    }
}

fn human(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Comma-joined names, cut to `budget` characters with a `… (+N more)` tail.
pub fn join_names(names: &[String], budget: usize) -> String {
    let full = names.join(", ");
    if full.chars().count() <= budget {
        return full;
    }

    let limit = budget.saturating_sub(SUFFIX_RESERVE);
    let mut out = s!();
    let mut used = 0usize;
    let mut kept = 0usize;
    for name in names {
        let add = name.chars().count() + if kept == 0 { 0 } else { 2 };
        if used + add > limit { break; }
        if kept > 0 { out.push_str(", "); }
        out.push_str(name);
        used += add;
        kept += 1;
    }

    let rest = names.len() - kept;
    if out.is_empty() {
        format!("… (+{rest} more)")
    } else {
        format!("{out} … (+{rest} more)")
    }
}

fn escape_cell(s: &str) -> Cow<'_, str> {
    if s.contains('|') { Cow::Owned(s.replace('|', "\\|")) } else { Cow::Borrowed(s) }
}

pub fn render(header: &ReportHeader, daily: &[DailyRow], trend: &[TrendRow]) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "# Congressional Trades — {} ({})\n",
        header.now.format("%Y-%m-%d"),
        header.tz_label
    ));

    lines.push(format!("## New Filings (since {})\n", human(&header.daily_since)));
    if daily.is_empty() {
        lines.push(s!("No filings in the period.\n"));
    } else {
        for r in daily {
            let head = format!(
                "- **{}** — {} people, {} trades (buys: {}, sells: {}) — ",
                r.ticker, r.people, r.trades, r.buys, r.sells
            );
            let budget = LINE_BUDGET.saturating_sub(head.chars().count());
            lines.push(head + &join_names(&r.politicians, budget));
        }
        lines.push(s!());
    }

    lines.push(format!(
        "## {}-Day Trend (since {}) — Ranked by Buys\n",
        header.trend_days,
        header.trend_since.format("%Y-%m-%d")
    ));
    if trend.is_empty() {
        lines.push(format!("No filings in the {}-day window.\n", header.trend_days));
    } else {
        lines.push(s!("| Rank | Ticker | Buys | Sells | Total | Politicians |"));
        lines.push(s!("|---:|:---:|---:|---:|---:|:--|"));
        for (i, r) in trend.iter().enumerate() {
            let head = format!(
                "| {} | **{}** | {} | {} | {} | ",
                i + 1, r.ticker, r.buys, r.sells, r.total
            );
            let budget = LINE_BUDGET.saturating_sub(head.chars().count() + 2);
            // Escape first so the budget counts the backslashes.
            let escaped: Vec<String> = r.politicians.iter().map(|n| escape_cell(n).into_owned()).collect();
            lines.push(join!(&head, &join_names(&escaped, budget), " |"));
        }
        lines.push(s!());
    }

    lines.join("\n")
}

/// Split `text` into chunks of at most `limit` characters, cutting only
/// between lines. A single line longer than `limit` is wrapped on its own.
/// Whitespace-only chunks are dropped.
pub fn chunk_report(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = s!();
    let mut current_len = 0usize;

    for line in text.lines() {
        let pieces: Vec<Cow<'_, str>> = if line.chars().count() > limit {
            textwrap::wrap(line, limit)
        } else {
            vec![Cow::Borrowed(line)]
        };

        for piece in pieces {
            let n = piece.chars().count();
            if !current.is_empty() && current_len + 1 + n > limit {
                chunks.push(take(&mut current));
                current_len = 0;
            }
            if current.is_empty() && n == 0 {
                continue;
            }
            if !current.is_empty() {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += n;
        }
    }
    if !current.trim().is_empty() {
        chunks.push(current);
    }
    chunks.retain(|c| !c.trim().is_empty());
    chunks
}
