// src/aggregate.rs
//! The two report views over the canonical dataset.
//!
//! Both start the same way: keep trades filed at or after `since`, apply the
//! ticker filter, group by ticker (groups come out in ticker order). They then
//! differ in what they count and how they rank. Sorting is stable, so exact
//! ties keep ticker order.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;

use crate::model::Trade;

/// Optional allow-list / deny-list on tickers.
/// A non-empty allow-list restricts to its tickers; the deny-list is applied after.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickerFilter {
    allow: BTreeSet<String>,
    deny: BTreeSet<String>,
}

impl TickerFilter {
    pub fn new<A, D>(allow: A, deny: D) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        fn set<I>(items: I) -> BTreeSet<String>
        where
            I: IntoIterator,
            I::Item: AsRef<str>,
        {
            items
                .into_iter()
                .map(|t| t.as_ref().trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect()
        }
        Self { allow: set(allow), deny: set(deny) }
    }

    pub fn admits(&self, ticker: &str) -> bool {
        (self.allow.is_empty() || self.allow.contains(ticker)) && !self.deny.contains(ticker)
    }

    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

/// Recent-filings row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyRow {
    pub ticker: String,
    pub trades: usize,
    pub politicians: Vec<String>,
    pub buys: usize,
    pub sells: usize,
    pub people: usize,
}

/// Trend-window row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendRow {
    pub ticker: String,
    pub buys: usize,
    pub sells: usize,
    pub politicians: Vec<String>,
    pub total: usize,
}

#[derive(Default)]
struct Tally {
    trades: usize,
    buys: usize,
    sells: usize,
    names: BTreeSet<String>,
}

/// Trades inside the window that pass the filter, dataset order.
pub fn window<'a>(
    records: &'a [Trade],
    since: NaiveDateTime,
    filter: &TickerFilter,
) -> Vec<&'a Trade> {
    records
        .iter()
        .filter(|t| t.filing_date >= since && filter.admits(&t.ticker))
        .collect()
}

fn tally(records: &[Trade], since: NaiveDateTime, filter: &TickerFilter) -> BTreeMap<String, Tally> {
    let mut groups: BTreeMap<String, Tally> = BTreeMap::new();
    for t in window(records, since, filter) {
        let g = groups.entry(t.ticker.clone()).or_default();
        g.trades += 1;
        g.buys += usize::from(t.is_buy);
        g.sells += usize::from(t.is_sell);
        if !t.name.is_empty() {
            g.names.insert(t.name.clone());
        }
    }
    groups
}

/// Per ticker: trades, distinct people, buys/sells.
/// Ranked by `people` desc, then `trades` desc.
pub fn group_daily(records: &[Trade], since: NaiveDateTime, filter: &TickerFilter) -> Vec<DailyRow> {
    let mut rows: Vec<DailyRow> = tally(records, since, filter)
        .into_iter()
        .map(|(ticker, g)| DailyRow {
            ticker,
            trades: g.trades,
            people: g.names.len(),
            politicians: g.names.into_iter().collect(),
            buys: g.buys,
            sells: g.sells,
        })
        .collect();

    rows.sort_by(|a, b| b.people.cmp(&a.people).then(b.trades.cmp(&a.trades)));
    rows
}

/// Per ticker: buys, sells, `total = buys + sells`.
/// Ranked by `buys` desc, then `total` desc.
pub fn trend_window(records: &[Trade], since: NaiveDateTime, filter: &TickerFilter) -> Vec<TrendRow> {
    let mut rows: Vec<TrendRow> = tally(records, since, filter)
        .into_iter()
        .map(|(ticker, g)| TrendRow {
            ticker,
            buys: g.buys,
            sells: g.sells,
            total: g.buys + g.sells,
            politicians: g.names.into_iter().collect(),
        })
        .collect();

    rows.sort_by(|a, b| b.buys.cmp(&a.buys).then(b.total.cmp(&a.total)));
    rows
}
