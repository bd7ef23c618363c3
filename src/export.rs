// src/export.rs
//
// Aggregation rows → flat string tables → CSV.
// Name lists are joined with ", " so every cell stays a plain string.

use std::io::Write;

use crate::aggregate::{DailyRow, TrendRow};
use crate::error::Result;

pub const DAILY_HEADERS: [&str; 6] = ["ticker", "trades", "politicians", "buys", "sells", "people"];
pub const TREND_HEADERS: [&str; 5] = ["ticker", "buys", "sells", "politicians", "total_trades"];

/// Header row plus string rows, ready for any delimited writer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn with_headers(headers: &[&str]) -> Self {
        Self { headers: headers.iter().map(|h| s!(*h)).collect(), rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

pub fn daily_table(rows: &[DailyRow]) -> Table {
    let mut t = Table::with_headers(&DAILY_HEADERS);
    t.rows = rows
        .iter()
        .map(|r| vec![
            r.ticker.clone(),
            r.trades.to_string(),
            r.politicians.join(", "),
            r.buys.to_string(),
            r.sells.to_string(),
            r.people.to_string(),
        ])
        .collect();
    t
}

pub fn trend_table(rows: &[TrendRow]) -> Table {
    let mut t = Table::with_headers(&TREND_HEADERS);
    t.rows = rows
        .iter()
        .map(|r| vec![
            r.ticker.clone(),
            r.buys.to_string(),
            r.sells.to_string(),
            r.politicians.join(", "),
            r.total.to_string(),
        ])
        .collect();
    t
}

/// Write headers and rows as CSV to any writer.
pub fn write_csv<W: Write>(w: W, table: &Table) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(table: &Table) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, table)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
