// tests/pipeline.rs
//
// Candidates → canonical dataset → both views → report, with a fixed clock.
//
use chrono::TimeZone;
use chrono_tz::Tz;
use pretty_assertions::assert_eq;

use congress_trades::aggregate::{self, TickerFilter};
use congress_trades::config::options::WindowOptions;
use congress_trades::normalize::{dedup, normalize};
use congress_trades::runner::build_report;
use congress_trades::specs::{mirror, tables};
use congress_trades::{RawTrade, Trade};

const TWO_TABLES: &str = r#"
<table>
  <thead><tr><th>Ticker</th><th>Politician</th><th>Type</th><th>Filing Date</th></tr></thead>
  <tbody>
    <tr><td>AAPL</td><td>Jane</td><td>Purchase</td><td>2024-03-10</td></tr>
    <tr><td>AAPL</td><td>John</td><td>Sale</td><td>2024-03-10</td></tr>
    <tr><td>AAPL</td><td>John</td><td>Purchase</td><td>2024-01-02</td></tr>
  </tbody>
</table>
<table>
  <tr><th>Symbol</th><th>Member</th><th>Transaction</th><th>Filed</th></tr>
  <tr><td>msft</td><td>Jane</td><td>Buy</td><td>03/10/2024</td></tr>
  <tr><td>aapl </td><td> Jane </td><td>Purchase</td><td>2024-03-10</td></tr>
  <tr><td>--</td><td>Jane</td><td>Buy</td><td>2024-03-10</td></tr>
  <tr><td>TSLA</td><td>Jane</td><td>Buy</td><td>soon</td></tr>
</table>
"#;

fn london_noon() -> chrono::DateTime<Tz> {
    chrono_tz::Europe::London.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

fn dataset() -> Vec<Trade> {
    normalize(&tables::extract_document(TWO_TABLES))
}

#[test]
fn normalization_cleans_filters_and_dedups() {
    let records = dataset();
    let tickers: Vec<&str> = records.iter().map(|t| t.ticker.as_str()).collect();
    // duplicate AAPL/Jane collapsed, blank ticker and undated TSLA dropped
    assert_eq!(tickers, vec!["AAPL", "AAPL", "AAPL", "MSFT"]);
    for t in &records {
        assert!(!t.ticker.is_empty());
        assert!(t.ticker.chars().all(|c| c.is_ascii_uppercase() || c == '.'));
    }
    assert_eq!(dedup(records.clone()), records);
}

#[test]
fn daily_view_counts_people_and_sides() {
    let records = dataset();
    let since = london_noon().naive_utc() - chrono::Duration::hours(24);
    let rows = aggregate::group_daily(&records, since, &TickerFilter::default());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ticker, "AAPL");
    assert_eq!(rows[0].people, 2);
    assert_eq!(rows[0].trades, 2);
    assert_eq!((rows[0].buys, rows[0].sells), (1, 1));
    assert_eq!(rows[0].politicians, vec!["Jane", "John"]);
    assert_eq!(rows[1].ticker, "MSFT");
    assert_eq!(rows[1].people, 1);

    for w in rows.windows(2) {
        assert!((w[0].people, w[0].trades) >= (w[1].people, w[1].trades));
    }
    for r in &rows {
        assert_eq!(r.people, r.politicians.len());
        assert!(r.buys <= r.trades && r.sells <= r.trades);
    }
}

#[test]
fn trend_view_ranks_by_buys_then_total() {
    let records = dataset();
    let since = london_noon().naive_utc() - chrono::Duration::days(30);
    let rows = aggregate::trend_window(&records, since, &TickerFilter::default());

    // the January AAPL trade is outside 30 days
    assert_eq!(rows.iter().map(|r| r.ticker.as_str()).collect::<Vec<_>>(), vec!["AAPL", "MSFT"]);
    assert_eq!((rows[0].buys, rows[0].sells, rows[0].total), (1, 1, 2));
    assert_eq!((rows[1].buys, rows[1].sells, rows[1].total), (1, 0, 1));
    for r in &rows {
        assert_eq!(r.total, r.buys + r.sells);
    }
}

#[test]
fn allow_then_deny() {
    let records = vec![
        trade("AAPL", "Jane", "Purchase"),
        trade("TSLA", "Jane", "Purchase"),
        trade("MSFT", "Jane", "Purchase"),
    ];
    let filter = TickerFilter::new(["AAPL", "TSLA"], ["TSLA"]);
    let since = chrono::NaiveDateTime::MIN;

    let daily = aggregate::group_daily(&records, since, &filter);
    let trend = aggregate::trend_window(&records, since, &filter);
    assert_eq!(daily.iter().map(|r| r.ticker.as_str()).collect::<Vec<_>>(), vec!["AAPL"]);
    assert_eq!(trend.iter().map(|r| r.ticker.as_str()).collect::<Vec<_>>(), vec!["AAPL"]);
}

#[test]
fn report_for_fixed_clock() {
    let window = WindowOptions::default();
    let report = build_report(&dataset(), &window, &london_noon()).unwrap();

    let expected_lines = [
        "# Congressional Trades — 2024-03-10 (Europe/London)",
        "## New Filings (since 2024-03-09 12:00)",
        "- **AAPL** — 2 people, 2 trades (buys: 1, sells: 1) — Jane, John",
        "- **MSFT** — 1 people, 1 trades (buys: 1, sells: 0) — Jane",
        "## 30-Day Trend (since 2024-02-09) — Ranked by Buys",
        "| Rank | Ticker | Buys | Sells | Total | Politicians |",
        "| 1 | **AAPL** | 1 | 1 | 2 | Jane, John |",
        "| 2 | **MSFT** | 1 | 0 | 1 | Jane |",
    ];
    let got: Vec<&str> = report.text.lines().filter(|l| !l.is_empty()).collect();
    for line in expected_lines {
        assert!(got.contains(&line), "missing {line:?} in\n{}", report.text);
    }
    assert!(
        report.text.find("**AAPL** —").unwrap() < report.text.find("**MSFT** —").unwrap()
    );
}

#[test]
fn empty_windows_fall_back_to_no_filings() {
    let window = WindowOptions::default();
    let report = build_report(&[], &window, &london_noon()).unwrap();
    assert!(report.daily.is_empty() && report.trend.is_empty());
    assert!(report.text.contains("No filings in the period."));
    assert!(report.text.contains("No filings in the 30-day window."));
    assert!(report.text.to_lowercase().contains("no filings"));
}

#[test]
fn mirror_rows_join_the_same_pipeline() {
    let v = serde_json::json!([
        { "senator": "Jane Doe", "ticker": "aapl", "type": "Purchase",
          "disclosure_date": "03/10/2024", "transaction_date": "03/01/2024",
          "asset_description": "Apple Inc." },
        { "representative": "John Roe", "ticker": "--", "type": "sale_full",
          "disclosure_date": "2024-03-10" },
        { "representative": "John Roe", "ticker": "MSFT", "type": "sale_full",
          "disclosure_date": "2024-03-10" },
    ]);
    let records = normalize(&mirror::map_dataset(&v));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].ticker, "AAPL");
    assert_eq!(records[0].company, "Apple Inc.");
    assert!(records[0].transaction_date.is_some());
    assert!(records[1].is_sell && !records[1].is_buy);
}

fn trade(ticker: &str, name: &str, kind: &str) -> Trade {
    congress_trades::normalize::normalize_one(&raw(ticker, name, kind)).unwrap()
}

#[test]
fn aapl_buy_msft_sale_across_two_tables() {
    let html = "
    <table>
      <tr><th>Ticker</th><th>Politician</th><th>Type</th><th>Filing Date</th></tr>
      <tr><td>AAPL</td><td>Jane Doe</td><td>Buy</td><td>2024-01-05</td></tr>
    </table>
    <table>
      <tr><th>Symbol</th><th>Senator</th><th>Transaction</th><th>Disclosure Date</th></tr>
      <tr><td>MSFT</td><td>John Roe</td><td>Sale</td><td>2024-01-06</td></tr>
    </table>";
    let records = normalize(&tables::extract_document(html));
    assert_eq!(records.len(), 2);

    let since = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let mut rows = aggregate::group_daily(&records, since, &TickerFilter::default());
    rows.sort_by(|a, b| a.ticker.cmp(&b.ticker));

    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].ticker.as_str(), rows[0].people, rows[0].buys, rows[0].sells), ("AAPL", 1, 1, 0));
    assert_eq!((rows[1].ticker.as_str(), rows[1].people, rows[1].buys, rows[1].sells), ("MSFT", 1, 0, 1));
}

#[test]
fn equal_people_ranked_by_trades() {
    let records = normalize(&[
        raw("AAA", "X", "Purchase"),
        raw("ZZZ", "Y", "Purchase"),
        raw("ZZZ", "Y", "Sale"),
        raw("ZZZ", "Y", "Exchange"),
    ]);
    let rows = aggregate::group_daily(&records, chrono::NaiveDateTime::MIN, &TickerFilter::default());

    let got: Vec<(&str, usize, usize)> = rows.iter().map(|r| (r.ticker.as_str(), r.people, r.trades)).collect();
    assert_eq!(got, vec![("ZZZ", 1, 3), ("AAA", 1, 1)]);
}

#[test]
fn normalizing_a_doubled_batch_matches_one_pass() {
    let raw_rows = tables::extract_document(TWO_TABLES);
    let once = normalize(&raw_rows);
    let twice = normalize(raw_rows.iter().chain(&raw_rows));
    assert_eq!(twice, once);

    let mut unioned = once.clone();
    unioned.extend(normalize(&raw_rows));
    assert_eq!(dedup(unioned), once);
}

fn raw(ticker: &str, name: &str, kind: &str) -> RawTrade {
    RawTrade {
        ticker: ticker.into(),
        name: name.into(),
        kind: kind.into(),
        filing_date: "2024-03-10".into(),
        ..RawTrade::default()
    }
}
