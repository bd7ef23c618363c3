// src/runner.rs
use std::path::PathBuf;

use chrono::DateTime;
use chrono_tz::Tz;
use reqwest::blocking::Client;
use tracing::info;

use crate::{
    aggregate::{self, DailyRow, TrendRow},
    config::options::{AppOptions, SourceOptions, WindowOptions},
    core::net,
    error::{Error, Result},
    export, file,
    model::Trade,
    normalize::normalize,
    progress::Progress,
    publish,
    report::{self, ReportHeader},
    scrape,
};

/// Both views plus the rendered text.
pub struct Report {
    pub text: String,
    pub daily: Vec<DailyRow>,
    pub trend: Vec<TrendRow>,
}

/// Summary of what a run produced.
pub struct RunSummary {
    pub records: usize,
    pub used_mirrors: bool,
    pub files_written: Vec<PathBuf>,
    pub chunks_posted: usize,
    pub report: String,
}

/// Canonical dataset from the primary pages, or from the mirrors when the pages
/// give nothing usable. `Error::NoData` when both come up empty.
/// The flag is `true` when the mirrors were used.
pub fn gather(
    source: &SourceOptions,
    client: &Client,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(Vec<Trade>, bool)> {
    let raw = if source.uses_files() {
        scrape::collect_pages(scrape::file_pages(&source.html_files), false, progress.as_deref_mut())
    } else {
        let urls = source.page_list();
        scrape::collect_pages(scrape::url_pages(client, &urls), true, progress.as_deref_mut())
    };
    let records = normalize(&raw);
    info!("primary source: {} candidates, {} records", raw.len(), records.len());
    if !records.is_empty() {
        return Ok((records, false));
    }

    info!("Using fallback mirrors…");
    let raw = scrape::collect_mirrors(
        client,
        &source.mirror_urls,
        &source.mirror_files,
        progress.as_deref_mut(),
    );
    let records = normalize(&raw);
    info!("mirrors: {} candidates, {} records", raw.len(), records.len());
    if records.is_empty() {
        return Err(Error::NoData);
    }
    Ok((records, true))
}

/// Aggregate and render for a given clock. No I/O; fails only on an
/// out-of-range window.
pub fn build_report(records: &[Trade], window: &WindowOptions, now: &DateTime<Tz>) -> Result<Report> {
    let (daily_since, trend_since) = window.cutoffs(now)?;

    let daily = aggregate::group_daily(records, daily_since.naive_utc(), &window.filter);
    let trend = aggregate::trend_window(records, trend_since.naive_utc(), &window.filter);

    let header = ReportHeader::new(
        now,
        window.timezone.trim(),
        &daily_since,
        &trend_since,
        window.lookback_days,
    );
    let text = report::render(&header, &daily, &trend);
    Ok(Report { text, daily, trend })
}

/// Full run: gather → aggregate → render → write files → post.
pub fn run(opts: &AppOptions, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<RunSummary> {
    opts.validate()?;
    let client = net::client(&opts.source.user_agent)?;

    let (records, used_mirrors) = gather(&opts.source, &client, progress.as_deref_mut())?;

    let now = opts.window.now()?;
    let report = build_report(&records, &opts.window, &now)?;
    info!(
        "{} records; {} tickers in the recent window, {} in the trend window",
        records.len(),
        report.daily.len(),
        report.trend.len()
    );

    let files_written = file::write_outputs(
        &opts.export.out_dir,
        &file::date_stamp(&now),
        &report.text,
        &export::daily_table(&report.daily),
        &export::trend_table(&report.trend),
    )?;
    for p in &files_written {
        info!("wrote {}", p.display());
    }

    let chunks_posted = match opts.export.webhook() {
        Some(url) => publish::post_report(&client, url, &report.text)?,
        None => 0,
    };

    Ok(RunSummary {
        records: records.len(),
        used_mirrors,
        files_written,
        chunks_posted,
        report: report.text,
    })
}
