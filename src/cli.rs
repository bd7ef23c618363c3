// src/cli.rs
//
// Flags, each with an environment fallback (a `.env` file is loaded first).

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::aggregate::TickerFilter;
use crate::config::consts::{
    DAILY_WINDOW_HOURS, DEFAULT_OUT_DIR, DEFAULT_TIMEZONE, LOOKBACK_DAYS, MAX_PAGES, MIRROR_URLS,
    SOURCE_URL, USER_AGENT,
};
use crate::config::options::{AppOptions, ExportOptions, SourceOptions, WindowOptions};
use crate::core::sanitize::parse_ticker_list;
use crate::error::Result;
use crate::progress::LogProgress;

#[derive(Debug, Parser)]
#[command(name = "congress_trades", version, about = "Daily legislator trade report: recent filings and trend ranking")]
pub struct Cli {
    /// First page of the disclosure table
    #[arg(long, env = "SOURCE_URL", default_value = SOURCE_URL)]
    pub url: String,

    /// Further pages after the first, in order
    #[arg(long = "page-url", env = "PAGE_URLS", value_delimiter = ',')]
    pub page_urls: Vec<String>,

    /// Read saved HTML pages instead of fetching
    #[arg(long = "html", value_name = "FILE")]
    pub html_files: Vec<PathBuf>,

    #[arg(long = "max-pages", env = "MAX_PAGES", default_value_t = MAX_PAGES)]
    pub max_pages: usize,

    /// Mirror datasets used when the pages give nothing (default: Senate + House stock watchers)
    #[arg(long = "mirror-url", env = "MIRROR_URLS", value_delimiter = ',')]
    pub mirror_urls: Vec<String>,

    /// Saved mirror JSON files
    #[arg(long = "mirror-file", value_name = "FILE")]
    pub mirror_files: Vec<PathBuf>,

    #[arg(long, env = "TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    #[arg(long = "out-dir", env = "OUTPUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Webhook receiving the report in chunks
    #[arg(long, env = "DISCORD_WEBHOOK_URL")]
    pub webhook: Option<String>,

    /// Recent-filings window, in hours
    #[arg(long = "daily-hours", env = "DAILY_WINDOW_HOURS", default_value_t = DAILY_WINDOW_HOURS)]
    pub daily_hours: i64,

    /// Trend window, in days
    #[arg(long = "lookback-days", env = "LOOKBACK_DAYS", default_value_t = LOOKBACK_DAYS)]
    pub lookback_days: i64,

    /// Only these tickers (comma list)
    #[arg(long, env = "WHITELIST_TICKERS", value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Never these tickers (comma list)
    #[arg(long, env = "BLACKLIST_TICKERS", value_delimiter = ',')]
    pub deny: Vec<String>,

    #[arg(long = "user-agent", env = "USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Echo the report to stdout
    #[arg(long)]
    pub print: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_options(&self) -> AppOptions {
        let mirror_urls: Vec<String> = {
            let given: Vec<String> = self
                .mirror_urls
                .iter()
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect();
            if given.is_empty() {
                MIRROR_URLS.iter().map(|u| s!(*u)).collect()
            } else {
                given
            }
        };

        AppOptions {
            source: SourceOptions {
                url: self.url.trim().to_string(),
                page_urls: self.page_urls.iter().map(|u| u.trim().to_string()).collect(),
                html_files: self.html_files.clone(),
                max_pages: self.max_pages,
                mirror_urls,
                mirror_files: self.mirror_files.clone(),
                user_agent: self.user_agent.clone(),
            },
            window: WindowOptions {
                timezone: self.timezone.trim().to_string(),
                daily_hours: self.daily_hours,
                lookback_days: self.lookback_days,
                filter: TickerFilter::new(
                    parse_ticker_list(&self.allow),
                    parse_ticker_list(&self.deny),
                ),
            },
            export: ExportOptions {
                out_dir: self.out_dir.clone(),
                webhook: self.webhook.clone(),
            },
        }
    }
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok(); // .env is optional
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.to_options();
    let mut progress = LogProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    if cli.print {
        println!("{}", summary.report);
    }
    info!(
        "{} records{}, {} file(s), {} chunk(s) posted",
        summary.records,
        if summary.used_mirrors { " (mirrors)" } else { "" },
        summary.files_written.len(),
        summary.chunks_posted
    );
    println!("Done.");
    Ok(())
}
