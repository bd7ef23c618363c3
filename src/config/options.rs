// src/config/options.rs
use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use super::consts::*;
use crate::aggregate::TickerFilter;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub window: WindowOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn validate(&self) -> Result<()> {
        self.window.tz()?;
        if self.window.daily_hours < 0 {
            return Err(Error::Config(format!("daily window must be >= 0 hours, got {}", self.window.daily_hours)));
        }
        if self.window.lookback_days < 0 {
            return Err(Error::Config(format!("lookback must be >= 0 days, got {}", self.window.lookback_days)));
        }
        self.window.cutoffs(&self.window.now()?)?;
        if self.source.max_pages == 0 {
            return Err(Error::Config(s!("max pages must be at least 1")));
        }
        Ok(())
    }
}

/// Where documents and mirror datasets come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// First page of the disclosure table.
    pub url: String,
    /// Further pages, in order, after `url`.
    pub page_urls: Vec<String>,
    /// Saved HTML pages; when non-empty they replace the URL pages.
    pub html_files: Vec<PathBuf>,
    pub max_pages: usize,
    pub mirror_urls: Vec<String>,
    /// Saved mirror JSON, read before `mirror_urls`.
    pub mirror_files: Vec<PathBuf>,
    pub user_agent: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            page_urls: Vec::new(),
            html_files: Vec::new(),
            max_pages: MAX_PAGES,
            mirror_urls: MIRROR_URLS.iter().map(|u| s!(*u)).collect(),
            mirror_files: Vec::new(),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl SourceOptions {
    /// Page URLs to visit, first page included, capped at `max_pages`.
    pub fn page_list(&self) -> Vec<String> {
        std::iter::once(&self.url)
            .chain(self.page_urls.iter())
            .filter(|u| !u.trim().is_empty())
            .take(self.max_pages)
            .cloned()
            .collect()
    }

    pub fn uses_files(&self) -> bool {
        !self.html_files.is_empty()
    }
}

/// Time windows and ticker filters for both report sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowOptions {
    pub timezone: String,
    pub daily_hours: i64,
    pub lookback_days: i64,
    pub filter: TickerFilter,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            timezone: s!(DEFAULT_TIMEZONE),
            daily_hours: DAILY_WINDOW_HOURS,
            lookback_days: LOOKBACK_DAYS,
            filter: TickerFilter::default(),
        }
    }
}

impl WindowOptions {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .trim()
            .parse::<Tz>()
            .map_err(|_| Error::Config(format!("unknown timezone: {}", self.timezone)))
    }

    /// Current time in the configured zone.
    pub fn now(&self) -> Result<DateTime<Tz>> {
        Ok(Utc::now().with_timezone(&self.tz()?))
    }

    fn daily_span(&self) -> Result<TimeDelta> {
        TimeDelta::try_hours(self.daily_hours)
            .ok_or_else(|| Error::Config(format!("daily window too large: {} hours", self.daily_hours)))
    }

    fn trend_span(&self) -> Result<TimeDelta> {
        TimeDelta::try_days(self.lookback_days)
            .ok_or_else(|| Error::Config(format!("lookback too large: {} days", self.lookback_days)))
    }

    /// `(daily_since, trend_since)` counted back from `now`.
    /// A window reaching outside the representable date range is a config error.
    pub fn cutoffs(&self, now: &DateTime<Tz>) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let back = |span: TimeDelta, what: &str| {
            now.checked_sub_signed(span)
                .ok_or_else(|| Error::Config(format!("{what} window reaches before the earliest date")))
        };
        Ok((back(self.daily_span()?, "daily")?, back(self.trend_span()?, "trend")?))
    }
}

/// Output locations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Webhook for the chunked report; `None` or blank disables posting.
    pub webhook: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            webhook: None,
        }
    }
}

impl ExportOptions {
    pub fn webhook(&self) -> Option<&str> {
        self.webhook.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}
