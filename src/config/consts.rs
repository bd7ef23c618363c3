// src/config/consts.rs

// Sources
pub const SOURCE_URL: &str = "https://www.smartinsider.com/politicians/";
pub const MIRROR_URLS: [&str; 2] = [
    "https://senate-stock-watcher-data.s3-us-west-2.amazonaws.com/aggregate/all_transactions.json",
    "https://house-stock-watcher-data.s3-us-west-2.amazonaws.com/data/all_transactions.json",
];
pub const USER_AGENT: &str = "CongressTradesBot/1.0 (+contact: webhook-report)";
pub const MAX_PAGES: usize = 50;

// Net
pub const PAGE_TIMEOUT_SECS: u64 = 30;
pub const MIRROR_TIMEOUT_SECS: u64 = 60;

// Extraction
pub const MAX_HEADER_CELLS: usize = 20;

// Windows
pub const DEFAULT_TIMEZONE: &str = "Europe/London";
pub const DAILY_WINDOW_HOURS: i64 = 24;
pub const LOOKBACK_DAYS: i64 = 30;

// Report / delivery
pub const CHUNK_LIMIT: usize = 1900;
pub const LINE_BUDGET: usize = 1800;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
