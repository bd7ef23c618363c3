// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};

use crate::error::{Error, Result};
use crate::export::{self, Table};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `YYYYMMDD` of the run, in the report's zone.
pub fn date_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y%m%d").to_string()
}

/// `<dir>/<prefix>_<stamp>.<ext>`
pub fn output_path(dir: &Path, prefix: &str, stamp: &str, ext: &str) -> PathBuf {
    dir.join(join!(prefix, "_", stamp, ".", ext))
}

pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let out = BufWriter::new(File::create(path)?);
    export::write_csv(out, table)
}

/// Report markdown plus both aggregation tables. Returns the paths written.
pub fn write_outputs(
    dir: &Path,
    stamp: &str,
    report: &str,
    daily: &Table,
    trend: &Table,
) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let report_path = output_path(dir, "report", stamp, "md");
    fs::write(&report_path, report)?;

    let daily_path = output_path(dir, "daily_agg", stamp, "csv");
    write_table(&daily_path, daily)?;

    let trend_path = output_path(dir, "trend_agg", stamp, "csv");
    write_table(&trend_path, trend)?;

    Ok(vec![report_path, daily_path, trend_path])
}
