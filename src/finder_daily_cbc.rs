//! Daily CBC offline-analysis finder.
//!
//! The daily CBC analyses publish a per-day catalog file,
//! `<base>/<run>/<YYYYMM>/<YYYYMMDD>/cache/<IFO>-INSPIRAL_<filetag>.cache`,
//! listing already-known trigger files one per line as five
//! whitespace-separated fields: `ifo tag gps_start duration path`. Days
//! with no analysis have no catalog and are silently skipped; a malformed
//! record aborts the query.

use std::path::{Path, PathBuf};

use chrono::Days;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TrigfindError};
use crate::gpsdirs::{as_url, dedup_preserving_order};
use crate::gpstime;
use crate::segments::Segment;

#[derive(Debug, Clone, Deserialize)]
pub struct DailyCbcOptions {
    /// Parent directory of the per-run archives.
    #[serde(default = "default_base")]
    pub base: PathBuf,
    /// Name of the daily CBC analysis run.
    #[serde(default = "default_run")]
    pub run: String,
    /// Clustering tag in the catalog filename.
    #[serde(default = "default_filetag")]
    pub filetag: String,
}

fn default_base() -> PathBuf {
    PathBuf::from("/home/cbc/public_html/daily_cbc_offline")
}
fn default_run() -> String {
    "bns_gds".to_string()
}
fn default_filetag() -> String {
    "30MILLISEC_CLUSTERED".to_string()
}

impl Default for DailyCbcOptions {
    fn default() -> Self {
        DailyCbcOptions {
            base: default_base(),
            run: default_run(),
            filetag: default_filetag(),
        }
    }
}

/// Find daily CBC trigger files for `[start, end)` via the per-day
/// catalogs.
pub fn find(channel: &str, start: u64, end: u64, opts: &DailyCbcOptions) -> Result<Vec<String>> {
    let span = Segment::new(start as f64, end as f64);
    let ifo = channel.split(':').next().unwrap_or(channel);
    let filename = format!("{ifo}-INSPIRAL_{}.cache", opts.filetag);
    let base = opts.base.join(&opts.run);

    let mut date = gpstime::gps_date(start)?;
    let last = gpstime::gps_date(end)?;
    let mut urls = Vec::new();
    while date <= last {
        let day = date.format("%Y%m%d").to_string();
        let month = &day[..6];
        let catalog = base.join(month).join(&day).join("cache").join(&filename);
        match std::fs::read_to_string(&catalog) {
            Ok(text) => read_catalog(&catalog, &text, &span, &mut urls)?,
            // No analysis that day.
            Err(err) => debug!(?catalog, %err, "skipping day with no catalog"),
        }
        date = date
            .checked_add_days(Days::new(1))
            .ok_or(TrigfindError::TimeOutOfRange(end))?;
    }
    Ok(dedup_preserving_order(urls))
}

/// Parse one catalog, appending the URLs of records intersecting `span`.
fn read_catalog(path: &Path, text: &str, span: &Segment, urls: &mut Vec<String>) -> Result<()> {
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = || TrigfindError::MalformedCatalog {
            path: path.to_path_buf(),
            line: lineno + 1,
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[_ifo, _tag, fstart, fdur, url] = fields.as_slice() else {
            return Err(malformed());
        };
        let fstart: f64 = fstart.parse().map_err(|_| malformed())?;
        let fdur: f64 = fdur.parse().map_err(|_| malformed())?;
        if Segment::new(fstart, fstart + fdur).intersects(span) {
            // Catalog records hold plain paths; old ones may already be
            // URLs.
            if url.starts_with("file://") {
                urls.push(url.to_string());
            } else {
                urls.push(as_url(Path::new(url)));
            }
        }
    }
    Ok(())
}
