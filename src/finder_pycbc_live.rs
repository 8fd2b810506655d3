//! PyCBC Live trigger finder.
//!
//! PyCBC Live archives are bucketed by UTC calendar day rather than GPS
//! prefix: `<base>/%Y_%m_%d/*.hdf`, with sub-second start times in the
//! filenames. Early archives wrote day directories without zero-padded
//! month/day (`2015_9_4`); those are still found when the padded
//! directory is absent.

use std::path::PathBuf;

use chrono::Days;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::gpsdirs::{collect_intersecting, dedup_preserving_order};
use crate::gpstime;
use crate::segments::Segment;

#[derive(Debug, Clone, Deserialize)]
pub struct PycbcLiveOptions {
    /// Parent directory of the `%Y_%m_%d` day directories.
    #[serde(default = "default_base")]
    pub base: PathBuf,
}

fn default_base() -> PathBuf {
    PathBuf::from("/home/pycbc.live/triggers/data")
}

impl Default for PycbcLiveOptions {
    fn default() -> Self {
        PycbcLiveOptions {
            base: default_base(),
        }
    }
}

/// Find PyCBC Live trigger files over `[start, end)`.
///
/// The channel plays no part in the directory layout; every instrument's
/// triggers share the per-day directories.
pub fn find(_channel: &str, start: u64, end: u64, opts: &PycbcLiveOptions) -> Result<Vec<String>> {
    let span = Segment::new(start as f64, end as f64);
    let mut date = gpstime::gps_date(start)?;
    let last = gpstime::gps_date(end)?;

    let mut urls = Vec::new();
    while date <= last {
        let mut day_dir = date.format("%Y_%m_%d").to_string();

        // Old convention: no leading zeros in month/day.
        let stripped = day_dir.replace("_0", "_");
        if stripped != day_dir
            && !opts.base.join(&day_dir).is_dir()
            && opts.base.join(&stripped).is_dir()
        {
            day_dir = stripped;
        }

        let pattern = opts.base.join(&day_dir).join("*.hdf");
        debug!(?pattern, "scanning pycbc-live day directory");
        collect_intersecting(&pattern.to_string_lossy(), &span, &mut urls)?;

        date = date
            .checked_add_days(Days::new(1))
            .ok_or(crate::error::TrigfindError::TimeOutOfRange(end))?;
    }
    Ok(dedup_preserving_order(urls))
}
