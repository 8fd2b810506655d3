//! Omega online-processing finder.
//!
//! Only the GEO600 (`G1`) online Omega process is supported; its output
//! lives under `/home/omega/online/G1_<NAME>/segments/<gps5>/*/`. The
//! channel is split on the raw `:` here, not normalized, because the
//! directory name keeps the suffix exactly as the process wrote it.

use serde::Deserialize;

use crate::error::{Result, TrigfindError};
use crate::gpsdirs::{self, DEFAULT_NGPS, GPS_SLOT};

#[derive(Debug, Clone, Deserialize)]
pub struct OmegaOnlineOptions {
    /// Directory template overriding the default; may contain the `{gps}`
    /// bucket placeholder.
    #[serde(default)]
    pub base: Option<String>,
    /// Which kind of Omega output to find.
    #[serde(default = "default_filetag")]
    pub filetag: String,
    /// Trigger file extension.
    #[serde(default = "default_ext")]
    pub ext: String,
}

fn default_filetag() -> String {
    "DOWNSELECT".to_string()
}
fn default_ext() -> String {
    "txt".to_string()
}

impl Default for OmegaOnlineOptions {
    fn default() -> Self {
        OmegaOnlineOptions {
            base: None,
            filetag: default_filetag(),
            ext: default_ext(),
        }
    }
}

/// Find online Omega trigger files for a GEO600 channel.
pub fn find(channel: &str, start: u64, end: u64, opts: &OmegaOnlineOptions) -> Result<Vec<String>> {
    let (ifo, name) = channel
        .split_once(':')
        .ok_or_else(|| TrigfindError::MalformedChannel(channel.to_string()))?;
    if ifo != "G1" {
        return Err(TrigfindError::UnsupportedConfiguration {
            family: "omega-online",
            detail: format!("unrecognised channel {channel}"),
        });
    }

    let base = match &opts.base {
        Some(base) => base.clone(),
        None => format!("/home/omega/online/{ifo}_{name}/segments/{GPS_SLOT}/*"),
    };
    let trigform = format!("{ifo}-OMEGA_TRIGGERS_{}-*-*.{}", opts.filetag, opts.ext);
    gpsdirs::find_in_gps_dirs(&format!("{base}/{trigform}"), start, end, DEFAULT_NGPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_non_geo_unsupported() {
        let err = find("L1:TEST-CHANNEL", 0, 100, &OmegaOnlineOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            TrigfindError::UnsupportedConfiguration { family: "omega-online", .. }
        ));
    }

    #[test]
    fn test_geo_search_with_intermediate_dir() {
        let tmp = TempDir::new().unwrap();
        // The layout nests one run directory between the bucket and the
        // files, matched by the trailing `*` in the base template.
        let rundir = tmp.path().join("11356").join("run-a");
        fs::create_dir_all(&rundir).unwrap();
        fs::write(
            rundir.join("G1-OMEGA_TRIGGERS_DOWNSELECT-1135640000-10000.txt"),
            b"",
        )
        .unwrap();

        let opts = OmegaOnlineOptions {
            base: Some(format!("{}/{GPS_SLOT}/*", tmp.path().display())),
            ..Default::default()
        };
        let urls = find("G1:DER_DATA_H", 1135641617, 1135728017, &opts).unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("G1-OMEGA_TRIGGERS_DOWNSELECT-1135640000-10000.txt"));
    }
}
