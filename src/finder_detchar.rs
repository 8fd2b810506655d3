//! Generic detchar-archive finder (Omicron and friends).
//!
//! The default family for any unrecognised ETG: files live under the
//! detchar home following the T1300468 layout,
//! `<base>/<IFO>/<CHANNEL>_<TAG>/<gps5>/<IFO>-<CHANNEL>_<TAG>-<start>-<dur>.<ext>`.
//! The layout changed at the start of O2: earlier epochs sit one level
//! deeper under a per-run directory (globbed with `*`), use a title-cased
//! ETG tag, and keep the raw (non-normalized) channel suffix in the
//! per-channel directory name. That asymmetry is historical and preserved
//! as-is.

use std::path::PathBuf;

use serde::Deserialize;

use crate::channel;
use crate::error::{Result, TrigfindError};
use crate::gpsdirs::{self, DEFAULT_NGPS, GPS_SLOT};

/// GPS time at which the detchar archive switched to the O2 layout.
pub const OMICRON_O2_EPOCH: u64 = 1_146_873_617;

#[derive(Debug, Clone, Deserialize)]
pub struct DetcharOptions {
    /// ETG tag used in directory and file names.
    #[serde(default = "default_etg")]
    pub etg: String,
    /// Trigger file extension.
    #[serde(default = "default_ext")]
    pub ext: String,
    /// Archive root.
    #[serde(default = "default_base")]
    pub base: PathBuf,
}

fn default_etg() -> String {
    "omicron".to_string()
}
fn default_ext() -> String {
    "h5".to_string()
}
fn default_base() -> PathBuf {
    PathBuf::from("/home/detchar/triggers")
}

impl Default for DetcharOptions {
    fn default() -> Self {
        DetcharOptions {
            etg: default_etg(),
            ext: default_ext(),
            base: default_base(),
        }
    }
}

/// Find detchar-archive trigger files for a channel.
///
/// Fails with [`UnknownChannelOrEtg`](TrigfindError::UnknownChannelOrEtg)
/// when the channel-level directory does not exist, so a misspelled
/// channel or ETG is distinguishable from a genuinely empty interval.
pub fn find(channel: &str, start: u64, end: u64, opts: &DetcharOptions) -> Result<Vec<String>> {
    let (ifo, name) = channel::split_ifo(channel)?;

    let (base, tag, dirtag) = if start >= OMICRON_O2_EPOCH {
        let tag = opts.etg.to_uppercase();
        let dirtag = format!("{name}_{tag}");
        (opts.base.clone(), tag, dirtag)
    } else {
        // Pre-O2: per-run parent globbed with `*`, title-cased tag, and
        // the raw channel suffix in the directory name.
        let tag = title_case(&opts.etg);
        let raw_name = channel.split_once(':').map(|(_, n)| n).unwrap_or(channel);
        let dirtag = format!("{raw_name}_{tag}");
        (opts.base.join("*"), tag, dirtag)
    };

    let filetag = format!("{name}_{tag}");
    let trigform = format!("{ifo}-{filetag}-{}-*.{}", "[0-9]".repeat(10), opts.ext);

    let channelbase = base.join(&ifo).join(&dirtag);
    let channelbase = channelbase.to_string_lossy().to_string();
    if glob::glob(&channelbase)?.next().is_none() {
        return Err(TrigfindError::UnknownChannelOrEtg { path: channelbase });
    }

    let template = format!("{channelbase}/{GPS_SLOT}/{trigform}");
    gpsdirs::find_in_gps_dirs(&template, start, end, DEFAULT_NGPS)
}

/// ASCII title-casing: a letter following a non-letter starts a new
/// word (`fake-etg` → `Fake-Etg`), matching the legacy directory tags.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            if in_word {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn opts(base: &TempDir, ext: &str) -> DetcharOptions {
        DetcharOptions {
            etg: "omicron".to_string(),
            ext: ext.to_string(),
            base: base.path().to_path_buf(),
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("omicron"), "Omicron");
        assert_eq!(title_case("fake-etg"), "Fake-Etg");
        assert_eq!(title_case("daily_cbc"), "Daily_Cbc");
    }

    #[test]
    fn test_o2_layout() {
        let tmp = TempDir::new().unwrap();
        let chandir = tmp.path().join("L1/GDS_CALIB_STRAIN_OMICRON/11468");
        fs::create_dir_all(&chandir).unwrap();
        fs::write(
            chandir.join("L1-GDS_CALIB_STRAIN_OMICRON-1146870000-10000.h5"),
            b"",
        )
        .unwrap();

        let urls = find(
            "L1:GDS-CALIB_STRAIN",
            1146873617,
            1146873618,
            &opts(&tmp, "h5"),
        )
        .unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].ends_with(
            "L1/GDS_CALIB_STRAIN_OMICRON/11468/L1-GDS_CALIB_STRAIN_OMICRON-1146870000-10000.h5"
        ));
    }

    #[test]
    fn test_pre_o2_layout() {
        let tmp = TempDir::new().unwrap();
        // Epoch directory replaces the `*` glob component.
        let chandir = tmp.path().join("O1/L1/GDS-CALIB_STRAIN_Omicron/11356");
        fs::create_dir_all(&chandir).unwrap();
        fs::write(
            chandir.join("L1-GDS_CALIB_STRAIN_Omicron-1135640000-10000.h5"),
            b"",
        )
        .unwrap();

        let urls = find(
            "L1:GDS-CALIB_STRAIN",
            1135641617,
            1135728017,
            &opts(&tmp, "h5"),
        )
        .unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("/O1/L1/GDS-CALIB_STRAIN_Omicron/"));
    }

    #[test]
    fn test_unknown_channel_errors_with_path() {
        let tmp = TempDir::new().unwrap();
        let err = find("X1:DOES-NOT_EXIST", 1146873617, 1146873717, &opts(&tmp, "h5"))
            .unwrap_err();
        match err {
            TrigfindError::UnknownChannelOrEtg { path } => {
                assert!(path.contains("X1"));
                assert!(path.contains("DOES_NOT_EXIST_OMICRON"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
