//! KleineWelle online-trigger finder.
//!
//! KleineWelle output is archived by the DMT under
//! `/gds-<ifo>/dmt/triggers/<TAG>/<TAG>-<gps5>/`, where the tag is
//! `{S}-KW_HOFT` for the calibrated strain channel and `{S}-KW_TRIGGERS`
//! for everything else (`S` is the single-letter site code).

use serde::Deserialize;

use crate::channel;
use crate::error::Result;
use crate::gpsdirs::{self, DEFAULT_NGPS, GPS_SLOT};

/// Normalized channel suffix identifying the strain channel.
pub(crate) const STRAIN_SUFFIX: &str = "GDS_CALIB_STRAIN";

#[derive(Debug, Clone, Deserialize)]
pub struct KleineWelleOptions {
    /// Directory template overriding the LDG default; may contain the
    /// `{gps}` bucket placeholder.
    #[serde(default)]
    pub base: Option<String>,
    /// Trigger file extension.
    #[serde(default = "default_ext")]
    pub ext: String,
}

fn default_ext() -> String {
    "xml".to_string()
}

impl Default for KleineWelleOptions {
    fn default() -> Self {
        KleineWelleOptions {
            base: None,
            ext: default_ext(),
        }
    }
}

/// Find KleineWelle trigger files for a channel.
pub fn find(channel: &str, start: u64, end: u64, opts: &KleineWelleOptions) -> Result<Vec<String>> {
    let (ifo, name) = channel::split_ifo(channel)?;
    let site = channel::site_code(&ifo)?;

    let tag = if name == STRAIN_SUFFIX {
        format!("{site}-KW_HOFT")
    } else {
        format!("{site}-KW_TRIGGERS")
    };
    let base = match &opts.base {
        Some(base) => base.clone(),
        None => format!(
            "/gds-{}/dmt/triggers/{tag}/{tag}-{GPS_SLOT}",
            ifo.to_lowercase()
        ),
    };

    let filename = format!("{tag}-*-*.{}", opts.ext);
    gpsdirs::find_in_gps_dirs(&format!("{base}/{filename}"), start, end, DEFAULT_NGPS)
}
