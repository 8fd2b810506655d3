//! DMT-Omega trigger finder.
//!
//! DMT-Omega only processes the calibrated strain channel, so any other
//! channel is an unsupported configuration. Modern files carry the
//! `{S}-HOFT_Omega` tag and an `_OmegaC` filename suffix; Virgo data
//! before the O4 relabel (when the CIT process still wrote an `OMICRON`
//! label) lives under the legacy `{IFO}/{name}_OMICRON` layout in the
//! detchar archive.

use serde::Deserialize;

use crate::channel;
use crate::error::{Result, TrigfindError};
use crate::gpsdirs::{self, DEFAULT_NGPS, GPS_SLOT};

/// GPS time at which the DMT-Omega process on CIT stopped labelling its
/// output as OMICRON.
pub const DMT_OMEGA_V1_O4_EPOCH: u64 = 1_392_496_139;

/// Normalized channel suffixes recognised as strain.
const STRAIN_SUFFIXES: [&str; 2] = ["GDS_CALIB_STRAIN", "Hrec_hoft_16384Hz"];

#[derive(Debug, Clone, Deserialize)]
pub struct DmtOmegaOptions {
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

impl Default for DmtOmegaOptions {
    fn default() -> Self {
        DmtOmegaOptions {
            base: None,
            ext: default_ext(),
        }
    }
}

/// Find DMT-Omega trigger files for a strain channel.
pub fn find(channel: &str, start: u64, end: u64, opts: &DmtOmegaOptions) -> Result<Vec<String>> {
    let (ifo, name) = channel::split_ifo(channel)?;
    let site = channel::site_code(&ifo)?;
    let hoft = STRAIN_SUFFIXES.contains(&name.as_str());
    if !hoft {
        return Err(TrigfindError::UnsupportedConfiguration {
            family: "dmt-omega",
            detail: format!("cannot locate DMT-Omega files for {channel}"),
        });
    }

    let legacy_virgo = site == 'V' && end < DMT_OMEGA_V1_O4_EPOCH;
    let tag = if legacy_virgo {
        format!("{}/{name}_OMICRON", ifo.to_uppercase())
    } else {
        format!("{site}-HOFT_Omega")
    };
    let base = match (&opts.base, site) {
        (Some(base), _) => base.clone(),
        (None, 'V') => format!("/home/detchar/triggers/{tag}/{GPS_SLOT}"),
        (None, _) => format!(
            "/gds-{}/dmt/triggers/{tag}/{GPS_SLOT}",
            ifo.to_lowercase()
        ),
    };

    let filename = if legacy_virgo {
        format!("{ifo}-{name}_OMICRON-*-*.{}", opts.ext)
    } else {
        format!("{ifo}-{name}_OmegaC-*-*.{}", opts.ext)
    };
    gpsdirs::find_in_gps_dirs(&format!("{base}/{filename}"), start, end, DEFAULT_NGPS)
}
