//! The single query entry point: classify the ETG name and delegate to
//! the matching finder.
//!
//! Family-specific parameters travel as a tagged union rather than a flat
//! keyword bag: each variant carries exactly the typed options its family
//! accepts, and handing the wrong variant to a family is a hard error so
//! caller mistakes surface immediately instead of being silently ignored.

use tracing::warn;

use crate::error::{Result, TrigfindError};
use crate::etg::Etg;
use crate::finder_daily_cbc::{self, DailyCbcOptions};
use crate::finder_detchar::{self, DetcharOptions};
use crate::finder_dmt_omega::{self, DmtOmegaOptions};
use crate::finder_kleinewelle::{self, KleineWelleOptions};
use crate::finder_omega_online::{self, OmegaOnlineOptions};
use crate::finder_pycbc_live::{self, PycbcLiveOptions};

/// Typed per-family finder parameters.
#[derive(Debug, Clone)]
pub enum FinderOptions {
    Detchar(DetcharOptions),
    KleineWelle(KleineWelleOptions),
    DmtOmega(DmtOmegaOptions),
    OmegaOnline(OmegaOnlineOptions),
    PycbcLive(PycbcLiveOptions),
    DailyCbc(DailyCbcOptions),
}

impl FinderOptions {
    /// Family name of the carried variant, for error reporting.
    pub fn family(&self) -> &'static str {
        match self {
            FinderOptions::Detchar(_) => "detchar",
            FinderOptions::KleineWelle(_) => "kleinewelle",
            FinderOptions::DmtOmega(_) => "dmt-omega",
            FinderOptions::OmegaOnline(_) => "omega-online",
            FinderOptions::PycbcLive(_) => "pycbc-live",
            FinderOptions::DailyCbc(_) => "daily-cbc",
        }
    }
}

macro_rules! take_options {
    ($options:expr, $variant:ident, $family:expr) => {
        match $options {
            None => Default::default(),
            Some(FinderOptions::$variant(o)) => o,
            Some(other) => {
                return Err(TrigfindError::OptionsMismatch {
                    family: $family,
                    given: other.family(),
                })
            }
        }
    };
}

/// Find the trigger files written for `channel` by `etg` that intersect
/// `[start, end)`, as absolute `file://` URLs in discovery order.
///
/// The ETG name selects a finder family ([`Etg::classify`]); `options`,
/// when given, must carry that family's variant.
///
/// # Examples
///
/// ```no_run
/// let cache = trigfind::find_trigger_files(
///     "L1:GDS-CALIB_STRAIN",
///     "Omicron",
///     1135641617,
///     1135728017,
///     None,
/// )?;
/// # Ok::<(), trigfind::TrigfindError>(())
/// ```
pub fn find_trigger_files(
    channel: &str,
    etg: &str,
    start: u64,
    end: u64,
    options: Option<FinderOptions>,
) -> Result<Vec<String>> {
    match Etg::classify(etg) {
        Etg::DailyCbc => {
            let opts: DailyCbcOptions = take_options!(options, DailyCbc, "daily-cbc");
            finder_daily_cbc::find(channel, start, end, &opts)
        }
        Etg::PycbcLive => {
            let opts: PycbcLiveOptions = take_options!(options, PycbcLive, "pycbc-live");
            finder_pycbc_live::find(channel, start, end, &opts)
        }
        Etg::OmegaOnline => {
            let opts: OmegaOnlineOptions = take_options!(options, OmegaOnline, "omega-online");
            finder_omega_online::find(channel, start, end, &opts)
        }
        Etg::KleineWelle => {
            let opts: KleineWelleOptions = take_options!(options, KleineWelle, "kleinewelle");
            finder_kleinewelle::find(channel, start, end, &opts)
        }
        Etg::DmtOmega => {
            let opts: DmtOmegaOptions = take_options!(options, DmtOmega, "dmt-omega");
            finder_dmt_omega::find(channel, start, end, &opts)
        }
        Etg::Detchar(raw) => {
            let mut opts: DetcharOptions = take_options!(options, Detchar, "detchar");
            // The raw name is the search tag; any etg field in the
            // supplied options is overridden, as the caller's etg
            // argument is authoritative.
            opts.etg = raw;
            finder_detchar::find(channel, start, end, &opts)
        }
    }
}

/// Renamed to [`find_trigger_files`]; kept as a forwarding alias for
/// compatibility with existing callers.
#[deprecated(since = "0.1.0", note = "renamed to find_trigger_files")]
pub fn find_trigger_urls(
    channel: &str,
    etg: &str,
    start: u64,
    end: u64,
    options: Option<FinderOptions>,
) -> Result<Vec<String>> {
    warn!("find_trigger_urls was renamed find_trigger_files");
    find_trigger_files(channel, etg, start, end, options)
}
