//! Error taxonomy for trigger-file discovery.
//!
//! Every fatal condition surfaces synchronously as the result of the query
//! call — there is no partial-result-plus-error mode. A malformed filename
//! encountered mid-enumeration aborts the whole query rather than being
//! skipped; silently dropping files would make a gap look like real
//! downtime.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrigfindError>;

#[derive(Error, Debug)]
pub enum TrigfindError {
    /// The channel-level directory for a detchar search does not exist.
    /// Either the channel name or the ETG name is wrong, or the channel is
    /// not configured for that ETG.
    #[error(
        "no channel-level directory found at {path}; either the channel or \
         ETG name is wrong, or this channel is not configured for this ETG"
    )]
    UnknownChannelOrEtg { path: String },

    /// The ETG family was recognised but cannot serve this channel or
    /// observatory (e.g. DMT-Omega for a non-strain channel).
    #[error("{family}: {detail}")]
    UnsupportedConfiguration {
        family: &'static str,
        detail: String,
    },

    /// A globbed file does not fit the `OBS-TAG-START-DURATION.EXT` shape.
    #[error("malformed trigger filename: {path}")]
    MalformedFilename { path: PathBuf },

    /// A daily-cbc catalog record does not hold five whitespace-separated
    /// fields with numeric start/duration.
    #[error("malformed catalog record at {path}:{line}")]
    MalformedCatalog { path: PathBuf, line: usize },

    /// A channel name with no `OBSERVATORY:` (or `-`/`_`) prefix.
    #[error("channel name {0:?} has no observatory prefix")]
    MalformedChannel(String),

    /// Finder options of the wrong family were passed to the dispatcher.
    #[error("the {family} finder does not accept {given} options")]
    OptionsMismatch {
        family: &'static str,
        given: &'static str,
    },

    /// An internally constructed glob pattern failed to compile.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A GPS time that does not convert to a calendar date.
    #[error("GPS time {0} is out of range")]
    TimeOutOfRange(u64),
}
