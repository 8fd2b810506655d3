//! # trigfind
//!
//! Discovery of archived gravitational-wave event-trigger files on the
//! LIGO Data Grid.
//!
//! Several event-trigger generators (ETGs) have archived their output
//! over the years under different, historically-evolved directory and
//! filename conventions. Given a data channel, an ETG name, and a GPS
//! interval, this crate resolves the set of archived trigger files
//! intersecting that interval and returns them as absolute `file://`
//! URLs.
//!
//! ```no_run
//! let cache = trigfind::find_trigger_files(
//!     "L1:GDS-CALIB_STRAIN",
//!     "Omicron",
//!     1135641617,
//!     1135728017,
//!     None,
//! )?;
//! # Ok::<(), trigfind::TrigfindError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──▶ dispatch ──▶ etg classifier ──▶ finder family
//!                                               │
//!                         channel normalizer ◀──┤
//!                    GPS-bucket / day-bucket ◀──┘
//!                          enumeration (glob)
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dispatch`] | Entry point: classify and delegate |
//! | [`etg`] | ETG-name classification |
//! | [`channel`] | Channel-name normalization |
//! | [`segments`] | Time spans, filename parsing, gap algebra |
//! | [`gpsdirs`] | GPS-bucketed directory enumeration |
//! | [`gpstime`] | GPS to UTC conversion |
//! | [`finder_detchar`] | Detchar archive (Omicron et al., default) |
//! | [`finder_kleinewelle`] | KleineWelle DMT archive |
//! | [`finder_dmt_omega`] | DMT-Omega strain archive |
//! | [`finder_omega_online`] | GEO600 online Omega |
//! | [`finder_pycbc_live`] | PyCBC Live day directories |
//! | [`finder_daily_cbc`] | Daily CBC per-day catalogs |
//! | [`config`] | TOML base-path overrides |

pub mod channel;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod etg;
pub mod finder_daily_cbc;
pub mod finder_detchar;
pub mod finder_dmt_omega;
pub mod finder_kleinewelle;
pub mod finder_omega_online;
pub mod finder_pycbc_live;
pub mod gpsdirs;
pub mod gpstime;
pub mod segments;

pub use dispatch::{find_trigger_files, FinderOptions};
#[allow(deprecated)]
pub use dispatch::find_trigger_urls;
pub use error::{Result, TrigfindError};
pub use etg::Etg;
