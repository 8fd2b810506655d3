//! TOML configuration for per-family search overrides.
//!
//! The legacy absolute base paths are compiled-in defaults; a config file
//! overrides them per family (useful off the LDG, or against a mirrored
//! archive). Every section and every field is optional.
//!
//! ```toml
//! [detchar]
//! base = "/data/mirror/detchar/triggers"
//! ext = "xml"
//!
//! [kleinewelle]
//! base = "/data/mirror/kw/{gps}"
//!
//! [daily_cbc]
//! run = "bbh_gds"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::dispatch::FinderOptions;
use crate::etg::Etg;
use crate::finder_daily_cbc::DailyCbcOptions;
use crate::finder_detchar::DetcharOptions;
use crate::finder_dmt_omega::DmtOmegaOptions;
use crate::finder_kleinewelle::KleineWelleOptions;
use crate::finder_omega_online::OmegaOnlineOptions;
use crate::finder_pycbc_live::PycbcLiveOptions;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub detchar: DetcharOptions,
    #[serde(default)]
    pub kleinewelle: KleineWelleOptions,
    #[serde(default)]
    pub dmt_omega: DmtOmegaOptions,
    #[serde(default)]
    pub omega_online: OmegaOnlineOptions,
    #[serde(default)]
    pub pycbc_live: PycbcLiveOptions,
    #[serde(default)]
    pub daily_cbc: DailyCbcOptions,
}

impl Config {
    /// The finder options matching a classified ETG family.
    pub fn options_for(&self, etg: &Etg) -> FinderOptions {
        match etg {
            Etg::DailyCbc => FinderOptions::DailyCbc(self.daily_cbc.clone()),
            Etg::PycbcLive => FinderOptions::PycbcLive(self.pycbc_live.clone()),
            Etg::OmegaOnline => FinderOptions::OmegaOnline(self.omega_online.clone()),
            Etg::KleineWelle => FinderOptions::KleineWelle(self.kleinewelle.clone()),
            Etg::DmtOmega => FinderOptions::DmtOmega(self.dmt_omega.clone()),
            Etg::Detchar(_) => FinderOptions::Detchar(self.detchar.clone()),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Extensions are appended after a literal dot in the templates.
    for (section, ext) in [
        ("detchar", &config.detchar.ext),
        ("kleinewelle", &config.kleinewelle.ext),
        ("dmt_omega", &config.dmt_omega.ext),
        ("omega_online", &config.omega_online.ext),
    ] {
        if ext.starts_with('.') || ext.is_empty() {
            anyhow::bail!("{section}.ext must be a bare extension, got {ext:?}");
        }
    }
    if config.daily_cbc.run.is_empty() {
        anyhow::bail!("daily_cbc.run must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_sections_absent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trigfind.toml");
        fs::write(&path, "[detchar]\next = \"xml\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.detchar.ext, "xml");
        assert_eq!(config.detchar.etg, "omicron");
        assert_eq!(config.daily_cbc.run, "bns_gds");
        assert_eq!(
            config.pycbc_live.base.to_string_lossy(),
            "/home/pycbc.live/triggers/data"
        );
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trigfind.toml");
        fs::write(&path, "[detchar]\next = \".h5\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_options_for_family() {
        let config = Config::default();
        let opts = config.options_for(&Etg::classify("kw"));
        assert!(matches!(opts, FinderOptions::KleineWelle(_)));
        let opts = config.options_for(&Etg::classify("anything-else"));
        assert!(matches!(opts, FinderOptions::Detchar(_)));
    }
}
