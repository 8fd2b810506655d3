//! Event-trigger-generator name classification.
//!
//! Free-text ETG names arrive in many punctuation styles (`"dmt-omega"`,
//! `"DMT Omega"`, `"dmtomega"`). Classification lowercases the name,
//! splits it on `_`/`-`/space, and checks the word sequence against a
//! fixed, ordered set of known families. Anything unrecognised falls
//! through to the generic detchar family with the raw name kept as the
//! search tag, so classification is total.

/// The recognised trigger-generator families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Etg {
    DailyCbc,
    PycbcLive,
    OmegaOnline,
    KleineWelle,
    DmtOmega,
    /// Fallback family: anything under `/home/detchar/triggers`, searched
    /// by the raw ETG tag (Omicron et al.).
    Detchar(String),
}

impl Etg {
    /// Classify a free-text ETG name. First match wins; the match order is
    /// fixed (daily-cbc, pycbc-live, omega-online, kleinewelle, dmt-omega)
    /// with detchar as the total fallback.
    pub fn classify(name: &str) -> Etg {
        let words: Vec<String> = name
            .to_lowercase()
            .split(['_', '-', ' '])
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        let joined = words.concat();

        if words == ["daily", "cbc"] {
            Etg::DailyCbc
        } else if words == ["pycbc", "live"] {
            Etg::PycbcLive
        } else if joined == "omega" || joined == "omegaonline" {
            Etg::OmegaOnline
        } else if joined == "kw" || joined == "kleinewelle" {
            Etg::KleineWelle
        } else if joined == "dmtomega" {
            Etg::DmtOmega
        } else {
            Etg::Detchar(name.to_string())
        }
    }

    /// Family name for error reporting.
    pub fn family(&self) -> &'static str {
        match self {
            Etg::DailyCbc => "daily-cbc",
            Etg::PycbcLive => "pycbc-live",
            Etg::OmegaOnline => "omega-online",
            Etg::KleineWelle => "kleinewelle",
            Etg::DmtOmega => "dmt-omega",
            Etg::Detchar(_) => "detchar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_cbc_separators() {
        assert_eq!(Etg::classify("daily-cbc"), Etg::DailyCbc);
        assert_eq!(Etg::classify("daily_cbc"), Etg::DailyCbc);
        assert_eq!(Etg::classify("daily cbc"), Etg::DailyCbc);
    }

    #[test]
    fn test_pycbc_live() {
        assert_eq!(Etg::classify("pycbc-live"), Etg::PycbcLive);
        assert_eq!(Etg::classify("pycbc_live"), Etg::PycbcLive);
    }

    #[test]
    fn test_kleinewelle_aliases() {
        assert_eq!(Etg::classify("kw"), Etg::KleineWelle);
        assert_eq!(Etg::classify("kleinewelle"), Etg::KleineWelle);
        assert_eq!(Etg::classify("KleineWelle"), Etg::KleineWelle);
    }

    #[test]
    fn test_dmt_omega_styles() {
        for name in ["dmtomega", "dmt-omega", "dmt_omega", "DMT Omega"] {
            assert_eq!(Etg::classify(name), Etg::DmtOmega, "{name}");
        }
    }

    #[test]
    fn test_omega_online() {
        assert_eq!(Etg::classify("Omega"), Etg::OmegaOnline);
        assert_eq!(Etg::classify("omega_online"), Etg::OmegaOnline);
        assert_eq!(Etg::classify("omega online"), Etg::OmegaOnline);
    }

    #[test]
    fn test_fallback_keeps_raw_name() {
        assert_eq!(
            Etg::classify("Omicron"),
            Etg::Detchar("Omicron".to_string())
        );
        assert_eq!(
            Etg::classify("pycbc"),
            Etg::Detchar("pycbc".to_string())
        );
    }
}
