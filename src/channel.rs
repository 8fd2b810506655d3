//! Channel-name normalization.
//!
//! Raw channel identifiers follow the `OBSERVATORY:SUBSYSTEM-SIGNAL`
//! convention, with `:`, `_`, and `-` used inconsistently across sub-parts.
//! Directory layouts on the grid use a single canonical `IFO-REST` form:
//! every separator becomes `_`, then the first `_` becomes `-`, so that any
//! punctuation style of the same logical channel maps to one string.

use crate::error::{Result, TrigfindError};

/// Canonicalize a channel name: `X1:TEST-CHANNEL_NAME` → `X1-TEST_CHANNEL_NAME`.
///
/// A channel with no separator at all is returned unchanged; the structural
/// failure is reported by [`split_ifo`] where the observatory prefix is
/// actually needed.
pub fn normalize(channel: &str) -> String {
    let flat: String = channel
        .chars()
        .map(|c| if matches!(c, ':' | '-') { '_' } else { c })
        .collect();
    flat.replacen('_', "-", 1)
}

/// Split a raw channel into its normalized `(ifo, name)` parts.
pub fn split_ifo(channel: &str) -> Result<(String, String)> {
    let canonical = normalize(channel);
    match canonical.split_once('-') {
        Some((ifo, name)) => Ok((ifo.to_string(), name.to_string())),
        None => Err(TrigfindError::MalformedChannel(channel.to_string())),
    }
}

/// Single-letter site code for an interferometer prefix (`L1` → `L`).
pub fn site_code(ifo: &str) -> Result<char> {
    ifo.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| TrigfindError::MalformedChannel(ifo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_colon() {
        assert_eq!(normalize("X1:TEST-CHANNEL_NAME"), "X1-TEST_CHANNEL_NAME");
    }

    #[test]
    fn test_normalize_separator_styles_agree() {
        let canonical = normalize("L1:GDS-CALIB_STRAIN");
        assert_eq!(canonical, "L1-GDS_CALIB_STRAIN");
        assert_eq!(normalize("L1_GDS_CALIB_STRAIN"), canonical);
        assert_eq!(normalize("L1-GDS-CALIB-STRAIN"), canonical);
    }

    #[test]
    fn test_normalize_no_separator() {
        assert_eq!(normalize("NOSEP"), "NOSEP");
    }

    #[test]
    fn test_split_ifo() {
        let (ifo, name) = split_ifo("L1:GDS-CALIB_STRAIN").unwrap();
        assert_eq!(ifo, "L1");
        assert_eq!(name, "GDS_CALIB_STRAIN");
    }

    #[test]
    fn test_split_ifo_malformed() {
        assert!(matches!(
            split_ifo("NOSEP"),
            Err(TrigfindError::MalformedChannel(_))
        ));
    }

    #[test]
    fn test_site_code() {
        assert_eq!(site_code("l1").unwrap(), 'L');
        assert_eq!(site_code("V1").unwrap(), 'V');
    }
}
