//! GPS-bucketed directory enumeration.
//!
//! Trigger archives keep per-directory file counts bounded by grouping
//! files under the leading digits of their GPS start time (five digits by
//! default, a ~10^5-second bucket for 10-digit GPS times). A search
//! instantiates a path template once per bucket overlapping the query
//! span, globs it, filters the matches by their embedded time span, and
//! returns the survivors as deduplicated `file://` URLs in first-seen
//! order.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::segments::{file_segment, Segment};

/// Placeholder in a path template substituted with each bucket value.
pub const GPS_SLOT: &str = "{gps}";

/// Default number of leading GPS digits forming a bucket.
pub const DEFAULT_NGPS: usize = 5;

/// Truncate a GPS time to its leading `ngps` digits.
fn truncate_gps(t: u64, ngps: usize) -> u64 {
    let digits = if t == 0 { 1 } else { t.ilog10() as usize + 1 };
    if digits <= ngps {
        t
    } else {
        t / 10u64.pow((digits - ngps) as u32)
    }
}

/// Convert a filesystem path to an absolute `file://` URL.
pub fn as_url(path: &Path) -> String {
    if path.is_absolute() {
        format!("file://{}", path.display())
    } else {
        let abs = std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf());
        format!("file://{}", abs.display())
    }
}

/// Glob a `{gps}`-templated path across every bucket overlapping
/// `[start, end)` and return the intersecting files as URLs.
///
/// The scan starts one bucket below `trunc(start)`: truncation is a lossy
/// locality index, so a file intersecting the span can be rooted in the
/// bucket before the one its start time truncates into. No symmetric
/// adjustment is needed at the top — a file extending past `end` is still
/// rooted at or below `end`'s bucket.
///
/// An unreadable or absent directory yields no matches for that bucket;
/// a matched file whose name does not parse is a hard error.
pub fn find_in_gps_dirs(template: &str, start: u64, end: u64, ngps: usize) -> Result<Vec<String>> {
    let span = Segment::new(start as f64, end as f64);
    let first = truncate_gps(start, ngps).saturating_sub(1);
    let last = truncate_gps(end, ngps);

    let mut urls = Vec::new();
    for bucket in first..=last {
        let pattern = template.replace(GPS_SLOT, &bucket.to_string());
        debug!(%pattern, bucket, "scanning GPS bucket");
        for entry in glob::glob(&pattern)? {
            // Unreadable directories are skipped: enumeration is
            // best-effort per bucket.
            let Ok(path) = entry else { continue };
            if file_segment(&path)?.intersects(&span) {
                urls.push(as_url(&path));
            }
        }
    }
    Ok(dedup_preserving_order(urls))
}

/// Drop duplicate entries, keeping the first occurrence of each.
pub fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter().filter(|u| seen.insert(u.clone())).collect()
}

/// Day-directory scan shared by the calendar-bucketed families: glob
/// `pattern`, keep files intersecting `span`, append their URLs.
pub fn collect_intersecting(pattern: &str, span: &Segment, out: &mut Vec<String>) -> Result<()> {
    for entry in glob::glob(pattern)? {
        let Ok(path) = entry else { continue };
        if file_segment(&path)?.intersects(span) {
            out.push(as_url(&path));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_truncate_gps() {
        assert_eq!(truncate_gps(1135641617, 5), 11356);
        assert_eq!(truncate_gps(99999, 5), 99999);
        assert_eq!(truncate_gps(100, 5), 100);
        assert_eq!(truncate_gps(0, 5), 0);
    }

    #[test]
    fn test_find_in_gps_dirs_filters_and_orders() {
        let tmp = TempDir::new().unwrap();
        let b1 = tmp.path().join("11356");
        let b2 = tmp.path().join("11357");
        fs::create_dir_all(&b1).unwrap();
        fs::create_dir_all(&b2).unwrap();

        // Intersecting files in both buckets.
        touch(&b1, "L1-TEST-1135640000-10000.xml");
        touch(&b1, "L1-TEST-1135650000-10000.xml");
        touch(&b2, "L1-TEST-1135700000-10000.xml");
        // Ends exactly at the query start: half-open, excluded.
        touch(&b1, "L1-TEST-1135630000-11617.xml");
        // Starts at the query end: excluded.
        touch(&b2, "L1-TEST-1135728017-10000.xml");

        let template = format!("{}/{}/L1-TEST-*-*.xml", tmp.path().display(), GPS_SLOT);
        let urls = find_in_gps_dirs(&template, 1135641617, 1135728017, 5).unwrap();
        assert_eq!(urls.len(), 3);
        // Ascending bucket order: both 11356 files precede the 11357 file.
        assert!(urls[0].contains("/11356/"));
        assert!(urls[1].contains("/11356/"));
        assert!(urls[2].contains("/11357/"));
        assert!(urls.iter().all(|u| u.starts_with("file:///")));
    }

    #[test]
    fn test_find_in_gps_dirs_idempotent_and_unique() {
        let tmp = TempDir::new().unwrap();
        let b = tmp.path().join("11356");
        fs::create_dir_all(&b).unwrap();
        touch(&b, "L1-TEST-1135640000-10000.xml");

        let template = format!("{}/{}/L1-TEST-*-*.xml", tmp.path().display(), GPS_SLOT);
        let a = find_in_gps_dirs(&template, 1135641617, 1135728017, 5).unwrap();
        let b = find_in_gps_dirs(&template, 1135641617, 1135728017, 5).unwrap();
        assert_eq!(a, b);
        let unique: HashSet<&String> = a.iter().collect();
        assert_eq!(unique.len(), a.len());
    }

    #[test]
    fn test_missing_directory_is_empty_not_error() {
        let template = "/nonexistent/trigfind-test/{gps}/L1-TEST-*-*.xml";
        let urls = find_in_gps_dirs(template, 1135641617, 1135728017, 5).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_malformed_filename_aborts() {
        let tmp = TempDir::new().unwrap();
        let b = tmp.path().join("11356");
        fs::create_dir_all(&b).unwrap();
        touch(&b, "L1-TEST-notanumber-10000.xml");

        let template = format!("{}/{}/L1-TEST-*-*.xml", tmp.path().display(), GPS_SLOT);
        assert!(find_in_gps_dirs(&template, 1135641617, 1135728017, 5).is_err());
    }

    #[test]
    fn test_dedup_preserving_order() {
        let urls = vec![
            "file:///a".to_string(),
            "file:///b".to_string(),
            "file:///a".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(urls),
            vec!["file:///a".to_string(), "file:///b".to_string()]
        );
    }
}
