//! GPS to UTC conversion.
//!
//! GPS time counts SI seconds since 1980-01-06 00:00:00 UTC and, unlike
//! UTC, is not adjusted for leap seconds. Converting a GPS second to a
//! calendar date therefore subtracts the cumulative leap-second offset in
//! force at that instant. The table below lists the GPS times at which the
//! offset incremented (complete through the 2017-01-01 leap second, the
//! most recent announced).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{Result, TrigfindError};

/// Unix timestamp of the GPS epoch, 1980-01-06 00:00:00 UTC.
const GPS_EPOCH_UNIX: i64 = 315_964_800;

/// GPS times at which a leap second took effect; the offset at any GPS
/// time is the number of entries less than or equal to it.
const LEAP_SECONDS: [u64; 18] = [
    46_828_800,    // 1981-07-01
    78_364_801,    // 1982-07-01
    109_900_802,   // 1983-07-01
    173_059_203,   // 1985-07-01
    252_028_804,   // 1988-01-01
    315_187_205,   // 1990-01-01
    346_723_206,   // 1991-01-01
    393_984_007,   // 1992-07-01
    425_520_008,   // 1993-07-01
    457_056_009,   // 1994-07-01
    504_489_610,   // 1996-01-01
    551_750_411,   // 1997-07-01
    599_184_012,   // 1999-01-01
    820_108_813,   // 2006-01-01
    914_803_214,   // 2009-01-01
    1_025_136_015, // 2012-07-01
    1_119_744_016, // 2015-07-01
    1_167_264_017, // 2017-01-01
];

fn leap_count(gps: u64) -> i64 {
    LEAP_SECONDS.iter().filter(|&&t| t <= gps).count() as i64
}

/// Convert a GPS second to a UTC datetime.
pub fn gps_to_utc(gps: u64) -> Result<DateTime<Utc>> {
    let unix = gps as i64 + GPS_EPOCH_UNIX - leap_count(gps);
    Utc.timestamp_opt(unix, 0)
        .single()
        .ok_or(TrigfindError::TimeOutOfRange(gps))
}

/// The UTC calendar date containing a GPS second.
pub fn gps_date(gps: u64) -> Result<NaiveDate> {
    Ok(gps_to_utc(gps)?.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_gps_epoch() {
        let dt = gps_to_utc(0).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(1980, 1, 6).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_gw150914() {
        // GPS 1126259462 is 2015-09-14 09:50:45 UTC (17 leap seconds).
        let dt = gps_to_utc(1_126_259_462).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2015, 9, 14).unwrap());
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (9, 50, 45));
    }

    #[test]
    fn test_offset_after_2017() {
        assert_eq!(leap_count(1_200_000_000), 18);
        assert_eq!(leap_count(1_100_000_000), 16);
    }
}
