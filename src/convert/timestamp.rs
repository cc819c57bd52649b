//! Timestamp and duration codec
//!
//! The protocol carries instants as seconds since the Unix epoch plus a
//! nanosecond offset, restricted to years 1 through 9999. Anything
//! outside that range, or a nanosecond field outside `[0, 1e9)`, is a
//! malformed payload and is reported as [`ConvertError::Format`].

use crate::error::{ConvertError, Result};
use crate::wire;
use chrono::{DateTime, TimeZone, Utc};

/// Seconds of 0001-01-01T00:00:00Z
const MIN_VALID_SECONDS: i64 = -62_135_596_800;
/// Seconds of 10000-01-01T00:00:00Z
const MAX_VALID_SECONDS: i64 = 253_402_300_800;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Roughly 10,000 years, the protocol's duration bound
const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

fn validate_timestamp(ts: &wire::Timestamp) -> Result<()> {
    if ts.seconds < MIN_VALID_SECONDS {
        return Err(ConvertError::Format(format!(
            "timestamp {}s before 0001-01-01",
            ts.seconds
        )));
    }
    if ts.seconds >= MAX_VALID_SECONDS {
        return Err(ConvertError::Format(format!(
            "timestamp {}s after 10000-01-01",
            ts.seconds
        )));
    }
    if ts.nanos < 0 || i64::from(ts.nanos) >= NANOS_PER_SECOND {
        return Err(ConvertError::Format(format!(
            "timestamp nanos {} not in range [0, 1e9)",
            ts.nanos
        )));
    }
    Ok(())
}

/// Convert a wire timestamp to a UTC instant
pub fn timestamp_from_grpc(ts: &wire::Timestamp) -> Result<DateTime<Utc>> {
    validate_timestamp(ts)?;
    // nanos is known to be non-negative here
    DateTime::from_timestamp(ts.seconds, ts.nanos as u32).ok_or_else(|| {
        ConvertError::Format(format!(
            "timestamp {}s {}ns is not representable",
            ts.seconds, ts.nanos
        ))
    })
}

/// Convert an optional wire timestamp, keeping absence as `None`
pub fn optional_timestamp_from_grpc(
    ts: Option<&wire::Timestamp>,
) -> Result<Option<DateTime<Utc>>> {
    ts.map(timestamp_from_grpc).transpose()
}

/// Convert an instant in any time zone to a wire timestamp
///
/// Fails for instants outside years 1 through 9999 and for leap-second
/// representations, neither of which the protocol can carry.
pub fn timestamp_to_grpc<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<wire::Timestamp> {
    let nanos = i32::try_from(t.timestamp_subsec_nanos())
        .map_err(|_| ConvertError::Format("timestamp nanos overflow".to_string()))?;
    let ts = wire::Timestamp::new(t.timestamp(), nanos);
    validate_timestamp(&ts)?;
    Ok(ts)
}

/// Convert a wire duration to signed nanoseconds
pub fn duration_from_grpc(d: &wire::Duration) -> Result<i64> {
    if !(-MAX_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&d.seconds) {
        return Err(ConvertError::Format(format!(
            "duration {}s out of range",
            d.seconds
        )));
    }
    let nanos = i64::from(d.nanos);
    if nanos.abs() >= NANOS_PER_SECOND {
        return Err(ConvertError::Format(format!(
            "duration nanos {} out of range",
            d.nanos
        )));
    }
    if (d.seconds < 0 && nanos > 0) || (d.seconds > 0 && nanos < 0) {
        return Err(ConvertError::Format(format!(
            "duration {}s {}ns has mismatched signs",
            d.seconds, d.nanos
        )));
    }

    d.seconds
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|n| n.checked_add(nanos))
        .ok_or_else(|| {
            ConvertError::Format(format!(
                "duration {}s {}ns overflows nanoseconds",
                d.seconds, d.nanos
            ))
        })
}

/// Convert an optional wire duration, keeping absence as `None`
pub fn optional_duration_from_grpc(d: Option<&wire::Duration>) -> Result<Option<i64>> {
    d.map(duration_from_grpc).transpose()
}

/// Convert signed nanoseconds to a wire duration
pub fn duration_to_grpc(nanos: i64) -> wire::Duration {
    // Rust's remainder keeps the dividend's sign, which is what the protocol wants
    wire::Duration {
        seconds: nanos / NANOS_PER_SECOND,
        nanos: (nanos % NANOS_PER_SECOND) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_timestamp_round_trip() {
        let samples = [
            wire::Timestamp::new(0, 0),
            wire::Timestamp::new(1_515_642_840, 0),
            wire::Timestamp::new(1_515_642_840, 999_999_999),
            wire::Timestamp::new(-1, 500),
            wire::Timestamp::new(MIN_VALID_SECONDS, 0),
            wire::Timestamp::new(MAX_VALID_SECONDS - 1, 999_999_999),
        ];

        for ts in samples {
            let t = timestamp_from_grpc(&ts).unwrap();
            assert_eq!(timestamp_to_grpc(&t).unwrap(), ts);
        }
    }

    #[test]
    fn test_timestamp_known_instant() {
        let expected = DateTime::parse_from_rfc3339("2018-01-10T19:54:00-08:00").unwrap();
        let ts = timestamp_to_grpc(&expected).unwrap();
        assert_eq!(ts, wire::Timestamp::new(1_515_642_840, 0));

        let t = timestamp_from_grpc(&ts).unwrap();
        assert_eq!(t, expected);
        assert_eq!(t.to_rfc3339(), "2018-01-11T03:54:00+00:00");
    }

    #[test]
    fn test_timestamp_equal_across_zones() {
        let pacific = DateTime::parse_from_rfc3339("2018-01-10T19:54:00-08:00").unwrap();
        let utc = DateTime::parse_from_rfc3339("2018-01-11T03:54:00Z").unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2018, 1, 11, 12, 54, 0)
            .unwrap();

        let a = timestamp_from_grpc(&timestamp_to_grpc(&pacific).unwrap()).unwrap();
        let b = timestamp_from_grpc(&timestamp_to_grpc(&utc).unwrap()).unwrap();
        let c = timestamp_from_grpc(&timestamp_to_grpc(&tokyo).unwrap()).unwrap();

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_timestamp_before_epoch() {
        let t = timestamp_from_grpc(&wire::Timestamp::new(-86_400, 0)).unwrap();
        assert_eq!(t.to_rfc3339(), "1969-12-31T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_nanos_out_of_range() {
        let err = timestamp_from_grpc(&wire::Timestamp::new(10, 1_000_000_000)).unwrap_err();
        assert!(err.is_format());

        let err = timestamp_from_grpc(&wire::Timestamp::new(10, -1)).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_timestamp_seconds_out_of_range() {
        assert!(timestamp_from_grpc(&wire::Timestamp::new(MIN_VALID_SECONDS - 1, 0)).is_err());
        assert!(timestamp_from_grpc(&wire::Timestamp::new(MAX_VALID_SECONDS, 0)).is_err());
        assert!(timestamp_from_grpc(&wire::Timestamp::new(i64::MAX, 0)).is_err());
    }

    #[test]
    fn test_timestamp_to_grpc_rejects_far_future() {
        let t = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert!(timestamp_to_grpc(&t).unwrap_err().is_format());
    }

    #[test]
    fn test_optional_timestamp() {
        assert_eq!(optional_timestamp_from_grpc(None).unwrap(), None);
        let t = optional_timestamp_from_grpc(Some(&wire::Timestamp::new(60, 0))).unwrap();
        assert_eq!(t.unwrap().timestamp(), 60);
    }

    #[test]
    fn test_duration_conversion() {
        let d = wire::Duration {
            seconds: 5,
            nanos: 250_000_000,
        };
        assert_eq!(duration_from_grpc(&d).unwrap(), 5_250_000_000);
        assert_eq!(duration_to_grpc(5_250_000_000), d);

        let negative = duration_to_grpc(-1_500_000_000);
        assert_eq!(negative.seconds, -1);
        assert_eq!(negative.nanos, -500_000_000);
        assert_eq!(duration_from_grpc(&negative).unwrap(), -1_500_000_000);
    }

    #[test]
    fn test_duration_invalid() {
        let mismatched = wire::Duration {
            seconds: 1,
            nanos: -1,
        };
        assert!(duration_from_grpc(&mismatched).unwrap_err().is_format());

        let big_nanos = wire::Duration {
            seconds: 0,
            nanos: 1_000_000_000,
        };
        assert!(duration_from_grpc(&big_nanos).is_err());

        // Within the protocol bound but beyond i64 nanoseconds
        let overflow = wire::Duration {
            seconds: 10_000_000_000,
            nanos: 0,
        };
        assert!(duration_from_grpc(&overflow).is_err());

        let too_long = wire::Duration {
            seconds: MAX_DURATION_SECONDS + 1,
            nanos: 0,
        };
        assert!(duration_from_grpc(&too_long).is_err());
    }
}
