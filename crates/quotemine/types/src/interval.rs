//! Half-open time ranges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TypesError, TypesResult};

/// An immutable `[start, end)` time range.
///
/// Equality and hashing go through both bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRecord")]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire form of [`Interval`].
#[derive(Deserialize)]
struct IntervalRecord {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<IntervalRecord> for Interval {
    type Error = TypesError;

    fn try_from(record: IntervalRecord) -> TypesResult<Self> {
        Interval::new(record.start, record.end)
    }
}

impl Interval {
    /// Build an interval, refusing `start > end`.
    ///
    /// An empty interval (`start == end`) is allowed and contains nothing.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> TypesResult<Self> {
        if start > end {
            return Err(TypesError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// `start <= time < end`.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.start <= time && time < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_200_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_bounds_are_half_open() {
        let interval = Interval::new(at(0), at(10)).unwrap();
        assert!(interval.contains(at(0)));
        assert!(interval.contains(at(9)));
        assert!(!interval.contains(at(10)));
        assert!(!interval.contains(at(-1)));
        assert_eq!(interval.duration(), Duration::seconds(10));
    }

    #[test]
    fn test_empty_interval_contains_nothing() {
        let interval = Interval::new(at(5), at(5)).unwrap();
        assert!(interval.is_empty());
        assert!(!interval.contains(at(5)));
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let err = Interval::new(at(10), at(0)).unwrap_err();
        assert!(matches!(err, TypesError::InvalidRange { .. }));
    }

    #[test]
    fn test_equality_uses_both_bounds() {
        let a = Interval::new(at(0), at(10)).unwrap();
        assert_eq!(a, Interval::new(at(0), at(10)).unwrap());
        assert_ne!(a, Interval::new(at(0), at(11)).unwrap());
        assert_ne!(a, Interval::new(at(1), at(10)).unwrap());
    }

    #[test]
    fn test_deserialization_checks_bounds() {
        let ok: Interval =
            serde_json::from_str(r#"{"start":"2008-08-01T00:00:00Z","end":"2008-08-02T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(ok.duration(), Duration::days(1));
        assert_eq!(serde_json::from_value::<Interval>(serde_json::to_value(ok).unwrap()).unwrap(), ok);

        let reversed = serde_json::from_str::<Interval>(
            r#"{"start":"2008-08-02T00:00:00Z","end":"2008-08-01T00:00:00Z"}"#,
        );
        let err = reversed.unwrap_err().to_string();
        assert!(err.contains("invalid interval"), "{err}");
    }

    proptest! {
        #[test]
        fn contains_matches_half_open_definition(
            a in -10_000i64..10_000,
            len in 0i64..10_000,
            t in -20_000i64..20_000,
        ) {
            let interval = Interval::new(at(a), at(a + len)).unwrap();
            prop_assert_eq!(interval.contains(at(t)), a <= t && t < a + len);
        }
    }
}
