use std::fmt;

use time::Date;

use super::tariff::TariffRow;

/// Number of half-hour buckets in a day.
pub const BUCKETS_PER_DAY: usize = 48;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeBucketError {
    #[error("time '{0}' is not in H:MM or HH:MM form")]
    Malformed(String),
    #[error("time '{0}' is outside 00:00..23:59")]
    OutOfRange(String),
}

/// Canonical `HH:MM` label for the start of an interval.
///
/// Always five characters, so lexical order matches chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct TimeBucket(String);

impl TimeBucket {
    /// Normalize a raw export time. A four-character value such as `0:30`
    /// gains one leading zero; a five-character value is kept as is.
    pub fn normalize(raw: &str) -> Result<Self, TimeBucketError> {
        let trimmed = raw.trim();
        let padded = if trimmed.len() == 4 {
            format!("0{trimmed}")
        } else {
            trimmed.to_string()
        };

        let bytes = padded.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(TimeBucketError::Malformed(raw.to_string()));
        }

        let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
        let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
        if hour > 23 || minute > 59 {
            return Err(TimeBucketError::OutOfRange(raw.to_string()));
        }

        Ok(Self(padded))
    }

    /// Bucket for a zero-based half-hour index (`0` is `00:00`, `47` is `23:30`).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BUCKETS_PER_DAY {
            return None;
        }
        let hour = index / 2;
        let minute = if index % 2 == 0 { 0 } else { 30 };
        Some(Self(format!("{hour:02}:{minute:02}")))
    }

    /// Zero-based half-hour index, or `None` when the time is not on a
    /// half-hour boundary.
    pub fn index(&self) -> Option<usize> {
        let (hour, minute) = self.0.split_once(':')?;
        let hour: usize = hour.parse().ok()?;
        match minute {
            "00" => Some(hour * 2),
            "30" => Some(hour * 2 + 1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One half-hour of metered usage and generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntervalRecord {
    pub date: Date,
    pub time: TimeBucket,
    /// Billed plus unbilled usage, with missing parts counted as zero.
    pub usage_kwh: f64,
    pub generation_kwh: Option<f64>,
}

/// Per-interval costs in minor currency units. All fields are `None` when
/// the interval had no matching tariff row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntervalCosts {
    pub home_plan: Option<f64>,
    pub midday_saver: Option<f64>,
    pub ev_add_on: Option<f64>,
    pub feed_in_credit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricedInterval {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub interval: IntervalRecord,
    pub rates: Option<TariffRow>,
    pub costs: IntervalCosts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_character_times_gain_one_leading_zero() {
        assert_eq!(TimeBucket::normalize("0:30").unwrap().as_str(), "00:30");
        assert_eq!(TimeBucket::normalize("9:00").unwrap().as_str(), "09:00");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = TimeBucket::normalize("10:30").unwrap();
        assert_eq!(once.as_str(), "10:30");
        let twice = TimeBucket::normalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn malformed_times_are_rejected() {
        assert!(matches!(TimeBucket::normalize("030"), Err(TimeBucketError::Malformed(_))));
        assert!(matches!(TimeBucket::normalize("ab:cd"), Err(TimeBucketError::Malformed(_))));
        assert!(matches!(TimeBucket::normalize("24:00"), Err(TimeBucketError::OutOfRange(_))));
        assert!(matches!(TimeBucket::normalize("12:60"), Err(TimeBucketError::OutOfRange(_))));
    }

    #[test]
    fn index_round_trips_only_on_half_hours() {
        for i in 0..BUCKETS_PER_DAY {
            let bucket = TimeBucket::from_index(i).unwrap();
            assert_eq!(bucket.index(), Some(i));
        }
        assert!(TimeBucket::from_index(BUCKETS_PER_DAY).is_none());
        assert_eq!(TimeBucket::normalize("10:15").unwrap().index(), None);
    }

    #[test]
    fn padded_buckets_sort_chronologically() {
        let mut buckets: Vec<TimeBucket> = ["10:00", "9:30", "0:00", "23:30"]
            .iter()
            .map(|t| TimeBucket::normalize(t).unwrap())
            .collect();
        buckets.sort();
        let labels: Vec<&str> = buckets.iter().map(TimeBucket::as_str).collect();
        assert_eq!(labels, vec!["00:00", "09:30", "10:00", "23:30"]);
    }
}
