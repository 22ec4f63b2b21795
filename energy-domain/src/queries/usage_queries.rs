use time::Date;

use crate::domain::{MergedDailyRecord, PricedInterval};

/// Time-ordered half-hourly profile for a single date.
pub fn load_profile(intervals: &[PricedInterval], date: Date) -> Vec<&PricedInterval> {
    let mut rows: Vec<&PricedInterval> = intervals
        .iter()
        .filter(|p| p.interval.date == date)
        .collect();
    rows.sort_by(|a, b| a.interval.time.cmp(&b.interval.time));
    rows
}

/// Daily records with `start <= date <= end`, in date order.
///
/// Bounds given in reverse order are swapped rather than yielding nothing.
pub fn daily_range(records: &[MergedDailyRecord], start: Date, end: Date) -> Vec<&MergedDailyRecord> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    let mut rows: Vec<&MergedDailyRecord> = records
        .iter()
        .filter(|r| r.date() >= lo && r.date() <= hi)
        .collect();
    rows.sort_by_key(|r| r.date());
    rows
}

/// Earliest and latest interval dates, used to bound date pickers.
pub fn date_span(intervals: &[PricedInterval]) -> Option<(Date, Date)> {
    let min = intervals.iter().map(|p| p.interval.date).min()?;
    let max = intervals.iter().map(|p| p.interval.date).max()?;
    Some((min, max))
}
