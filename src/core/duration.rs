//! Elapsed time of entries. Always derived, never stored.

use crate::models::time_entry::TimeEntry;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How durations are rendered in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStyle {
    /// `42 seconds`, `3 hours`, `2 days`
    #[default]
    Words,
    /// `01:02:03`
    Clock,
}

impl DurationStyle {
    pub fn render(&self, d: Duration) -> String {
        match self {
            DurationStyle::Words => humanize(d),
            DurationStyle::Clock => clock(d),
        }
    }
}

/// Elapsed time of `entry` in whole seconds: end (or `now` while running) minus start.
pub fn elapsed(entry: &TimeEntry, now: DateTime<Utc>) -> Duration {
    let end = entry.end_time.unwrap_or(now);
    Duration::seconds((end - entry.start_time).num_seconds().max(0))
}

/// Sum of elapsed time over `entries`.
pub fn total_elapsed<'a, I>(entries: I, now: DateTime<Utc>) -> Duration
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries
        .into_iter()
        .fold(Duration::zero(), |acc, e| acc + elapsed(e, now))
}

fn unit(n: i64, singular: &str) -> String {
    if n == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}s", n, singular)
    }
}

/// Distance in the largest fitting unit, rounded to the nearest whole one.
pub fn humanize(d: Duration) -> String {
    let secs = d.num_seconds().max(0);

    if secs < 60 {
        return unit(secs, "second");
    }

    let minutes = (secs + 30) / 60;
    if minutes < 60 {
        return unit(minutes, "minute");
    }

    let hours = (secs + 1_800) / 3_600;
    if hours < 24 {
        return unit(hours, "hour");
    }

    let days = (secs + 43_200) / 86_400;
    if days < 30 {
        return unit(days, "day");
    }

    let months = (days + 15) / 30;
    if months < 12 {
        return unit(months, "month");
    }

    unit((days + 182) / 365, "year")
}

/// `HH:MM:SS`; hours are not wrapped at 24.
pub fn clock(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3_600,
        (secs % 3_600) / 60,
        secs % 60
    )
}
