//! Week window - the Monday 00:00:00.000 to Sunday 23:59:59.999 period (UTC)

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A Monday-to-Sunday reporting week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WeekWindow {
    /// Resolve the week enclosing `instant`.
    ///
    /// Sunday belongs to the week that started six days earlier.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::containing_date(instant.date_naive())
    }

    /// Resolve the week enclosing a calendar date
    pub fn containing_date(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        let monday = date - Duration::days(offset);
        let start = monday.and_time(NaiveTime::MIN).and_utc();
        Self::from_start(start)
    }

    /// Build the window for an already-normalized week start
    pub fn from_start(start: DateTime<Utc>) -> Self {
        let end = start + Duration::days(7) - Duration::milliseconds(1);
        Self { start, end }
    }

    /// Window for the current week
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    /// Whether `instant` falls inside the window (both ends inclusive)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// The week immediately before this one
    pub fn previous(&self) -> Self {
        Self::from_start(self.start - Duration::days(7))
    }
}
