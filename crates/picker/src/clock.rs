//! Source of "today" for the today button and the month view.

use calpick_calendar::CalendarDate;

/// Supplies the current day.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> CalendarDate;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::saturating_from_naive(chrono::Local::now().date_naive())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
