//! Gregorian calendar days and months.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;

/// Smallest year accepted by the public constructors.
pub const MIN_YEAR: i32 = 1;

/// Largest year accepted by the public constructors.
pub const MAX_YEAR: i32 = 9999;

/// A concrete calendar day with no time-of-day component.
///
/// Equality and ordering are by calendar day. Public constructors accept
/// years in `MIN_YEAR..=MAX_YEAR`, the range every text format can
/// round-trip. Grid cells adjacent to that range may fall one month outside
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year is outside
    /// 1..=9999, [`CalendarError::InvalidMonth`] if the month is outside
    /// 1..=12, and [`CalendarError::InvalidDate`] if the day does not exist
    /// in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Converts `date`, clamping it to 0001-01-01 or 9999-12-31 when its
    /// year is outside 1..=9999.
    pub fn saturating_from_naive(date: NaiveDate) -> Self {
        let bound = if date.year() < MIN_YEAR {
            NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        } else if date.year() > MAX_YEAR {
            NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31)
        } else {
            None
        };
        Self(bound.unwrap_or(date))
    }

    /// Wraps a `NaiveDate` without checking the year range.
    pub(crate) fn from_naive_unchecked(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying `chrono` date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the weekday as a number of days since Sunday (0..=6).
    pub fn weekday_from_sunday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the month containing this date.
    pub fn year_month(self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.month(),
        }
    }

    /// Returns the date `n` days later, or `None` if the result leaves the
    /// 1..=9999 year range.
    pub fn checked_add_days(self, n: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(n))
            .and_then(|d| Self::try_from(d).ok())
    }

    /// Returns the date `n` days earlier, or `None` if the result leaves the
    /// 1..=9999 year range.
    pub fn checked_sub_days(self, n: u64) -> Option<Self> {
        self.0
            .checked_sub_days(Days::new(n))
            .and_then(|d| Self::try_from(d).ok())
    }

    /// Returns the number of days from `self` to `other` (negative if
    /// `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(CalendarError::YearOutOfRange { year: date.year() });
        }
        Ok(Self(date))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidIsoDate {
            text: s.to_string(),
        };
        let mut parts = s.trim().split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let year = y.parse::<i32>().map_err(|_| invalid())?;
        let month = m.parse::<u32>().map_err(|_| invalid())?;
        let day = d.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

/// First day of the week shown in the leftmost grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WeekStart {
    /// Weeks run Sunday..Saturday.
    #[default]
    Sunday = 0,
    /// Weeks run Monday..Sunday.
    Monday = 1,
}

impl WeekStart {
    /// Returns the numeric value (0 = Sunday, 1 = Monday).
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of leading cells before a day with the given weekday
    /// (counted from Sunday) in a grid starting on `self`.
    pub fn offset(self, weekday_from_sunday: u32) -> u32 {
        (weekday_from_sunday + 7 - u32::from(self.as_u8())) % 7
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            _ => Err(CalendarError::InvalidWeekStart { value }),
        }
    }
}

/// A calendar month with year context, as displayed by one grid page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] or
    /// [`CalendarError::InvalidMonth`] for out-of-range input.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    pub fn first_day(self) -> CalendarDate {
        // year and month are validated by every constructor
        CalendarDate::from_naive_unchecked(
            NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("day 1 exists in every month"),
        )
    }

    /// Returns the number of days in the month (28..=31).
    pub fn days_in_month(self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the month `delta` months away, saturating at
    /// 0001-01 and 9999-12.
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(delta);
        let min = i64::from(MIN_YEAR) * 12;
        let max = i64::from(MAX_YEAR) * 12 + 11;
        let index = index.clamp(min, max);
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Returns the following month.
    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// Returns the preceding month.
    pub fn prev(self) -> Self {
        self.shift(-1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM` month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidIsoDate {
            text: s.to_string(),
        };
        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = y.parse::<i32>().map_err(|_| invalid())?;
        let month = m.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
