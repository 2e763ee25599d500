//! Error types for the calpick-calendar crate.

/// Error type for all fallible constructors in the calpick-calendar crate.
///
/// Text parsing never produces this error: [`crate::parse_date`] returns
/// `None` for text it cannot interpret. These variants cover values handed
/// to constructors directly (dates, months, week starts, format names and
/// locale tables).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day does not exist in the given month and year.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
    },

    /// Returned when a year is outside the four-digit range 1..=9999.
    #[error("year out of range: {year} (must be 1..=9999)")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when text is not an ISO `YYYY-MM-DD` date or `YYYY-MM` month.
    #[error("invalid ISO date: {text:?}")]
    InvalidIsoDate {
        /// The rejected text.
        text: String,
    },

    /// Returned when a week start is neither 0 (Sunday) nor 1 (Monday).
    #[error("invalid week start: {value} (must be 0 or 1)")]
    InvalidWeekStart {
        /// The rejected value.
        value: u8,
    },

    /// Returned when a format name matches none of the supported formats.
    #[error("unknown date format: {name:?}")]
    UnknownFormat {
        /// The rejected format name.
        name: String,
    },

    /// Returned when a locale name table has an empty entry or ambiguous
    /// month abbreviations.
    #[error("invalid locale: {reason}")]
    InvalidLocale {
        /// Description of the problem.
        reason: String,
    },
}
