//! Error types for the calpick-picker crate.

use calpick_calendar::{CalendarDate, CalendarError};

/// Error type for invalid picker configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// Returned when the lower bound is after the upper bound.
    #[error("min date {min} is after max date {max}")]
    InvertedBounds {
        /// Configured lower bound.
        min: CalendarDate,
        /// Configured upper bound.
        max: CalendarDate,
    },

    /// Returned when an initial value does not match the selection mode.
    #[error("initial value does not match the {mode} selection mode")]
    ValueModeMismatch {
        /// Name of the configured mode.
        mode: &'static str,
    },

    /// Wraps a calendar construction error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// A user-input validation failure.
///
/// These never abort anything: the picker records the message, reports it
/// through [`crate::PickerEvent::Error`] and stays editable. The `Display`
/// text is the message shown inline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No date is selected but one is required.
    #[error("Date is required")]
    RequiredMissing,

    /// The candidate is before the configured minimum.
    #[error("Date must be after {min}")]
    BelowMinimum {
        /// The minimum, rendered in the picker's format.
        min: String,
    },

    /// The candidate is after the configured maximum.
    #[error("Date must be before {max}")]
    AboveMaximum {
        /// The maximum, rendered in the picker's format.
        max: String,
    },

    /// The candidate is in the disabled list.
    #[error("This date is not available")]
    DateDisabled,

    /// Typed text does not match the format or names a day that does not exist.
    #[error("Invalid date format")]
    UnparseableText,
}
