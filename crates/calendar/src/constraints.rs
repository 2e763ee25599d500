//! Day comparison and selectability checks.

use crate::date::CalendarDate;

/// Returns `true` if both dates are set and fall on the same calendar day.
///
/// Unlike `==` on `Option`, two `None`s are not the same day.
pub fn is_same_day(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Returns `true` if `date` is before `min`, after `max`, or listed in
/// `disabled`. Both bounds are inclusive.
pub fn is_date_disabled(
    date: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
    disabled: &[CalendarDate],
) -> bool {
    min.is_some_and(|min| date < min)
        || max.is_some_and(|max| date > max)
        || disabled.iter().any(|&d| is_same_day(Some(date), Some(d)))
}

/// Selectability constraints for one picker.
///
/// `highlighted` is cosmetic and never affects selectability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateConstraints {
    /// Earliest selectable day (inclusive).
    pub min: Option<CalendarDate>,
    /// Latest selectable day (inclusive).
    pub max: Option<CalendarDate>,
    /// Individually excluded days.
    pub disabled: Vec<CalendarDate>,
    /// Days rendered with emphasis.
    pub highlighted: Vec<CalendarDate>,
}

impl DateConstraints {
    /// Returns `true` if `date` cannot be selected.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        is_date_disabled(date, self.min, self.max, &self.disabled)
    }

    /// Returns `true` if `date` is in the highlight list.
    pub fn is_highlighted(&self, date: CalendarDate) -> bool {
        self.highlighted
            .iter()
            .any(|&d| is_same_day(Some(date), Some(d)))
    }
}
