//! Month and weekday name tables.

use crate::date::WeekStart;
use crate::error::CalendarError;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month and weekday names used for display and month-name text formats.
///
/// `day_names` always starts with Sunday; use [`Locale::weekday_labels`]
/// for a header row rotated to the configured week start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    month_names: [String; 12],
    day_names: [String; 7],
}

impl Locale {
    /// Creates a locale from custom name tables.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLocale`] if any name is empty or
    /// whitespace-only, or if a month's three-character abbreviation is also
    /// the start of another month's name (French `juin`/`juillet` both
    /// abbreviate to `jui`), since month-name text would then parse back to
    /// the wrong month.
    pub fn new(month_names: [String; 12], day_names: [String; 7]) -> Result<Self, CalendarError> {
        if let Some(i) = month_names.iter().position(|n| n.trim().is_empty()) {
            return Err(CalendarError::InvalidLocale {
                reason: format!("month name {} is empty", i + 1),
            });
        }
        if let Some(i) = day_names.iter().position(|n| n.trim().is_empty()) {
            return Err(CalendarError::InvalidLocale {
                reason: format!("day name {i} is empty"),
            });
        }
        for (i, name) in month_names.iter().enumerate() {
            let abbr = abbreviation(name);
            let clash = month_names
                .iter()
                .enumerate()
                .find(|&(j, other)| j != i && other.starts_with(abbr));
            if let Some((j, _)) = clash {
                return Err(CalendarError::InvalidLocale {
                    reason: format!(
                        "month {} abbreviates to {abbr:?}, which also starts month {}",
                        i + 1,
                        j + 1
                    ),
                });
            }
        }
        Ok(Self {
            month_names,
            day_names,
        })
    }

    /// Returns the three-character abbreviation of `month` (1..=12) used by
    /// the month-name text formats.
    pub fn month_abbreviation(&self, month: u32) -> Option<&str> {
        self.month_name(month).map(abbreviation)
    }

    /// Returns the full name of `month` (1..=12), or `None` outside that range.
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_names.get(index).map(String::as_str)
    }

    /// Returns the month names, January first.
    pub fn month_names(&self) -> &[String; 12] {
        &self.month_names
    }

    /// Returns the weekday names, Sunday first.
    pub fn day_names(&self) -> &[String; 7] {
        &self.day_names
    }

    /// Returns weekday header labels rotated so the first column matches
    /// `week_start`.
    pub fn weekday_labels(&self, week_start: WeekStart) -> [&str; 7] {
        let shift = usize::from(week_start.as_u8());
        std::array::from_fn(|i| self.day_names[(i + shift) % 7].as_str())
    }

    /// Resolves a month from a name fragment by case-sensitive prefix match.
    ///
    /// The first month whose name starts with `fragment` wins. Empty
    /// fragments never match.
    pub fn month_from_prefix(&self, fragment: &str) -> Option<u32> {
        if fragment.is_empty() {
            return None;
        }
        self.month_names
            .iter()
            .position(|name| name.starts_with(fragment))
            .map(|i| i as u32 + 1)
    }
}

fn abbreviation(name: &str) -> &str {
    match name.char_indices().nth(3) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            month_names: ENGLISH_MONTHS.map(String::from),
            day_names: ENGLISH_DAYS.map(String::from),
        }
    }
}
