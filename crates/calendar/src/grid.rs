//! Fixed-height month grid generation.

use chrono::Days;

use crate::date::{CalendarDate, WeekStart, YearMonth};

/// Number of cells in a month grid (six full weeks).
pub const GRID_CELLS: usize = 42;

/// Returns the 42 consecutive days shown on the grid page for `month`.
///
/// The grid always spans six weeks so its height does not depend on the
/// month length. Leading cells hold the trailing days of the previous month
/// and trailing cells the leading days of the next month. The first cell
/// falls on `week_start`; the number of leading cells is
/// `(weekday(first of month) - week_start + 7) % 7`.
///
/// # Example
///
/// ```
/// use calpick_calendar::{WeekStart, YearMonth, grid_days};
///
/// let march = YearMonth::new(2024, 3).unwrap();
/// let cells = grid_days(march, WeekStart::Sunday);
/// assert_eq!(cells.len(), 42);
/// // 2024-03-01 was a Friday, so the grid opens on Sunday Feb 25.
/// assert_eq!(cells[0].to_string(), "2024-02-25");
/// assert_eq!(cells[5].to_string(), "2024-03-01");
/// ```
pub fn grid_days(month: YearMonth, week_start: WeekStart) -> [CalendarDate; GRID_CELLS] {
    let first = month.first_day();
    let offset = week_start.offset(first.weekday_from_sunday());
    // YearMonth is clamped to 0001..=9999, so the six weeks around it stay
    // well inside chrono's range.
    let start = first.as_naive() - Days::new(u64::from(offset));
    std::array::from_fn(|i| CalendarDate::from_naive_unchecked(start + Days::new(i as u64)))
}
