//! Render-ready month page: 42 decorated day cells plus header labels.

use calpick_calendar::{CalendarDate, GRID_CELLS, YearMonth, grid_days};

use crate::config::PickerConfig;
use crate::selection::Selection;

/// One grid cell with the flags a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The day shown in this cell.
    pub date: CalendarDate,
    /// `false` for overflow days from the adjacent months.
    pub in_current_month: bool,
    /// The cell is today.
    pub is_today: bool,
    /// The cell is the selected day or a range end.
    pub is_selected: bool,
    /// The cell is the range start.
    pub is_range_start: bool,
    /// The cell is the range end.
    pub is_range_end: bool,
    /// The cell lies within a complete range, ends included.
    pub in_range: bool,
    /// The cell cannot be picked.
    pub is_disabled: bool,
    /// The cell is in the highlight list.
    pub is_highlighted: bool,
}

/// A month page ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// The displayed month.
    pub month: YearMonth,
    /// Header title, e.g. `March 2024`.
    pub title: String,
    /// Weekday header labels, rotated to the week start.
    pub weekday_labels: [String; 7],
    /// Six weeks of cells, row-major.
    pub cells: [DayCell; GRID_CELLS],
}

impl MonthView {
    /// Iterates the six week rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

/// Builds the page for `month` given the picker's selection and settings.
pub fn build_month_view(
    month: YearMonth,
    selection: Selection,
    config: &PickerConfig,
    today: CalendarDate,
) -> MonthView {
    let constraints = config.constraints();
    let selected = selection.dates();
    let range = match selection {
        Selection::Range(r) => Some(r.range()),
        Selection::Single(_) => None,
    };
    let days = grid_days(month, config.week_start());
    let cells = days.map(|date| DayCell {
        date,
        in_current_month: month.contains(date),
        is_today: date == today,
        is_selected: selected.contains(&date),
        is_range_start: range.is_some_and(|r| r.start == Some(date)),
        is_range_end: range.is_some_and(|r| r.end == Some(date)),
        in_range: range.is_some_and(|r| r.contains(date)),
        is_disabled: constraints.is_disabled(date),
        is_highlighted: constraints.is_highlighted(date),
    });
    let title = format!(
        "{} {}",
        config.locale().month_name(month.month()).unwrap_or_default(),
        month.year()
    );
    MonthView {
        month,
        title,
        weekday_labels: config
            .locale()
            .weekday_labels(config.week_start())
            .map(String::from),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use calpick_calendar::WeekStart;

    use super::*;
    use crate::config::SelectionMode;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn march() -> YearMonth {
        YearMonth::new(2024, 3).unwrap()
    }

    fn cell(view: &MonthView, d: CalendarDate) -> DayCell {
        *view.cells.iter().find(|c| c.date == d).unwrap()
    }

    #[test]
    fn header_and_overflow() {
        let cfg = PickerConfig::new().with_week_start(WeekStart::Monday);
        let view = build_month_view(
            march(),
            Selection::empty(SelectionMode::Single),
            &cfg,
            date(2024, 3, 5),
        );
        assert_eq!(view.title, "March 2024");
        assert_eq!(view.weekday_labels[0], "Mon");
        assert_eq!(view.weeks().count(), 6);
        // 2024-03-01 was a Friday: four overflow days when weeks start on Monday
        assert_eq!(view.cells[0].date, date(2024, 2, 26));
        assert!(!view.cells[0].in_current_month);
        assert!(view.cells[4].in_current_month);
        assert!(cell(&view, date(2024, 3, 5)).is_today);
    }

    #[test]
    fn range_flags() {
        let sel = Selection::empty(SelectionMode::Range)
            .select(date(2024, 3, 10))
            .select(date(2024, 3, 3));
        let view = build_month_view(march(), sel, &PickerConfig::new(), date(2024, 1, 1));
        let start = cell(&view, date(2024, 3, 3));
        assert!(start.is_range_start && start.is_selected && start.in_range);
        let end = cell(&view, date(2024, 3, 10));
        assert!(end.is_range_end && end.is_selected && end.in_range);
        let middle = cell(&view, date(2024, 3, 6));
        assert!(middle.in_range && !middle.is_selected);
        assert!(!cell(&view, date(2024, 3, 11)).in_range);
    }

    #[test]
    fn constraint_flags() {
        let cfg = PickerConfig::new()
            .with_min_date(Some(date(2024, 3, 2)))
            .with_disabled_dates(vec![date(2024, 3, 15)])
            .with_highlight_dates(vec![date(2024, 3, 20)]);
        let view = build_month_view(
            march(),
            Selection::empty(SelectionMode::Single),
            &cfg,
            date(2024, 1, 1),
        );
        assert!(cell(&view, date(2024, 3, 1)).is_disabled);
        assert!(!cell(&view, date(2024, 3, 2)).is_disabled);
        assert!(cell(&view, date(2024, 3, 15)).is_disabled);
        let highlighted = cell(&view, date(2024, 3, 20));
        assert!(highlighted.is_highlighted && !highlighted.is_disabled);
    }
}
