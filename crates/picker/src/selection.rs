//! Selection state machine for single-day and range pickers.
//!
//! # Range transitions
//!
//! ```text
//!  Empty ──select(d)──▶ StartOnly{d}
//!  StartOnly{s} ──select(d), d >= s──▶ Complete{s, d}
//!  StartOnly{s} ──select(d), d <  s──▶ Complete{d, s}
//!  Complete ──select(d)──▶ StartOnly{d}
//!  EndOnly{e} ──select(d)──▶ StartOnly{d}
//! ```
//!
//! `EndOnly` is reachable only by typing into the end field.

use calpick_calendar::CalendarDate;
use tracing::debug;

use crate::config::SelectionMode;
use crate::error::PickerError;

/// A start/end pair. When both ends are set, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    /// First day of the range.
    pub start: Option<CalendarDate>,
    /// Last day of the range.
    pub end: Option<CalendarDate>,
}

impl DateRange {
    /// A range with neither end set.
    pub const EMPTY: DateRange = DateRange {
        start: None,
        end: None,
    };

    /// Creates a range, swapping the ends if `start > end`.
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if e < s => Self {
                start: Some(e),
                end: Some(s),
            },
            _ => Self { start, end },
        }
    }

    /// Returns `true` if both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns `true` if neither end is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns `true` if the range is complete and `date` lies within it.
    pub fn contains(&self, date: CalendarDate) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s <= date && date <= e)
    }

    /// Returns the phase of the range state machine.
    pub fn phase(&self) -> RangePhase {
        match (self.start, self.end) {
            (None, None) => RangePhase::Empty,
            (Some(_), None) => RangePhase::StartOnly,
            (None, Some(_)) => RangePhase::EndOnly,
            (Some(_), Some(_)) => RangePhase::Complete,
        }
    }
}

/// Phases of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePhase {
    /// Nothing selected.
    Empty,
    /// Start picked, waiting for the end.
    StartOnly,
    /// End typed with no start.
    EndOnly,
    /// Both ends set.
    Complete,
}

/// A value reported to the host when the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerValue {
    /// A single day.
    Single(CalendarDate),
    /// A range, possibly partial when empty values are allowed.
    Range(DateRange),
}

/// Single-mode selection: empty or one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleSelection {
    date: Option<CalendarDate>,
}

impl SingleSelection {
    /// Creates a selection holding `date`.
    pub fn new(date: Option<CalendarDate>) -> Self {
        Self { date }
    }

    /// Returns the selected day.
    pub fn date(self) -> Option<CalendarDate> {
        self.date
    }

    /// Replaces the selection unconditionally.
    pub fn select(self, date: CalendarDate) -> Self {
        debug!(from = ?self.date, to = %date, "single selection");
        Self { date: Some(date) }
    }
}

/// Range-mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSelection {
    range: DateRange,
}

impl RangeSelection {
    /// Creates a selection from `range`, normalising its order.
    pub fn new(range: DateRange) -> Self {
        Self {
            range: DateRange::new(range.start, range.end),
        }
    }

    /// Returns the current range.
    pub fn range(self) -> DateRange {
        self.range
    }

    /// Returns the current phase.
    pub fn phase(self) -> RangePhase {
        self.range.phase()
    }

    /// Applies a calendar pick.
    pub fn select(self, date: CalendarDate) -> Self {
        let next = match (self.range.start, self.range.end) {
            (Some(start), None) if date >= start => DateRange {
                start: Some(start),
                end: Some(date),
            },
            (Some(start), None) => DateRange {
                start: Some(date),
                end: Some(start),
            },
            _ => DateRange {
                start: Some(date),
                end: None,
            },
        };
        debug!(
            from = ?self.range.phase(),
            to = ?next.phase(),
            date = %date,
            "range selection"
        );
        Self { range: next }
    }

    /// Replaces the start, keeping the end. Swaps if the ends cross.
    pub fn with_start(self, start: Option<CalendarDate>) -> Self {
        Self {
            range: DateRange::new(start, self.range.end),
        }
    }

    /// Replaces the end, keeping the start. Swaps if the ends cross.
    pub fn with_end(self, end: Option<CalendarDate>) -> Self {
        Self {
            range: DateRange::new(self.range.start, end),
        }
    }
}

/// Mode-tagged selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Single-day picker.
    Single(SingleSelection),
    /// Range picker.
    Range(RangeSelection),
}

impl Selection {
    /// Returns an empty selection for `mode`.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(SingleSelection::default()),
            SelectionMode::Range => Self::Range(RangeSelection::default()),
        }
    }

    /// Builds a selection for `mode` seeded with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ValueModeMismatch`] if `value` is a range for a
    /// single picker or a single day for a range picker.
    pub fn from_value(mode: SelectionMode, value: Option<PickerValue>) -> Result<Self, PickerError> {
        match (mode, value) {
            (_, None) => Ok(Self::empty(mode)),
            (SelectionMode::Single, Some(PickerValue::Single(d))) => {
                Ok(Self::Single(SingleSelection::new(Some(d))))
            }
            (SelectionMode::Range, Some(PickerValue::Range(r))) => {
                Ok(Self::Range(RangeSelection::new(r)))
            }
            _ => Err(PickerError::ValueModeMismatch { mode: mode.name() }),
        }
    }

    /// Returns the mode of this selection.
    pub fn mode(self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range(_) => SelectionMode::Range,
        }
    }

    /// Applies a calendar pick using the mode's transition rules.
    pub fn select(self, date: CalendarDate) -> Self {
        match self {
            Self::Single(s) => Self::Single(s.select(date)),
            Self::Range(r) => Self::Range(r.select(date)),
        }
    }

    /// Returns `true` if the selection is a finished choice: a picked day in
    /// single mode or a complete range.
    pub fn is_terminal(self) -> bool {
        match self {
            Self::Single(s) => s.date().is_some(),
            Self::Range(r) => r.phase() == RangePhase::Complete,
        }
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(self) -> bool {
        self.value().is_none()
    }

    /// Returns the current value, or `None` when nothing is selected.
    pub fn value(self) -> Option<PickerValue> {
        match self {
            Self::Single(s) => s.date().map(PickerValue::Single),
            Self::Range(r) if r.range().is_empty() => None,
            Self::Range(r) => Some(PickerValue::Range(r.range())),
        }
    }

    /// Returns every concrete day currently set (one or two).
    pub fn dates(self) -> Vec<CalendarDate> {
        match self {
            Self::Single(s) => s.date().into_iter().collect(),
            Self::Range(r) => {
                let range = r.range();
                range.start.into_iter().chain(range.end).collect()
            }
        }
    }

    /// Returns the day the month view should open on: the single day, or
    /// the range start (the end when only the end is set).
    pub fn anchor(self) -> Option<CalendarDate> {
        match self {
            Self::Single(s) => s.date(),
            Self::Range(r) => r.range().start.or(r.range().end),
        }
    }
}
