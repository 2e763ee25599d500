//! Configuration for a date picker instance.

use std::time::Duration;

use calpick_calendar::{CalendarDate, DateConstraints, FormatSpec, Locale, WeekStart};

use crate::error::PickerError;

/// Default delay between a terminal selection and the automatic close.
pub const DEFAULT_AUTO_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Whether a picker selects one day or a start/end range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// One day; each pick replaces the previous one.
    #[default]
    Single,
    /// A start and end day.
    Range,
}

impl SelectionMode {
    /// Returns the lowercase mode name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Range => "range",
        }
    }
}

/// Configuration for a [`crate::DatePicker`].
///
/// All settings are fixed for the lifetime of the picker.
///
/// # Example
///
/// ```
/// use calpick_calendar::{FormatSpec, WeekStart};
/// use calpick_picker::{PickerConfig, SelectionMode};
///
/// let config = PickerConfig::new()
///     .with_mode(SelectionMode::Range)
///     .with_format(FormatSpec::YearMonthDay)
///     .with_week_start(WeekStart::Monday);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct PickerConfig {
    mode: SelectionMode,
    format: FormatSpec,
    constraints: DateConstraints,
    allow_empty: bool,
    auto_close: bool,
    auto_close_delay: Duration,
    week_start: WeekStart,
    locale: Locale,
    required: bool,
    validate_on_change: bool,
    disabled: bool,
    read_only: bool,
}

impl PickerConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: single mode, `MM/DD/YYYY`, no constraints, empty values
    /// allowed, auto-close after 150 ms, weeks start on Sunday, English
    /// names, not required, validation on every change, enabled and
    /// editable.
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::Single,
            format: FormatSpec::default(),
            constraints: DateConstraints::default(),
            allow_empty: true,
            auto_close: true,
            auto_close_delay: DEFAULT_AUTO_CLOSE_DELAY,
            week_start: WeekStart::Sunday,
            locale: Locale::default(),
            required: false,
            validate_on_change: true,
            disabled: false,
            read_only: false,
        }
    }

    /// Sets the selection mode.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the text format used for display and parsing.
    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = format;
        self
    }

    /// Sets the inclusive lower bound.
    pub fn with_min_date(mut self, min: Option<CalendarDate>) -> Self {
        self.constraints.min = min;
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_max_date(mut self, max: Option<CalendarDate>) -> Self {
        self.constraints.max = max;
        self
    }

    /// Sets the individually disabled days.
    pub fn with_disabled_dates(mut self, dates: Vec<CalendarDate>) -> Self {
        self.constraints.disabled = dates;
        self
    }

    /// Sets the highlighted days.
    pub fn with_highlight_dates(mut self, dates: Vec<CalendarDate>) -> Self {
        self.constraints.highlighted = dates;
        self
    }

    /// Sets whether empty and partial values are reported as changes.
    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Sets whether the popup closes after a terminal selection.
    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Sets the delay before an automatic close.
    pub fn with_auto_close_delay(mut self, delay: Duration) -> Self {
        self.auto_close_delay = delay;
        self
    }

    /// Sets the first column of the month grid.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the month and weekday names.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets whether an empty value fails validation.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether typed text is checked against bounds on every change.
    pub fn with_validate_on_change(mut self, validate: bool) -> Self {
        self.validate_on_change = validate;
        self
    }

    /// Sets whether the picker ignores all interaction.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the picker can be viewed but not changed.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    // --- Accessors ---

    /// Returns the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns the text format.
    pub fn format(&self) -> FormatSpec {
        self.format
    }

    /// Returns the selectability constraints.
    pub fn constraints(&self) -> &DateConstraints {
        &self.constraints
    }

    /// Returns whether empty and partial values are reported.
    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    /// Returns whether the popup closes after a terminal selection.
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    /// Returns the auto-close delay.
    pub fn auto_close_delay(&self) -> Duration {
        self.auto_close_delay
    }

    /// Returns the grid week start.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the name tables.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns whether a value is required.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Returns whether typed text is validated on every change.
    pub fn validate_on_change(&self) -> bool {
        self.validate_on_change
    }

    /// Returns whether the picker is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Returns whether the picker is read-only.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Returns `true` if interaction handlers should be ignored.
    pub fn is_inert(&self) -> bool {
        self.disabled || self.read_only
    }

    /// Validates this configuration.
    ///
    /// Checks that `min_date` is not after `max_date`.
    pub fn validate(&self) -> Result<(), PickerError> {
        match (self.constraints.min, self.constraints.max) {
            (Some(min), Some(max)) if min > max => Err(PickerError::InvertedBounds { min, max }),
            _ => Ok(()),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}
