//! Candidate validation against bounds, the disabled list and `required`.

use calpick_calendar::{CalendarDate, format_date, is_same_day};
use tracing::debug;

use crate::config::PickerConfig;
use crate::error::ValidationError;
use crate::selection::PickerValue;

/// Checks one candidate day against the configured bounds and disabled list.
///
/// Bounds are inclusive and reported in the picker's text format.
pub fn validate_date(date: CalendarDate, config: &PickerConfig) -> Result<(), ValidationError> {
    let constraints = config.constraints();
    let render = |d: CalendarDate| format_date(Some(d), config.format(), config.locale());

    let result = if let Some(min) = constraints.min.filter(|&min| date < min) {
        Err(ValidationError::BelowMinimum { min: render(min) })
    } else if let Some(max) = constraints.max.filter(|&max| date > max) {
        Err(ValidationError::AboveMaximum { max: render(max) })
    } else if constraints
        .disabled
        .iter()
        .any(|&d| is_same_day(Some(date), Some(d)))
    {
        Err(ValidationError::DateDisabled)
    } else {
        Ok(())
    };
    if let Err(ref err) = result {
        debug!(date = %date, %err, "candidate rejected");
    }
    result
}

/// Checks a whole value, as on submit.
///
/// An empty value, or a range missing either end, fails with
/// [`ValidationError::RequiredMissing`] when the picker is required. Every
/// set day is checked with [`validate_date`].
pub fn validate_value(
    value: Option<PickerValue>,
    config: &PickerConfig,
) -> Result<(), ValidationError> {
    match value {
        None if config.required() => Err(ValidationError::RequiredMissing),
        None => Ok(()),
        Some(PickerValue::Single(date)) => validate_date(date, config),
        Some(PickerValue::Range(range)) => {
            if config.required() && !range.is_complete() {
                return Err(ValidationError::RequiredMissing);
            }
            range
                .start
                .into_iter()
                .chain(range.end)
                .try_for_each(|d| validate_date(d, config))
        }
    }
}
