//! Pure conversion functions: TOML config structs -> crate API config types.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::config::{LocaleToml, PickerToml, ValueToml};

use calpick_calendar::{CalendarDate, FormatSpec, Locale, WeekStart, YearMonth};
use calpick_picker::{DateRange, InputField, PickerConfig, PickerValue, SelectionMode};

/// Parses an ISO `YYYY-MM-DD` date, naming `what` on failure.
pub fn parse_iso(what: &str, text: &str) -> Result<CalendarDate> {
    text.trim()
        .parse()
        .with_context(|| format!("invalid {what}: {text:?}"))
}

/// Parses a `YYYY-MM` month.
pub fn parse_month(text: &str) -> Result<YearMonth> {
    text.trim()
        .parse()
        .with_context(|| format!("invalid month: {text:?}"))
}

/// Parses a selection mode name into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<SelectionMode> {
    match s.to_lowercase().as_str() {
        "single" => Ok(SelectionMode::Single),
        "range" => Ok(SelectionMode::Range),
        other => bail!("unknown selection mode: {other:?}"),
    }
}

/// Parses a text field name into the corresponding enum variant.
pub fn parse_field(s: &str) -> Result<InputField> {
    match s.to_lowercase().as_str() {
        "single" => Ok(InputField::Single),
        "start" => Ok(InputField::Start),
        "end" => Ok(InputField::End),
        other => bail!("unknown input field: {other:?}"),
    }
}

/// Parses a week start (0 Sunday, 1 Monday).
pub fn parse_week_start(value: u8) -> Result<WeekStart> {
    Ok(WeekStart::try_from(value)?)
}

/// Builds a [`Locale`] from twelve month names and seven day names.
pub fn build_locale(locale: &LocaleToml) -> Result<Locale> {
    let months: [String; 12] = match locale.month_names.clone().try_into() {
        Ok(names) => names,
        Err(names) => bail!("locale needs 12 month names, got {}", names.len()),
    };
    let days: [String; 7] = match locale.day_names.clone().try_into() {
        Ok(names) => names,
        Err(names) => bail!("locale needs 7 day names, got {}", names.len()),
    };
    Ok(Locale::new(months, days)?)
}

/// Builds a [`PickerConfig`] from the TOML picker table.
///
/// An unknown format name falls back to `MM/DD/YYYY` with a warning; every
/// other bad value is an error.
pub fn build_picker_config(picker: &PickerToml) -> Result<PickerConfig> {
    let min = picker
        .min_date
        .as_deref()
        .map(|d| parse_iso("min_date", d))
        .transpose()?;
    let max = picker
        .max_date
        .as_deref()
        .map(|d| parse_iso("max_date", d))
        .transpose()?;
    let disabled = picker
        .disabled_dates
        .iter()
        .map(|d| parse_iso("disabled date", d))
        .collect::<Result<Vec<_>>>()?;
    let highlighted = picker
        .highlight_dates
        .iter()
        .map(|d| parse_iso("highlight date", d))
        .collect::<Result<Vec<_>>>()?;

    let mut cfg = PickerConfig::new()
        .with_mode(parse_mode(&picker.mode)?)
        .with_format(FormatSpec::from_name_or_default(&picker.format))
        .with_min_date(min)
        .with_max_date(max)
        .with_disabled_dates(disabled)
        .with_highlight_dates(highlighted)
        .with_allow_empty(picker.allow_empty)
        .with_auto_close(picker.auto_close)
        .with_auto_close_delay(Duration::from_millis(picker.auto_close_ms))
        .with_week_start(parse_week_start(picker.week_start)?)
        .with_required(picker.required)
        .with_validate_on_change(picker.validate_on_change)
        .with_disabled(picker.disabled)
        .with_read_only(picker.read_only);
    if let Some(ref locale) = picker.locale {
        cfg = cfg.with_locale(build_locale(locale)?);
    }
    cfg.validate().context("invalid picker configuration")?;
    Ok(cfg)
}

/// Builds a picker value for `mode`.
///
/// Single pickers take `date`; range pickers take `start` and/or `end`.
/// Returns `None` when no date is given.
pub fn build_value(mode: SelectionMode, value: &ValueToml) -> Result<Option<PickerValue>> {
    let date = value.date.as_deref().map(|d| parse_iso("date", d)).transpose()?;
    let start = value.start.as_deref().map(|d| parse_iso("start", d)).transpose()?;
    let end = value.end.as_deref().map(|d| parse_iso("end", d)).transpose()?;
    match mode {
        SelectionMode::Single => {
            if start.is_some() || end.is_some() {
                bail!("a single picker value takes `date`, not `start`/`end`");
            }
            Ok(date.map(PickerValue::Single))
        }
        SelectionMode::Range => {
            if date.is_some() {
                bail!("a range picker value takes `start`/`end`, not `date`");
            }
            if start.is_none() && end.is_none() {
                return Ok(None);
            }
            Ok(Some(PickerValue::Range(DateRange::new(start, end))))
        }
    }
}
