//! Two-way synchronisation between text fields and the structured selection.
//!
//! The picker calls [`apply_structured_change`] after every structural
//! change (calendar pick, today/clear, external value) and
//! [`apply_text_change`] on every keystroke. Neither calls the other, so a
//! keystroke never round-trips back into its own field.

use calpick_calendar::{CalendarDate, FormatSpec, Locale, format_date, parse_date};

use crate::config::SelectionMode;
use crate::error::ValidationError;
use crate::selection::Selection;

/// Identifies one text field of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// The only field of a single picker.
    Single,
    /// The start field of a range picker.
    Start,
    /// The end field of a range picker.
    End,
}

/// Raw contents of a picker's text field(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputText {
    /// One field.
    Single(String),
    /// Start and end fields.
    Range {
        /// Start field text.
        start: String,
        /// End field text.
        end: String,
    },
}

impl InputText {
    /// Returns empty field(s) for `mode`.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(String::new()),
            SelectionMode::Range => Self::Range {
                start: String::new(),
                end: String::new(),
            },
        }
    }

    /// Returns the text of `field`, or `None` if this picker has no such field.
    pub fn get(&self, field: InputField) -> Option<&str> {
        match (self, field) {
            (Self::Single(text), InputField::Single) => Some(text),
            (Self::Range { start, .. }, InputField::Start) => Some(start),
            (Self::Range { end, .. }, InputField::End) => Some(end),
            _ => None,
        }
    }

    /// Overwrites the text of `field`. Returns `false` if this picker has no
    /// such field.
    pub fn set(&mut self, field: InputField, text: &str) -> bool {
        let slot = match (self, field) {
            (Self::Single(slot), InputField::Single) => slot,
            (Self::Range { start, .. }, InputField::Start) => start,
            (Self::Range { end, .. }, InputField::End) => end,
            _ => return false,
        };
        slot.clear();
        slot.push_str(text);
        true
    }
}

/// Result of interpreting one field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUpdate {
    /// The field is blank.
    Cleared,
    /// The field holds a complete, existing date.
    Parsed(CalendarDate),
}

/// Regenerates the field text for `selection`.
///
/// This overwrites whatever was typed, including unparsed partial input.
pub fn apply_structured_change(
    selection: Selection,
    format: FormatSpec,
    locale: &Locale,
) -> InputText {
    match selection {
        Selection::Single(s) => InputText::Single(format_date(s.date(), format, locale)),
        Selection::Range(r) => {
            let range = r.range();
            InputText::Range {
                start: format_date(range.start, format, locale),
                end: format_date(range.end, format, locale),
            }
        }
    }
}

/// Interprets one field's text.
///
/// # Errors
///
/// Returns [`ValidationError::UnparseableText`] for non-blank text that does
/// not parse in `format`.
pub fn apply_text_change(
    text: &str,
    format: FormatSpec,
    locale: &Locale,
) -> Result<TextUpdate, ValidationError> {
    if text.trim().is_empty() {
        return Ok(TextUpdate::Cleared);
    }
    parse_date(text, format, locale)
        .map(TextUpdate::Parsed)
        .ok_or(ValidationError::UnparseableText)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn structured_to_text_single() {
        let sel = Selection::empty(SelectionMode::Single).select(date(2024, 3, 5));
        assert_eq!(
            apply_structured_change(sel, FormatSpec::MonthDayYearSlash, &Locale::default()),
            InputText::Single("03/05/2024".to_string())
        );
    }

    #[test]
    fn structured_to_text_partial_range() {
        let sel = Selection::empty(SelectionMode::Range).select(date(2024, 3, 5));
        assert_eq!(
            apply_structured_change(sel, FormatSpec::YearMonthDay, &Locale::default()),
            InputText::Range {
                start: "2024-03-05".to_string(),
                end: String::new(),
            }
        );
    }

    #[test]
    fn text_to_structured() {
        let locale = Locale::default();
        let fmt = FormatSpec::MonthDayYearSlash;
        assert_eq!(
            apply_text_change("03/05/2024", fmt, &locale),
            Ok(TextUpdate::Parsed(date(2024, 3, 5)))
        );
        assert_eq!(apply_text_change("", fmt, &locale), Ok(TextUpdate::Cleared));
        assert_eq!(apply_text_change("  ", fmt, &locale), Ok(TextUpdate::Cleared));
        assert_eq!(
            apply_text_change("03/05/20", fmt, &locale),
            Err(ValidationError::UnparseableText)
        );
        assert_eq!(
            apply_text_change("03/05/", fmt, &locale),
            Err(ValidationError::UnparseableText)
        );
        assert_eq!(
            apply_text_change("02/30/2024", fmt, &locale),
            Err(ValidationError::UnparseableText)
        );
    }

    #[test]
    fn input_text_fields() {
        let mut text = InputText::empty(SelectionMode::Range);
        assert!(text.set(InputField::End, "x"));
        assert_eq!(text.get(InputField::End), Some("x"));
        assert_eq!(text.get(InputField::Start), Some(""));
        assert_eq!(text.get(InputField::Single), None);
        assert!(!text.set(InputField::Single, "y"));

        let mut single = InputText::empty(SelectionMode::Single);
        assert!(single.set(InputField::Single, "abc"));
        assert_eq!(single.get(InputField::Single), Some("abc"));
        assert_eq!(single.get(InputField::Start), None);
    }
}
