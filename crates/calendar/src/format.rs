//! Fixed textual date formats and their format/parse round trip.

use std::fmt;
use std::str::FromStr;

use tracing::{trace, warn};

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::locale::Locale;

/// One of the six supported textual date formats.
///
/// A format governs both serialisation and parsing, so
/// `parse_date(&format_date(Some(d), f, l), f, l) == Some(d)` holds for every
/// constructible date and every constructible [`Locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatSpec {
    /// `MM/DD/YYYY`, e.g. `03/05/2024`.
    #[default]
    MonthDayYearSlash,
    /// `DD/MM/YYYY`, e.g. `05/03/2024`.
    DayMonthYearSlash,
    /// `YYYY-MM-DD`, e.g. `2024-03-05`.
    YearMonthDay,
    /// `MM-DD-YYYY`, e.g. `03-05-2024`.
    MonthDayYearDash,
    /// `MMM DD, YYYY`, e.g. `Mar 05, 2024`.
    MonthNameDayYear,
    /// `DD MMM YYYY`, e.g. `05 Mar 2024`.
    DayMonthNameYear,
}

impl FormatSpec {
    /// All supported formats.
    pub const ALL: [FormatSpec; 6] = [
        Self::MonthDayYearSlash,
        Self::DayMonthYearSlash,
        Self::YearMonthDay,
        Self::MonthDayYearDash,
        Self::MonthNameDayYear,
        Self::DayMonthNameYear,
    ];

    /// Returns the canonical pattern name, also usable as an input placeholder.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::MonthDayYearSlash => "MM/DD/YYYY",
            Self::DayMonthYearSlash => "DD/MM/YYYY",
            Self::YearMonthDay => "YYYY-MM-DD",
            Self::MonthDayYearDash => "MM-DD-YYYY",
            Self::MonthNameDayYear => "MMM DD, YYYY",
            Self::DayMonthNameYear => "DD MMM YYYY",
        }
    }

    /// Resolves a pattern name, falling back to the locale default
    /// (`MM/DD/YYYY`) for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(name, "unknown date format, using MM/DD/YYYY");
            Self::default()
        })
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

impl FromStr for FormatSpec {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.placeholder() == name)
            .ok_or_else(|| CalendarError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

/// Renders `date` in `format`, or an empty string for `None`.
///
/// Day and month are zero-padded to two digits and the year to four. Month
/// names are cut to their first three characters.
pub fn format_date(date: Option<CalendarDate>, format: FormatSpec, locale: &Locale) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let (y, m, d) = (date.year(), date.month(), date.day());
    match format {
        FormatSpec::MonthDayYearSlash => format!("{m:02}/{d:02}/{y:04}"),
        FormatSpec::DayMonthYearSlash => format!("{d:02}/{m:02}/{y:04}"),
        FormatSpec::YearMonthDay => format!("{y:04}-{m:02}-{d:02}"),
        FormatSpec::MonthDayYearDash => format!("{m:02}-{d:02}-{y:04}"),
        FormatSpec::MonthNameDayYear => format!("{} {d:02}, {y:04}", short_month(locale, m)),
        FormatSpec::DayMonthNameYear => format!("{d:02} {} {y:04}", short_month(locale, m)),
    }
}

/// Parses `text` written in `format`.
///
/// Returns `None` for empty text, a wrong number of fields, non-digit or
/// over-long numeric fields, years not written with exactly four digits,
/// unknown month names, and dates that do not exist on the calendar.
/// Surrounding whitespace is ignored.
pub fn parse_date(text: &str, format: FormatSpec, locale: &Locale) -> Option<CalendarDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let parsed = match format {
        FormatSpec::MonthDayYearSlash => {
            let [m, d, y] = split3(text.split('/'))?;
            build(y, numeric(m, 2)?, d)
        }
        FormatSpec::DayMonthYearSlash => {
            let [d, m, y] = split3(text.split('/'))?;
            build(y, numeric(m, 2)?, d)
        }
        FormatSpec::YearMonthDay => {
            let [y, m, d] = split3(text.split('-'))?;
            build(y, numeric(m, 2)?, d)
        }
        FormatSpec::MonthDayYearDash => {
            let [m, d, y] = split3(text.split('-'))?;
            build(y, numeric(m, 2)?, d)
        }
        FormatSpec::MonthNameDayYear => {
            let [m, d, y] = split3(text.split_whitespace())?;
            let d = d.strip_suffix(',').unwrap_or(d);
            build(y, locale.month_from_prefix(m)?, d)
        }
        FormatSpec::DayMonthNameYear => {
            let [d, m, y] = split3(text.split_whitespace())?;
            build(y, locale.month_from_prefix(m)?, d)
        }
    };
    if parsed.is_none() {
        trace!(text, format = %format, "date text did not parse");
    }
    parsed
}

fn short_month(locale: &Locale, month: u32) -> &str {
    locale.month_abbreviation(month).unwrap_or_default()
}

fn split3<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<[&'a str; 3]> {
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    Some(fields)
}

fn numeric(field: &str, max_digits: usize) -> Option<u32> {
    if field.is_empty() || field.len() > max_digits || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn build(year: &str, month: u32, day: &str) -> Option<CalendarDate> {
    // a short year is still being typed
    if year.len() != 4 {
        return None;
    }
    let year = i32::try_from(numeric(year, 4)?).ok()?;
    let day = numeric(day, 2)?;
    CalendarDate::new(year, month, day).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn format_each_spec() {
        let locale = Locale::default();
        let d = Some(date(2024, 3, 5));
        let cases = [
            (FormatSpec::MonthDayYearSlash, "03/05/2024"),
            (FormatSpec::DayMonthYearSlash, "05/03/2024"),
            (FormatSpec::YearMonthDay, "2024-03-05"),
            (FormatSpec::MonthDayYearDash, "03-05-2024"),
            (FormatSpec::MonthNameDayYear, "Mar 05, 2024"),
            (FormatSpec::DayMonthNameYear, "05 Mar 2024"),
        ];
        for (format, expected) in cases {
            assert_eq!(format_date(d, format, &locale), expected, "format {format}");
        }
    }

    #[test]
    fn format_none_is_empty() {
        for format in FormatSpec::ALL {
            assert_eq!(format_date(None, format, &Locale::default()), "");
        }
    }

    #[test]
    fn format_pads_small_years() {
        let locale = Locale::default();
        assert_eq!(
            format_date(Some(date(42, 1, 9)), FormatSpec::YearMonthDay, &locale),
            "0042-01-09"
        );
    }

    #[test]
    fn parse_accepts_unpadded_fields() {
        let locale = Locale::default();
        assert_eq!(
            parse_date("3/5/2024", FormatSpec::MonthDayYearSlash, &locale),
            Some(date(2024, 3, 5))
        );
        assert_eq!(
            parse_date("Mar 5 2024", FormatSpec::MonthNameDayYear, &locale),
            Some(date(2024, 3, 5))
        );
    }

    #[test]
    fn parse_full_month_name() {
        assert_eq!(
            parse_date(
                "5 September 2024",
                FormatSpec::DayMonthNameYear,
                &Locale::default()
            ),
            Some(date(2024, 9, 5))
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            parse_date("  2024-03-05 ", FormatSpec::YearMonthDay, &Locale::default()),
            Some(date(2024, 3, 5))
        );
    }

    #[test]
    fn parse_rejects_bad_text() {
        let locale = Locale::default();
        let cases = [
            ("", FormatSpec::YearMonthDay),
            ("   ", FormatSpec::YearMonthDay),
            ("2024-13-01", FormatSpec::YearMonthDay),
            ("2024-02-30", FormatSpec::YearMonthDay),
            ("2023-02-29", FormatSpec::YearMonthDay),
            ("2024-03", FormatSpec::YearMonthDay),
            ("2024-03-05-01", FormatSpec::YearMonthDay),
            ("2024-+3-05", FormatSpec::YearMonthDay),
            ("20245-03-05", FormatSpec::YearMonthDay),
            ("24-03-05", FormatSpec::YearMonthDay),
            ("0000-03-05", FormatSpec::YearMonthDay),
            ("03/05/2024", FormatSpec::YearMonthDay),
            ("ab/05/2024", FormatSpec::MonthDayYearSlash),
            ("003/05/2024", FormatSpec::MonthDayYearSlash),
            ("04/31/2024", FormatSpec::MonthDayYearSlash),
            ("31/04/2024", FormatSpec::DayMonthYearSlash),
            ("mar 05, 2024", FormatSpec::MonthNameDayYear),
            ("Foo 05, 2024", FormatSpec::MonthNameDayYear),
            ("05 Mar", FormatSpec::DayMonthNameYear),
        ];
        for (text, format) in cases {
            assert_eq!(parse_date(text, format, &locale), None, "{text:?} as {format}");
        }
    }

    #[test]
    fn format_spec_names() {
        for format in FormatSpec::ALL {
            assert_eq!(format.placeholder().parse::<FormatSpec>().unwrap(), format);
        }
        assert!(matches!(
            "YY/MM".parse::<FormatSpec>(),
            Err(CalendarError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(
            FormatSpec::from_name_or_default("dd.mm.yyyy"),
            FormatSpec::MonthDayYearSlash
        );
        assert_eq!(
            FormatSpec::from_name_or_default("DD MMM YYYY"),
            FormatSpec::DayMonthNameYear
        );
    }
}
