//! # calpick-calendar
//!
//! Pure Gregorian date utilities behind the calpick date picker.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"parse_date()"| B["CalendarDate"]
//!     B -->|"format_date()"| A
//!     B -->|".year_month()"| C["YearMonth"]
//!     C -->|"grid_days()"| D["[CalendarDate; 42]"]
//!     B -->|"is_date_disabled()"| E["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use calpick_calendar::{
//!     CalendarDate, FormatSpec, Locale, WeekStart, format_date, grid_days, parse_date,
//! };
//!
//! let locale = Locale::default();
//! let date = CalendarDate::new(2024, 3, 5).unwrap();
//!
//! let text = format_date(Some(date), FormatSpec::MonthDayYearSlash, &locale);
//! assert_eq!(text, "03/05/2024");
//! assert_eq!(parse_date(&text, FormatSpec::MonthDayYearSlash, &locale), Some(date));
//!
//! let cells = grid_days(date.year_month(), WeekStart::Monday);
//! assert_eq!(cells.len(), 42);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar day, month and week-start types |
//! | `format` | The six text formats and their round trip |
//! | `grid` | 42-cell month grid |
//! | `constraints` | Same-day and disabled-day checks |
//! | `locale` | Month and weekday names |
//! | `error` | Error types |

mod constraints;
mod date;
mod error;
mod format;
mod grid;
mod locale;

pub use constraints::{DateConstraints, is_date_disabled, is_same_day};
pub use date::{CalendarDate, MAX_YEAR, MIN_YEAR, WeekStart, YearMonth};
pub use error::CalendarError;
pub use format::{FormatSpec, format_date, parse_date};
pub use grid::{GRID_CELLS, grid_days};
pub use locale::Locale;
