//! Headless date picker state for single days and date ranges.
//!
//! The picker owns the selection, the text field contents, the visible
//! month, the popup and the current validation message. Hosts feed it
//! interactions and render from its accessors; every handler returns the
//! [`PickerEvent`]s it produced.
//!
//! # Event flow
//!
//! ```text
//!  ┌────────────┐  select_date   ┌────────────┐  validate   ┌──────────────┐
//!  │  calendar  │───────────────▶│  Selection │────────────▶│ PickerEvent  │
//!  │  / today   │                │  (single / │             │ Changed /    │
//!  └────────────┘                │   range)   │             │ Error        │
//!  ┌────────────┐  input_change  └─────┬──────┘             └──────────────┘
//!  │ text field │─────────────────────▶│
//!  └────────────┘◀── regenerated ──────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use calpick_calendar::{CalendarDate, WeekStart};
//! use calpick_picker::{DatePicker, FixedClock, PickerConfig, PickerValue, SelectionMode};
//!
//! let config = PickerConfig::new()
//!     .with_mode(SelectionMode::Range)
//!     .with_week_start(WeekStart::Monday);
//! let today = CalendarDate::new(2024, 1, 1).unwrap();
//! let mut picker = DatePicker::new(config, None)
//!     .unwrap()
//!     .with_clock(FixedClock(today));
//!
//! picker.select_date(CalendarDate::new(2024, 1, 10).unwrap());
//! picker.select_date(CalendarDate::new(2024, 1, 3).unwrap());
//!
//! let Some(PickerValue::Range(range)) = picker.value() else {
//!     panic!("expected a range");
//! };
//! assert_eq!(range.start, Some(CalendarDate::new(2024, 1, 3).unwrap()));
//! assert_eq!(range.end, Some(CalendarDate::new(2024, 1, 10).unwrap()));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod picker;
pub mod popup;
pub mod selection;
pub mod sync;
pub mod validate;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_AUTO_CLOSE_DELAY, PickerConfig, SelectionMode};
pub use error::{PickerError, ValidationError};
pub use picker::{DatePicker, PickerEvent};
pub use popup::{DetachedHost, ListenerGuard, ListenerHost, ListenerId, Popup};
pub use selection::{DateRange, PickerValue, RangePhase, RangeSelection, Selection, SingleSelection};
pub use sync::{InputField, InputText, TextUpdate, apply_structured_change, apply_text_change};
pub use validate::{validate_date, validate_value};
pub use view::{DayCell, MonthView, build_month_view};
