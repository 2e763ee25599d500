//! The date picker aggregate: selection, text fields, visible month, popup
//! and validation message behind one set of event handlers.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use calpick_calendar::{CalendarDate, YearMonth};
use tracing::{debug, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{PickerConfig, SelectionMode};
use crate::error::{PickerError, ValidationError};
use crate::popup::{DetachedHost, ListenerHost, Popup};
use crate::selection::{DateRange, PickerValue, RangePhase, RangeSelection, Selection, SingleSelection};
use crate::sync::{InputField, InputText, TextUpdate, apply_structured_change, apply_text_change};
use crate::validate::{validate_date, validate_value};
use crate::view::{MonthView, build_month_view};

/// Notification produced by a handler, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The reported value changed. `None` means cleared.
    Changed(Option<PickerValue>),
    /// A validation message was set, or cleared (`None`) after a prior one.
    Error(Option<String>),
    /// The popup opened.
    Opened,
    /// The popup closed.
    Closed,
}

/// A headless date picker.
///
/// Every interaction is a method returning the events it produced. The
/// picker never calls back into the host; the host renders from the
/// accessors and [`DatePicker::month_view`].
///
/// # Example
///
/// ```
/// use calpick_calendar::CalendarDate;
/// use calpick_picker::{DatePicker, PickerConfig, PickerEvent, PickerValue};
///
/// let mut picker = DatePicker::new(PickerConfig::new(), None).unwrap();
/// let day = CalendarDate::new(2024, 3, 5).unwrap();
/// let events = picker.select_date(day);
/// assert_eq!(events, vec![PickerEvent::Changed(Some(PickerValue::Single(day)))]);
/// assert_eq!(picker.input_text().get(calpick_picker::InputField::Single), Some("03/05/2024"));
/// ```
pub struct DatePicker {
    config: PickerConfig,
    selection: Selection,
    input: InputText,
    current_month: YearMonth,
    error: Option<ValidationError>,
    popup: Popup,
    clock: Box<dyn Clock>,
}

impl DatePicker {
    /// Creates a closed picker seeded with `value`, reading today from the
    /// system clock.
    ///
    /// The visible month is the month of the value, or the current month
    /// when empty.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvertedBounds`] if the configuration fails
    /// [`PickerConfig::validate`], or [`PickerError::ValueModeMismatch`] if
    /// `value` does not match the configured mode.
    pub fn new(config: PickerConfig, value: Option<PickerValue>) -> Result<Self, PickerError> {
        config.validate()?;
        let selection = Selection::from_value(config.mode(), value)?;
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let current_month = selection.anchor().unwrap_or_else(|| clock.today()).year_month();
        let input = apply_structured_change(selection, config.format(), config.locale());
        debug!(mode = config.mode().name(), %current_month, "picker created");
        Ok(Self {
            config,
            selection,
            input,
            current_month,
            error: None,
            popup: Popup::new(Rc::new(DetachedHost::default())),
            clock,
        })
    }

    /// Replaces the clock. An empty picker moves to the clock's month.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        if self.selection.anchor().is_none() {
            self.current_month = clock.today().year_month();
        }
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the environment that delivers outside clicks.
    ///
    /// The popup is rebuilt closed on the new host.
    pub fn with_listener_host(mut self, host: Rc<dyn ListenerHost>) -> Self {
        self.popup = Popup::new(host);
        self
    }

    // --- State ---

    /// Returns the configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Returns the structured selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the current value, `None` when nothing is selected.
    pub fn value(&self) -> Option<PickerValue> {
        self.selection.value()
    }

    /// Returns the month shown by the calendar.
    pub fn current_month(&self) -> YearMonth {
        self.current_month
    }

    /// Returns the text field contents.
    pub fn input_text(&self) -> &InputText {
        &self.input
    }

    /// Returns the active validation message.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Returns `true` while the popup is visible.
    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// Returns the time left before a scheduled auto-close.
    pub fn pending_close(&self) -> Option<Duration> {
        self.popup.pending_close()
    }

    /// Returns today according to the picker's clock.
    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// Builds the render model for the visible month.
    pub fn month_view(&self) -> MonthView {
        build_month_view(self.current_month, self.selection, &self.config, self.clock.today())
    }

    // --- Calendar handlers ---

    /// Handles a click on a day cell.
    ///
    /// A single picker rejects an invalid day outright. A range picker
    /// applies the transition for display and withholds the change.
    #[instrument(level = "debug", skip(self))]
    pub fn select_date(&mut self, date: CalendarDate) -> Vec<PickerEvent> {
        if self.config.is_inert() {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.pick(date, &mut events);
        events
    }

    /// Shows `month`.
    #[instrument(level = "debug", skip(self))]
    pub fn change_month(&mut self, month: YearMonth) -> Vec<PickerEvent> {
        if !self.config.is_inert() {
            self.current_month = month;
        }
        Vec::new()
    }

    /// Shows the following month.
    pub fn next_month(&mut self) -> Vec<PickerEvent> {
        self.change_month(self.current_month.next())
    }

    /// Shows the preceding month.
    pub fn prev_month(&mut self) -> Vec<PickerEvent> {
        self.change_month(self.current_month.prev())
    }

    /// Handles the today button: selects today like a day click.
    #[instrument(level = "debug", skip(self))]
    pub fn today_click(&mut self) -> Vec<PickerEvent> {
        if self.config.is_inert() {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.pick(self.clock.today(), &mut events);
        events
    }

    /// Handles the clear button.
    ///
    /// Without `allow_empty` the selection is kept and "Date is required" is
    /// surfaced.
    #[instrument(level = "debug", skip(self))]
    pub fn clear_click(&mut self) -> Vec<PickerEvent> {
        if self.config.is_inert() {
            return Vec::new();
        }
        let mut events = Vec::new();
        if !self.config.allow_empty() {
            self.record_error(Some(ValidationError::RequiredMissing), &mut events);
            return events;
        }
        self.commit(Selection::empty(self.config.mode()), None);
        self.record_error(None, &mut events);
        events.push(PickerEvent::Changed(None));
        events
    }

    // --- Text handlers ---

    /// Handles a keystroke in `field`, where `text` is the whole new content.
    ///
    /// The field keeps exactly what was typed unless a range's ends cross,
    /// in which case both fields are regenerated from the swapped range.
    #[instrument(level = "debug", skip(self))]
    pub fn input_change(&mut self, field: InputField, text: &str) -> Vec<PickerEvent> {
        if self.config.is_inert() {
            return Vec::new();
        }
        if !self.input.set(field, text) {
            warn!(?field, mode = self.config.mode().name(), "input field not present on this picker");
            return Vec::new();
        }
        let mut events = Vec::new();
        let update = match apply_text_change(text, self.config.format(), self.config.locale()) {
            Ok(update) => update,
            Err(err) => {
                self.record_error(Some(err), &mut events);
                return events;
            }
        };
        match self.selection {
            Selection::Single(_) => self.typed_single(update, &mut events),
            Selection::Range(current) => self.typed_range(current, field, update, &mut events),
        }
        events
    }

    // --- Popup handlers ---

    /// Handles a click on the text field.
    #[instrument(level = "debug", skip(self))]
    pub fn click_input(&mut self) -> Vec<PickerEvent> {
        self.open()
    }

    /// Handles focus entering the text field.
    #[instrument(level = "debug", skip(self))]
    pub fn focus_input(&mut self) -> Vec<PickerEvent> {
        self.open()
    }

    /// Handles a click delivered by the outside-click listener.
    /// `inside_root` is `true` when the target is within the picker.
    #[instrument(level = "debug", skip(self))]
    pub fn click_outside(&mut self, inside_root: bool) -> Vec<PickerEvent> {
        if self.popup.outside_click(inside_root) {
            vec![PickerEvent::Closed]
        } else {
            Vec::new()
        }
    }

    /// Closes the popup.
    #[instrument(level = "debug", skip(self))]
    pub fn close(&mut self) -> Vec<PickerEvent> {
        if self.popup.close() {
            vec![PickerEvent::Closed]
        } else {
            Vec::new()
        }
    }

    /// Advances a scheduled auto-close by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PickerEvent> {
        if self.popup.advance(elapsed) {
            vec![PickerEvent::Closed]
        } else {
            Vec::new()
        }
    }

    // --- Host-driven ---

    /// Replaces the value from outside, as when the host's bound value
    /// changes. No change is reported back, and any message is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::ValueModeMismatch`] if `value` does not match
    /// the configured mode; the picker is left untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn set_value(&mut self, value: Option<PickerValue>) -> Result<Vec<PickerEvent>, PickerError> {
        let selection = Selection::from_value(self.config.mode(), value)?;
        let mut events = Vec::new();
        self.commit(selection, selection.anchor());
        self.record_error(None, &mut events);
        Ok(events)
    }

    /// Runs the full validation, as on form submit.
    ///
    /// Unparseable field text is reported first, then `required`, bounds
    /// and the disabled list over the current value.
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self) -> Vec<PickerEvent> {
        let format = self.config.format();
        let fields: Vec<&str> = match &self.input {
            InputText::Single(text) => vec![text.as_str()],
            InputText::Range { start, end } => vec![start.as_str(), end.as_str()],
        };
        let error = fields
            .into_iter()
            .find_map(|text| apply_text_change(text, format, self.config.locale()).err())
            .or_else(|| validate_value(self.selection.value(), &self.config).err());
        let mut events = Vec::new();
        self.record_error(error, &mut events);
        events
    }

    // --- Internals ---

    fn open(&mut self) -> Vec<PickerEvent> {
        if self.config.is_inert() {
            return Vec::new();
        }
        if self.popup.open() {
            vec![PickerEvent::Opened]
        } else {
            Vec::new()
        }
    }

    fn pick(&mut self, date: CalendarDate, events: &mut Vec<PickerEvent>) {
        let fire = match self.config.mode() {
            SelectionMode::Single => match validate_date(date, &self.config) {
                Err(err) => {
                    self.record_error(Some(err), events);
                    false
                }
                Ok(()) => {
                    self.commit(self.selection.select(date), Some(date));
                    self.record_error(None, events);
                    true
                }
            },
            SelectionMode::Range => {
                self.commit(self.selection.select(date), Some(date));
                let error = self.endpoint_error();
                let valid = error.is_none();
                self.record_error(error, events);
                valid && (self.selection.is_terminal() || self.config.allow_empty())
            }
        };
        if !fire {
            return;
        }
        events.push(PickerEvent::Changed(self.selection.value()));
        if self.selection.is_terminal()
            && self.config.auto_close()
            && self.popup.schedule_close(self.config.auto_close_delay())
        {
            events.push(PickerEvent::Closed);
        }
    }

    fn typed_single(&mut self, update: TextUpdate, events: &mut Vec<PickerEvent>) {
        match update {
            TextUpdate::Cleared if !self.config.allow_empty() => {
                self.record_error(Some(ValidationError::RequiredMissing), events);
            }
            TextUpdate::Cleared => {
                self.selection = Selection::empty(SelectionMode::Single);
                self.record_error(None, events);
                events.push(PickerEvent::Changed(None));
            }
            TextUpdate::Parsed(date) => {
                if self.config.validate_on_change() {
                    if let Err(err) = validate_date(date, &self.config) {
                        self.record_error(Some(err), events);
                        return;
                    }
                }
                self.selection = Selection::Single(SingleSelection::new(Some(date)));
                self.current_month = date.year_month();
                self.record_error(None, events);
                events.push(PickerEvent::Changed(self.selection.value()));
            }
        }
    }

    fn typed_range(
        &mut self,
        current: RangeSelection,
        field: InputField,
        update: TextUpdate,
        events: &mut Vec<PickerEvent>,
    ) {
        let date = match update {
            TextUpdate::Cleared if !self.config.allow_empty() => {
                self.record_error(Some(ValidationError::RequiredMissing), events);
                return;
            }
            TextUpdate::Cleared => None,
            TextUpdate::Parsed(date) => {
                if self.config.validate_on_change() {
                    if let Err(err) = validate_date(date, &self.config) {
                        self.record_error(Some(err), events);
                        return;
                    }
                }
                Some(date)
            }
        };
        let previous = current.range();
        let typed = match field {
            InputField::Start => DateRange {
                start: date,
                end: previous.end,
            },
            _ => DateRange {
                start: previous.start,
                end: date,
            },
        };
        let next = RangeSelection::new(typed);
        self.selection = Selection::Range(next);
        if next.range() != typed {
            debug!(range = ?next.range(), "typed range ends crossed, swapped");
            self.input = apply_structured_change(self.selection, self.config.format(), self.config.locale());
        }
        if let Some(date) = date {
            self.current_month = date.year_month();
        }

        let error = if self.config.validate_on_change() {
            self.endpoint_error()
        } else {
            None
        };
        let valid = error.is_none();
        self.record_error(error, events);
        if valid && (next.phase() == RangePhase::Complete || self.config.allow_empty()) {
            events.push(PickerEvent::Changed(self.selection.value()));
        }
    }

    /// Installs `selection`, regenerates the fields and, given a focus day,
    /// moves the calendar to its month.
    fn commit(&mut self, selection: Selection, focus: Option<CalendarDate>) {
        self.selection = selection;
        self.input = apply_structured_change(selection, self.config.format(), self.config.locale());
        if let Some(date) = focus {
            self.current_month = date.year_month();
        }
    }

    fn endpoint_error(&self) -> Option<ValidationError> {
        self.selection
            .dates()
            .into_iter()
            .find_map(|d| validate_date(d, &self.config).err())
    }

    /// Stores `error`, emitting it when set and emitting a clear only when
    /// a message was showing.
    fn record_error(&mut self, error: Option<ValidationError>, events: &mut Vec<PickerEvent>) {
        match (&self.error, &error) {
            (_, Some(err)) => events.push(PickerEvent::Error(Some(err.to_string()))),
            (Some(_), None) => events.push(PickerEvent::Error(None)),
            (None, None) => {}
        }
        self.error = error;
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("mode", &self.config.mode())
            .field("selection", &self.selection)
            .field("input", &self.input)
            .field("current_month", &self.current_month)
            .field("error", &self.error)
            .field("popup", &self.popup)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use calpick_calendar::FormatSpec;

    use super::*;
    use crate::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn picker(config: PickerConfig) -> DatePicker {
        DatePicker::new(config, None)
            .unwrap()
            .with_clock(FixedClock(date(2024, 3, 5)))
    }

    #[test]
    fn new_rejects_bad_config() {
        let cfg = PickerConfig::new()
            .with_min_date(Some(date(2024, 2, 1)))
            .with_max_date(Some(date(2024, 1, 1)));
        assert!(matches!(
            DatePicker::new(cfg, None),
            Err(PickerError::InvertedBounds { .. })
        ));
        let range = PickerConfig::new().with_mode(SelectionMode::Range);
        assert!(matches!(
            DatePicker::new(range, Some(PickerValue::Single(date(2024, 1, 1)))),
            Err(PickerError::ValueModeMismatch { mode: "range" })
        ));
    }

    #[test]
    fn initial_state_follows_value() {
        let d = date(2023, 7, 14);
        let p = DatePicker::new(PickerConfig::new(), Some(PickerValue::Single(d))).unwrap();
        assert_eq!(p.current_month(), d.year_month());
        assert_eq!(p.input_text(), &InputText::Single("07/14/2023".to_string()));
        assert!(!p.is_open());

        let empty = picker(PickerConfig::new());
        assert_eq!(empty.current_month(), YearMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn error_is_cleared_once() {
        let mut p = picker(PickerConfig::new().with_disabled_dates(vec![date(2024, 3, 15)]));
        let events = p.select_date(date(2024, 3, 15));
        assert_eq!(
            events,
            vec![PickerEvent::Error(Some("This date is not available".to_string()))]
        );
        let events = p.select_date(date(2024, 3, 16));
        assert_eq!(
            events,
            vec![
                PickerEvent::Error(None),
                PickerEvent::Changed(Some(PickerValue::Single(date(2024, 3, 16)))),
            ]
        );
        let events = p.select_date(date(2024, 3, 17));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn month_navigation() {
        let mut p = picker(PickerConfig::new());
        p.next_month();
        assert_eq!(p.current_month(), YearMonth::new(2024, 4).unwrap());
        p.prev_month();
        p.prev_month();
        assert_eq!(p.current_month(), YearMonth::new(2024, 2).unwrap());
        p.change_month(YearMonth::new(1999, 12).unwrap());
        assert_eq!(p.month_view().title, "December 1999");
    }

    #[test]
    fn today_click_selects_clock_day() {
        let mut p = picker(PickerConfig::new());
        p.change_month(YearMonth::new(2020, 1).unwrap());
        let events = p.today_click();
        assert_eq!(
            events,
            vec![PickerEvent::Changed(Some(PickerValue::Single(date(2024, 3, 5))))]
        );
        assert_eq!(p.current_month(), YearMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn clear_respects_allow_empty() {
        let seeded = Some(PickerValue::Single(date(2024, 3, 5)));
        let mut p = DatePicker::new(PickerConfig::new(), seeded).unwrap();
        assert_eq!(p.clear_click(), vec![PickerEvent::Changed(None)]);
        assert_eq!(p.input_text(), &InputText::Single(String::new()));

        let mut strict = DatePicker::new(PickerConfig::new().with_allow_empty(false), seeded).unwrap();
        assert_eq!(
            strict.clear_click(),
            vec![PickerEvent::Error(Some("Date is required".to_string()))]
        );
        assert_eq!(strict.value(), seeded);
    }

    #[test]
    fn inert_picker_ignores_interaction() {
        let mut p = picker(PickerConfig::new().with_read_only(true));
        assert!(p.select_date(date(2024, 3, 6)).is_empty());
        assert!(p.click_input().is_empty());
        assert!(p.input_change(InputField::Single, "03/06/2024").is_empty());
        assert!(p.today_click().is_empty());
        assert!(!p.is_open());
        assert_eq!(p.value(), None);
    }

    #[test]
    fn wrong_field_is_ignored() {
        let mut p = picker(PickerConfig::new());
        assert!(p.input_change(InputField::Start, "03/06/2024").is_empty());
        assert_eq!(p.input_text(), &InputText::Single(String::new()));
    }

    #[test]
    fn set_value_is_silent() {
        let mut p = picker(PickerConfig::new().with_format(FormatSpec::YearMonthDay));
        p.input_change(InputField::Single, "garbage");
        let events = p
            .set_value(Some(PickerValue::Single(date(2022, 8, 1))))
            .unwrap();
        assert_eq!(events, vec![PickerEvent::Error(None)]);
        assert_eq!(p.input_text(), &InputText::Single("2022-08-01".to_string()));
        assert_eq!(p.current_month(), YearMonth::new(2022, 8).unwrap());

        let range = PickerValue::Range(DateRange::new(Some(date(2022, 8, 1)), None));
        assert!(p.set_value(Some(range)).is_err());
        assert_eq!(p.value(), Some(PickerValue::Single(date(2022, 8, 1))));
    }

    #[test]
    fn submit_reports_required_and_garbage() {
        let mut p = picker(PickerConfig::new().with_required(true));
        assert_eq!(
            p.submit(),
            vec![PickerEvent::Error(Some("Date is required".to_string()))]
        );
        p.input_change(InputField::Single, "03/0");
        assert_eq!(p.validation_error(), Some(&ValidationError::UnparseableText));
        assert_eq!(
            p.submit(),
            vec![PickerEvent::Error(Some("Invalid date format".to_string()))]
        );
        p.input_change(InputField::Single, "03/07/2024");
        assert!(p.submit().is_empty());
        assert_eq!(p.validation_error(), None);
    }
}
