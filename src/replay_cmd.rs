//! Replay command: drive a picker through a scripted session and report
//! every emitted event and the final state.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug_span, info, info_span};

use calpick_calendar::{CalendarDate, format_date};
use calpick_picker::{
    DatePicker, FixedClock, InputText, PickerEvent, PickerValue, SelectionMode,
};

use crate::cli::ReplayArgs;
use crate::config::{EventToml, SessionToml, ValueToml};
use crate::convert;

/// Replay report.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub mode: String,
    pub format: String,
    pub steps: Vec<StepReport>,
    pub final_state: FinalState,
}

/// Events emitted by one scripted interaction.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: String,
    pub events: Vec<String>,
}

/// Picker state after the last step.
#[derive(Debug, Serialize)]
pub struct FinalState {
    pub value: Option<String>,
    pub input: Vec<String>,
    pub month: String,
    pub open: bool,
    pub error: Option<String>,
}

/// Run the replay command.
pub fn run(args: ReplayArgs) -> Result<()> {
    let _cmd = info_span!("replay").entered();
    let session = load_session(&args.session)?;
    let report = replay(&session)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Reads and parses a session file.
pub fn load_session(path: &Path) -> Result<SessionToml> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse session TOML")
}

/// Builds the session's picker and applies every scripted event in order.
pub fn replay(session: &SessionToml) -> Result<ReplayReport> {
    let config = convert::build_picker_config(&session.picker)?;
    let mode = config.mode();
    let initial = match session.initial {
        Some(ref value) => convert::build_value(mode, value)?,
        None => None,
    };
    let mut picker = DatePicker::new(config, initial).context("failed to create picker")?;
    if let Some(ref today) = session.today {
        picker = picker.with_clock(FixedClock(convert::parse_iso("today", today)?));
    }
    info!(mode = mode.name(), n_events = session.events.len(), "replaying session");

    let mut steps = Vec::with_capacity(session.events.len());
    for (idx, event) in session.events.iter().enumerate() {
        let _step = debug_span!("step", idx = idx + 1).entered();
        let emitted = apply(&mut picker, mode, event)
            .with_context(|| format!("event {} ({})", idx + 1, describe(event)))?;
        steps.push(StepReport {
            step: idx + 1,
            action: describe(event),
            events: emitted.iter().map(|e| event_text(&picker, e)).collect(),
        });
    }

    let input = match picker.input_text() {
        InputText::Single(text) => vec![text.clone()],
        InputText::Range { start, end } => vec![start.clone(), end.clone()],
    };
    let final_state = FinalState {
        value: picker.value().map(value_text),
        input,
        month: picker.current_month().to_string(),
        open: picker.is_open(),
        error: picker.validation_error().map(ToString::to_string),
    };
    Ok(ReplayReport {
        mode: mode.name().to_string(),
        format: picker.config().format().to_string(),
        steps,
        final_state,
    })
}

fn apply(picker: &mut DatePicker, mode: SelectionMode, event: &EventToml) -> Result<Vec<PickerEvent>> {
    let events = match event {
        EventToml::Select { date } => picker.select_date(convert::parse_iso("date", date)?),
        EventToml::Month { month } => picker.change_month(convert::parse_month(month)?),
        EventToml::NextMonth => picker.next_month(),
        EventToml::PrevMonth => picker.prev_month(),
        EventToml::Input { field, text } => picker.input_change(convert::parse_field(field)?, text),
        EventToml::Today => picker.today_click(),
        EventToml::Clear => picker.clear_click(),
        EventToml::ClickInput => picker.click_input(),
        EventToml::Focus => picker.focus_input(),
        EventToml::ClickOutside { inside } => picker.click_outside(*inside),
        EventToml::Close => picker.close(),
        EventToml::Advance { ms } => picker.advance(Duration::from_millis(*ms)),
        EventToml::SetValue { date, start, end } => {
            let value = ValueToml {
                date: date.clone(),
                start: start.clone(),
                end: end.clone(),
            };
            picker.set_value(convert::build_value(mode, &value)?)?
        }
        EventToml::Submit => picker.submit(),
    };
    Ok(events)
}

fn describe(event: &EventToml) -> String {
    match event {
        EventToml::Select { date } => format!("select {date}"),
        EventToml::Month { month } => format!("month {month}"),
        EventToml::NextMonth => "next month".to_string(),
        EventToml::PrevMonth => "previous month".to_string(),
        EventToml::Input { field, text } => format!("input {field} {text:?}"),
        EventToml::Today => "today".to_string(),
        EventToml::Clear => "clear".to_string(),
        EventToml::ClickInput => "click input".to_string(),
        EventToml::Focus => "focus".to_string(),
        EventToml::ClickOutside { inside: true } => "click inside".to_string(),
        EventToml::ClickOutside { inside: false } => "click outside".to_string(),
        EventToml::Close => "close".to_string(),
        EventToml::Advance { ms } => format!("advance {ms}ms"),
        EventToml::SetValue { date, start, end } => {
            let parts: Vec<&str> = [date, start, end]
                .into_iter()
                .filter_map(|p| p.as_deref())
                .collect();
            format!("set value [{}]", parts.join(", "))
        }
        EventToml::Submit => "submit".to_string(),
    }
}

fn event_text(picker: &DatePicker, event: &PickerEvent) -> String {
    match event {
        PickerEvent::Changed(Some(value)) => {
            let shown = match value {
                PickerValue::Single(d) => display(picker, Some(*d)),
                PickerValue::Range(r) => {
                    format!("{} - {}", display(picker, r.start), display(picker, r.end))
                }
            };
            format!("changed {} ({shown})", value_text(*value))
        }
        PickerEvent::Changed(None) => "changed (empty)".to_string(),
        PickerEvent::Error(Some(msg)) => format!("error: {msg}"),
        PickerEvent::Error(None) => "error cleared".to_string(),
        PickerEvent::Opened => "opened".to_string(),
        PickerEvent::Closed => "closed".to_string(),
    }
}

fn display(picker: &DatePicker, date: Option<CalendarDate>) -> String {
    let config = picker.config();
    format_date(date, config.format(), config.locale())
}

/// ISO rendering of a value; open range ends are left blank around `..`.
fn value_text(value: PickerValue) -> String {
    let iso = |d: Option<CalendarDate>| d.map(|d| d.to_string()).unwrap_or_default();
    match value {
        PickerValue::Single(d) => d.to_string(),
        PickerValue::Range(r) => format!("{}..{}", iso(r.start), iso(r.end)),
    }
}

fn render_text(report: &ReplayReport) -> String {
    let mut out = format!("mode: {}  format: {}\n", report.mode, report.format);
    for step in &report.steps {
        out.push_str(&format!("{:>3}. {}\n", step.step, step.action));
        for event in &step.events {
            out.push_str(&format!("       -> {event}\n"));
        }
    }
    let state = &report.final_state;
    out.push_str(&format!(
        "final: value={} input={:?} month={} open={} error={}\n",
        state.value.as_deref().unwrap_or("-"),
        state.input,
        state.month,
        state.open,
        state.error.as_deref().unwrap_or("-"),
    ));
    out
}
