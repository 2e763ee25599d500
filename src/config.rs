use serde::Deserialize;

/// Top-level calpick configuration (`calpick.toml`).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CalpickConfig {
    /// Picker settings.
    #[serde(default)]
    pub picker: PickerToml,
}

/// Picker settings. Dates are ISO `YYYY-MM-DD` strings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerToml {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub min_date: Option<String>,
    #[serde(default)]
    pub max_date: Option<String>,
    #[serde(default)]
    pub disabled_dates: Vec<String>,
    #[serde(default)]
    pub highlight_dates: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_empty: bool,
    #[serde(default = "default_true")]
    pub auto_close: bool,
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
    #[serde(default)]
    pub week_start: u8,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_true")]
    pub validate_on_change: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub locale: Option<LocaleToml>,
}

impl Default for PickerToml {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            format: default_format(),
            min_date: None,
            max_date: None,
            disabled_dates: Vec::new(),
            highlight_dates: Vec::new(),
            allow_empty: true,
            auto_close: true,
            auto_close_ms: default_auto_close_ms(),
            week_start: 0,
            required: false,
            validate_on_change: true,
            disabled: false,
            read_only: false,
            locale: None,
        }
    }
}

fn default_mode() -> String {
    "single".to_string()
}
fn default_format() -> String {
    "MM/DD/YYYY".to_string()
}
fn default_true() -> bool {
    true
}
fn default_auto_close_ms() -> u64 {
    150
}

/// Month and weekday names. Weekdays start on Sunday.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleToml {
    pub month_names: Vec<String>,
    pub day_names: Vec<String>,
}

/// A scripted picker session for `calpick replay`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionToml {
    /// Pinned "today". Defaults to the system date.
    #[serde(default)]
    pub today: Option<String>,

    /// Value the picker starts with.
    #[serde(default)]
    pub initial: Option<ValueToml>,

    #[serde(default)]
    pub picker: PickerToml,

    #[serde(default)]
    pub events: Vec<EventToml>,
}

/// A picker value: `date` for single pickers, `start`/`end` for ranges.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueToml {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// One scripted interaction, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum EventToml {
    Select {
        date: String,
    },
    Month {
        month: String,
    },
    NextMonth,
    PrevMonth,
    Input {
        #[serde(default = "default_field")]
        field: String,
        text: String,
    },
    Today,
    Clear,
    ClickInput,
    Focus,
    ClickOutside {
        #[serde(default)]
        inside: bool,
    },
    Close,
    Advance {
        ms: u64,
    },
    SetValue {
        #[serde(default)]
        date: Option<String>,
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        end: Option<String>,
    },
    Submit,
}

fn default_field() -> String {
    "single".to_string()
}
