//! Grid command: print one month page as the picker would lay it out.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use calpick_picker::{
    Clock, DayCell, MonthView, PickerConfig, Selection, SystemClock, build_month_view,
};

use crate::cli::GridArgs;
use crate::config::CalpickConfig;
use crate::convert;

/// Run the grid command.
pub fn run(args: GridArgs) -> Result<()> {
    let _cmd = info_span!("grid").entered();

    // 1. Load optional TOML config
    let mut config = match args.config {
        Some(ref path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            let parsed: CalpickConfig =
                toml::from_str(&toml_str).context("failed to parse TOML config")?;
            info!(path = %path.display(), "config loaded");
            convert::build_picker_config(&parsed.picker)?
        }
        None => PickerConfig::new(),
    };

    // 2. CLI overrides
    if let Some(ws) = args.week_start {
        config = config.with_week_start(convert::parse_week_start(ws)?);
    }
    let today = SystemClock.today();
    let month = match args.month {
        Some(ref m) => convert::parse_month(m)?,
        None => today.year_month(),
    };
    debug!(%month, week_start = config.week_start().as_u8(), "rendering grid");

    // 3. Render
    let view = build_month_view(month, Selection::empty(config.mode()), &config, today);
    print!("{}", render(&view));
    Ok(())
}

/// Renders the page as text: a title, a header row and six week rows.
///
/// Each cell is the day number followed by a marker: `*` today, `x`
/// disabled, `+` highlighted, `.` outside the month.
pub fn render(view: &MonthView) -> String {
    let mut out = format!("{:^28}\n", view.title);
    for label in &view.weekday_labels {
        let short: String = label.chars().take(3).collect();
        out.push_str(&format!("{short:>3} "));
    }
    out.push('\n');
    for week in view.weeks() {
        let row: Vec<String> = week.iter().map(cell).collect();
        out.push_str(row.join("").trim_end());
        out.push('\n');
    }
    out
}

fn cell(cell: &DayCell) -> String {
    let marker = if cell.is_today {
        '*'
    } else if cell.is_disabled {
        'x'
    } else if cell.is_highlighted {
        '+'
    } else if !cell.in_current_month {
        '.'
    } else {
        ' '
    };
    format!("{:>3}{marker}", cell.date.day())
}

#[cfg(test)]
mod tests {
    use calpick_calendar::{CalendarDate, WeekStart, YearMonth};

    use super::*;

    #[test]
    fn render_march_2024() {
        let config = PickerConfig::new()
            .with_week_start(WeekStart::Monday)
            .with_disabled_dates(vec![CalendarDate::new(2024, 3, 15).unwrap()]);
        let view = build_month_view(
            YearMonth::new(2024, 3).unwrap(),
            Selection::empty(config.mode()),
            &config,
            CalendarDate::new(2024, 3, 5).unwrap(),
        );
        let text = render(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].trim(), "March 2024");
        assert_eq!(lines[1].trim_end(), "Mon Tue Wed Thu Fri Sat Sun");
        assert_eq!(lines[2], " 26. 27. 28. 29.  1   2   3");
        assert!(lines[3].contains("  5*"));
        assert!(lines[4].contains(" 15x"));
    }
}
