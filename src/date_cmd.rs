//! Format and parse commands: one-shot conversions between ISO dates and
//! picker text formats.

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use calpick_calendar::{FormatSpec, Locale, format_date, parse_date};

use crate::cli::{FormatArgs, ParseArgs};
use crate::convert;

/// Print an ISO date in the requested format.
pub fn run_format(args: FormatArgs) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let format = parse_format(&args.format)?;
    let date = convert::parse_iso("date", &args.date)?;
    println!("{}", format_date(Some(date), format, &Locale::default()));
    Ok(())
}

/// Print the ISO date for text written in the requested format.
pub fn run_parse(args: ParseArgs) -> Result<()> {
    let _cmd = info_span!("parse").entered();
    let format = parse_format(&args.format)?;
    let Some(date) = parse_date(&args.text, format, &Locale::default()) else {
        bail!("{:?} is not a valid {format} date", args.text);
    };
    debug!(%date, "parsed");
    println!("{date}");
    Ok(())
}

fn parse_format(name: &str) -> Result<FormatSpec> {
    name.parse().with_context(|| {
        let known: Vec<&str> = FormatSpec::ALL.iter().map(|f| f.placeholder()).collect();
        format!("supported formats: {}", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_strict() {
        assert_eq!(parse_format("DD MMM YYYY").unwrap(), FormatSpec::DayMonthNameYear);
        let err = parse_format("YY").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("supported formats"));
        assert!(msg.contains("unknown date format"));
    }
}
