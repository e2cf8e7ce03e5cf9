//! Command-line argument parsing using clap.
//!
//! Events are given as `START|END|TITLE`, where `START` and `END` are
//! either dates (all-day event) or date-times.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use clap::{Parser, ValueHint};
use tracing::debug;

use crate::error::GridError;
use crate::event::EventModel;
use crate::types::{COLOR_ENABLED_BY_DEFAULT, GridContext, ViewMode, WidthMode};

#[derive(Parser, Debug)]
#[command(name = "calgrid")]
#[command(about = "Lays out calendar events on a week or month grid", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default is Monday).
    #[arg(short = 's', long, help_heading = "Grid options")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, help_heading = "Grid options")]
    pub monday: bool,

    /// Render Saturday and Sunday at half width.
    #[arg(short = 'N', long, help_heading = "Grid options")]
    pub narrow_weekend: bool,

    /// Hide Saturday and Sunday.
    #[arg(short = 'W', long, help_heading = "Grid options")]
    pub workweek: bool,

    /// Display the whole month instead of a single week.
    #[arg(short = 'M', long, help_heading = "Display options")]
    pub month: bool,

    /// Print the numeric layout (percent) instead of drawing the grid.
    #[arg(short = 'l', long, help_heading = "Display options")]
    pub layout: bool,

    /// Event as START|END|TITLE (repeatable).
    #[arg(
        short = 'e',
        long = "event",
        help_heading = "Events",
        value_name = "spec"
    )]
    pub events: Vec<String>,

    /// File with one event spec per line.
    #[arg(
        short = 'f',
        long = "events-file",
        help_heading = "Events",
        value_name = "path",
        value_hint = ValueHint::FilePath
    )]
    pub events_file: Option<PathBuf>,

    /// Grid width in characters (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "width",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub width: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Date to display (YYYY-MM-DD), defaults to today.
    #[arg(index = 1, value_name = "date", value_hint = ValueHint::Other)]
    pub date: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Lay out events on a calendar grid.

Without any arguments, display the current week.

Examples:
  calgrid                              Current week
  calgrid -M 2026-02-01                February 2026
  calgrid -N -e '2026-02-17|2026-02-21|Trip'
                                       Week with a narrow weekend and one event
  calgrid -e '2026-02-17T09:00|2026-02-17T10:00|Standup' -l
                                       Print numeric layout
  calgrid -W -f events.txt             Work week with events from a file";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl GridContext {
    pub fn new(args: &Args) -> Result<Self, GridError> {
        if args.sunday && args.monday {
            return Err(GridError::ConflictingOptions(
                "Options -s and -m are mutually exclusive".to_string(),
            ));
        }
        if args.workweek && args.narrow_weekend {
            return Err(GridError::ConflictingOptions(
                "Options -W and -N are mutually exclusive".to_string(),
            ));
        }

        let width = match args.width.as_deref() {
            Some("auto") | None => WidthMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<usize>()
                    .map_err(|_| GridError::InvalidWidth(s.to_string()))?;
                if n == 0 {
                    return Err(GridError::InvalidWidth("width must be positive".to_string()));
                }
                WidthMode::Fixed(n)
            }
        };

        let today = get_today_date();
        let display_date = match args.date.as_deref() {
            Some(s) => parse_date(s)?,
            None => today,
        };

        let color = !args.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        Ok(GridContext {
            week_start: if args.sunday {
                Weekday::Sun
            } else {
                Weekday::Mon
            },
            narrow_weekend: args.narrow_weekend,
            workweek: args.workweek,
            view: if args.month {
                ViewMode::Month
            } else {
                ViewMode::Week
            },
            width,
            layout_only: args.layout,
            color,
            display_date,
            today,
        })
    }
}

/// Get today's date, respecting CALGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CALGRID_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, GridError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| GridError::InvalidDate(s.to_string()))
}

enum Boundary {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

fn parse_boundary(s: &str) -> Option<Boundary> {
    let s = s.trim();
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Boundary::DateTime(dt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(Boundary::Date)
}

/// Parse a `START|END|TITLE` event spec.
///
/// Two dates make an all-day event; two date-times a timed one. Mixing
/// the two is rejected.
pub fn parse_event_spec(id: &str, spec: &str) -> Result<EventModel, GridError> {
    let invalid = |reason: &str| GridError::InvalidEvent {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = spec.splitn(3, '|');
    let (Some(start), Some(end), Some(title)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid("expected START|END|TITLE"));
    };
    let title = title.trim();
    if title.is_empty() {
        return Err(invalid("empty title"));
    }

    let start = parse_boundary(start).ok_or_else(|| invalid("bad start"))?;
    let end = parse_boundary(end).ok_or_else(|| invalid("bad end"))?;

    match (start, end) {
        (Boundary::Date(first), Boundary::Date(last)) => {
            EventModel::all_day(id, title, first, last)
        }
        (Boundary::DateTime(start), Boundary::DateTime(end)) => {
            EventModel::new(id, title, start, end)
        }
        _ => Err(invalid("start and end must both be dates or both date-times")),
    }
}

/// Parse event specs from a text blob, one per line.
///
/// Blank lines and lines starting with `#` are skipped. `first_id` is the
/// sequence number given to the first parsed event.
pub fn parse_events(text: &str, first_id: usize) -> Result<Vec<EventModel>, GridError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .enumerate()
        .map(|(i, line)| parse_event_spec(&format!("e{}", first_id + i), line))
        .collect()
}

pub fn read_events_file(path: &Path, first_id: usize) -> Result<Vec<EventModel>, GridError> {
    let text = std::fs::read_to_string(path).map_err(|source| GridError::EventsFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(&text, first_id)
}

/// Collect events from `--event` flags followed by the events file.
pub fn load_events(args: &Args) -> Result<Vec<EventModel>, GridError> {
    let mut events = args
        .events
        .iter()
        .enumerate()
        .map(|(i, spec)| parse_event_spec(&format!("e{}", i + 1), spec))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(path) = &args.events_file {
        let from_file = read_events_file(path, events.len() + 1)?;
        debug!(path = %path.display(), count = from_file.len(), "loaded events file");
        events.extend(from_file);
    }

    Ok(events)
}
