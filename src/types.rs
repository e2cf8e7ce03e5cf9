//! Type definitions and constants for grid layout and display.

use chrono::Weekday;

/// Column geometry for one row of date cells.
///
/// Both lists are in the unit of the total width passed to
/// [`get_grid_style_info`](crate::grid::get_grid_style_info).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridStyleInfo {
    pub width_list: Vec<f64>,
    pub left_list: Vec<f64>,
}

/// Which view the CLI renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    /// The seven (or five) days around the display date.
    Week,
    /// Six week rows covering the display date's month.
    Month,
}

/// Character width of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthMode {
    Fixed(usize),
    /// Detect from terminal width.
    Auto,
}

/// Grid formatting context containing all display options.
#[derive(Clone, Debug)]
pub struct GridContext {
    /// First day of the week (Monday or Sunday).
    pub week_start: Weekday,
    /// Render Saturday and Sunday at half width.
    pub narrow_weekend: bool,
    /// Hide Saturday and Sunday entirely.
    pub workweek: bool,
    pub view: ViewMode,
    pub width: WidthMode,
    /// Print numeric layout instead of drawing the grid.
    pub layout_only: bool,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Date the view is built around.
    pub display_date: chrono::NaiveDate,
    /// Today's date for highlighting.
    pub today: chrono::NaiveDate,
}

// Column weights: a narrow weekend cell takes half of a regular one
pub const WEIGHT_REGULAR: u32 = 2;
pub const WEIGHT_NARROW: u32 = 1;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_MONTH: usize = 6;

// Numeric layout is reported in percent
pub const PERCENT_TOTAL: f64 = 100.0;

pub const DEFAULT_GRID_WIDTH: usize = 80;
pub const MIN_GRID_WIDTH: usize = 14;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
