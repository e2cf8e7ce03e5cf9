//! Grid rendering for the terminal, with localization and color support.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::cells::{is_weekend, month_rows, week_cells};
use crate::error::GridError;
use crate::event::{EventModel, EventViewModel};
use crate::grid::{get_grid_style_info, layout_row_events};
use crate::types::{
    COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, DEFAULT_GRID_WIDTH,
    GridContext, GridStyleInfo, MIN_GRID_WIDTH, PERCENT_TOTAL, ViewMode, WidthMode,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Get 2-character weekday abbreviation for a locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    // 2000-01-03 is a Monday
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap_or_default();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// Resolve the grid's character width.
pub fn grid_width(ctx: &GridContext) -> usize {
    let width = match ctx.width {
        WidthMode::Fixed(n) => n,
        WidthMode::Auto => get_terminal_width().unwrap_or(DEFAULT_GRID_WIDTH),
    };
    width.max(MIN_GRID_WIDTH)
}

fn get_terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Truncate `text` to at most `width` display columns.
pub fn truncate_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        result.push(ch);
        used += w;
    }
    result
}

/// Truncate `text` to `width` display columns and pad it with spaces.
pub fn fit_text(text: &str, width: usize) -> String {
    let truncated = truncate_text(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Character span `(start, end)` of a range in a grid laid out in characters.
fn char_span(left: f64, width: f64) -> (usize, usize) {
    let start = left.round().max(0.0) as usize;
    let end = (left + width).round().max(0.0) as usize;
    (start, end.max(start))
}

/// Format a cell label such as `Mo 16`, fitted to `width`.
///
/// Color priority: today > weekend > regular
pub fn format_cell_label(
    ctx: &GridContext,
    cell: NaiveDate,
    width: usize,
    locale: Locale,
) -> String {
    let label = format!(
        "{} {}",
        get_weekday_short_name(cell.weekday(), locale),
        cell.day()
    );
    // Keep one column free as a separator
    let fitted = fit_text(&label, width.saturating_sub(1));
    let styled = if ctx.color && cell == ctx.today {
        format!("{}{}{}", COLOR_REVERSE, fitted, COLOR_RESET)
    } else if ctx.color && is_weekend(cell) {
        format!("{}{}{}", COLOR_RED, fitted, COLOR_RESET)
    } else {
        fitted
    };
    if width == 0 {
        styled
    } else {
        format!("{} ", styled)
    }
}

/// Text of an event bar; `<`/`>` mark an event continuing outside the row.
fn event_bar(vm: &EventViewModel, width: usize) -> String {
    if width < 3 {
        return fit_text(&vm.model.title, width);
    }
    let open = if vm.exceed_left { '<' } else { '[' };
    let close = if vm.exceed_right { '>' } else { ']' };
    let title = truncate_text(&vm.model.title, width - 3);
    fit_text(&format!("{}{}{}", open, title, close), width)
}

/// Format one row of cells as lines: a label header plus one line per slot.
pub fn format_row(ctx: &GridContext, cells: &[NaiveDate], events: &[EventModel]) -> Vec<String> {
    let width = grid_width(ctx);
    let style = get_grid_style_info(cells, ctx.narrow_weekend, width as f64);
    let locale = get_system_locale();

    let mut lines = Vec::new();
    let header: String = cells
        .iter()
        .zip(style.left_list.iter().zip(&style.width_list))
        .map(|(&cell, (&left, &w))| {
            let (start, end) = char_span(left, w);
            format_cell_label(ctx, cell, end - start, locale)
        })
        .collect();
    lines.push(header.trim_end().to_string());

    let placed = layout_row_events(events, cells, &style);
    let slots = placed.iter().map(|vm| vm.top + 1).max().unwrap_or(0);
    for slot in 0..slots {
        let mut bars: Vec<&EventViewModel> = placed.iter().filter(|vm| vm.top == slot).collect();
        bars.sort_by(|a, b| a.left.total_cmp(&b.left));

        let mut line = String::new();
        let mut cursor = 0;
        for vm in bars {
            let (start, end) = char_span(vm.left, vm.width);
            line.push_str(&" ".repeat(start.saturating_sub(cursor)));
            let bar = event_bar(vm, end - start);
            if ctx.color {
                line.push_str(&format!("{}{}{}", COLOR_TEAL, bar, COLOR_RESET));
            } else {
                line.push_str(&bar);
            }
            cursor = end.max(cursor);
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Format the numeric layout of a row in percent.
pub fn format_layout(
    cells: &[NaiveDate],
    narrow_weekend: bool,
    events: &[EventModel],
) -> Vec<String> {
    let style = get_grid_style_info(cells, narrow_weekend, PERCENT_TOTAL);
    let mut lines = Vec::new();

    if let (Some(first), Some(last)) = (cells.first(), cells.last()) {
        lines.push(format!("row {}..{}", first, last));
    }
    lines.extend(format_columns(cells, &style));

    for vm in layout_row_events(events, cells, &style) {
        lines.push(format!(
            "  event {} top={} left={:.2} width={:.2} exceed_left={} exceed_right={} {}",
            vm.model.id, vm.top, vm.left, vm.width, vm.exceed_left, vm.exceed_right, vm.model.title
        ));
    }

    lines
}

fn format_columns(cells: &[NaiveDate], style: &GridStyleInfo) -> Vec<String> {
    cells
        .iter()
        .zip(style.left_list.iter().zip(&style.width_list))
        .map(|(cell, (left, width))| {
            format!(
                "  cell {} {} left={:.2} width={:.2}",
                cell,
                cell.weekday(),
                left,
                width
            )
        })
        .collect()
}

/// Format month header with year and optional color.
pub fn format_month_header(year: i32, month: u32, width: usize, color: bool) -> String {
    let locale = get_system_locale();
    let month_name = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format_localized("%B", locale).to_string())
        .unwrap_or_default();
    let centered = center_text(&format!("{} {}", month_name, year), width);
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Rows of cells for the context's view.
pub fn view_rows(ctx: &GridContext) -> Result<Vec<Vec<NaiveDate>>, GridError> {
    match ctx.view {
        ViewMode::Week => Ok(vec![week_cells(ctx.display_date, ctx.week_start, ctx.workweek)?]),
        ViewMode::Month => month_rows(
            ctx.display_date.year(),
            ctx.display_date.month(),
            ctx.week_start,
            ctx.workweek,
        ),
    }
}

/// Format the full view as lines.
pub fn format_view(ctx: &GridContext, events: &[EventModel]) -> Result<Vec<String>, GridError> {
    let rows = view_rows(ctx)?;
    let mut lines = Vec::new();

    if ctx.layout_only {
        for cells in &rows {
            lines.extend(format_layout(cells, ctx.narrow_weekend, events));
        }
        return Ok(lines);
    }

    if ctx.view == ViewMode::Month {
        lines.push(format_month_header(
            ctx.display_date.year(),
            ctx.display_date.month(),
            grid_width(ctx),
            ctx.color,
        ));
    }
    for (i, cells) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_row(ctx, cells, events));
    }
    Ok(lines)
}

/// Print the view selected by the context.
pub fn print_view(ctx: &GridContext, events: &[EventModel]) -> Result<(), GridError> {
    for line in format_view(ctx, events)? {
        println!("{}", line);
    }
    Ok(())
}
