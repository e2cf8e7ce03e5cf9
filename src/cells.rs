//! Date cell generation for week and month views.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::GridError;
use crate::types::{DAYS_PER_WEEK, WEEKS_PER_MONTH};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn out_of_range(date: NaiveDate) -> GridError {
    GridError::InvalidDate(format!("{} (view leaves the supported date range)", date))
}

/// First day of the week containing `date`.
pub fn week_start_date(date: NaiveDate, week_start: Weekday) -> Result<NaiveDate, GridError> {
    let offset = match week_start {
        Weekday::Sun => date.weekday().num_days_from_sunday(),
        _ => date.weekday().num_days_from_monday(),
    };
    date.checked_sub_days(Days::new(offset as u64))
        .ok_or_else(|| out_of_range(date))
}

/// Cells of the week containing `date`.
///
/// Fails when any day of that week is not representable.
pub fn week_cells(
    date: NaiveDate,
    week_start: Weekday,
    workweek: bool,
) -> Result<Vec<NaiveDate>, GridError> {
    let first = week_start_date(date, week_start)?;
    first
        .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
        .ok_or_else(|| out_of_range(date))?;

    Ok(first
        .iter_days()
        .take(DAYS_PER_WEEK)
        .filter(|d| !(workweek && is_weekend(*d)))
        .collect())
}

/// Six week rows for the month, starting on or before the first of the month.
pub fn month_rows(
    year: i32,
    month: u32,
    week_start: Weekday,
    workweek: bool,
) -> Result<Vec<Vec<NaiveDate>>, GridError> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| GridError::InvalidDate(format!("{}-{:02}", year, month)))?;
    let mut row_start = week_start_date(first_of_month, week_start)?;

    let mut rows = Vec::with_capacity(WEEKS_PER_MONTH);
    for i in 0..WEEKS_PER_MONTH {
        rows.push(week_cells(row_start, week_start, workweek)?);
        if i + 1 < WEEKS_PER_MONTH {
            row_start = row_start
                .checked_add_days(Days::new(DAYS_PER_WEEK as u64))
                .ok_or_else(|| out_of_range(first_of_month))?;
        }
    }
    Ok(rows)
}
