//! Event model, render view-model and the ordering used for display.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::GridError;

/// A schedule event as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct EventModel {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub is_allday: bool,
}

impl EventModel {
    /// Create a timed event. Fails when `end` precedes `start`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, GridError> {
        let id = id.into();
        if end < start {
            return Err(GridError::EventEndsBeforeStart { id, start, end });
        }
        Ok(EventModel {
            id,
            title: title.into(),
            start,
            end,
            is_allday: false,
        })
    }

    /// Create an all-day event covering `first..=last`.
    pub fn all_day(
        id: impl Into<String>,
        title: impl Into<String>,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Self, GridError> {
        let mut event = Self::new(id, title, start_of_day(first), end_of_day(last))?;
        event.is_allday = true;
        Ok(event)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True when the event starts and ends on different days.
    pub fn has_multi_dates(&self) -> bool {
        self.start.date() != self.end.date()
    }
}

/// An event prepared for rendering in a grid row.
///
/// Placement fields stay at their defaults until the event is laid out
/// with [`layout_row_events`](crate::grid::layout_row_events).
#[derive(Debug, Clone, PartialEq)]
pub struct EventViewModel {
    pub model: EventModel,
    /// Offset of the first covered column.
    pub left: f64,
    /// Summed width of all covered columns.
    pub width: f64,
    /// Stacking slot within the row, 0 is topmost.
    pub top: usize,
    /// The event started before the first cell of the row.
    pub exceed_left: bool,
    /// The event continues after the last cell of the row.
    pub exceed_right: bool,
}

impl EventViewModel {
    pub fn new(model: EventModel) -> Self {
        EventViewModel {
            model,
            left: 0.0,
            width: 0.0,
            top: 0,
            exceed_left: false,
            exceed_right: false,
        }
    }

    pub fn starts(&self) -> NaiveDateTime {
        self.model.start
    }

    pub fn ends(&self) -> NaiveDateTime {
        self.model.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.model.duration()
    }

    /// All-day and multi-day events render in the day band above timed ones.
    pub fn spans_days(&self) -> bool {
        self.model.is_allday || self.model.has_multi_dates()
    }
}

impl From<EventModel> for EventViewModel {
    fn from(model: EventModel) -> Self {
        EventViewModel::new(model)
    }
}

/// Ascending display order for events.
///
/// Order: day-spanning events first, then earlier start, then longer
/// duration. Remaining ties compare equal so a stable sort keeps the
/// caller's order.
pub fn compare_events_asc(a: &EventViewModel, b: &EventViewModel) -> Ordering {
    b.spans_days()
        .cmp(&a.spans_days())
        .then_with(|| a.starts().cmp(&b.starts()))
        .then_with(|| b.duration().cmp(&a.duration()))
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable second of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap_or_else(|| start_of_day(date))
}
