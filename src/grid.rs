//! Grid column geometry and event filtering/placement.

use chrono::{Days, NaiveDate};
use tracing::{debug, trace};

use crate::cells::is_weekend;
use crate::event::{EventModel, EventViewModel, compare_events_asc, start_of_day};
use crate::types::{GridStyleInfo, WEIGHT_NARROW, WEIGHT_REGULAR};

fn cell_weight(cell: NaiveDate, narrow_weekend: bool) -> u32 {
    if narrow_weekend && is_weekend(cell) {
        WEIGHT_NARROW
    } else {
        WEIGHT_REGULAR
    }
}

/// Compute column widths and left offsets for a row of cells.
///
/// With `narrow_weekend`, Saturday and Sunday get half the width of a
/// weekday. Widths always add up to `total_width` (empty rows excepted).
pub fn get_grid_style_info(
    cells: &[NaiveDate],
    narrow_weekend: bool,
    total_width: f64,
) -> GridStyleInfo {
    let weights: Vec<u32> = cells
        .iter()
        .map(|&cell| cell_weight(cell, narrow_weekend))
        .collect();
    let total_weight: u32 = weights.iter().sum();
    if total_weight == 0 {
        return GridStyleInfo::default();
    }

    let unit = total_width / f64::from(total_weight);
    let width_list: Vec<f64> = weights.iter().map(|&w| unit * f64::from(w)).collect();

    let mut accumulated = 0.0;
    let left_list = width_list
        .iter()
        .map(|&width| {
            let left = accumulated;
            accumulated += width;
            left
        })
        .collect();

    GridStyleInfo {
        width_list,
        left_list,
    }
}

/// Sum of widths from `start` to `end`, both inclusive.
pub fn get_width(width_list: &[f64], start: usize, end: usize) -> f64 {
    width_list
        .iter()
        .enumerate()
        .filter(|(i, _)| (start..=end).contains(i))
        .map(|(_, width)| width)
        .sum()
}

/// Predicate matching view models whose day span contains `cell`.
pub fn is_in_grid(cell: NaiveDate) -> impl Fn(&EventViewModel) -> bool {
    move |vm| vm.starts().date() <= cell && cell <= vm.ends().date()
}

/// View models for the events visible in `cells`, in display order.
pub fn get_view_models(events: &[EventModel], cells: &[NaiveDate]) -> Vec<EventViewModel> {
    let (Some(&first), Some(&last)) = (cells.iter().min(), cells.iter().max()) else {
        return Vec::new();
    };
    let range_start = start_of_day(first);
    // Exclusive bound: the instant after the last cell ends
    let range_end = last
        .checked_add_days(Days::new(1))
        .map(start_of_day)
        .unwrap_or(chrono::NaiveDateTime::MAX);

    let mut view_models: Vec<EventViewModel> = events
        .iter()
        .filter(|event| event.start < range_end && event.end >= range_start)
        .cloned()
        .map(EventViewModel::new)
        .collect();
    debug!(
        total = events.len(),
        visible = view_models.len(),
        %first,
        %last,
        "filtered events into range"
    );

    view_models.sort_by(compare_events_asc);
    view_models
}

/// View models whose day span contains `cell`, keeping their order.
pub fn events_in_cell(view_models: &[EventViewModel], cell: NaiveDate) -> Vec<&EventViewModel> {
    let in_cell = is_in_grid(cell);
    view_models.iter().filter(|vm| in_cell(*vm)).collect()
}

/// Place the visible events on a row of cells.
///
/// Each event gets the left offset of its first covered cell, the summed
/// width of its covered cells and the lowest stacking slot free on all of
/// them. Events that cover no cell of the row are dropped.
pub fn layout_row_events(
    events: &[EventModel],
    cells: &[NaiveDate],
    style: &GridStyleInfo,
) -> Vec<EventViewModel> {
    let mut occupied: Vec<Vec<usize>> = vec![Vec::new(); cells.len()];
    let mut placed = Vec::new();

    for mut vm in get_view_models(events, cells) {
        let covered: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| is_in_grid(**cell)(&vm))
            .map(|(i, _)| i)
            .collect();
        let (Some(&first), Some(&last)) = (covered.first(), covered.last()) else {
            trace!(id = %vm.model.id, "event touches no visible cell");
            continue;
        };

        vm.left = style.left_list.get(first).copied().unwrap_or(0.0);
        vm.width = get_width(&style.width_list, first, last);
        vm.exceed_left = vm.starts().date() < cells[first];
        vm.exceed_right = vm.ends().date() > cells[last];

        let top = (0..)
            .find(|slot| covered.iter().all(|&i| !occupied[i].contains(slot)))
            .unwrap_or(0);
        for &i in &covered {
            occupied[i].push(top);
        }
        vm.top = top;

        trace!(
            id = %vm.model.id,
            first,
            last,
            top,
            left = vm.left,
            width = vm.width,
            "placed event"
        );
        placed.push(vm);
    }

    placed
}
