//! Calendar grid layout engine.
//!
//! Features:
//! - Column widths and offsets with optional narrow weekends
//! - Filtering of events into date cells
//! - Stable event ordering (all-day first, then start, then duration)
//! - Row placement with stacking slots for week and month views

pub mod args;
pub mod cells;
pub mod error;
pub mod event;
pub mod formatter;
pub mod grid;
pub mod types;

pub use error::GridError;
pub use event::{EventModel, EventViewModel};
pub use grid::{get_grid_style_info, get_view_models, get_width, is_in_grid};
pub use types::GridStyleInfo;
