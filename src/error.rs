//! Error types for grid construction and event parsing.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid event '{spec}': {reason}")]
    InvalidEvent { spec: String, reason: String },

    /// Event end precedes its start.
    #[error("Event '{id}' ends before it starts ({start} > {end})")]
    EventEndsBeforeStart {
        id: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid width value: {0}")]
    InvalidWidth(String),

    #[error("{0}")]
    ConflictingOptions(String),

    #[error("Cannot read events file {path}: {source}")]
    EventsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
