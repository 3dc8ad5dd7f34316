use chrono::{NaiveDate, NaiveTime};

use crate::model::{BookingId, BookingStatus};
use crate::store::StorageError;

#[derive(Debug)]
pub enum WorkflowError {
    /// A required submission field was blank. Carries the field name.
    MissingField(&'static str),
    /// Window start at or after its end.
    InvalidWindow { start: NaiveTime, end: NaiveTime },
    /// Submission for a calendar date that has already passed.
    DateInPast(NaiveDate),
    /// The candidate window overlaps an approved booking; carries the
    /// blocking record's id. Nothing was persisted or changed.
    Conflict(BookingId),
    NotFound(BookingId),
    /// Decision attempted on a record already in a terminal state.
    InvalidTransition { id: BookingId, from: BookingStatus },
    /// The repository failed or timed out. The operation did not happen
    /// and is safe to retry.
    Storage(String),
}

impl std::fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowError::MissingField(field) => write!(f, "required field is empty: {field}"),
            WorkflowError::InvalidWindow { start, end } => {
                write!(f, "window end must be after start: [{start}, {end})")
            }
            WorkflowError::DateInPast(date) => write!(f, "date is in the past: {date}"),
            WorkflowError::Conflict(id) => {
                write!(f, "window overlaps approved booking: {id}")
            }
            WorkflowError::NotFound(id) => write!(f, "booking not found: {id}"),
            WorkflowError::InvalidTransition { id, from } => {
                write!(f, "booking {id} is already {from}")
            }
            WorkflowError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for WorkflowError {}

impl From<StorageError> for WorkflowError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => WorkflowError::NotFound(id),
            other => WorkflowError::Storage(other.to_string()),
        }
    }
}
