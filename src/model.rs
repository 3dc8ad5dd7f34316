use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Opaque booking identifier, assigned once at submission.
pub type BookingId = Ulid;

/// Half-open time-of-day interval `[start, end)` within a single day.
///
/// Construction enforces `start < end`; an inverted or zero-length pair is
/// never stored, so downstream code can rely on the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeWindow {
    /// Returns `None` unless `start < end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Half-open overlap test: touching endpoints do not overlap, so
    /// back-to-back windows never conflict.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// Lifecycle state of a booking. `Pending` is the sole initial state;
/// `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Approved | BookingStatus::Rejected)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Approved => write!(f, "approved"),
            BookingStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Room equipment a requester can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Equipment {
    Projector,
    Webcam,
    Whiteboard,
    Refreshments,
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Equipment::Projector => write!(f, "projector"),
            Equipment::Webcam => write!(f, "webcam"),
            Equipment::Whiteboard => write!(f, "whiteboard"),
            Equipment::Refreshments => write!(f, "refreshments"),
        }
    }
}

/// One reservation request and its lifecycle state. Everything except
/// `status` is immutable after creation; `status` changes only through the
/// workflow. This field layout is the contract any repository must honor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub requester_name: String,
    pub requester_email: String,
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub subject: String,
    pub participants: String,
    pub equipment: BTreeSet<Equipment>,
    pub notes: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Submission input. `start`/`end` arrive as raw times so an inverted pair
/// surfaces as a validation error rather than a construction panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub requester_name: String,
    pub requester_email: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub subject: String,
    pub participants: String,
    pub equipment: BTreeSet<Equipment>,
    pub notes: String,
}

// ── Query result types ───────────────────────────────────────────

/// An approved booking rendered for the calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    pub fn from_record(record: &BookingRecord) -> Self {
        Self {
            title: format!("{} ({})", record.subject, record.requester_name),
            start: record.date.and_time(record.window.start()),
            end: record.date.and_time(record.window.end()),
        }
    }
}
