pub mod auth;
pub mod config;
pub mod messages;
pub mod model;
pub mod notify;
pub mod observability;
pub mod store;
pub mod workflow;

pub use model::{
    BookingId, BookingRecord, BookingRequest, BookingStatus, CalendarEvent, Equipment, TimeWindow,
};
pub use workflow::{Workflow, WorkflowError};
