use chrono::NaiveDate;

use crate::model::{BookingRecord, BookingStatus, CalendarEvent};

use super::{Workflow, WorkflowError};

fn sort_schedule(records: &mut [BookingRecord]) {
    records.sort_by_key(|r| (r.date, r.window.start()));
}

impl Workflow {
    /// Full collection, ordered by date then start time.
    pub async fn all(&self) -> Result<Vec<BookingRecord>, WorkflowError> {
        let mut records = self.fetch_all().await?;
        sort_schedule(&mut records);
        Ok(records)
    }

    /// Records awaiting an administrator decision.
    pub async fn pending(&self) -> Result<Vec<BookingRecord>, WorkflowError> {
        let mut records = self.fetch_all().await?;
        records.retain(|r| r.status == BookingStatus::Pending);
        sort_schedule(&mut records);
        Ok(records)
    }

    /// The approved set for one day — the only records that can conflict.
    pub async fn approved_on(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, WorkflowError> {
        let mut records = self.fetch_all().await?;
        records.retain(|r| r.status == BookingStatus::Approved && r.date == date);
        sort_schedule(&mut records);
        Ok(records)
    }

    /// Approved bookings rendered for the calendar view.
    pub async fn calendar_events(&self) -> Result<Vec<CalendarEvent>, WorkflowError> {
        let mut records = self.fetch_all().await?;
        records.retain(|r| r.status == BookingStatus::Approved);
        sort_schedule(&mut records);
        Ok(records.iter().map(CalendarEvent::from_record).collect())
    }
}
