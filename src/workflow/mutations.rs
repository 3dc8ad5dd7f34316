use chrono::Utc;
use tracing::info;
use ulid::Ulid;

use crate::auth::AdminContext;
use crate::messages;
use crate::model::{BookingId, BookingRecord, BookingRequest, BookingStatus, TimeWindow};
use crate::observability::{CONFLICTS_TOTAL, DECISIONS_TOTAL, SUBMISSIONS_TOTAL};

use super::conflict::{find_conflict, today};
use super::{Workflow, WorkflowError};

fn required(value: &str, field: &'static str) -> Result<(), WorkflowError> {
    if value.trim().is_empty() {
        Err(WorkflowError::MissingField(field))
    } else {
        Ok(())
    }
}

impl Workflow {
    /// Validate a submission, persist it as `Pending`, and notify both the
    /// requester and the administrator.
    ///
    /// Validation and the conflict check precede any write, so a rejected
    /// submission leaves no partial state. The operation succeeds once the
    /// repository write succeeds; the two notices are independent and
    /// best-effort.
    pub async fn submit(&self, request: BookingRequest) -> Result<BookingRecord, WorkflowError> {
        required(&request.requester_name, "requester_name")?;
        required(&request.requester_email, "requester_email")?;
        required(&request.subject, "subject")?;

        let window = TimeWindow::new(request.start, request.end).ok_or(
            WorkflowError::InvalidWindow {
                start: request.start,
                end: request.end,
            },
        )?;
        if request.date < today() {
            return Err(WorkflowError::DateInPast(request.date));
        }

        // Only approved records block a submission; overlapping pending
        // requests compete for the slot until one of them is approved.
        let existing = self.fetch_all().await?;
        if let Some(blocking) = find_conflict(&existing, request.date, &window) {
            metrics::counter!(CONFLICTS_TOTAL, "at" => "submit").increment(1);
            return Err(WorkflowError::Conflict(blocking));
        }

        let record = BookingRecord {
            id: Ulid::new(),
            requester_name: request.requester_name,
            requester_email: request.requester_email,
            date: request.date,
            window,
            subject: request.subject,
            participants: request.participants,
            equipment: request.equipment,
            notes: request.notes,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        self.append(record.clone()).await?;
        metrics::counter!(SUBMISSIONS_TOTAL).increment(1);
        info!(id = %record.id, date = %record.date, "booking request submitted");

        self.send_notice(&record.requester_email, messages::request_received(&record))
            .await;
        self.send_notice(&self.config.admin_email, messages::awaiting_decision(&record))
            .await;

        Ok(record)
    }

    /// Transition a pending booking to `Approved` and notify the requester.
    ///
    /// The conflict check runs again here, immediately before the commit
    /// write: another overlapping request may have been approved since this
    /// one was submitted, and no lock serializes the two administrators. Of
    /// two competing approvals, the loser gets `Conflict` and the record
    /// stays `Pending`.
    pub async fn approve(
        &self,
        _admin: &AdminContext,
        id: BookingId,
    ) -> Result<BookingRecord, WorkflowError> {
        let existing = self.fetch_all().await?;
        let record = existing
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(WorkflowError::NotFound(id))?;
        if record.status != BookingStatus::Pending {
            return Err(WorkflowError::InvalidTransition {
                id,
                from: record.status,
            });
        }

        if let Some(blocking) = find_conflict(&existing, record.date, &record.window) {
            metrics::counter!(CONFLICTS_TOTAL, "at" => "approve").increment(1);
            return Err(WorkflowError::Conflict(blocking));
        }

        self.commit_status(id, BookingStatus::Approved).await?;
        metrics::counter!(DECISIONS_TOTAL, "decision" => "approve").increment(1);
        info!(id = %id, "booking approved");

        let record = BookingRecord {
            status: BookingStatus::Approved,
            ..record
        };
        self.send_notice(&record.requester_email, messages::approved(&record))
            .await;
        Ok(record)
    }

    /// Transition a pending booking to `Rejected` and notify the requester.
    /// No conflict re-check: a rejection cannot create a scheduling
    /// conflict.
    pub async fn reject(
        &self,
        _admin: &AdminContext,
        id: BookingId,
    ) -> Result<BookingRecord, WorkflowError> {
        let existing = self.fetch_all().await?;
        let record = existing
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(WorkflowError::NotFound(id))?;
        if record.status != BookingStatus::Pending {
            return Err(WorkflowError::InvalidTransition {
                id,
                from: record.status,
            });
        }

        self.commit_status(id, BookingStatus::Rejected).await?;
        metrics::counter!(DECISIONS_TOTAL, "decision" => "reject").increment(1);
        info!(id = %id, "booking rejected");

        let record = BookingRecord {
            status: BookingStatus::Rejected,
            ..record
        };
        self.send_notice(&record.requester_email, messages::rejected(&record))
            .await;
        Ok(record)
    }
}
