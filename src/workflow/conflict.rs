use chrono::{NaiveDate, Utc};

use crate::model::{BookingId, BookingRecord, BookingStatus, TimeWindow};

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns the id of the first approved record on `date` whose window
/// overlaps the candidate, `None` if the slot is clear.
///
/// Filters by status and date itself even when the caller pre-filtered.
/// `Pending` and `Rejected` records never block, so competing requests can
/// share a slot until one of them is approved. Pure predicate; scanning
/// order is irrelevant.
pub fn find_conflict(
    existing: &[BookingRecord],
    date: NaiveDate,
    window: &TimeWindow,
) -> Option<BookingId> {
    existing
        .iter()
        .filter(|r| r.status == BookingStatus::Approved && r.date == date)
        .find(|r| r.window.overlaps(window))
        .map(|r| r.id)
}
