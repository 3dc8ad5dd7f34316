//! Notification composition. Delivery is the notifier's concern; this
//! module only decides what a notice says.

use crate::model::BookingRecord;

/// A composed notice, ready to hand to a [`crate::notify::Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub subject: String,
    pub body_html: String,
}

fn date_line(record: &BookingRecord) -> String {
    record.date.format("%d/%m/%Y").to_string()
}

fn window_line(record: &BookingRecord) -> String {
    format!(
        "{} - {}",
        record.window.start().format("%H:%M"),
        record.window.end().format("%H:%M")
    )
}

/// To the requester, right after submission.
pub fn request_received(record: &BookingRecord) -> Notice {
    Notice {
        subject: "Your booking request was received!".to_string(),
        body_html: format!(
            "<h3>Hello, {}!</h3>\
             <p>Your meeting room booking request was received and is pending approval.</p>\
             <p><strong>Request details:</strong></p>\
             <ul><li><strong>Date:</strong> {}</li>\
             <li><strong>Time:</strong> {}</li>\
             <li><strong>Subject:</strong> {}</li></ul>\
             <p>You will receive another e-mail once your request is approved or rejected.</p>",
            record.requester_name,
            date_line(record),
            window_line(record),
            record.subject,
        ),
    }
}

/// To the administrator, right after submission.
pub fn awaiting_decision(record: &BookingRecord) -> Notice {
    Notice {
        subject: format!("New booking request: {}", record.subject),
        body_html: format!(
            "<h3>New meeting room booking request</h3>\
             <p>A new booking was requested and awaits your decision.</p>\
             <ul><li><strong>Requester:</strong> {} ({})</li>\
             <li><strong>Date:</strong> {}</li>\
             <li><strong>Time:</strong> {}</li>\
             <li><strong>Subject:</strong> {}</li></ul>",
            record.requester_name,
            record.requester_email,
            date_line(record),
            window_line(record),
            record.subject,
        ),
    }
}

/// To the requester, after approval.
pub fn approved(record: &BookingRecord) -> Notice {
    Notice {
        subject: "Your booking was APPROVED!".to_string(),
        body_html: format!(
            "Hello, {}.<br><br>Your booking for '{}' on {} from {} was <b>approved</b>.",
            record.requester_name,
            record.subject,
            date_line(record),
            window_line(record),
        ),
    }
}

/// To the requester, after rejection.
pub fn rejected(record: &BookingRecord) -> Notice {
    Notice {
        subject: "Your booking was REJECTED".to_string(),
        body_html: format!(
            "Hello, {}.<br><br>Your booking for '{}' on {} from {} was <b>rejected</b>. \
             Please contact the administrator for details or try another time.",
            record.requester_name,
            record.subject,
            date_line(record),
            window_line(record),
        ),
    }
}
