use tracing::info;

use crate::modules::notifier::ports::outgoing::ReminderSender;
use crate::modules::recommendation::domain::entities::{Candidate, Job};

/// Logs each reminder instead of dispatching a real SMS.
#[derive(Clone, Debug, Default)]
pub struct SmsLogSender;

impl ReminderSender for SmsLogSender {
    fn send(&self, candidate: &Candidate, job: &Job, days_left: i64) {
        let message = format!(
            "Reminder: {} closes in {} days. Apply soon!",
            job.title, days_left
        );
        info!(phone = %candidate.phone, %message, "Sending SMS reminder");
    }
}
