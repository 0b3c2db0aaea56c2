use crate::modules::recommendation::domain::entities::{Candidate, Job};

/// Delivery channel for deadline reminders. The only implementation
/// today logs the message; a real SMS gateway would slot in here.
pub trait ReminderSender: Send + Sync {
    fn send(&self, candidate: &Candidate, job: &Job, days_left: i64);
}
