use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::modules::notifier::ports::outgoing::ReminderSender;
use crate::modules::recommendation::domain::candidate_pool::CandidatePool;
use crate::modules::recommendation::domain::entities::Job;

const REMINDER_WINDOW_DAYS: i64 = 7;

/// Periodic scan over the candidate pool. Every remembered candidate is
/// reminded about every catalog job whose deadline is within the window,
/// on every scan. No deduplication.
pub struct DeadlineNotifier {
    pool: Arc<CandidatePool>,
    catalog: Vec<Job>,
    sender: Arc<dyn ReminderSender>,
}

impl DeadlineNotifier {
    pub fn new(pool: Arc<CandidatePool>, catalog: Vec<Job>, sender: Arc<dyn ReminderSender>) -> Self {
        Self {
            pool,
            catalog,
            sender,
        }
    }

    pub async fn scan_once(&self) {
        let candidates = self.pool.snapshot().await;
        debug!(candidates = candidates.len(), "Scanning for closing deadlines");

        for candidate in &candidates {
            for job in &self.catalog {
                if job.deadline_days <= REMINDER_WINDOW_DAYS {
                    self.sender.send(candidate, job, job.deadline_days);
                }
            }
        }
    }

    /// Runs until the shutdown channel changes. The first interval tick
    /// fires immediately and is skipped so scans start one period in.
    pub async fn run(self, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;

        info!(period_secs = period.as_secs(), "Deadline notifier started");
        loop {
            tokio::select! {
                _ = ticker.tick() => self.scan_once().await,
                _ = shutdown.changed() => {
                    info!("Deadline notifier stopping");
                    return;
                }
            }
        }
    }
}
