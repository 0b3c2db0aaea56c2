use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::recommendation::domain::candidate_pool::CandidatePool;
use crate::modules::recommendation::domain::entities::{Candidate, Job, ScoredJob};
use crate::modules::recommendation::domain::scoring::score;

const MAX_RECOMMENDATIONS: usize = 3;

#[async_trait]
pub trait IRecommendJobsUseCase: Send + Sync {
    async fn execute(&self, candidate: Candidate) -> Vec<ScoredJob>;
}

pub struct RecommendJobsUseCase {
    pool: Arc<CandidatePool>,
    catalog: Vec<Job>,
}

impl RecommendJobsUseCase {
    pub fn new(pool: Arc<CandidatePool>, catalog: Vec<Job>) -> Self {
        Self { pool, catalog }
    }
}

#[async_trait]
impl IRecommendJobsUseCase for RecommendJobsUseCase {
    async fn execute(&self, candidate: Candidate) -> Vec<ScoredJob> {
        // Remember the candidate for the deadline notifier before scoring.
        self.pool.remember(candidate.clone()).await;

        let mut scored: Vec<ScoredJob> = self
            .catalog
            .iter()
            .filter_map(|job| {
                let s = score(&candidate, job);
                (s > 0.0).then(|| ScoredJob {
                    job: job.clone(),
                    score: s,
                })
            })
            .collect();

        // Stable sort keeps catalog order for equal scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(MAX_RECOMMENDATIONS);
        scored
    }
}
