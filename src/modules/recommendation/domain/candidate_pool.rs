use tokio::sync::RwLock;

use super::entities::Candidate;

/// Process-lifetime list of every candidate that has asked for
/// recommendations. Shared between request handlers (appends) and the
/// deadline notifier (scans).
#[derive(Debug, Default)]
pub struct CandidatePool {
    candidates: RwLock<Vec<Candidate>>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn remember(&self, candidate: Candidate) {
        self.candidates.write().await.push(candidate);
    }

    pub async fn snapshot(&self) -> Vec<Candidate> {
        self.candidates.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(phone: &str) -> Candidate {
        Candidate {
            education: "Undergraduate".to_string(),
            skills: vec![],
            interests: vec![],
            location: "Delhi".to_string(),
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn remember_appends_in_order() {
        let pool = CandidatePool::new();
        pool.remember(candidate("+911")).await;
        pool.remember(candidate("+912")).await;

        let snapshot = pool.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].phone, "+911");
        assert_eq!(snapshot[1].phone, "+912");
    }

    #[tokio::test]
    async fn duplicate_candidates_are_kept() {
        let pool = CandidatePool::new();
        pool.remember(candidate("+911")).await;
        pool.remember(candidate("+911")).await;

        assert_eq!(pool.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let pool = std::sync::Arc::new(CandidatePool::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                pool.remember(candidate(&format!("+91{}", i))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(pool.snapshot().await.len(), 16);
    }
}
