use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A candidate's profile, one-to-one with a registered user. The résumé
/// list holds stored-file paths in upload order.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub education: String,
    pub location: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub resumes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
