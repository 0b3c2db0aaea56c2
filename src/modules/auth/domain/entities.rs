use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account. Users are never deleted; only the password hash
/// would ever change after creation.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
