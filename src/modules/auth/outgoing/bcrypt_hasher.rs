use bcrypt::{hash, verify, DEFAULT_COST};

use crate::modules::auth::ports::outgoing::{HashError, PasswordHasher};

/// Salted adaptive hashing via bcrypt, matching the credential scheme the
/// stored hashes were produced with.
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        hash(password, DEFAULT_COST).map_err(|_| HashError::HashFailed)
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        verify(password, hashed).map_err(|_| HashError::VerifyFailed)
    }
}
