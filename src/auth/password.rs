use crate::auth::PasswordHasher;
use crate::core::errors::AccountError;

pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        BcryptHasher { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        BcryptHasher::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AccountError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AccountError::Internal(format!("Password hashing error: {}", e)))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError> {
        bcrypt::verify(plaintext, hash)
            .map_err(|e| AccountError::Internal(format!("Password verification error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_differs_from_plaintext() {
        let hasher = BcryptHasher::new(4);
        let hash = hasher.hash("pw123").unwrap();
        assert_ne!(hash, "pw123");
        assert!(hasher.verify("pw123", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        let hasher = BcryptHasher::new(4);
        assert!(matches!(
            hasher.verify("pw123", "not-a-hash"),
            Err(AccountError::Internal(_))
        ));
    }
}
