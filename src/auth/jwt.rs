use crate::auth::TokenIssuer;
use crate::core::errors::AccountError;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // User email
    pub role: String, // "user" or "admin"
    pub iat: usize,
    pub exp: usize,
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtService {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        JwtService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AccountError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(|e| AccountError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

impl TokenIssuer for JwtService {
    fn generate_token(&self, subject: &str, role: &str) -> Result<String, AccountError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AccountError::Internal(format!("JWT encoding error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips_claims() {
        let jwt = JwtService::new("test-secret", 3600);
        let token = jwt.generate_token("a@x.com", "admin").unwrap();
        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("one", 3600);
        let verifier = JwtService::new("two", 3600);
        let token = issuer.generate_token("a@x.com", "user").unwrap();
        assert!(matches!(
            verifier.validate_token(&token),
            Err(AccountError::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s leeway.
        let jwt = JwtService::new("test-secret", -3600);
        let token = jwt.generate_token("a@x.com", "user").unwrap();
        assert!(jwt.validate_token(&token).is_err());
    }
}
