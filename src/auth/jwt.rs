use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Claims;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use uuid::Uuid;

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as usize)
        .unwrap_or_default()
}

pub fn generate_access_token(
    user_id: u64,
    username: String,
    role: u8,
    secret: &str,
    ttl: usize,
) -> Result<String, Error> {
    let claims = Claims {
        user_id,
        sub: username,
        role,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_claims() {
        let token = generate_access_token(7, "admin".into(), 1, "secret", 900).unwrap();
        let claims = verify_token(&token, "secret").unwrap();

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, 1);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_access_token(7, "admin".into(), 1, "secret", 900).unwrap();
        assert!(verify_token(&token, "other").is_err());
    }
}
