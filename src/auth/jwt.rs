use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::{Claims, Role};
use crate::error::AppError;

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

pub fn now_unix() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as usize)
        .unwrap_or_default()
}

pub fn encode_token(keys: &JwtKeys, claims: &Claims) -> Result<String, AppError> {
    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".into());

    encode(&header, claims, &keys.enc)
        .map_err(|err| AppError::internal_with_source("Token encoding failed", err))
}

/// Checks signature and expiry.
pub fn decode_token(keys: &JwtKeys, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(token, &keys.dec, &validation)?;
    Ok(data.claims)
}

pub fn make_access_claims(user_id: i32, roles: Vec<Role>, ttl_secs: usize) -> Claims {
    let iat = now_unix();
    let exp = iat.saturating_add(ttl_secs);
    Claims {
        sub: user_id.to_string(),
        roles,
        iat,
        exp,
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::unauthorized(format!("Invalid or expired token: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{JwtKeys, Role, decode_token, encode_token, make_access_claims};

    #[test]
    fn makes_claims_with_expected_subject_roles_and_ttl() {
        let claims = make_access_claims(7, vec![Role::TeamMember], 60);

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.roles, vec![Role::TeamMember]);
        assert_eq!(claims.exp.saturating_sub(claims.iat), 60);
    }

    #[test]
    fn huge_ttl_saturates_expiry() {
        let claims = make_access_claims(3, vec![Role::TeamMember], usize::MAX);

        assert_eq!(claims.exp, usize::MAX);
        assert!(claims.iat > 0);
    }

    #[test]
    fn encoded_token_decodes_with_same_secret() {
        let keys = JwtKeys::from_secret(b"unit-test-secret");
        let claims = make_access_claims(1, Role::GroupAdmin.granted(), 600);
        let token = encode_token(&keys, &claims).expect("token should encode");

        let decoded = decode_token(&keys, &token).expect("token should decode");

        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.roles, claims.roles);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn token_from_other_secret_is_unauthorized() {
        let claims = make_access_claims(1, vec![Role::TeamMember], 600);
        let token = encode_token(&JwtKeys::from_secret(b"secret-a"), &claims)
            .expect("token should encode");

        let err = decode_token(&JwtKeys::from_secret(b"secret-b"), &token)
            .expect_err("decode should fail");

        assert_eq!(err.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert!(err.message().starts_with("Invalid or expired token:"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = JwtKeys::from_secret(b"unit-test-secret");
        let mut claims = make_access_claims(1, vec![Role::TeamMember], 0);
        claims.iat = claims.iat.saturating_sub(7_200);
        claims.exp = claims.iat + 60;
        let token = encode_token(&keys, &claims).expect("token should encode");

        assert!(decode_token(&keys, &token).is_err());
    }
}
