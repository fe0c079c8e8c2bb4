//! Bearer token validation and caller identity extraction.

use std::fmt::{self, Debug, Formatter};

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::Error;

/// The claims carried by an accepted bearer token.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Claims {
    /// The subject: the caller's identity, used as the record owner.
    pub(crate) sub: String,

    /// The expiration time as a Unix timestamp.
    pub(crate) exp: i64,
}

/// Validates bearer tokens using HS256 with a shared secret.
#[derive(Clone)]
pub(crate) struct JwtAuth {
    /// The key tokens are verified against.
    decoding_key: DecodingKey,

    /// The validation rules applied to every token.
    validation: Validation,
}

impl JwtAuth {
    /// Creates a validator over the given shared secret.
    pub(crate) fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Validates a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Unauthorized`] for any invalid, expired, or forged token.
    fn validate(&self, token: &str) -> Result<Claims, Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| Error::Unauthorized)
    }
}

impl Debug for JwtAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The decoding key stays out of debug output.
        f.debug_struct("JwtAuth").finish_non_exhaustive()
    }
}

/// The authenticated caller's identity, taken from the bearer token's subject claim.
///
/// Extracting this is what makes a route require authentication.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct AuthorizerId(String);

impl AuthorizerId {
    /// Consumes the [`AuthorizerId`], returning the identity string.
    pub(crate) fn into_inner(self) -> String {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizerId
where
    JwtAuth: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = JwtAuth::from_ref(state);

        let token = bearer_token(&parts.headers).ok_or(Error::Unauthorized)?;
        let claims = auth.validate(token)?;

        Ok(Self(claims.sub))
    }
}

/// Returns the bearer token from the `Authorization` header, if there is one.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    use super::*;

    /// The shared secret tests sign and validate with.
    const SECRET: &[u8] = b"test-secret";

    /// Signs a token for the given subject and expiration.
    fn sign(sub: &str, exp: i64) -> String {
        encode(
            &Header::default(),
            &Claims {
                sub: sub.to_owned(),
                exp,
            },
            &EncodingKey::from_secret(SECRET),
        )
        .expect("signing a test token should succeed")
    }

    /// A far-future expiration for tokens that should validate.
    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn valid_token_yields_subject() {
        let auth = JwtAuth::new(SECRET);
        let token = sign("u1", future_exp());

        let claims = auth.validate(&token).expect("a valid token should validate");
        assert_eq!(claims.sub, "u1", "the subject should round-trip");
    }

    #[test]
    fn expired_token_rejected() {
        let auth = JwtAuth::new(SECRET);
        let token = sign("u1", chrono::Utc::now().timestamp() - 3600);

        auth.validate(&token)
            .expect_err("an expired token should be rejected");
    }

    #[test]
    fn forged_token_rejected() {
        let auth = JwtAuth::new(SECRET);
        let token = sign("u1", future_exp());

        JwtAuth::new(b"other-secret")
            .validate(&token)
            .expect_err("a token signed with another secret should be rejected");

        auth.validate("not-even-a-token")
            .expect_err("garbage should be rejected");
    }

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(
            bearer_token(&headers),
            None,
            "no header should yield no token"
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(
            bearer_token(&headers),
            None,
            "a non-bearer credential should yield no token"
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(
            bearer_token(&headers),
            Some("abc.def.ghi"),
            "a bearer credential should yield its token"
        );
    }
}
