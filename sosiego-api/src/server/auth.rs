use crate::server::{ServerError, Settings};
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use sosiego_common::{
    model::{
        auth::{SessionToken, SessionTokenHashError},
        operator::{Credentials, Operator, OperatorEmail},
    },
    session::SessionState,
};
use sosiego_db::{CredentialStore, DbError};
use std::sync::Arc;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email and wrong password look the same from outside.
    #[error("Email or password is incorrect")]
    InvalidCredentials,
    #[error(transparent)]
    Database(#[from] DbError),
    #[error(transparent)]
    TokenHash(#[from] SessionTokenHashError),
}

impl From<AuthError> for ServerError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::InvalidCredentials => ServerError::InvalidCredentials,
            AuthError::Database(err) => ServerError::Database(err),
            AuthError::TokenHash(err) => ServerError::SessionTokenHash(err),
        }
    }
}

/// Checks email and password and opens a new session.
pub async fn sign_in(
    store: &dyn CredentialStore,
    credentials: &Credentials,
    settings: &Settings,
) -> Result<(Operator, SessionToken), AuthError> {
    let Ok(email) = OperatorEmail::new(&credentials.email) else {
        debug!("Sign-in with malformed email");
        return Err(AuthError::InvalidCredentials);
    };

    let Some(stored) = store.fetch_operator_credentials(&email).await? else {
        debug!(%email, "Sign-in for unknown operator");
        return Err(AuthError::InvalidCredentials);
    };

    if !stored.password_digest.verify(&credentials.password) {
        debug!(%email, "Sign-in with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let token = SessionToken::generate_random(stored.operator.id);
    store
        .create_session(stored.operator.id, &token.hash()?, settings.session_lifetime)
        .await?;

    info!(operator = %stored.operator.id, %email, "Operator signed in");
    Ok((stored.operator, token))
}

/// The operator a token belongs to, if its session still exists and has not
/// expired. Expired sessions are deleted on sight.
pub async fn resolve_session(
    store: &dyn CredentialStore,
    token: &SessionToken,
) -> Result<Option<Operator>, AuthError> {
    let token_hash = token.hash()?;
    let Some(session) = store.fetch_session(&token_hash).await? else {
        return Ok(None);
    };

    if session.operator.id != token.operator_id {
        return Ok(None);
    }

    if session.is_expired_at(OffsetDateTime::now_utc()) {
        store.delete_session(&token_hash).await?;
        debug!(operator = %session.operator.id, "Dropped expired session");
        return Ok(None);
    }

    Ok(Some(session.operator))
}

pub async fn sign_out(store: &dyn CredentialStore, token: &SessionToken) -> Result<(), AuthError> {
    if store.delete_session(&token.hash()?).await? {
        info!(operator = %token.operator_id, "Operator signed out");
    }
    Ok(())
}

#[must_use]
pub fn session_cookie(token: &SessionToken, settings: &Settings) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, token.as_token_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure_cookies);
    if let Some(lifetime) = settings.session_lifetime {
        cookie = cookie.max_age(lifetime.get());
    }
    cookie.build()
}

#[must_use]
pub fn without_session_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// The token from a bearer header or, failing that, the session cookie.
fn presented_token(headers: &HeaderMap) -> Option<SessionToken> {
    let raw = match headers.typed_get::<Authorization<Bearer>>() {
        Some(authorization) => authorization.token().to_owned(),
        None => CookieJar::from_headers(headers)
            .get(SESSION_COOKIE)?
            .value()
            .to_owned(),
    };

    match raw.parse() {
        Ok(token) => Some(token),
        Err(err) => {
            debug!(error = %err, "Ignoring undecodable session token");
            None
        }
    }
}

/// Who, if anyone, sent this request. Never rejects for a missing or stale
/// session.
#[derive(Clone, Debug)]
pub struct CurrentSession {
    pub state: SessionState,
    pub token: Option<SessionToken>,
}

impl CurrentSession {
    #[must_use]
    pub fn operator(&self) -> Option<&Operator> {
        self.state.identity()
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    Arc<dyn CredentialStore>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = presented_token(&parts.headers) else {
            return Ok(Self {
                state: SessionState::Resolved(None),
                token: None,
            });
        };

        let store = Arc::<dyn CredentialStore>::from_ref(state);
        let operator = resolve_session(store.as_ref(), &token).await?;

        Ok(Self {
            state: SessionState::Resolved(operator),
            token: Some(token),
        })
    }
}

/// A request that must come from a signed-in operator.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct AuthenticatedOperator(pub Operator);

impl<S> FromRequestParts<S> for AuthenticatedOperator
where
    Arc<dyn CredentialStore>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = CurrentSession::from_request_parts(parts, state).await?;

        match session.state {
            SessionState::Resolved(Some(operator)) => Ok(Self(operator)),
            _ => Err(ServerError::Unauthenticated),
        }
    }
}
