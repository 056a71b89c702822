use crate::server::{
    Result, ServerError, ServerRouter, Settings,
    auth::{self, CurrentSession},
    json::Json,
};
use axum::{extract::State, http::StatusCode};
use axum_extra::{
    extract::CookieJar,
    routing::{RouterExt, TypedPath},
};
use serde::{Deserialize, Serialize};
use sosiego_common::{model::operator::Credentials, session::SessionSnapshot};
use sosiego_db::CredentialStore;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_session)
        .typed_post(create_session)
        .typed_delete(delete_session)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/session", rejection(ServerError))]
struct SessionPath();

#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
struct SignedIn {
    token: String,
    identity: String,
}

async fn get_session(
    SessionPath(): SessionPath,
    session: CurrentSession,
) -> Json<SessionSnapshot> {
    Json(session.state.snapshot())
}

async fn create_session(
    SessionPath(): SessionPath,
    State(store): State<Arc<dyn CredentialStore>>,
    State(settings): State<Arc<Settings>>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<SignedIn>)> {
    let (operator, token) = auth::sign_in(store.as_ref(), &credentials, &settings).await?;

    let jar = jar.add(auth::session_cookie(&token, &settings));
    Ok((
        jar,
        Json(SignedIn {
            token: token.as_token_str(),
            identity: operator.email.into_inner(),
        }),
    ))
}

async fn delete_session(
    SessionPath(): SessionPath,
    State(store): State<Arc<dyn CredentialStore>>,
    session: CurrentSession,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode)> {
    if let Some(token) = &session.token {
        auth::sign_out(store.as_ref(), token).await?;
    }

    Ok((auth::without_session_cookie(jar), StatusCode::NO_CONTENT))
}
