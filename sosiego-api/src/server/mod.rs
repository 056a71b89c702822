use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use contact::{ContactError, SubmissionLedger};
use json::Json;
use mail::{MailRelay, SendError};
use serde::{Deserialize, Serialize};
use sosiego_common::{
    contact::SubmitRefused,
    model::{
        auth::{SessionLifetime, SessionTokenDecodeError, SessionTokenHashError},
        post::Post,
        resource::Resource,
    },
};
use sosiego_db::{Collection, CredentialStore, DbError, DeleteError, FetchError, WriteError};
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error;
use tracing::error;

pub mod auth;
pub mod contact;
pub mod json;
pub mod locale;
pub mod mail;
mod pages;
mod routes;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, FromRef)]
pub struct ServerState {
    pub posts: Collection<Post>,
    pub resources: Collection<Resource>,
    pub credentials: Arc<dyn CredentialStore>,
    pub mail: Arc<dyn MailRelay>,
    pub submissions: Arc<SubmissionLedger>,
    pub settings: Arc<Settings>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Settings {
    /// Sent as `to_name` with every contact message.
    pub contact_recipient: String,
    /// `None` keeps sessions until sign-out.
    pub session_lifetime: Option<SessionLifetime>,
    pub secure_cookies: bool,
}

pub fn routes() -> ServerRouter {
    routes::routes()
        .merge(pages::routes())
        .fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Query rejected: {0}")]
    QueryRejection(#[from] QueryRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("Incoming form rejected: {0}")]
    FormRejection(#[from] FormRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("The provided session token could not be decoded: {0}")]
    InvalidSessionToken(#[from] SessionTokenDecodeError),
    #[error("The session token could not be hashed: {0}")]
    SessionTokenHash(#[from] SessionTokenHashError),
    #[error("No valid session was provided")]
    Unauthenticated,
    #[error("Email or password is incorrect")]
    InvalidCredentials,
    #[error(transparent)]
    Database(#[from] DbError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Delete(#[from] DeleteError),
    #[error("Contact message was refused: {0}")]
    ContactRefused(SubmitRefused),
    #[error(transparent)]
    Send(#[from] SendError),
}

impl From<ContactError> for ServerError {
    fn from(value: ContactError) -> Self {
        match value {
            ContactError::Refused(refused) => ServerError::ContactRefused(refused),
            ContactError::Send(err) => ServerError::Send(err),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_) | ServerError::PathRejection(_) => StatusCode::NOT_FOUND,
            ServerError::Unauthenticated | ServerError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ServerError::QueryRejection(_)
            | ServerError::JsonRejection(_)
            | ServerError::FormRejection(_)
            | ServerError::InvalidSessionToken(_) => StatusCode::BAD_REQUEST,
            ServerError::Write(WriteError::Incomplete(_) | WriteError::Invalid(_))
            | ServerError::ContactRefused(SubmitRefused::Invalid(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::ContactRefused(_) => StatusCode::CONFLICT,
            ServerError::Database(_)
            | ServerError::Fetch(_)
            | ServerError::Write(WriteError::Store { .. })
            | ServerError::Delete(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Send(_) => StatusCode::BAD_GATEWAY,
            ServerError::JsonResponse(_) | ServerError::SessionTokenHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Per-field problems a client can show next to its inputs.
    fn field_problems(&self) -> BTreeMap<&'static str, String> {
        match self {
            ServerError::Write(WriteError::Incomplete(missing)) => missing
                .0
                .iter()
                .map(|&field| (field, "is required".to_owned()))
                .collect(),
            ServerError::Write(WriteError::Invalid(invalid)) => invalid
                .0
                .iter()
                .map(|&field| (field, "is not valid".to_owned()))
                .collect(),
            ServerError::ContactRefused(SubmitRefused::Invalid(errors)) => errors
                .iter()
                .map(|(field, error)| (field.key(), error.to_string()))
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
struct ErrorResponse {
    status: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<String, String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        let error_response = ErrorResponse {
            status: status.as_u16(),
            fields: self
                .field_problems()
                .into_iter()
                .map(|(field, problem)| (field.to_owned(), problem))
                .collect(),
        };
        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{
        ServerState, Settings,
        mail::{MailRelay, SendError},
        routes,
    };
    use async_trait::async_trait;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use sosiego_common::{
        contact::ContactPayload,
        model::{
            auth::SessionLifetime,
            operator::{OperatorEmail, PasswordDigest},
            post::Post,
            resource::Resource,
        },
    };
    use sosiego_db::{Collection, CredentialStore, MemoryStore};
    use std::sync::{Arc, Mutex};
    use time::Duration;
    use tower::ServiceExt;

    const OPERATOR_EMAIL: &str = "lorena@example.com";
    const OPERATOR_PASSWORD: &str = "contraseña segura";

    /// Remembers every message instead of sending it.
    #[derive(Default)]
    pub(crate) struct RecordingRelay {
        pub(crate) sent: Mutex<Vec<ContactPayload>>,
        pub(crate) reject: bool,
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
            self.sent.lock().unwrap().push(payload.clone());
            if self.reject {
                Err(SendError::Rejected {
                    status: 400,
                    body: "The template ID is invalid".to_owned(),
                })
            } else {
                Ok(())
            }
        }
    }

    pub(crate) async fn test_app(relay: Arc<RecordingRelay>) -> Router {
        routes().with_state(test_state(relay).await)
    }

    /// Memory-backed state with one operator account.
    pub(crate) async fn test_state(relay: Arc<RecordingRelay>) -> ServerState {
        let store = Arc::new(MemoryStore::default());
        store
            .upsert_operator(
                &OperatorEmail::new(OPERATOR_EMAIL).unwrap(),
                &PasswordDigest::hash(OPERATOR_PASSWORD).unwrap(),
            )
            .await
            .unwrap();

        ServerState {
            posts: Collection::<Post>::new(store.clone()),
            resources: Collection::<Resource>::new(store.clone()),
            credentials: store,
            mail: relay,
            submissions: Arc::default(),
            settings: Arc::new(Settings {
                contact_recipient: "Lorena".to_owned(),
                session_lifetime: SessionLifetime::new(Duration::hours(1)),
                secure_cookies: false,
            }),
        }
    }

    pub(crate) async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn sign_in(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/session",
                &json!({ "email": OPERATOR_EMAIL, "password": OPERATOR_PASSWORD }),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_owned()
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = test_app(Arc::default()).await;
        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "status": 404 }));
    }

    #[tokio::test]
    async fn empty_collection_lists_as_empty_array() {
        let app = test_app(Arc::default()).await;
        let response = app
            .oneshot(Request::get("/api/blogs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn creating_requires_a_session() {
        let app = test_app(Arc::default()).await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/blogs",
                &json!({ "title": "Hola", "body": "Texto" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_password_gets_generic_rejection() {
        let app = test_app(Arc::default()).await;
        for (email, password) in [(OPERATOR_EMAIL, "incorrecta"), ("nadie@example.com", "x")] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/session",
                    &json!({ "email": email, "password": password }),
                    None,
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_json(response).await, json!({ "status": 401 }));
        }
    }

    #[tokio::test]
    async fn created_posts_list_newest_first() {
        let app = test_app(Arc::default()).await;
        let token = sign_in(&app).await;

        let mut ids = Vec::new();
        for title in ["Primero", "Segundo"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/blogs",
                    &json!({ "title": title, "body": "Cuerpo del artículo" }),
                    Some(&token),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            ids.push(body_json(response).await["id"].clone());
        }

        let listed = body_json(
            app.oneshot(Request::get("/api/blogs").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;

        assert_eq!(listed[0]["id"], ids[1]);
        assert_eq!(listed[1]["id"], ids[0]);
        assert_eq!(listed[0]["author"], OPERATOR_EMAIL);
    }

    #[tokio::test]
    async fn blank_fields_are_reported_per_field() {
        let app = test_app(Arc::default()).await;
        let token = sign_in(&app).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/resources",
                &json!({ "title": "Guía", "url": " ", "description": "" }),
                Some(&token),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({
                "status": 422,
                "fields": { "url": "is required", "description": "is required" },
            })
        );
    }

    #[tokio::test]
    async fn non_web_links_are_unprocessable() {
        let app = test_app(Arc::default()).await;
        let token = sign_in(&app).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/resources",
                &json!({
                    "title": "Guía",
                    "url": "javascript:alert(document.cookie)",
                    "description": "Para leer",
                }),
                Some(&token),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "status": 422, "fields": { "url": "is not valid" } })
        );

        let response = app
            .oneshot(Request::get("/api/resources").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn deleting_twice_is_not_an_error() {
        let app = test_app(Arc::default()).await;
        let token = sign_in(&app).await;

        let created = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/resources",
                    &json!({
                        "title": "Guía",
                        "url": "https://www.apa.org/topics/anxiety",
                        "description": "Sobre la ansiedad",
                    }),
                    Some(&token),
                ))
                .await
                .unwrap(),
        )
        .await;
        let uri = format!("/api/resources/{}", created["id"]);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::delete(uri.as_str())
                        .header(header::AUTHORIZATION, format!("Bearer {token}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        let listed = body_json(
            app.oneshot(Request::get("/api/resources").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn session_snapshot_follows_sign_in_and_out() {
        let app = test_app(Arc::default()).await;
        let snapshot = |token: Option<String>| {
            let app = app.clone();
            async move {
                let mut request = Request::get("/api/session");
                if let Some(token) = token {
                    request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
                }
                body_json(app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()).await
            }
        };

        assert_eq!(
            snapshot(None).await,
            json!({ "loading": false, "identity": null })
        );

        let token = sign_in(&app).await;
        assert_eq!(
            snapshot(Some(token.clone())).await,
            json!({ "loading": false, "identity": OPERATOR_EMAIL })
        );

        let response = app
            .clone()
            .oneshot(
                Request::delete("/api/session")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        assert_eq!(
            snapshot(Some(token)).await,
            json!({ "loading": false, "identity": null })
        );
    }

    #[tokio::test]
    async fn contact_sends_exactly_once_with_the_given_values() {
        let relay = Arc::new(RecordingRelay::default());
        let app = test_app(relay.clone()).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/contact",
                &json!({
                    "name": "Ana",
                    "email": "ana@example.com",
                    "message": "Quisiera pedir una cita",
                }),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ana");
        assert_eq!(sent[0].email, "ana@example.com");
        assert_eq!(sent[0].message, "Quisiera pedir una cita");
        assert_eq!(sent[0].to_name, "Lorena");
        assert!(!sent[0].date.is_empty());
    }

    #[tokio::test]
    async fn invalid_contact_never_reaches_the_relay() {
        let relay = Arc::new(RecordingRelay::default());
        let app = test_app(relay.clone()).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/contact",
                &json!({ "name": "A", "email": "ana@", "message": "Hola" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["fields"]["name"], "name is too short");
        assert_eq!(body["fields"]["email"], "email is not a valid address");
        assert_eq!(body["fields"]["message"], "message is too short");
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn relay_rejection_is_a_bad_gateway() {
        let relay = Arc::new(RecordingRelay {
            reject: true,
            ..RecordingRelay::default()
        });
        let app = test_app(relay.clone()).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/contact",
                &json!({
                    "name": "Ana",
                    "email": "ana@example.com",
                    "message": "Quisiera pedir una cita",
                }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(relay.sent.lock().unwrap().len(), 1);
    }
}
