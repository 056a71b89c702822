use crate::server::{
    Result, ServerError, ServerRouter, Settings,
    contact::{self, SubmissionLedger},
    json::Json,
    mail::MailRelay,
};
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use sosiego_common::contact::{ContactFields, ContactWizard};
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_post(send_contact)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/contact", rejection(ServerError))]
struct ContactPath();

/// Sends all three fields at once, as if the visitor had walked to review.
async fn send_contact(
    ContactPath(): ContactPath,
    State(relay): State<Arc<dyn MailRelay>>,
    State(submissions): State<Arc<SubmissionLedger>>,
    State(settings): State<Arc<Settings>>,
    Json(fields): Json<ContactFields>,
) -> Result<StatusCode> {
    let mut wizard = ContactWizard::with_fields(fields);
    contact::submit(
        &mut wizard,
        relay.as_ref(),
        &submissions,
        &settings.contact_recipient,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
