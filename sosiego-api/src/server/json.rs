use crate::server::ServerError;
use axum::{
    Form as AxumForm, Json as AxumJson,
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::ContentType;
use serde::Serialize;
use sosiego_common::model::Id;

#[derive(FromRequest, Debug, Clone, Copy, Default)]
#[from_request(via(AxumJson), rejection(ServerError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(json) => (TypedHeader(ContentType::json()), json).into_response(),
            Err(err) => ServerError::JsonResponse(err).into_response(),
        }
    }
}

/// Url-encoded form bodies posted by the rendered pages.
#[derive(FromRequest, Debug, Clone, Copy, Default)]
#[from_request(via(AxumForm), rejection(ServerError))]
pub struct Form<T>(pub T);

/// Reply to a successful create: only the new id.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(bound = "")]
pub struct Created<Marker> {
    pub id: Id<Marker>,
}

impl<Marker> IntoResponse for Created<Marker> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}
