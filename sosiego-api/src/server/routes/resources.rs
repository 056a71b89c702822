use crate::server::{
    Result, ServerError, ServerRouter,
    auth::AuthenticatedOperator,
    json::{Created, Json},
};
use axum::{extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use serde::Deserialize;
use sosiego_common::model::{
    Id,
    resource::{NewResource, Resource, ResourceMarker},
};
use sosiego_db::{Collection, Confirmation};

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_resources)
        .typed_post(create_resource)
        .typed_delete(delete_resource)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/resources", rejection(ServerError))]
struct ResourcesPath();

async fn list_resources(
    ResourcesPath(): ResourcesPath,
    State(resources): State<Collection<Resource>>,
) -> Result<Json<Vec<Resource>>> {
    Ok(Json(resources.list().await?))
}

async fn create_resource(
    ResourcesPath(): ResourcesPath,
    State(resources): State<Collection<Resource>>,
    _: AuthenticatedOperator,
    Json(draft): Json<NewResource>,
) -> Result<Created<ResourceMarker>> {
    let id = resources.create(&draft).await?;

    Ok(Created { id })
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/resources/{id}", rejection(ServerError))]
struct ResourcePath {
    id: Id<ResourceMarker>,
}

async fn delete_resource(
    ResourcePath { id }: ResourcePath,
    State(resources): State<Collection<Resource>>,
    _: AuthenticatedOperator,
) -> Result<StatusCode> {
    resources.remove(id, Confirmation::Accepted).await?;

    Ok(StatusCode::NO_CONTENT)
}
