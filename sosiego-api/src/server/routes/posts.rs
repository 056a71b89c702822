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
    post::{NewPost, Post, PostContent, PostMarker},
};
use sosiego_db::{Collection, Confirmation};

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_posts)
        .typed_post(create_post)
        .typed_delete(delete_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/blogs", rejection(ServerError))]
struct PostsPath();

async fn list_posts(
    PostsPath(): PostsPath,
    State(posts): State<Collection<Post>>,
) -> Result<Json<Vec<Post>>> {
    Ok(Json(posts.list().await?))
}

async fn create_post(
    PostsPath(): PostsPath,
    State(posts): State<Collection<Post>>,
    AuthenticatedOperator(operator): AuthenticatedOperator,
    Json(content): Json<PostContent>,
) -> Result<Created<PostMarker>> {
    let draft = NewPost {
        content,
        author: operator.email.into_inner(),
    };
    let id = posts.create(&draft).await?;

    Ok(Created { id })
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/blogs/{id}", rejection(ServerError))]
struct PostPath {
    id: Id<PostMarker>,
}

/// Calling the endpoint is the confirmation.
async fn delete_post(
    PostPath { id }: PostPath,
    State(posts): State<Collection<Post>>,
    _: AuthenticatedOperator,
) -> Result<StatusCode> {
    posts.remove(id, Confirmation::Accepted).await?;

    Ok(StatusCode::NO_CONTENT)
}
