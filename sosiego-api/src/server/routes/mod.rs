use crate::server::ServerRouter;

mod contact;
mod posts;
mod resources;
mod session;

/// The JSON API under `/api`.
pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(posts::routes())
        .merge(resources::routes())
        .merge(session::routes())
        .merge(contact::routes())
}
