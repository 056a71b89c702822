//! What pages and routes use to read and change a collection.

use crate::store::{DbError, DocumentStore};
use derive_where::derive_where;
use sosiego_common::model::{Document, Draft, Id, IncompleteDraftError, InvalidDraftError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
#[error("Listing {collection} failed: {source}")]
pub struct FetchError {
    pub collection: &'static str,
    pub source: DbError,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteDraftError),
    #[error(transparent)]
    Invalid(#[from] InvalidDraftError),
    #[error("Saving to {collection} failed: {source}")]
    Store {
        collection: &'static str,
        source: DbError,
    },
}

#[derive(Debug, Error)]
#[error("Deleting from {collection} failed: {source}")]
pub struct DeleteError {
    pub collection: &'static str,
    pub source: DbError,
}

/// The operator's answer to "are you sure?".
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Confirmation {
    Accepted,
    Declined,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Removal {
    Removed,
    /// Nothing had that id anymore. Treated like a removal.
    AlreadyGone,
    Declined,
}

impl Removal {
    /// Whether the caller should drop the item from what it shows.
    #[must_use]
    pub fn took_effect(self) -> bool {
        matches!(self, Removal::Removed | Removal::AlreadyGone)
    }
}

#[derive_where(Clone)]
pub struct Collection<D: Document> {
    store: Arc<dyn DocumentStore<D>>,
}

impl<D: Document> Collection<D> {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore<D>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<D>, FetchError> {
        let documents = self.store.list().await.map_err(|source| FetchError {
            collection: D::COLLECTION,
            source,
        })?;

        debug!(collection = D::COLLECTION, count = documents.len(), "Listed documents");
        Ok(documents)
    }

    /// Stores a new document. Only the id comes back; list again to see it.
    pub async fn create(&self, draft: &D::Draft) -> Result<Id<D::Marker>, WriteError> {
        draft.ensure_complete()?;
        draft.ensure_valid()?;

        let id = self
            .store
            .insert(draft)
            .await
            .map_err(|source| WriteError::Store {
                collection: D::COLLECTION,
                source,
            })?;

        info!(collection = D::COLLECTION, %id, "Created document");
        Ok(id)
    }

    pub async fn remove(
        &self,
        id: Id<D::Marker>,
        confirmation: Confirmation,
    ) -> Result<Removal, DeleteError> {
        if confirmation == Confirmation::Declined {
            debug!(collection = D::COLLECTION, %id, "Deletion declined");
            return Ok(Removal::Declined);
        }

        let existed = self.store.delete(id).await.map_err(|source| DeleteError {
            collection: D::COLLECTION,
            source,
        })?;

        if existed {
            info!(collection = D::COLLECTION, %id, "Deleted document");
            Ok(Removal::Removed)
        } else {
            info!(collection = D::COLLECTION, %id, "Document was already gone");
            Ok(Removal::AlreadyGone)
        }
    }
}

/// A list as last shown to the visitor.
///
/// A failed fetch keeps the previous items and only raises the flag for the
/// retry banner.
#[derive_where(Clone, Debug, Default)]
pub struct ListView<D: Document> {
    items: Vec<D>,
    loaded: bool,
    fetch_failed: bool,
}

impl<D: Document> ListView<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes in the outcome of a `list()` call, handing back its error.
    pub fn apply_fetch(&mut self, result: Result<Vec<D>, FetchError>) -> Option<FetchError> {
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.fetch_failed = false;
                None
            }
            Err(err) => {
                self.fetch_failed = true;
                Some(err)
            }
        }
    }

    /// Drops exactly the item with that id after the store confirmed removal.
    pub fn remove(&mut self, id: Id<D::Marker>) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[D] {
        &self.items
    }

    #[must_use]
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// Loaded fine and there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded && !self.fetch_failed && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        collection::{Collection, Confirmation, ListView, Removal, WriteError},
        memory::MemoryStore,
        store::{DbError, DocumentStore, Result},
    };
    use async_trait::async_trait;
    use sosiego_common::model::{
        Id,
        post::{NewPost, Post, PostContent, PostMarker},
        resource::{NewResource, Resource},
    };
    use std::sync::Arc;

    struct OfflineStore;

    #[async_trait]
    impl DocumentStore<Post> for OfflineStore {
        async fn list(&self) -> Result<Vec<Post>> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn insert(&self, _draft: &NewPost) -> Result<Id<PostMarker>> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn delete(&self, _id: Id<PostMarker>) -> Result<bool> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }

    fn draft(title: &str, body: &str) -> NewPost {
        NewPost {
            content: PostContent {
                title: title.to_owned(),
                body: body.to_owned(),
            },
            author: "lorena@example.com".to_owned(),
        }
    }

    fn posts() -> Collection<Post> {
        Collection::new(Arc::new(MemoryStore::default()))
    }

    #[tokio::test]
    async fn empty_collection_shows_empty_state() {
        let posts = posts();
        let mut view = ListView::new();

        assert!(view.apply_fetch(posts.list().await).is_none());
        assert!(view.items().is_empty());
        assert!(view.is_empty());
        assert!(!view.fetch_failed());
    }

    #[tokio::test]
    async fn sequential_creations_list_newest_first() {
        let posts = posts();
        let first = posts.create(&draft("uno", "a")).await.unwrap();
        let second = posts.create(&draft("dos", "b")).await.unwrap();

        let listed = posts.list().await.unwrap();
        assert_eq!(
            listed.iter().map(|post| post.id).collect::<Vec<_>>(),
            [second, first]
        );
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_store() {
        let posts = Collection::<Post>::new(Arc::new(OfflineStore));

        let err = posts.create(&draft("  ", "cuerpo")).await.unwrap_err();
        assert!(matches!(err, WriteError::Incomplete(missing) if missing.0 == ["title"]));

        let err = posts.create(&draft("título", "cuerpo")).await.unwrap_err();
        assert!(matches!(err, WriteError::Store { collection: "blogs", .. }));
    }

    #[tokio::test]
    async fn script_links_never_reach_the_store() {
        let resources = Collection::<Resource>::new(Arc::new(MemoryStore::default()));

        let err = resources
            .create(&NewResource {
                title: "Guía".to_owned(),
                url: "javascript:alert(1)".to_owned(),
                description: "Para leer".to_owned(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, WriteError::Invalid(invalid) if invalid.0 == ["url"]));
        assert!(resources.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn declined_removal_changes_nothing() {
        let posts = posts();
        let id = posts.create(&draft("uno", "a")).await.unwrap();
        let mut view = ListView::new();
        view.apply_fetch(posts.list().await);

        let removal = posts.remove(id, Confirmation::Declined).await.unwrap();
        assert_eq!(removal, Removal::Declined);
        assert!(!removal.took_effect());
        assert_eq!(view.items().len(), 1);
        assert_eq!(posts.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn accepted_removal_drops_only_the_target() {
        let posts = posts();
        let keep = posts.create(&draft("uno", "a")).await.unwrap();
        let target = posts.create(&draft("dos", "b")).await.unwrap();
        let mut view = ListView::new();
        view.apply_fetch(posts.list().await);

        let removal = posts.remove(target, Confirmation::Accepted).await.unwrap();
        assert_eq!(removal, Removal::Removed);
        assert!(view.remove(target));

        assert_eq!(
            view.items().iter().map(|post| post.id).collect::<Vec<_>>(),
            [keep]
        );
    }

    #[tokio::test]
    async fn removing_twice_is_a_no_op() {
        let posts = posts();
        let id = posts.create(&draft("uno", "a")).await.unwrap();

        assert_eq!(
            posts.remove(id, Confirmation::Accepted).await.unwrap(),
            Removal::Removed
        );
        let again = posts.remove(id, Confirmation::Accepted).await.unwrap();
        assert_eq!(again, Removal::AlreadyGone);
        assert!(again.took_effect());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_stale_items() {
        let posts = posts();
        posts.create(&draft("uno", "a")).await.unwrap();
        let mut view = ListView::new();
        view.apply_fetch(posts.list().await);

        let offline = Collection::<Post>::new(Arc::new(OfflineStore));
        let err = view.apply_fetch(offline.list().await);

        assert!(err.is_some());
        assert!(view.fetch_failed());
        assert_eq!(view.items().len(), 1);
        assert!(!view.is_empty());
    }

    #[tokio::test]
    async fn failed_delete_leaves_the_view_alone() {
        let posts = posts();
        let first = posts.create(&draft("uno", "a")).await.unwrap();
        let second = posts.create(&draft("dos", "b")).await.unwrap();
        let mut view = ListView::new();
        view.apply_fetch(posts.list().await);

        let offline = Collection::<Post>::new(Arc::new(OfflineStore));
        let err = offline.remove(first, Confirmation::Accepted).await.unwrap_err();

        assert_eq!(err.collection, "blogs");
        assert_eq!(
            view.items().iter().map(|post| post.id).collect::<Vec<_>>(),
            [second, first]
        );
        assert!(!view.fetch_failed());
    }

    #[test]
    fn removing_an_unknown_id_keeps_the_view() {
        let mut view = ListView::<Post>::new();
        view.apply_fetch(Ok(Vec::new()));

        assert!(!view.remove(Id::<PostMarker>::from(1_u64)));
        assert!(view.is_empty());
    }
}
