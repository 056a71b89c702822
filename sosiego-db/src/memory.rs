use crate::store::{CredentialStore, DocumentStore, Result};
use async_trait::async_trait;
use sosiego_common::{
    model::{
        Document, Id, SosiegoSnowflakeGenerator, sort_newest_first,
        auth::{Session, SessionLifetime, SessionTokenHash},
        operator::{Operator, OperatorCredentials, OperatorEmail, OperatorMarker, PasswordDigest},
        post::{NewPost, Post},
        resource::{NewResource, Resource},
    },
    snowflake::NodeId,
};
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};
use time::OffsetDateTime;

/// Process-local store with the same semantics as the database, used when no
/// database is configured and in tests.
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug)]
pub struct MemoryState {
    snowflake_generator: SosiegoSnowflakeGenerator,
    posts: Vec<Post>,
    resources: Vec<Resource>,
    operators: Vec<OperatorCredentials>,
    sessions: HashMap<SessionTokenHash, StoredSession>,
}

#[derive(Debug)]
struct StoredSession {
    operator: Id<OperatorMarker>,
    created_at: OffsetDateTime,
    expires_after: Option<SessionLifetime>,
}

/// Document kinds the memory store keeps, each in its own list.
pub trait MemoryDocument: Document {
    fn from_draft(id: Id<Self::Marker>, draft: &Self::Draft, created_at: OffsetDateTime) -> Self;

    fn collection(state: &mut MemoryState) -> &mut Vec<Self>;
}

impl MemoryStore {
    #[must_use]
    pub fn new(node_id: NodeId) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                snowflake_generator: SosiegoSnowflakeGenerator::new(node_id),
                posts: Vec::new(),
                resources: Vec::new(),
                operators: Vec::new(),
                sessions: HashMap::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(NodeId::default())
    }
}

impl MemoryDocument for Post {
    fn from_draft(id: Id<Self::Marker>, draft: &NewPost, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            title: draft.content.title.clone(),
            body: draft.content.body.clone(),
            author: draft.author.clone(),
            created_at,
        }
    }

    fn collection(state: &mut MemoryState) -> &mut Vec<Self> {
        &mut state.posts
    }
}

impl MemoryDocument for Resource {
    fn from_draft(id: Id<Self::Marker>, draft: &NewResource, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            url: draft.url.clone(),
            description: draft.description.clone(),
            created_at,
        }
    }

    fn collection(state: &mut MemoryState) -> &mut Vec<Self> {
        &mut state.resources
    }
}

#[async_trait]
impl<D: MemoryDocument> DocumentStore<D> for MemoryStore {
    async fn list(&self) -> Result<Vec<D>> {
        let mut documents = D::collection(&mut self.state()).clone();
        sort_newest_first(&mut documents);
        Ok(documents)
    }

    async fn insert(&self, draft: &D::Draft) -> Result<Id<D::Marker>> {
        let mut state = self.state();
        let id = Id::new(state.snowflake_generator.generate()?);
        let document = D::from_draft(id, draft, OffsetDateTime::now_utc());
        D::collection(&mut state).push(document);
        Ok(id)
    }

    async fn delete(&self, id: Id<D::Marker>) -> Result<bool> {
        let mut state = self.state();
        let documents = D::collection(&mut state);
        let before = documents.len();
        documents.retain(|document| document.id() != id);
        Ok(documents.len() != before)
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn fetch_operator_credentials(
        &self,
        email: &OperatorEmail,
    ) -> Result<Option<OperatorCredentials>> {
        let credentials = self
            .state()
            .operators
            .iter()
            .find(|credentials| &credentials.operator.email == email)
            .cloned();

        Ok(credentials)
    }

    async fn upsert_operator(
        &self,
        email: &OperatorEmail,
        password_digest: &PasswordDigest,
    ) -> Result<Id<OperatorMarker>> {
        let mut state = self.state();

        if let Some(existing) = state
            .operators
            .iter_mut()
            .find(|credentials| &credentials.operator.email == email)
        {
            existing.password_digest = password_digest.clone();
            return Ok(existing.operator.id);
        }

        let id = Id::new(state.snowflake_generator.generate()?);
        state.operators.push(OperatorCredentials {
            operator: Operator {
                id,
                email: email.clone(),
            },
            password_digest: password_digest.clone(),
        });
        Ok(id)
    }

    async fn create_session(
        &self,
        operator: Id<OperatorMarker>,
        token_hash: &SessionTokenHash,
        expires_after: Option<SessionLifetime>,
    ) -> Result<()> {
        self.state().sessions.insert(
            token_hash.clone(),
            StoredSession {
                operator,
                created_at: OffsetDateTime::now_utc(),
                expires_after,
            },
        );
        Ok(())
    }

    async fn fetch_session(&self, token_hash: &SessionTokenHash) -> Result<Option<Session>> {
        let state = self.state();
        let session = state.sessions.get(token_hash).and_then(|stored| {
            let credentials = state
                .operators
                .iter()
                .find(|credentials| credentials.operator.id == stored.operator)?;

            Some(Session {
                operator: credentials.operator.clone(),
                token_hash: token_hash.clone(),
                created_at: stored.created_at,
                expires_after: stored.expires_after,
            })
        });

        Ok(session)
    }

    async fn delete_session(&self, token_hash: &SessionTokenHash) -> Result<bool> {
        Ok(self.state().sessions.remove(token_hash).is_some())
    }
}
