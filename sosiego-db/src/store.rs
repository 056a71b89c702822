use async_trait::async_trait;
use sosiego_common::{
    model::{
        Document, Id, ModelValidationError,
        auth::{Session, SessionLifetime, SessionTokenHash},
        operator::{OperatorCredentials, OperatorEmail, OperatorMarker, PasswordDigest},
    },
    snowflake::SnowflakeTimestampFromDateTimeError,
};
use thiserror::Error;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("An object in the database was invalid: {0}")]
    Data(#[from] ModelValidationError),
    #[error("Generating an id failed: {0}")]
    IdGeneration(#[from] SnowflakeTimestampFromDateTimeError),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// One named collection of documents.
///
/// Documents are only ever inserted and deleted. The store assigns ids and
/// creation timestamps.
#[async_trait]
pub trait DocumentStore<D: Document>: Send + Sync {
    /// Every document, newest first.
    async fn list(&self) -> Result<Vec<D>>;

    async fn insert(&self, draft: &D::Draft) -> Result<Id<D::Marker>>;

    /// Whether a document with that id existed.
    async fn delete(&self, id: Id<D::Marker>) -> Result<bool>;
}

/// Operators and their sessions.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn fetch_operator_credentials(
        &self,
        email: &OperatorEmail,
    ) -> Result<Option<OperatorCredentials>>;

    /// Creates the operator or replaces their password.
    async fn upsert_operator(
        &self,
        email: &OperatorEmail,
        password_digest: &PasswordDigest,
    ) -> Result<Id<OperatorMarker>>;

    async fn create_session(
        &self,
        operator: Id<OperatorMarker>,
        token_hash: &SessionTokenHash,
        expires_after: Option<SessionLifetime>,
    ) -> Result<()>;

    async fn fetch_session(&self, token_hash: &SessionTokenHash) -> Result<Option<Session>>;

    async fn delete_session(&self, token_hash: &SessionTokenHash) -> Result<bool>;
}
