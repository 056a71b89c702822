use crate::{
    record::{OperatorRecord, PostRecord, ResourceRecord, SessionRecord},
    store::{CredentialStore, DocumentStore, Result},
};
use async_trait::async_trait;
use sosiego_common::{
    model::{
        Id, SosiegoSnowflake, SosiegoSnowflakeGenerator,
        auth::{Session, SessionLifetime, SessionTokenHash},
        operator::{OperatorCredentials, OperatorEmail, OperatorMarker, PasswordDigest},
        post::{NewPost, Post, PostMarker},
        resource::{NewResource, Resource, ResourceMarker},
    },
    snowflake::NodeId,
};
use sqlx::{PgPool, postgres::PgPoolOptions, query, query_as, query_scalar};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Postgres-backed store for documents, operators and sessions.
pub struct DbClient {
    pool: PgPool,
    snowflake_generator: Mutex<SosiegoSnowflakeGenerator>,
}

impl DbClient {
    #[must_use]
    pub fn new(pool: PgPool, node_id: NodeId) -> Self {
        Self {
            pool,
            snowflake_generator: Mutex::new(SosiegoSnowflakeGenerator::new(node_id)),
        }
    }

    pub async fn connect(url: &str, max_connections: u32, node_id: NodeId) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Ok(Self::new(pool, node_id))
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations are up to date");
        Ok(())
    }

    fn next_snowflake(&self) -> Result<SosiegoSnowflake> {
        let snowflake = self
            .snowflake_generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate()?;

        Ok(snowflake)
    }
}

#[async_trait]
impl DocumentStore<Post> for DbClient {
    async fn list(&self) -> Result<Vec<Post>> {
        let records = query_as::<_, PostRecord>(
            "
            SELECT
                blogs.blog_snowflake,
                blogs.title,
                blogs.body,
                blogs.author,
                blogs.created_at
            FROM
                content.blogs
            ORDER BY
                blogs.created_at DESC,
                blogs.blog_snowflake DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn insert(&self, draft: &NewPost) -> Result<Id<PostMarker>> {
        let blog_snowflake = self.next_snowflake()?;

        let returned_snowflake = query_scalar::<_, i64>(
            "
            INSERT INTO content.blogs (blog_snowflake, title, body, author)
            VALUES ($1, $2, $3, $4)
            RETURNING blogs.blog_snowflake
            ",
        )
        .bind(blog_snowflake.get().cast_signed())
        .bind(&draft.content.title)
        .bind(&draft.content.body)
        .bind(&draft.author)
        .fetch_one(&self.pool)
        .await?;

        Ok(returned_snowflake.cast_unsigned().into())
    }

    async fn delete(&self, id: Id<PostMarker>) -> Result<bool> {
        let result = query(
            "
            DELETE FROM content.blogs
            WHERE blogs.blog_snowflake = $1
            ",
        )
        .bind(id.snowflake().get().cast_signed())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl DocumentStore<Resource> for DbClient {
    async fn list(&self) -> Result<Vec<Resource>> {
        let records = query_as::<_, ResourceRecord>(
            "
            SELECT
                resources.resource_snowflake,
                resources.title,
                resources.url,
                resources.description,
                resources.created_at
            FROM
                content.resources
            ORDER BY
                resources.created_at DESC,
                resources.resource_snowflake DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Resource::from).collect())
    }

    async fn insert(&self, draft: &NewResource) -> Result<Id<ResourceMarker>> {
        let resource_snowflake = self.next_snowflake()?;

        let returned_snowflake = query_scalar::<_, i64>(
            "
            INSERT INTO content.resources (resource_snowflake, title, url, description)
            VALUES ($1, $2, $3, $4)
            RETURNING resources.resource_snowflake
            ",
        )
        .bind(resource_snowflake.get().cast_signed())
        .bind(&draft.title)
        .bind(&draft.url)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(returned_snowflake.cast_unsigned().into())
    }

    async fn delete(&self, id: Id<ResourceMarker>) -> Result<bool> {
        let result = query(
            "
            DELETE FROM content.resources
            WHERE resources.resource_snowflake = $1
            ",
        )
        .bind(id.snowflake().get().cast_signed())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CredentialStore for DbClient {
    async fn fetch_operator_credentials(
        &self,
        email: &OperatorEmail,
    ) -> Result<Option<OperatorCredentials>> {
        let record = query_as::<_, OperatorRecord>(
            "
            SELECT
                operators.operator_snowflake,
                operators.email,
                operators.password_hash
            FROM
                auth.operators
            WHERE
                operators.email = $1
            ",
        )
        .bind(email.get())
        .fetch_optional(&self.pool)
        .await?;

        let credentials = record.map(OperatorCredentials::try_from).transpose()?;
        Ok(credentials)
    }

    async fn upsert_operator(
        &self,
        email: &OperatorEmail,
        password_digest: &PasswordDigest,
    ) -> Result<Id<OperatorMarker>> {
        let operator_snowflake = self.next_snowflake()?;

        let returned_snowflake = query_scalar::<_, i64>(
            "
            INSERT INTO auth.operators (operator_snowflake, email, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE
                SET password_hash = EXCLUDED.password_hash
            RETURNING operators.operator_snowflake
            ",
        )
        .bind(operator_snowflake.get().cast_signed())
        .bind(email.get())
        .bind(password_digest.as_phc())
        .fetch_one(&self.pool)
        .await?;

        Ok(returned_snowflake.cast_unsigned().into())
    }

    async fn create_session(
        &self,
        operator: Id<OperatorMarker>,
        token_hash: &SessionTokenHash,
        expires_after: Option<SessionLifetime>,
    ) -> Result<()> {
        query(
            "
            INSERT INTO auth.sessions (token_hash, operator_snowflake, expires_after_seconds)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(&token_hash.0[..])
        .bind(operator.snowflake().get().cast_signed())
        .bind(expires_after.map(|lifetime| lifetime.get().whole_seconds()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch_session(&self, token_hash: &SessionTokenHash) -> Result<Option<Session>> {
        let record = query_as::<_, SessionRecord>(
            "
            SELECT
                sessions.token_hash,
                sessions.created_at,
                sessions.expires_after_seconds,
                operators.operator_snowflake,
                operators.email
            FROM
                auth.sessions NATURAL JOIN auth.operators
            WHERE
                sessions.token_hash = $1
            ",
        )
        .bind(&token_hash.0[..])
        .fetch_optional(&self.pool)
        .await?;

        let session = record.map(Session::try_from).transpose()?;
        Ok(session)
    }

    async fn delete_session(&self, token_hash: &SessionTokenHash) -> Result<bool> {
        let result = query(
            "
            DELETE FROM auth.sessions
            WHERE sessions.token_hash = $1
            ",
        )
        .bind(&token_hash.0[..])
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
