use sosiego_common::model::{
    ModelValidationError,
    auth::Session,
    operator::{Operator, OperatorCredentials, OperatorEmail, PasswordDigest},
    post::Post,
    resource::Resource,
};
use sqlx::FromRow;
use time::{Duration, PrimitiveDateTime};

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub blog_snowflake: i64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: PrimitiveDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct ResourceRecord {
    pub resource_snowflake: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: PrimitiveDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct OperatorRecord {
    pub operator_snowflake: i64,
    pub email: String,
    pub password_hash: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct SessionRecord {
    pub token_hash: Vec<u8>,
    pub created_at: PrimitiveDateTime,
    pub expires_after_seconds: Option<i64>,
    pub operator_snowflake: i64,
    pub email: String,
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.blog_snowflake.cast_unsigned().into(),
            title: value.title,
            body: value.body,
            author: value.author,
            created_at: value.created_at.assume_utc(),
        }
    }
}

impl From<ResourceRecord> for Resource {
    fn from(value: ResourceRecord) -> Self {
        Self {
            id: value.resource_snowflake.cast_unsigned().into(),
            title: value.title,
            url: value.url,
            description: value.description,
            created_at: value.created_at.assume_utc(),
        }
    }
}

impl TryFrom<OperatorRecord> for OperatorCredentials {
    type Error = ModelValidationError;

    fn try_from(value: OperatorRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            operator: Operator {
                id: value.operator_snowflake.cast_unsigned().into(),
                email: OperatorEmail::new(&value.email)?,
            },
            password_digest: PasswordDigest::from_phc(value.password_hash),
        })
    }
}

impl TryFrom<SessionRecord> for Session {
    type Error = ModelValidationError;

    fn try_from(value: SessionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            operator: Operator {
                id: value.operator_snowflake.cast_unsigned().into(),
                email: OperatorEmail::new(&value.email)?,
            },
            token_hash: value.token_hash.try_into()?,
            created_at: value.created_at.assume_utc(),
            expires_after: value
                .expires_after_seconds
                .map(|seconds| Duration::seconds(seconds).try_into())
                .transpose()?,
        })
    }
}
