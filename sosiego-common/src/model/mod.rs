pub mod auth;
pub mod operator;
pub mod post;
pub mod resource;

use crate::{
    model::{
        auth::{InvalidSessionTokenHashError, NonPositiveLifetimeError},
        operator::InvalidOperatorEmailError,
    },
    snowflake::{Epoch, Snowflake, SnowflakeGenerator},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    marker::PhantomData,
};
use thiserror::Error;
use time::{OffsetDateTime, UtcDateTime, macros::utc_datetime};

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum ModelValidationError {
    #[error(transparent)]
    OperatorEmail(#[from] InvalidOperatorEmailError),
    #[error(transparent)]
    NonPositiveLifetime(#[from] NonPositiveLifetimeError),
    #[error(transparent)]
    TokenHash(#[from] InvalidSessionTokenHashError),
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct SosiegoEpoch;
impl Epoch for SosiegoEpoch {
    const EPOCH_TIME: UtcDateTime = utc_datetime!(2025-01-01 00:00);
}

pub type SosiegoSnowflake = Snowflake<SosiegoEpoch>;
pub type SosiegoSnowflakeGenerator = SnowflakeGenerator<SosiegoEpoch>;

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id<Marker>(SosiegoSnowflake, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub fn new(snowflake: SosiegoSnowflake) -> Self {
        Self(snowflake, PhantomData)
    }

    #[must_use]
    pub fn snowflake(self) -> SosiegoSnowflake {
        self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker> From<SosiegoSnowflake> for Id<Marker> {
    fn from(value: SosiegoSnowflake) -> Self {
        Self::new(value)
    }
}

impl<Marker> From<u64> for Id<Marker> {
    fn from(value: u64) -> Self {
        Id::new(SosiegoSnowflake::new(value))
    }
}

impl<Marker> From<Id<Marker>> for u64 {
    fn from(value: Id<Marker>) -> Self {
        value.snowflake().get()
    }
}

/// Fields that must not be blank after trimming were blank.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
#[error("Required fields are empty: {}", .0.join(", "))]
pub struct IncompleteDraftError(pub Vec<&'static str>);

/// Fields that were filled in with values the document cannot hold.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
#[error("Fields have invalid values: {}", .0.join(", "))]
pub struct InvalidDraftError(pub Vec<&'static str>);

/// Operator input for a new document, before the store assigns an id and a
/// timestamp.
pub trait Draft {
    /// Every required field with its name, in display order.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    fn missing_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    fn ensure_complete(&self) -> Result<(), IncompleteDraftError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IncompleteDraftError(missing))
        }
    }

    /// Non-blank fields whose value is still unacceptable.
    fn invalid_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn ensure_valid(&self) -> Result<(), InvalidDraftError> {
        let invalid = self.invalid_fields();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(InvalidDraftError(invalid))
        }
    }
}

/// A stored document kind living in its own named collection.
pub trait Document: Clone + Debug + Send + Sync + 'static {
    type Marker: Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static;
    type Draft: Draft + Debug + Send + Sync + 'static;

    const COLLECTION: &'static str;

    fn id(&self) -> Id<Self::Marker>;

    fn created_at(&self) -> OffsetDateTime;
}

/// Orders documents newest first, breaking timestamp ties by id.
pub fn sort_newest_first<D: Document>(documents: &mut [D]) {
    documents.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}
