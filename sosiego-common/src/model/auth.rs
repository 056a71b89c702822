use crate::model::{
    Id,
    operator::{Operator, OperatorMarker},
};
use argon2::{Argon2, Params};
use base64::{DecodeError, Engine, display::Base64Display, prelude::BASE64_STANDARD};
use std::{
    fmt::{Debug, Formatter},
    num::ParseIntError,
    str::FromStr,
};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

pub const SESSION_TOKEN_CORE_LEN: usize = 24;
pub const SESSION_TOKEN_SALT_LEN: usize = 18;
pub const SESSION_TOKEN_HASH_LEN: usize = Params::DEFAULT_OUTPUT_LEN;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("Hashing session token failed: {0}")]
pub struct SessionTokenHashError(argon2::Error);

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum SessionTokenDecodeError {
    #[error("Not enough parts separated by ':'")]
    NotEnoughParts,
    #[error("Invalid operator id: {0}")]
    InvalidOperatorId(ParseIntError),
    #[error("Decoding base64 failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("The length of the core part is incorrect")]
    InvalidCoreLength,
    #[error("The length of the salt part is incorrect")]
    InvalidSaltLength,
}

/// The secret handed to a signed-in client, as a cookie or bearer token.
///
/// Only its argon2 hash is ever stored.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SessionToken {
    pub operator_id: Id<OperatorMarker>,
    pub core: [u8; SESSION_TOKEN_CORE_LEN],
    pub salt: [u8; SESSION_TOKEN_SALT_LEN],
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SessionTokenHash(pub Box<[u8; SESSION_TOKEN_HASH_LEN]>);

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub struct SessionLifetime(Duration);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("Session lifetime is not positive: {0}")]
pub struct NonPositiveLifetimeError(Duration);

/// A stored session, resolved to the operator it belongs to.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Session {
    pub operator: Operator,
    pub token_hash: SessionTokenHash,
    pub created_at: OffsetDateTime,
    pub expires_after: Option<SessionLifetime>,
}

impl SessionToken {
    #[must_use]
    pub fn generate_random(operator_id: Id<OperatorMarker>) -> Self {
        let core = rand::random();
        let salt = rand::random();

        Self {
            operator_id,
            core,
            salt,
        }
    }

    #[must_use]
    pub fn as_token_str(&self) -> String {
        let operator_id = self.operator_id;
        let encoded_core = Base64Display::new(&self.core, &BASE64_STANDARD);
        let encoded_salt = Base64Display::new(&self.salt, &BASE64_STANDARD);

        format!("{operator_id}:{encoded_core}:{encoded_salt}")
    }

    pub fn hash(&self) -> Result<SessionTokenHash, SessionTokenHashError> {
        let mut hash = Box::new([0; SESSION_TOKEN_HASH_LEN]);
        Argon2::default()
            .hash_password_into(&self.core, &self.salt, &mut *hash)
            .map_err(SessionTokenHashError)?;

        Ok(SessionTokenHash(hash))
    }
}

impl FromStr for SessionToken {
    type Err = SessionTokenDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');

        let operator_id_part = parts.next().ok_or(Self::Err::NotEnoughParts)?;
        let core_part = parts.next().ok_or(Self::Err::NotEnoughParts)?;
        let salt_part = parts.next().ok_or(Self::Err::NotEnoughParts)?;

        let operator_id = u64::from_str(operator_id_part)
            .map_err(Self::Err::InvalidOperatorId)?
            .into();
        let core = BASE64_STANDARD
            .decode(core_part)?
            .try_into()
            .map_err(|_| Self::Err::InvalidCoreLength)?;
        let salt = BASE64_STANDARD
            .decode(salt_part)?
            .try_into()
            .map_err(|_| Self::Err::InvalidSaltLength)?;

        Ok(Self {
            operator_id,
            core,
            salt,
        })
    }
}

impl Debug for SessionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("operator_id", &self.operator_id)
            .field("core", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl Debug for SessionTokenHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionTokenHash").field(&"[redacted]").finish()
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The session token hash had an invalid length")]
pub struct InvalidSessionTokenHashError;

impl TryFrom<Vec<u8>> for SessionTokenHash {
    type Error = InvalidSessionTokenHashError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        let bytes: [u8; SESSION_TOKEN_HASH_LEN] =
            value.try_into().map_err(|_| InvalidSessionTokenHashError)?;
        Ok(Self(Box::new(bytes)))
    }
}

impl SessionLifetime {
    #[must_use]
    pub fn new(duration: Duration) -> Option<Self> {
        duration.is_positive().then_some(Self(duration))
    }

    #[must_use]
    pub fn get(self) -> Duration {
        self.0
    }
}

impl TryFrom<Duration> for SessionLifetime {
    type Error = NonPositiveLifetimeError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NonPositiveLifetimeError(value))
    }
}

impl Session {
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_after
            .is_some_and(|lifetime| self.created_at + lifetime.get() <= now)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        auth::{
            SESSION_TOKEN_HASH_LEN, Session, SessionLifetime, SessionToken,
            SessionTokenDecodeError, SessionTokenHash,
        },
        operator::{Operator, OperatorEmail},
    };
    use time::{Duration, macros::datetime};

    #[test]
    fn token_string_round_trips() {
        let token = SessionToken::generate_random(42.into());
        let parsed: SessionToken = token.as_token_str().parse().unwrap();
        assert_eq!(parsed, token);
        assert_eq!(parsed.hash().unwrap(), token.hash().unwrap());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(
            "42".parse::<SessionToken>(),
            Err(SessionTokenDecodeError::NotEnoughParts)
        );
        assert!(matches!(
            "abc:AAAA:AAAA".parse::<SessionToken>(),
            Err(SessionTokenDecodeError::InvalidOperatorId(_))
        ));
        assert_eq!(
            "42:AAAA:AAAA".parse::<SessionToken>(),
            Err(SessionTokenDecodeError::InvalidCoreLength)
        );
    }

    #[test]
    fn debug_redacts_token() {
        let token = SessionToken::generate_random(42.into());
        assert!(!format!("{token:?}").contains(&token.as_token_str()));
    }

    #[test]
    fn hash_length_is_checked() {
        assert!(SessionTokenHash::try_from(vec![0; SESSION_TOKEN_HASH_LEN]).is_ok());
        assert!(SessionTokenHash::try_from(vec![0; 3]).is_err());
    }

    #[test]
    fn lifetime_must_be_positive() {
        assert!(SessionLifetime::new(Duration::ZERO).is_none());
        assert!(SessionLifetime::try_from(Duration::hours(-1)).is_err());
        assert!(SessionLifetime::new(Duration::hours(12)).is_some());
    }

    #[test]
    fn session_expiry() {
        let created_at = datetime!(2026-10-19 08:00 UTC);
        let mut session = Session {
            operator: Operator {
                id: 1.into(),
                email: OperatorEmail::new("a@b.es").unwrap(),
            },
            token_hash: SessionTokenHash(Box::new([0; SESSION_TOKEN_HASH_LEN])),
            created_at,
            expires_after: SessionLifetime::new(Duration::hours(12)),
        };

        assert!(!session.is_expired_at(created_at + Duration::hours(11)));
        assert!(session.is_expired_at(created_at + Duration::hours(12)));

        session.expires_after = None;
        assert!(!session.is_expired_at(created_at + Duration::days(365)));
    }
}
