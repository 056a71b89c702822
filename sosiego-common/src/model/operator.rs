use crate::model::Id;
use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHash, SaltString},
};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error as _, Unexpected},
};
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

pub const OPERATOR_EMAIL_MAX_LEN: usize = 254;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct OperatorMarker;

/// The practice owner allowed to manage content.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Operator {
    pub id: Id<OperatorMarker>,
    pub email: OperatorEmail,
}

/// A trimmed, lowercased address; the identity shown as "logged in as".
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize)]
#[serde(transparent)]
pub struct OperatorEmail(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The operator email is invalid: {0}")]
pub struct InvalidOperatorEmailError(String);

impl OperatorEmail {
    pub fn new(email: &str) -> Result<Self, InvalidOperatorEmailError> {
        let email = email.trim();
        let valid = email.chars().count() <= OPERATOR_EMAIL_MAX_LEN
            && email
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());

        if valid {
            Ok(Self(email.to_lowercase()))
        } else {
            Err(InvalidOperatorEmailError(email.to_owned()))
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for OperatorEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OperatorEmail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        OperatorEmail::new(&inner)
            .map_err(|err| D::Error::invalid_value(Unexpected::Str(&err.0), &"OperatorEmail"))
    }
}

#[derive(Clone, Debug, Error)]
#[error("Hashing password failed: {0}")]
pub struct PasswordHashError(password_hash::Error);

/// An argon2 hash in PHC string format.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn hash(password: &str) -> Result<Self, PasswordHashError> {
        let salt_bytes: [u8; 16] = rand::random();
        let salt = SaltString::encode_b64(&salt_bytes).map_err(PasswordHashError)?;
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(PasswordHashError)?;

        Ok(Self(hash.to_string()))
    }

    /// Wraps a stored PHC string.
    #[must_use]
    pub fn from_phc(phc: String) -> Self {
        Self(phc)
    }

    #[must_use]
    pub fn as_phc(&self) -> &str {
        &self.0
    }

    /// Whether `password` matches. Unparseable stored hashes never match.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        PasswordHash::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }
}

impl Debug for PasswordDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasswordDigest").field(&"[redacted]").finish()
    }
}

/// What the sign-in form submits.
#[derive(Clone, Eq, PartialEq, Default, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// An operator together with the stored hash to check a password against.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct OperatorCredentials {
    pub operator: Operator,
    pub password_digest: PasswordDigest,
}

#[cfg(test)]
mod tests {
    use crate::model::operator::{Credentials, OperatorEmail, PasswordDigest};

    #[test]
    fn email_normalization() {
        assert_eq!(
            OperatorEmail::new("  Lorena@Example.COM ").unwrap().get(),
            "lorena@example.com"
        );
        assert!(OperatorEmail::new("lorena").is_err());
        assert!(OperatorEmail::new("@example.com").is_err());
        assert!(OperatorEmail::new("lorena@").is_err());
        assert!(OperatorEmail::new(&format!("{}@x.es", "a".repeat(260))).is_err());
    }

    #[test]
    fn email_deserialization_validates() {
        let email: OperatorEmail = serde_json::from_str("\"a@b.es\"").unwrap();
        assert_eq!(email.get(), "a@b.es");
        assert!(serde_json::from_str::<OperatorEmail>("\"nope\"").is_err());
    }

    #[test]
    fn password_digest_verifies() {
        let digest = PasswordDigest::hash("correct horse").unwrap();
        assert!(digest.as_phc().starts_with("$argon2id$"));
        assert!(digest.verify("correct horse"));
        assert!(!digest.verify("wrong horse"));
        assert!(!PasswordDigest::from_phc("garbage".to_owned()).verify("correct horse"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = Credentials {
            email: "a@b.es".to_owned(),
            password: "hunter2".to_owned(),
        };
        assert!(!format!("{credentials:?}").contains("hunter2"));

        let digest = PasswordDigest::hash("hunter2").unwrap();
        assert!(!format!("{digest:?}").contains("argon2"));
    }
}
