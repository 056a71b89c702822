use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sosiego_common::i18n::{LANGUAGE_KEY, Language, LocaleStorage, LocaleStore};
use std::convert::Infallible;

/// Keeps the active tag in the `language` cookie.
#[derive(Clone, Debug, Default)]
pub struct CookieLocaleStorage {
    jar: CookieJar,
    secure: bool,
}

impl CookieLocaleStorage {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        Self {
            jar: CookieJar::from_headers(headers),
            secure,
        }
    }

    /// The jar holding whatever was saved, ready to be sent back.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl LocaleStorage for CookieLocaleStorage {
    fn load(&self) -> Option<String> {
        self.jar
            .get(LANGUAGE_KEY)
            .map(|cookie| cookie.value().to_owned())
    }

    fn save(&mut self, tag: &str) {
        let cookie = Cookie::build((LANGUAGE_KEY, tag.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .permanent();
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }
}

/// The display language of the request.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct Locale(pub Language);

impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let store = LocaleStore::open(CookieLocaleStorage::from_headers(&parts.headers, false));
        Ok(Self(store.current()))
    }
}
