use crate::server::{
    ServerError, ServerRouter, Settings,
    auth::{self, AuthError, CurrentSession},
    json::Form,
    locale::Locale,
    pages::{Page, banner, layout, render},
};
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{
    extract::CookieJar,
    routing::{RouterExt, TypedPath},
};
use maud::{Markup, html};
use serde::Deserialize;
use sosiego_common::{i18n::Language, model::operator::Credentials};
use sosiego_db::CredentialStore;
use std::sync::Arc;
use tracing::{error, warn};

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(login_form)
        .typed_post(log_in)
        .typed_post(log_out)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/login", rejection(ServerError))]
pub(super) struct LoginPath();

#[derive(TypedPath, Deserialize)]
#[typed_path("/logout", rejection(ServerError))]
pub(super) struct LogoutPath();

async fn login_form(
    LoginPath(): LoginPath,
    session: CurrentSession,
    Locale(language): Locale,
) -> Response {
    if session.operator().is_some() {
        return Redirect::to(Page::Admin.path()).into_response();
    }

    render(layout(Page::Login, language, None, login_content(language, "", false))).into_response()
}

async fn log_in(
    LoginPath(): LoginPath,
    State(store): State<Arc<dyn CredentialStore>>,
    State(settings): State<Arc<Settings>>,
    Locale(language): Locale,
    jar: CookieJar,
    Form(credentials): Form<Credentials>,
) -> Response {
    match auth::sign_in(store.as_ref(), &credentials, &settings).await {
        Ok((_, token)) => (
            jar.add(auth::session_cookie(&token, &settings)),
            Redirect::to(Page::Admin.path()),
        )
            .into_response(),
        Err(err) => {
            match &err {
                AuthError::InvalidCredentials => warn!("Rejected sign-in from the login page"),
                AuthError::Database(_) | AuthError::TokenHash(_) => {
                    error!(error = %err, "Sign-in failed");
                }
            }

            let status = ServerError::from(err).status();
            let page = render(layout(
                Page::Login,
                language,
                None,
                login_content(language, &credentials.email, true),
            ));
            (status, page).into_response()
        }
    }
}

async fn log_out(
    LogoutPath(): LogoutPath,
    State(store): State<Arc<dyn CredentialStore>>,
    session: CurrentSession,
    jar: CookieJar,
) -> Response {
    if let Some(token) = &session.token
        && let Err(err) = auth::sign_out(store.as_ref(), token).await
    {
        error!(error = %err, "Could not end the session");
    }

    (auth::without_session_cookie(jar), Redirect::to(Page::Home.path())).into_response()
}

fn login_content(language: Language, email: &str, rejected: bool) -> Markup {
    let strings = &language.strings().login;

    html! {
        section.login {
            h1 { (strings.title) }
            p.subtitle { (strings.subtitle) }
            @if rejected {
                (banner(strings.invalid_credentials, true))
            }
            form method="post" action=(LoginPath::PATH) {
                label {
                    (strings.email_label)
                    input type="email" name="email" required autocomplete="username"
                        value=(email) placeholder=(strings.email_placeholder);
                }
                label {
                    (strings.password_label)
                    input type="password" name="password" required
                        autocomplete="current-password" placeholder=(strings.password_placeholder);
                }
                button type="submit" { (strings.submit) }
            }
            p.secure-note { (strings.secure_note) }
        }
    }
}
