//! Server-rendered pages.

use crate::server::{
    ServerError, ServerRouter, Settings,
    json::Form,
    locale::CookieLocaleStorage,
};
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::{
    extract::CookieJar,
    routing::{RouterExt, TypedPath},
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Deserialize;
use sosiego_common::i18n::{
    Language, LocaleStore,
    strings::{PageMeta, SeoStrings},
};
use std::sync::Arc;
use tracing::debug;

mod admin;
mod blog;
mod contact;
mod home;
mod login;
mod resources;

const STYLESHEET: &str = include_str!("../../../static/site.css");

/// Scrolls to the section named by `data-scroll-to` once, then drops the
/// query so reloading stays put.
const SCROLL_SCRIPT: &str = r"
const target = document.body.dataset.scrollTo;
if (target) {
  document.getElementById(target)?.scrollIntoView({ behavior: 'smooth', block: 'start' });
  history.replaceState(null, '', location.pathname + location.hash);
}
";

/// Lets the contact form go out once per page; the button is disabled after
/// the browser has collected its `action` value.
const SUBMIT_SCRIPT: &str = r"
document.addEventListener('submit', (event) => {
  const form = event.target;
  const button = event.submitter;
  if (!form.matches('form.wizard') || !button?.matches('button.send')) return;
  if (form.dataset.sent) {
    event.preventDefault();
    return;
  }
  form.dataset.sent = 'true';
  setTimeout(() => {
    button.disabled = true;
    button.textContent = button.dataset.sending;
  }, 0);
});
";

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(home::routes())
        .merge(contact::routes())
        .merge(blog::routes())
        .merge(resources::routes())
        .merge(login::routes())
        .merge(admin::routes())
        .typed_post(toggle_language)
        .typed_get(stylesheet)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
enum Page {
    Home,
    Blog,
    Resources,
    Login,
    Admin,
}

impl Page {
    fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Blog => "/blog",
            Page::Resources => "/resources",
            Page::Login => "/login",
            Page::Admin => "/admin",
        }
    }

    fn meta(self, seo: &'static SeoStrings) -> &'static PageMeta {
        match self {
            Page::Home => &seo.home,
            Page::Blog => &seo.blog,
            Page::Resources => &seo.resources,
            Page::Login => &seo.login,
            Page::Admin => &seo.admin,
        }
    }
}

fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

fn layout(page: Page, language: Language, scroll_to: Option<&str>, content: Markup) -> Markup {
    let strings = language.strings();
    let meta = page.meta(&strings.seo);

    html! {
        (DOCTYPE)
        html lang=(language.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if !meta.keywords.is_empty() {
                    meta name="keywords" content=(meta.keywords);
                }
                meta property="og:site_name" content=(strings.seo.site_name);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:locale" content=(strings.seo.locale);
                @if matches!(page, Page::Login | Page::Admin) {
                    meta name="robots" content="noindex, nofollow";
                }
                link rel="stylesheet" href=(StylesheetPath::PATH);
            }
            body data-scroll-to=[scroll_to] {
                (navbar(page, language))
                main { (content) }
                (footer(language))
                script { (PreEscaped(SCROLL_SCRIPT)) }
                script { (PreEscaped(SUBMIT_SCRIPT)) }
            }
        }
    }
}

fn navbar(page: Page, language: Language) -> Markup {
    let navbar = &language.strings().navbar;

    html! {
        header.navbar {
            a.brand href="/" { (language.strings().about.name) }
            nav {
                a href="/" { (navbar.home) }
                a href="/?section=about" { (navbar.about) }
                a href="/?section=services" { (navbar.services) }
                a href="/?section=contact" { (navbar.contact) }
                a href="/blog" { (navbar.blog) }
                a href="/resources" { (navbar.resources) }
                a href="/admin" title=(navbar.admin_portal) { (navbar.admin) }
            }
            form.language-toggle method="post" action=(LanguagePath::PATH) {
                input type="hidden" name="back" value=(page.path());
                button type="submit" title=(navbar.switch_language) {
                    (language.toggled().code().to_uppercase())
                }
            }
        }
    }
}

fn footer(language: Language) -> Markup {
    let footer = &language.strings().footer;
    let year = crate::server::contact::local_now().year();

    html! {
        footer.site-footer {
            p.professional-note { (footer.professional_note) }
            p { (footer.services) }
            p {
                (footer.crafted_with) " ♥ " (footer.for_wellbeing)
            }
            p.legal {
                "© " (year) " " (language.strings().about.name) ". " (footer.all_rights)
                " • " (footer.licensed_psychologist) " • " (footer.confidential_secure)
            }
        }
    }
}

/// A notice shown above a form or list.
fn banner(text: &str, is_error: bool) -> Markup {
    html! {
        div.banner.error[is_error].success[!is_error] role="status" { (text) }
    }
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/language", rejection(ServerError))]
struct LanguagePath();

#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
struct ToggleForm {
    back: Option<String>,
}

/// Only same-site paths are followed back.
fn back_target(back: Option<&str>) -> &str {
    match back {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

async fn toggle_language(
    LanguagePath(): LanguagePath,
    State(settings): State<Arc<Settings>>,
    headers: HeaderMap,
    Form(form): Form<ToggleForm>,
) -> (CookieJar, Redirect) {
    let mut store = LocaleStore::open(CookieLocaleStorage::from_headers(
        &headers,
        settings.secure_cookies,
    ));
    let language = store.toggle();
    debug!(%language, "Switched display language");

    (
        store.into_storage().into_jar(),
        Redirect::to(back_target(form.back.as_deref())),
    )
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/static/site.css", rejection(ServerError))]
struct StylesheetPath();

async fn stylesheet(StylesheetPath(): StylesheetPath) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
