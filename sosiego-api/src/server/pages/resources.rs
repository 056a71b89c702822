use crate::server::{
    ServerError, ServerRouter,
    contact::local_now,
    locale::Locale,
    pages::{Page, layout, render},
};
use axum::{extract::State, response::Html};
use axum_extra::routing::{RouterExt, TypedPath};
use maud::{Markup, html};
use serde::Deserialize;
use sosiego_common::{
    i18n::{Language, dates::relative_date},
    model::resource::Resource,
};
use sosiego_db::{Collection, ListView};
use time::OffsetDateTime;
use tracing::warn;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(resources)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/resources", rejection(ServerError))]
struct ResourcesPath();

async fn resources(
    ResourcesPath(): ResourcesPath,
    State(resources): State<Collection<Resource>>,
    Locale(language): Locale,
) -> Html<String> {
    let mut view = ListView::new();
    if let Some(err) = view.apply_fetch(resources.list().await) {
        warn!(error = %err, "Resources page shows the retry banner");
    }

    render(layout(
        Page::Resources,
        language,
        None,
        resources_content(language, &view, local_now()),
    ))
}

fn resources_content(
    language: Language,
    view: &ListView<Resource>,
    now: OffsetDateTime,
) -> Markup {
    let strings = &language.strings().resources;

    html! {
        section.resources {
            h1 { (strings.title) }
            p.subtitle { (strings.subtitle) }
            @if view.fetch_failed() {
                div.banner.error role="alert" {
                    h2 { (strings.load_failed_title) }
                    p { (strings.load_failed_text) }
                    a.retry href=(ResourcesPath::PATH) { (strings.retry) }
                }
            }
            @if view.is_empty() {
                div.empty-state {
                    h2 { (strings.empty_title) }
                    p { (strings.empty_text) }
                    p { (strings.check_back) }
                }
            }
            div.cards {
                @for resource in view.items() {
                    (resource_card(language, resource, now))
                }
            }
        }
    }
}

fn resource_card(language: Language, resource: &Resource, now: OffsetDateTime) -> Markup {
    let strings = &language.strings().resources;

    html! {
        article.card.resource {
            span.icon aria-hidden="true" { (resource.icon()) }
            h2 { (resource.title) }
            @if let Some(domain) = resource.domain() {
                p.domain { (domain) }
            }
            p { (resource.description) }
            footer {
                @if let Some(link) = resource.web_link() {
                    a.visit href=(link) target="_blank" rel="noopener noreferrer" {
                        (strings.visit)
                    }
                }
                span.added {
                    (strings.added) " " (relative_date(resource.created_at, now, language))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{
        pages::{resources::resources_content, tests::get_request},
        tests::{body_text, test_app},
    };
    use sosiego_common::{
        i18n::Language,
        model::{
            Id, ModelValidationError, auth::InvalidSessionTokenHashError, resource::Resource,
        },
    };
    use sosiego_db::{DbError, FetchError, ListView};
    use std::sync::Arc;
    use time::macros::datetime;
    use tower::ServiceExt;

    fn resource(url: &str) -> Resource {
        Resource {
            id: Id::from(3_u64),
            title: "Guía de la OMS".to_owned(),
            url: url.to_owned(),
            description: "Salud mental en el trabajo".to_owned(),
            created_at: datetime!(2026-10-16 08:00 UTC),
        }
    }

    #[tokio::test]
    async fn empty_list_shows_the_empty_state() {
        let app = test_app(Arc::default()).await;
        let response = app
            .oneshot(get_request("/resources", Some("language=en")))
            .await
            .unwrap();

        let body = body_text(response).await;
        assert!(body.contains("Resources Coming Soon"));
        assert!(!body.contains("Connection Issue"));
    }

    #[test]
    fn cards_show_domain_icon_and_age() {
        let mut view = ListView::new();
        view.apply_fetch(Ok(vec![resource("https://www.who.int/mental-health")]));

        let markup = resources_content(Language::English, &view, datetime!(2026-10-19 10:00 UTC))
            .into_string();

        assert!(markup.contains("who.int"));
        assert!(markup.contains("🌍"));
        assert!(markup.contains("3 days ago"));
        assert!(markup.contains(r#"href="https://www.who.int/mental-health""#));
        assert!(markup.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn unparsable_links_still_render() {
        let mut view = ListView::new();
        view.apply_fetch(Ok(vec![resource("not a link")]));

        let markup = resources_content(Language::Spanish, &view, datetime!(2026-10-19 10:00 UTC))
            .into_string();

        assert!(markup.contains("🔗"));
        assert!(!markup.contains(r#"class="domain""#));
    }

    #[test]
    fn script_links_are_not_rendered() {
        let mut view = ListView::new();
        view.apply_fetch(Ok(vec![resource("javascript:alert(1)")]));

        let markup = resources_content(Language::English, &view, datetime!(2026-10-19 10:00 UTC))
            .into_string();

        assert!(markup.contains("Guía de la OMS"));
        assert!(!markup.contains("javascript:"));
        assert!(!markup.contains(r#"class="visit""#));
    }

    #[test]
    fn failure_before_any_load_shows_only_the_retry() {
        let mut view = ListView::<Resource>::new();
        view.apply_fetch(Err(FetchError {
            collection: "resources",
            source: DbError::Data(ModelValidationError::TokenHash(InvalidSessionTokenHashError)),
        }));

        let markup = resources_content(Language::English, &view, datetime!(2026-10-19 10:00 UTC))
            .into_string();

        assert!(markup.contains("Connection Issue"));
        assert!(markup.contains(r#"href="/resources""#));
        assert!(!markup.contains("Resources Coming Soon"));
    }
}
