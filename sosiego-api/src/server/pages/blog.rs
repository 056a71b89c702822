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
    model::post::Post,
};
use sosiego_db::{Collection, ListView};
use time::OffsetDateTime;
use tracing::warn;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(blog)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/blog", rejection(ServerError))]
struct BlogPath();

async fn blog(
    BlogPath(): BlogPath,
    State(posts): State<Collection<Post>>,
    Locale(language): Locale,
) -> Html<String> {
    let mut view = ListView::new();
    if let Some(err) = view.apply_fetch(posts.list().await) {
        warn!(error = %err, "Blog page shows the retry banner");
    }

    render(layout(
        Page::Blog,
        language,
        None,
        blog_content(language, &view, local_now()),
    ))
}

fn blog_content(language: Language, view: &ListView<Post>, now: OffsetDateTime) -> Markup {
    let strings = &language.strings().blog;
    let count = view.items().len();

    html! {
        section.blog {
            h1 { (strings.title) }
            p.subtitle { (strings.subtitle) }
            @if view.fetch_failed() {
                div.banner.error role="alert" {
                    h2 { (strings.load_failed_title) }
                    p { (strings.load_failed_text) }
                    a.retry href=(BlogPath::PATH) { (strings.retry) }
                }
            }
            @if view.is_empty() {
                div.empty-state {
                    h2 { (strings.empty_title) }
                    p { (strings.empty_text) }
                }
            }
            @for post in view.items() {
                article.post id={ "post-" (post.id) } {
                    header {
                        span.badge { (strings.professional_insight) }
                        h2 { (post.title) }
                        p.meta {
                            time datetime=(post.created_at.date()) {
                                (relative_date(post.created_at, now, language))
                            }
                            " • " (post.read_time_minutes()) " "
                            (language.strings().blog_showcase.min_read)
                        }
                    }
                    @for paragraph in post.paragraphs() {
                        p { (paragraph) }
                    }
                    footer.author { (post.author) }
                }
            }
            @if count > 0 {
                p.article-count {
                    (count) " "
                    @if count == 1 { (strings.article_singular) } @else { (strings.article_plural) }
                }
            }
        }
    }
}
