use crate::server::{
    Result, ServerError, ServerRouter,
    locale::Locale,
    pages::{Page, contact::contact_section, layout, render},
};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use axum_extra::routing::{RouterExt, TypedPath};
use maud::{Markup, html};
use serde::Deserialize;
use sosiego_common::{
    contact::{ContactWizard, SubmitStatus},
    i18n::{Language, split_highlight},
    model::post::Post,
};
use sosiego_db::Collection;
use tracing::warn;

/// How many posts the home page teases.
const SHOWCASE_POSTS: usize = 2;
const SHOWCASE_EXCERPT_CHARS: usize = 120;

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(home)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct HomePath();

#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
struct HomeQuery {
    section: Option<String>,
}

/// Sections the navigation can scroll to.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub(super) enum Section {
    About,
    Qualifications,
    Benefits,
    Services,
    Blog,
    Contact,
}

impl Section {
    const ALL: [Section; 6] = [
        Section::About,
        Section::Qualifications,
        Section::Benefits,
        Section::Services,
        Section::Blog,
        Section::Contact,
    ];

    pub(super) fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Qualifications => "qualifications",
            Section::Benefits => "benefits",
            Section::Services => "services",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

async fn home(
    HomePath(): HomePath,
    query: Result<Query<HomeQuery>, QueryRejection>,
    State(posts): State<Collection<Post>>,
    Locale(language): Locale,
) -> Result<Html<String>> {
    let Query(query) = query?;
    let scroll_to = query.section.as_deref().and_then(Section::from_id);

    render_home(&posts, language, &ContactWizard::new(), None, scroll_to).await
}

/// The whole home page, with the contact wizard in the given state.
pub(super) async fn render_home(
    posts: &Collection<Post>,
    language: Language,
    wizard: &ContactWizard,
    outcome: Option<SubmitStatus>,
    scroll_to: Option<Section>,
) -> Result<Html<String>> {
    let showcase = match posts.list().await {
        Ok(mut posts) => {
            posts.truncate(SHOWCASE_POSTS);
            posts
        }
        Err(err) => {
            warn!(error = %err, "Showing the blog showcase without posts");
            Vec::new()
        }
    };

    let contact = contact_section(language, wizard, outcome)?;
    let content = html! {
        (about(language))
        (qualifications(language))
        (benefits(language))
        (help_cards(language))
        (services(language))
        (blog_showcase(language, &showcase))
        (contact)
    };

    Ok(render(layout(
        Page::Home,
        language,
        scroll_to.map(Section::id),
        content,
    )))
}

fn about(language: Language) -> Markup {
    let about = &language.strings().about;
    let description = split_highlight(about.description, about.cbt_highlight);

    html! {
        section.about id=(Section::About.id()) {
            div.badges {
                span.badge { (about.licensed) }
                span.badge { (about.experience) }
            }
            h1 { (about.name) }
            p.title { (about.title) }
            p.description {
                (description.before)
                @if let Some(highlight) = description.highlight {
                    strong.highlight { (highlight) }
                }
                (description.after)
            }
            ul.approaches {
                @for approach in about.approaches {
                    li {
                        h3 { (approach.title) }
                        p { (approach.desc) }
                    }
                }
            }
            h2 { (about.areas_title) }
            ul.specialties {
                @for specialty in about.specialties {
                    li { (specialty) }
                }
            }
            a.cta href={ "/?section=" (Section::Contact.id()) } { (about.cta) }
            p.cta-subtext { (about.cta_subtext) }
        }
    }
}

fn qualifications(language: Language) -> Markup {
    let qualifications = &language.strings().qualifications;

    html! {
        section.qualifications id=(Section::Qualifications.id()) {
            h2 { (qualifications.title) }
            p.subtitle { (qualifications.subtitle) }
            div.cards {
                @for card in qualifications.cards {
                    article.card {
                        span.year { (card.year) }
                        h3 { (card.title) }
                        p.card-subtitle { (card.subtitle) }
                        p { (card.description) }
                    }
                }
            }
            p.badge { (qualifications.badge) }
        }
    }
}

fn benefits(language: Language) -> Markup {
    let benefits = &language.strings().benefits;

    html! {
        section.benefits id=(Section::Benefits.id()) {
            span.badge { (benefits.badge) }
            h2 { (benefits.title) }
            p.subtitle { (benefits.subtitle) }
            div.cards {
                @for card in benefits.cards {
                    article.card {
                        h3 { (card.title) }
                        p { (card.description) }
                        ul {
                            @for feature in card.features {
                                li { (feature) }
                            }
                        }
                    }
                }
            }
            a.cta href={ "/?section=" (Section::Contact.id()) } { (benefits.cta) }
            p.cta-subtext { (benefits.cta_subtext) }
        }
    }
}

fn help_cards(language: Language) -> Markup {
    let help = &language.strings().help_cards;

    html! {
        section.help {
            span.badge { (help.badge) }
            h2 { (help.title) }
            p.subtitle { (help.subtitle) }
            div.cards {
                @for card in help.cards {
                    article.card {
                        h3 { (card.title) }
                        p { (card.description) }
                        ul {
                            @for feature in card.features {
                                li { (feature) }
                            }
                        }
                    }
                }
            }
            blockquote { (help.quote) }
        }
    }
}

fn services(language: Language) -> Markup {
    let services = &language.strings().services;

    html! {
        section.services id=(Section::Services.id()) {
            span.badge { (services.badge) }
            h2 { (services.title) }
            p.subtitle { (services.subtitle) }
            div.cards {
                @for (index, card) in services.cards.iter().enumerate() {
                    article.card.popular[index == 0] {
                        @if index == 0 {
                            span.ribbon { (services.most_popular) }
                        }
                        h3 { (card.title) }
                        @if let Some(subtitle) = card.subtitle {
                            p.card-subtitle { (subtitle) }
                        }
                        p { (card.description) }
                        @if let Some(price) = card.price {
                            p.price { (price) " " small { (services.per_session) } }
                        }
                        @if let Some(duration) = card.duration {
                            p.duration { (duration) }
                        }
                        ul {
                            @for feature in card.features {
                                li { (feature) }
                            }
                        }
                        a.cta href={ "/?section=" (Section::Contact.id()) } {
                            @if card.price.is_some() {
                                (services.book_now)
                            } @else {
                                (services.visit_referral)
                            }
                        }
                    }
                }
            }
            p.insurance {
                strong { (services.insurance_note) } " " (services.insurance_text)
            }
        }
    }
}

fn blog_showcase(language: Language, posts: &[Post]) -> Markup {
    let showcase = &language.strings().blog_showcase;

    html! {
        section.blog-showcase id=(Section::Blog.id()) {
            h2 { (showcase.title) }
            p.subtitle { (showcase.subtitle) }
            @if posts.is_empty() {
                div.empty-state {
                    h3 { (showcase.coming_soon) }
                    p { (showcase.coming_soon_desc) }
                }
            } @else {
                div.cards {
                    @for post in posts {
                        article.card {
                            h3 { (post.title) }
                            p.excerpt { (post.excerpt(SHOWCASE_EXCERPT_CHARS)) }
                            p.meta { (post.read_time_minutes()) " " (showcase.min_read) }
                            a href={ "/blog#post-" (post.id) } { (showcase.read_more) }
                        }
                    }
                }
                a.cta href="/blog" { (showcase.view_all) }
            }
        }
    }
}
