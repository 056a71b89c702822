use crate::server::{
    ServerError, ServerRouter,
    auth::CurrentSession,
    json::Form,
    locale::Locale,
    pages::{Page, banner, layout, login::LogoutPath, render},
};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::routing::{RouterExt, TypedPath};
use maud::{Markup, html};
use serde::Deserialize;
use sosiego_common::{
    i18n::{Language, dates::long_date, strings::AdminNotificationStrings},
    model::{
        Document, Id,
        operator::Operator,
        post::{NewPost, Post, PostContent, PostMarker},
        resource::{NewResource, Resource, ResourceMarker},
    },
    session::{GuardDecision, SIGN_IN_PATH},
};
use sosiego_db::{Collection, Confirmation, ListView, WriteError};
use tracing::{error, warn};

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(dashboard)
        .typed_post(create_post)
        .typed_post(create_resource)
        .typed_get(confirm_post_removal)
        .typed_post(remove_post)
        .typed_get(confirm_resource_removal)
        .typed_post(remove_resource)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/admin", rejection(ServerError))]
struct AdminPath();

#[derive(TypedPath, Deserialize)]
#[typed_path("/admin/blogs", rejection(ServerError))]
struct AdminPostsPath();

#[derive(TypedPath, Deserialize)]
#[typed_path("/admin/resources", rejection(ServerError))]
struct AdminResourcesPath();

#[derive(TypedPath, Deserialize)]
#[typed_path("/admin/blogs/{id}/delete", rejection(ServerError))]
struct RemovePostPath {
    id: Id<PostMarker>,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/admin/resources/{id}/delete", rejection(ServerError))]
struct RemoveResourcePath {
    id: Id<ResourceMarker>,
}

/// Outcome of the last action, carried across the redirect after a write.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Notice {
    FillAllFields,
    InvalidUrl,
    BlogPublished,
    BlogPublishFailed,
    ResourceSaved,
    ResourceSaveFailed,
    BlogDeleted,
    BlogDeleteFailed,
    ResourceDeleted,
    ResourceDeleteFailed,
}

impl Notice {
    fn key(self) -> &'static str {
        match self {
            Notice::FillAllFields => "fill_all_fields",
            Notice::InvalidUrl => "invalid_url",
            Notice::BlogPublished => "blog_published",
            Notice::BlogPublishFailed => "blog_publish_failed",
            Notice::ResourceSaved => "resource_saved",
            Notice::ResourceSaveFailed => "resource_save_failed",
            Notice::BlogDeleted => "blog_deleted",
            Notice::BlogDeleteFailed => "blog_delete_failed",
            Notice::ResourceDeleted => "resource_deleted",
            Notice::ResourceDeleteFailed => "resource_delete_failed",
        }
    }

    fn text(self, strings: &'static AdminNotificationStrings) -> &'static str {
        match self {
            Notice::FillAllFields => strings.fill_all_fields,
            Notice::InvalidUrl => strings.invalid_url,
            Notice::BlogPublished => strings.blog_published,
            Notice::BlogPublishFailed => strings.blog_publish_failed,
            Notice::ResourceSaved => strings.resource_saved,
            Notice::ResourceSaveFailed => strings.resource_save_failed,
            Notice::BlogDeleted => strings.blog_deleted,
            Notice::BlogDeleteFailed => strings.blog_delete_failed,
            Notice::ResourceDeleted => strings.resource_deleted,
            Notice::ResourceDeleteFailed => strings.resource_delete_failed,
        }
    }

    fn is_error(self) -> bool {
        matches!(
            self,
            Notice::FillAllFields
                | Notice::InvalidUrl
                | Notice::BlogPublishFailed
                | Notice::ResourceSaveFailed
                | Notice::BlogDeleteFailed
                | Notice::ResourceDeleteFailed
        )
    }

    fn redirect(self) -> Redirect {
        Redirect::to(&format!("{}?notice={}", AdminPath::PATH, self.key()))
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
struct DashboardQuery {
    notice: Option<Notice>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Answer {
    Yes,
    No,
}

impl From<Answer> for Confirmation {
    fn from(value: Answer) -> Self {
        match value {
            Answer::Yes => Confirmation::Accepted,
            Answer::No => Confirmation::Declined,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
struct RemovalForm {
    confirm: Answer,
}

/// What the create forms show besides the lists.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
struct Forms {
    notice: Option<Notice>,
    post: PostContent,
    resource: NewResource,
}

/// The signed-in operator, or where a write from anyone else goes instead.
fn operator_or_redirect(session: &CurrentSession) -> Result<&Operator, Redirect> {
    match session.state.guard() {
        GuardDecision::Render(operator) => Ok(operator),
        GuardDecision::Redirect(path) => Err(Redirect::to(path)),
        GuardDecision::Wait => Err(Redirect::to(SIGN_IN_PATH)),
    }
}

async fn dashboard(
    AdminPath(): AdminPath,
    query: Result<Query<DashboardQuery>, QueryRejection>,
    State(posts): State<Collection<Post>>,
    State(resources): State<Collection<Resource>>,
    session: CurrentSession,
    Locale(language): Locale,
) -> Result<Response, ServerError> {
    let operator = match session.state.guard() {
        GuardDecision::Wait => {
            return Ok(render(layout(Page::Admin, language, None, loading(language)))
                .into_response());
        }
        GuardDecision::Redirect(path) => return Ok(Redirect::to(path).into_response()),
        GuardDecision::Render(operator) => operator,
    };
    let Query(query) = query?;

    let forms = Forms {
        notice: query.notice,
        ..Forms::default()
    };
    Ok(dashboard_page(&posts, &resources, language, operator, &forms)
        .await
        .into_response())
}

async fn create_post(
    AdminPostsPath(): AdminPostsPath,
    State(posts): State<Collection<Post>>,
    State(resources): State<Collection<Resource>>,
    session: CurrentSession,
    Locale(language): Locale,
    Form(content): Form<PostContent>,
) -> Response {
    let operator = match operator_or_redirect(&session) {
        Ok(operator) => operator,
        Err(redirect) => return redirect.into_response(),
    };

    let draft = NewPost {
        content,
        author: operator.email.get().to_owned(),
    };
    let notice = match posts.create(&draft).await {
        Ok(_) => return Notice::BlogPublished.redirect().into_response(),
        Err(WriteError::Incomplete(missing)) => {
            warn!(%missing, "Blog post not published");
            Notice::FillAllFields
        }
        Err(WriteError::Invalid(invalid)) => {
            warn!(%invalid, "Blog post not published");
            Notice::FillAllFields
        }
        Err(err @ WriteError::Store { .. }) => {
            error!(error = %err, "Blog post not published");
            Notice::BlogPublishFailed
        }
    };

    let forms = Forms {
        notice: Some(notice),
        post: draft.content,
        ..Forms::default()
    };
    let page = dashboard_page(&posts, &resources, language, operator, &forms).await;
    (notice_status(notice), page).into_response()
}

async fn create_resource(
    AdminResourcesPath(): AdminResourcesPath,
    State(posts): State<Collection<Post>>,
    State(resources): State<Collection<Resource>>,
    session: CurrentSession,
    Locale(language): Locale,
    Form(draft): Form<NewResource>,
) -> Response {
    let operator = match operator_or_redirect(&session) {
        Ok(operator) => operator,
        Err(redirect) => return redirect.into_response(),
    };

    let notice = match resources.create(&draft).await {
        Ok(_) => return Notice::ResourceSaved.redirect().into_response(),
        Err(WriteError::Incomplete(missing)) => {
            warn!(%missing, "Resource not saved");
            Notice::FillAllFields
        }
        Err(WriteError::Invalid(invalid)) => {
            warn!(%invalid, "Resource not saved");
            Notice::InvalidUrl
        }
        Err(err @ WriteError::Store { .. }) => {
            error!(error = %err, "Resource not saved");
            Notice::ResourceSaveFailed
        }
    };

    let forms = Forms {
        notice: Some(notice),
        resource: draft,
        ..Forms::default()
    };
    let page = dashboard_page(&posts, &resources, language, operator, &forms).await;
    (notice_status(notice), page).into_response()
}

async fn confirm_post_removal(
    path: RemovePostPath,
    State(posts): State<Collection<Post>>,
    session: CurrentSession,
    Locale(language): Locale,
) -> Response {
    if let Err(redirect) = operator_or_redirect(&session) {
        return redirect.into_response();
    }

    let title = match posts.list().await {
        Ok(posts) => posts
            .into_iter()
            .find(|post| post.id == path.id)
            .map(|post| post.title),
        Err(err) => {
            warn!(error = %err, "Confirming removal without the post title");
            None
        }
    };

    let question = language.strings().admin.notifications.confirm_delete_blog;
    render(layout(
        Page::Admin,
        language,
        None,
        confirm_removal(language, question, title.as_deref(), &path.to_string()),
    ))
    .into_response()
}

async fn remove_post(
    RemovePostPath { id }: RemovePostPath,
    State(posts): State<Collection<Post>>,
    State(resources): State<Collection<Resource>>,
    session: CurrentSession,
    Locale(language): Locale,
    Form(form): Form<RemovalForm>,
) -> Response {
    let operator = match operator_or_redirect(&session) {
        Ok(operator) => operator,
        Err(redirect) => return redirect.into_response(),
    };

    let mut post_view = load(&posts).await;
    let notice = match posts.remove(id, form.confirm.into()).await {
        Ok(removal) if removal.took_effect() => {
            post_view.remove(id);
            Notice::BlogDeleted
        }
        Ok(_) => return Redirect::to(AdminPath::PATH).into_response(),
        Err(err) => {
            error!(error = %err, "Blog post not deleted");
            Notice::BlogDeleteFailed
        }
    };

    let resource_view = load(&resources).await;
    let forms = Forms {
        notice: Some(notice),
        ..Forms::default()
    };
    let page = dashboard_view(language, operator, &post_view, &resource_view, &forms);
    (notice_status(notice), page).into_response()
}

async fn confirm_resource_removal(
    path: RemoveResourcePath,
    State(resources): State<Collection<Resource>>,
    session: CurrentSession,
    Locale(language): Locale,
) -> Response {
    if let Err(redirect) = operator_or_redirect(&session) {
        return redirect.into_response();
    }

    let title = match resources.list().await {
        Ok(resources) => resources
            .into_iter()
            .find(|resource| resource.id == path.id)
            .map(|resource| resource.title),
        Err(err) => {
            warn!(error = %err, "Confirming removal without the resource title");
            None
        }
    };

    let question = language.strings().admin.notifications.confirm_delete_resource;
    render(layout(
        Page::Admin,
        language,
        None,
        confirm_removal(language, question, title.as_deref(), &path.to_string()),
    ))
    .into_response()
}

async fn remove_resource(
    RemoveResourcePath { id }: RemoveResourcePath,
    State(posts): State<Collection<Post>>,
    State(resources): State<Collection<Resource>>,
    session: CurrentSession,
    Locale(language): Locale,
    Form(form): Form<RemovalForm>,
) -> Response {
    let operator = match operator_or_redirect(&session) {
        Ok(operator) => operator,
        Err(redirect) => return redirect.into_response(),
    };

    let mut resource_view = load(&resources).await;
    let notice = match resources.remove(id, form.confirm.into()).await {
        Ok(removal) if removal.took_effect() => {
            resource_view.remove(id);
            Notice::ResourceDeleted
        }
        Ok(_) => return Redirect::to(AdminPath::PATH).into_response(),
        Err(err) => {
            error!(error = %err, "Resource not deleted");
            Notice::ResourceDeleteFailed
        }
    };

    let post_view = load(&posts).await;
    let forms = Forms {
        notice: Some(notice),
        ..Forms::default()
    };
    let page = dashboard_view(language, operator, &post_view, &resource_view, &forms);
    (notice_status(notice), page).into_response()
}

fn notice_status(notice: Notice) -> StatusCode {
    match notice {
        Notice::FillAllFields | Notice::InvalidUrl => StatusCode::UNPROCESSABLE_ENTITY,
        notice if notice.is_error() => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    }
}

async fn dashboard_page(
    posts: &Collection<Post>,
    resources: &Collection<Resource>,
    language: Language,
    operator: &Operator,
    forms: &Forms,
) -> Html<String> {
    let post_view = load(posts).await;
    let resource_view = load(resources).await;
    dashboard_view(language, operator, &post_view, &resource_view, forms)
}

async fn load<D: Document>(collection: &Collection<D>) -> ListView<D> {
    let mut view = ListView::new();
    if let Some(err) = view.apply_fetch(collection.list().await) {
        warn!(error = %err, collection = D::COLLECTION, "Dashboard shows list as unavailable");
    }
    view
}

fn dashboard_view(
    language: Language,
    operator: &Operator,
    posts: &ListView<Post>,
    resources: &ListView<Resource>,
    forms: &Forms,
) -> Html<String> {
    render(layout(
        Page::Admin,
        language,
        None,
        dashboard_content(language, operator, posts, resources, forms),
    ))
}

fn loading(language: Language) -> Markup {
    html! {
        section.admin.loading aria-busy="true" {
            p { (language.strings().admin.loading) }
        }
    }
}

fn dashboard_content(
    language: Language,
    operator: &Operator,
    posts: &ListView<Post>,
    resources: &ListView<Resource>,
    forms: &Forms,
) -> Markup {
    let strings = &language.strings().admin;
    let notifications = &strings.notifications;

    html! {
        section.admin {
            header.dashboard-header {
                div {
                    h1 { (strings.dashboard) }
                    p.subtitle { (strings.subtitle) }
                }
                div.operator {
                    span { (strings.logged_in_as) " " strong { (operator.email) } }
                    form method="post" action=(LogoutPath::PATH) {
                        button type="submit" { (strings.logout) }
                    }
                }
            }
            nav.tabs {
                a href="#create" { (strings.create_tab) }
                a href="#manage" { (strings.manage_tab) }
            }
            @if let Some(notice) = forms.notice {
                (banner(notice.text(notifications), notice.is_error()))
            }
            div.create id="create" {
                form.card method="post" action=(AdminPostsPath::PATH) {
                    h2 { (strings.create_blog_title) }
                    input type="text" name="title" value=(forms.post.title)
                        placeholder=(strings.blog_title_placeholder);
                    textarea name="body" rows="10" placeholder=(strings.blog_content_placeholder) {
                        (forms.post.body)
                    }
                    button type="submit" { (strings.publish_button) }
                }
                form.card method="post" action=(AdminResourcesPath::PATH) {
                    h2 { (strings.add_resource_title) }
                    input type="text" name="title" value=(forms.resource.title)
                        placeholder=(strings.resource_title_placeholder);
                    input type="url" name="url" value=(forms.resource.url)
                        placeholder=(strings.resource_url_placeholder);
                    textarea name="description" rows="4"
                        placeholder=(strings.resource_desc_placeholder) {
                        (forms.resource.description)
                    }
                    button type="submit" { (strings.save_button) }
                }
            }
            div.manage id="manage" {
                section.card {
                    h2 { (strings.manage_blogs_title) " (" (posts.items().len()) ")" }
                    @if posts.fetch_failed() {
                        (banner(notifications.failed_load_blogs, true))
                    }
                    @if posts.is_empty() {
                        p.empty { (strings.no_blogs_message) }
                    }
                    ul {
                        @for post in posts.items() {
                            li {
                                div {
                                    h3 { (post.title) }
                                    p.meta {
                                        (strings.by) " " (post.author) " • "
                                        (long_date(post.created_at, language))
                                    }
                                }
                                a.delete href=(RemovePostPath { id: post.id }.to_string()) {
                                    (strings.delete_button)
                                }
                            }
                        }
                    }
                }
                section.card {
                    h2 { (strings.manage_resources_title) " (" (resources.items().len()) ")" }
                    @if resources.fetch_failed() {
                        (banner(notifications.failed_load_resources, true))
                    }
                    @if resources.is_empty() {
                        p.empty { (strings.no_resources_message) }
                    }
                    ul {
                        @for resource in resources.items() {
                            li {
                                div {
                                    h3 { (resource.title) }
                                    p.meta { (resource.url) }
                                }
                                a.delete href=(RemoveResourcePath { id: resource.id }.to_string()) {
                                    (strings.delete_button)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn confirm_removal(language: Language, question: &str, title: Option<&str>, action: &str) -> Markup {
    let strings = &language.strings().admin;

    html! {
        section.admin.confirm {
            p.question { (question) }
            @if let Some(title) = title {
                p.subject { strong { (title) } }
            }
            form method="post" action=(action) {
                button.danger type="submit" name="confirm" value="yes" { (strings.confirm_yes) }
                button type="submit" name="confirm" value="no" { (strings.confirm_no) }
            }
        }
    }
}
