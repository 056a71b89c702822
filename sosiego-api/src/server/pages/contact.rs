use crate::server::{
    Result, ServerError, ServerRouter, Settings,
    contact::{self, ContactError, SubmissionLedger, decode_state, encode_state},
    json::Form,
    locale::Locale,
    mail::MailRelay,
    pages::{
        banner,
        home::{Section, render_home},
    },
};
use axum::{extract::State, response::Html};
use axum_extra::routing::{RouterExt, TypedPath};
use maud::{Markup, html};
use serde::Deserialize;
use sosiego_common::{
    contact::{ContactField, ContactWizard, Step, SubmitStatus},
    i18n::Language,
    model::post::Post,
};
use sosiego_db::Collection;
use std::sync::Arc;
use tracing::{debug, warn};

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_post(drive_wizard)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/contact", rejection(ServerError))]
struct ContactPath();

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
enum WizardAction {
    Next,
    Back,
    Submit,
}

#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
struct WizardForm {
    #[serde(default)]
    state: String,
    /// What the visitor typed into the current step's input.
    value: Option<String>,
    action: WizardAction,
}

async fn drive_wizard(
    ContactPath(): ContactPath,
    State(posts): State<Collection<Post>>,
    State(relay): State<Arc<dyn MailRelay>>,
    State(submissions): State<Arc<SubmissionLedger>>,
    State(settings): State<Arc<Settings>>,
    Locale(language): Locale,
    Form(form): Form<WizardForm>,
) -> Result<Html<String>> {
    let mut wizard = decode_state(&form.state);

    if let (Some(field), Some(value)) = (wizard.step().field(), form.value)
        && wizard.value(field) != value
    {
        wizard.edit(field, value);
    }

    let mut outcome = None;
    match form.action {
        WizardAction::Next => {
            if let Err(error) = wizard.next() {
                debug!(%error, step = ?wizard.step(), "Contact step not complete");
            }
        }
        WizardAction::Back => {
            wizard.back();
        }
        WizardAction::Submit => {
            let sent = contact::submit(
                &mut wizard,
                relay.as_ref(),
                &submissions,
                &settings.contact_recipient,
            )
            .await;
            match sent {
                Ok(()) => outcome = Some(SubmitStatus::Succeeded),
                Err(ContactError::Send(err)) => {
                    warn!(error = %err, "Contact message could not be sent");
                    outcome = Some(SubmitStatus::Failed);
                }
                Err(ContactError::Refused(refused)) => {
                    debug!(%refused, "Contact message not sent");
                }
            }
        }
    }

    render_home(&posts, language, &wizard, outcome, Some(Section::Contact)).await
}

/// The wizard as a form that posts back to itself.
///
/// `outcome` is the result of a send attempted by this very request; older
/// outcomes are not shown again.
pub(super) fn contact_section(
    language: Language,
    wizard: &ContactWizard,
    outcome: Option<SubmitStatus>,
) -> Result<Markup, serde_json::Error> {
    let strings = &language.strings().contact;
    let step = wizard.step();
    let step_strings = &strings.steps[step.number() - 1];
    let state = encode_state(wizard)?;
    let error = step
        .field()
        .and_then(|field| wizard.error(field))
        .map(|error| error.message(&strings.errors));

    Ok(html! {
        section.contact id=(Section::Contact.id()) {
            h2 { (strings.title) }
            p.subtitle { (strings.subtitle) }
            ol.steps {
                @for candidate in Step::ALL {
                    li.active[candidate == step].done[candidate < step] {
                        (candidate.number())
                    }
                }
            }
            @match outcome {
                Some(SubmitStatus::Succeeded) => {
                    (banner(strings.success_message, false))
                }
                Some(SubmitStatus::Failed) => {
                    (banner(strings.error_message, true))
                }
                _ => {}
            }
            form.wizard method="post" action=(ContactPath::PATH) {
                input type="hidden" name="state" value=(state);
                h3 { (step_strings.title) }
                p.step-subtitle { (step_strings.subtitle) }
                @match step {
                    Step::Name => {
                        input type="text" name="value" autocomplete="name"
                            value=(wizard.value(ContactField::Name))
                            placeholder=(strings.name_placeholder)
                            aria-invalid=[error.map(|_| "true")];
                    }
                    Step::Email => {
                        input type="email" name="value" autocomplete="email"
                            value=(wizard.value(ContactField::Email))
                            placeholder=(strings.email_placeholder)
                            aria-invalid=[error.map(|_| "true")];
                    }
                    Step::Message => {
                        textarea name="value" rows="6"
                            placeholder=(strings.message_placeholder)
                            aria-invalid=[error.map(|_| "true")] {
                            (wizard.value(ContactField::Message))
                        }
                    }
                    Step::Review => {
                        dl.review {
                            dt { (strings.review_name) }
                            dd { (wizard.value(ContactField::Name)) }
                            dt { (strings.review_email) }
                            dd { (wizard.value(ContactField::Email)) }
                            dt { (strings.review_message) }
                            dd { (wizard.value(ContactField::Message)) }
                        }
                    }
                }
                @if let Some(error) = error {
                    p.field-error role="alert" { (error) }
                }
                div.actions {
                    @if step != Step::Name {
                        button type="submit" name="action" value="back" formnovalidate {
                            (strings.back)
                        }
                    }
                    @if step == Step::Review {
                        button.send type="submit" name="action" value="submit"
                            data-sending=(strings.sending)
                            disabled[wizard.is_submitting()] {
                            @if wizard.is_submitting() {
                                (strings.sending)
                            } @else {
                                (strings.send_button)
                            }
                        }
                    } @else {
                        button type="submit" name="action" value="next" { (strings.next) }
                    }
                }
            }
            p.response-time { (strings.response_time) }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::server::{
        pages::{contact::contact_section, tests::form_request},
        tests::{RecordingRelay, body_text, test_app},
    };
    use axum::{Router, http::StatusCode};
    use sosiego_common::{
        contact::{ContactFields, ContactWizard, SubmitStatus},
        i18n::Language,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state_of(page: &str) -> String {
        let marker = r#"name="state" value=""#;
        let start = page.find(marker).unwrap() + marker.len();
        let end = start + page[start..].find('"').unwrap();
        page[start..end].to_owned()
    }

    async fn post(app: &Router, state: &str, value: Option<&str>, action: &str) -> String {
        let mut body = format!("state={state}&action={action}");
        if let Some(value) = value {
            body.push_str("&value=");
            body.push_str(value);
        }

        let response = app
            .clone()
            .oneshot(form_request("/contact", &body, Some("language=en")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_text(response).await
    }

    #[tokio::test]
    async fn short_name_blocks_the_first_step() {
        let app = test_app(Arc::default()).await;
        let page = post(&app, "", Some("A"), "next").await;

        assert!(page.contains("Name must be at least 2 characters"));
        assert!(page.contains("Your Name"));
        assert!(page.contains(r#"data-scroll-to="contact""#));
    }

    #[tokio::test]
    async fn walking_all_steps_sends_once() {
        let relay = Arc::new(RecordingRelay::default());
        let app = test_app(relay.clone()).await;

        let page = post(&app, "", Some("Ana"), "next").await;
        assert!(page.contains("Your Email"));
        let page = post(&app, &state_of(&page), Some("ana%40example.com"), "next").await;
        assert!(page.contains("Your Message"));
        let page = post(
            &app,
            &state_of(&page),
            Some("Quisiera+pedir+una+cita"),
            "next",
        )
        .await;
        assert!(page.contains("Review &amp; Send"));
        assert!(page.contains("ana@example.com"));

        let page = post(&app, &state_of(&page), None, "submit").await;
        assert!(page.contains("Message sent successfully!"));
        assert!(page.contains("Your Name"));

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ana");
        assert_eq!(sent[0].email, "ana@example.com");
        assert_eq!(sent[0].message, "Quisiera pedir una cita");
    }

    #[tokio::test]
    async fn going_back_keeps_what_was_typed() {
        let app = test_app(Arc::default()).await;

        let page = post(&app, "", Some("Ana"), "next").await;
        let page = post(&app, &state_of(&page), Some("ana%40"), "back").await;

        assert!(page.contains("Your Name"));
        assert!(page.contains(r#"value="Ana""#));
        assert!(!page.contains("valid email"));
    }

    #[tokio::test]
    async fn failed_send_keeps_the_review() {
        let relay = Arc::new(RecordingRelay {
            reject: true,
            ..RecordingRelay::default()
        });
        let app = test_app(relay).await;
        let wizard = ContactWizard::with_fields(ContactFields {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            message: "Quisiera pedir una cita".to_owned(),
        });
        let state = crate::server::contact::encode_state(&wizard).unwrap();

        let page = post(&app, &state, None, "submit").await;

        assert!(page.contains("Failed to send message. Please try again."));
        assert!(page.contains("Review &amp; Send"));
        assert!(page.contains("Quisiera pedir una cita"));
    }

    #[tokio::test]
    async fn double_submit_sends_once() {
        let relay = Arc::new(RecordingRelay::default());
        let app = test_app(relay.clone()).await;
        let wizard = ContactWizard::with_fields(ContactFields {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            message: "Quisiera pedir una cita".to_owned(),
        });
        let state = crate::server::contact::encode_state(&wizard).unwrap();

        let (first, second) = tokio::join!(
            post(&app, &state, None, "submit"),
            post(&app, &state, None, "submit"),
        );
        let again = post(&app, &state, None, "submit").await;

        assert_eq!(relay.sent.lock().unwrap().len(), 1);
        assert!(
            [&first, &second]
                .iter()
                .any(|page| page.contains("Message sent successfully!"))
        );
        assert!(again.contains("Message sent successfully!"));
        assert!(!again.contains("Failed to send message"));
    }

    #[tokio::test]
    async fn review_page_guards_the_send_button() {
        let app = test_app(Arc::default()).await;
        let wizard = ContactWizard::with_fields(ContactFields {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            message: "Quisiera pedir una cita".to_owned(),
        });
        let state = crate::server::contact::encode_state(&wizard).unwrap();

        let page = post(&app, &state, Some("Ana"), "back").await;
        let page = post(&app, &state_of(&page), None, "next").await;

        assert!(page.contains(r#"data-sending="Sending...""#));
        assert!(page.contains("form.dataset.sent"));
        assert!(!page.contains("disabled>"));
    }

    #[test]
    fn submit_button_is_disabled_while_sending() {
        let mut wizard = ContactWizard::with_fields(ContactFields {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            message: "Quisiera pedir una cita".to_owned(),
        });
        wizard.begin_submit(String::new(), "Lorena").unwrap();

        let markup = contact_section(Language::English, &wizard, None)
            .unwrap()
            .into_string();
        assert!(markup.contains("Sending..."));
        assert!(markup.contains("disabled"));
        assert_eq!(wizard.status(), SubmitStatus::Submitting);
    }
}
