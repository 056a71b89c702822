use crate::contact::{
    ContactPayload,
    validation::{ContactField, FieldError},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Name,
    Email,
    Message,
    Review,
}

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// At most one inline error per field.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct FieldErrors {
    name: Option<FieldError>,
    email: Option<FieldError>,
    message: Option<FieldError>,
}

/// One reviewed message on its way out.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Submission {
    /// The same for every attempt at sending the same reviewed message.
    pub key: u64,
    pub payload: ContactPayload,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum SubmitRefused {
    #[error("Messages can only be sent from the review step")]
    NotReviewing,
    #[error("A message is already being sent")]
    InFlight,
    #[error("Some fields are invalid")]
    Invalid(FieldErrors),
}

/// The four-step contact flow: name, email, message, review.
///
/// Moving forward validates the field the current step owns; moving back
/// never does. Sending happens in two halves around the relay call:
/// [`ContactWizard::begin_submit`] hands out the payload and marks the wizard
/// as submitting, [`ContactWizard::succeed`] or [`ContactWizard::fail`]
/// record the outcome.
///
/// Reaching review hands out a fresh submission key. Copies of the wizard
/// carrying the same key describe the same message.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct ContactWizard {
    step: Step,
    status: SubmitStatus,
    fields: ContactFields,
    errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    submission_key: Option<u64>,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Name, Step::Email, Step::Message, Step::Review];

    /// 1-based position shown in the progress indicator.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Step::Name => 1,
            Step::Email => 2,
            Step::Message => 3,
            Step::Review => 4,
        }
    }

    #[must_use]
    pub fn field(self) -> Option<ContactField> {
        match self {
            Step::Name => Some(ContactField::Name),
            Step::Email => Some(ContactField::Email),
            Step::Message => Some(ContactField::Message),
            Step::Review => None,
        }
    }

    #[must_use]
    pub fn following(self) -> Self {
        match self {
            Step::Name => Step::Email,
            Step::Email => Step::Message,
            Step::Message | Step::Review => Step::Review,
        }
    }

    #[must_use]
    pub fn preceding(self) -> Self {
        match self {
            Step::Name | Step::Email => Step::Name,
            Step::Message => Step::Email,
            Step::Review => Step::Message,
        }
    }
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }

    fn set(&mut self, field: ContactField, error: Option<FieldError>) {
        match field {
            ContactField::Name => self.name = error,
            ContactField::Email => self.email = error,
            ContactField::Message => self.message = error,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        ContactField::ALL
            .into_iter()
            .filter_map(|field| Some((field, self.get(field)?)))
    }
}

impl ContactWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A wizard already on the review step with every field filled in.
    #[must_use]
    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            step: Step::Review,
            fields,
            submission_key: Some(rand::random()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    #[must_use]
    pub fn submission_key(&self) -> Option<u64> {
        self.submission_key
    }

    /// Forgets a send this copy never heard back from.
    ///
    /// Whoever started it holds its own copy and records the outcome there.
    pub fn settle(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Replaces a field's value and drops its error without re-validating.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.set(field, None);
    }

    /// Validates a field the visitor just left.
    pub fn blur(&mut self, field: ContactField) -> Option<FieldError> {
        let error = field.validate(self.fields.get(field)).err();
        self.errors.set(field, error);
        error
    }

    /// Advances one step if the current step's field is valid.
    pub fn next(&mut self) -> Result<Step, FieldError> {
        if let Some(field) = self.step.field() {
            if let Err(error) = field.validate(self.fields.get(field)) {
                self.errors.set(field, Some(error));
                return Err(error);
            }
            self.errors.set(field, None);
        }

        let previous = self.step;
        self.step = self.step.following();
        if previous != Step::Review && self.step == Step::Review {
            self.submission_key = Some(rand::random());
        }
        Ok(self.step)
    }

    /// Goes back one step. Errors stay as they are.
    pub fn back(&mut self) -> Step {
        self.step = self.step.preceding();
        self.step
    }

    /// Re-validates everything and, if the message can go out, returns what
    /// to send under which key and marks the wizard as submitting.
    ///
    /// A refusal for invalid fields attaches the errors and resets the status
    /// so no outcome banner from an earlier attempt lingers.
    pub fn begin_submit(
        &mut self,
        date: String,
        to_name: &str,
    ) -> Result<Submission, SubmitRefused> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitRefused::InFlight);
        }
        if self.step != Step::Review {
            return Err(SubmitRefused::NotReviewing);
        }

        for field in ContactField::ALL {
            self.errors
                .set(field, field.validate(self.fields.get(field)).err());
        }
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Idle;
            return Err(SubmitRefused::Invalid(self.errors));
        }

        self.status = SubmitStatus::Submitting;
        Ok(Submission {
            key: *self.submission_key.get_or_insert_with(rand::random),
            payload: ContactPayload {
                name: self.fields.name.clone(),
                email: self.fields.email.clone(),
                message: self.fields.message.clone(),
                date,
                to_name: to_name.to_owned(),
            },
        })
    }

    /// The relay accepted the message: start over with empty fields.
    pub fn succeed(&mut self) {
        if self.status == SubmitStatus::Submitting {
            *self = Self {
                status: SubmitStatus::Succeeded,
                ..Self::default()
            };
        }
    }

    /// The relay rejected the message: keep everything for another try.
    pub fn fail(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::contact::{
        validation::{ContactField, FieldError},
        wizard::{ContactFields, ContactWizard, Step, Submission, SubmitRefused, SubmitStatus},
    };

    fn walk_to_review(name: &str, email: &str, message: &str) -> ContactWizard {
        let mut wizard = ContactWizard::new();
        wizard.edit(ContactField::Name, name);
        assert_eq!(wizard.next(), Ok(Step::Email));
        wizard.edit(ContactField::Email, email);
        assert_eq!(wizard.next(), Ok(Step::Message));
        wizard.edit(ContactField::Message, message);
        assert_eq!(wizard.next(), Ok(Step::Review));
        wizard
    }

    #[test]
    fn starts_on_name_idle() {
        let wizard = ContactWizard::new();
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.status(), SubmitStatus::Idle);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn valid_walk_submits_exact_values_once() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");

        let Submission { key, payload } = wizard
            .begin_submit("October 19, 2026 at 03:45 PM (UTC)".to_owned(), "Lorena")
            .unwrap();
        assert_eq!(wizard.submission_key(), Some(key));
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "ana@mail.es");
        assert_eq!(payload.message, "Necesito una cita");
        assert_eq!(payload.to_name, "Lorena");
        assert!(!payload.date.is_empty());
        assert!(wizard.is_submitting());

        assert_eq!(
            wizard.begin_submit("again".to_owned(), "Lorena"),
            Err(SubmitRefused::InFlight)
        );
    }

    #[test]
    fn invalid_field_blocks_its_step() {
        let mut wizard = ContactWizard::new();
        wizard.edit(ContactField::Name, "A");

        assert_eq!(wizard.next(), Err(FieldError::NameTooShort));
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.error(ContactField::Name), Some(FieldError::NameTooShort));

        wizard.edit(ContactField::Name, "Ana");
        wizard.next().unwrap();
        wizard.edit(ContactField::Email, "ana@mail");
        assert_eq!(wizard.next(), Err(FieldError::EmailInvalid));
        assert_eq!(wizard.step(), Step::Email);
    }

    #[test]
    fn editing_clears_the_error() {
        let mut wizard = ContactWizard::new();
        wizard.next().unwrap_err();
        assert_eq!(wizard.error(ContactField::Name), Some(FieldError::NameRequired));

        wizard.edit(ContactField::Name, "A");
        assert_eq!(wizard.error(ContactField::Name), None);
    }

    #[test]
    fn blur_validates() {
        let mut wizard = ContactWizard::new();
        wizard.edit(ContactField::Email, "nope");
        assert_eq!(wizard.blur(ContactField::Email), Some(FieldError::EmailInvalid));
        assert_eq!(wizard.error(ContactField::Email), Some(FieldError::EmailInvalid));

        wizard.edit(ContactField::Email, "a@b.es");
        assert_eq!(wizard.blur(ContactField::Email), None);
    }

    #[test]
    fn back_is_unconditional_and_keeps_errors() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");
        assert_eq!(wizard.back(), Step::Message);
        wizard.edit(ContactField::Message, "corto");
        wizard.next().unwrap_err();

        assert_eq!(wizard.back(), Step::Email);
        assert_eq!(
            wizard.error(ContactField::Message),
            Some(FieldError::MessageTooShort)
        );
        assert_eq!(wizard.back(), Step::Name);
        assert_eq!(wizard.back(), Step::Name);
    }

    #[test]
    fn submit_revalidates_every_field() {
        let mut wizard = ContactWizard::with_fields(ContactFields {
            name: "A".to_owned(),
            email: "ana@mail.es".to_owned(),
            message: "short".to_owned(),
        });

        let Err(SubmitRefused::Invalid(errors)) = wizard.begin_submit("now".to_owned(), "Lorena")
        else {
            panic!("stale fields must be refused");
        };
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                (ContactField::Name, FieldError::NameTooShort),
                (ContactField::Message, FieldError::MessageTooShort),
            ]
        );
        assert_eq!(wizard.status(), SubmitStatus::Idle);
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn submit_only_from_review() {
        let mut wizard = ContactWizard::new();
        assert_eq!(
            wizard.begin_submit("now".to_owned(), "Lorena"),
            Err(SubmitRefused::NotReviewing)
        );
    }

    #[test]
    fn success_resets_to_empty_first_step() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");
        wizard.begin_submit("now".to_owned(), "Lorena").unwrap();
        wizard.succeed();

        assert_eq!(wizard.status(), SubmitStatus::Succeeded);
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.fields(), &ContactFields::default());
    }

    #[test]
    fn failure_keeps_values_on_review() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");
        wizard.begin_submit("now".to_owned(), "Lorena").unwrap();
        wizard.fail();

        assert_eq!(wizard.status(), SubmitStatus::Failed);
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.value(ContactField::Name), "Ana");

        // A failed attempt can be retried by hand, as the same message.
        let key = wizard.submission_key();
        assert!(wizard.begin_submit("later".to_owned(), "Lorena").is_ok());
        assert_eq!(wizard.submission_key(), key);
    }

    #[test]
    fn reaching_review_again_is_a_new_message() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");
        let first = wizard.submission_key();
        assert!(first.is_some());

        wizard.back();
        wizard.edit(ContactField::Message, "Necesito una cita el lunes");
        wizard.next().unwrap();
        assert_ne!(wizard.submission_key(), first);

        wizard.begin_submit("now".to_owned(), "Lorena").unwrap();
        wizard.succeed();
        assert_eq!(wizard.submission_key(), None);
    }

    #[test]
    fn settling_drops_only_an_unfinished_send() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");
        let key = wizard.submission_key();
        wizard.begin_submit("now".to_owned(), "Lorena").unwrap();

        let mut copy = wizard.clone();
        copy.settle();
        assert_eq!(copy.status(), SubmitStatus::Idle);
        assert_eq!(copy.submission_key(), key);

        wizard.fail();
        wizard.settle();
        assert_eq!(wizard.status(), SubmitStatus::Failed);
    }

    #[test]
    fn outcomes_need_a_submission_in_flight() {
        let mut wizard = walk_to_review("Ana", "ana@mail.es", "Necesito una cita");
        wizard.succeed();
        wizard.fail();
        assert_eq!(wizard.status(), SubmitStatus::Idle);
        assert_eq!(wizard.value(ContactField::Name), "Ana");
    }
}
