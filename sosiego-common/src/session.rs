//! Who is signed in, as seen by guarded views.

use crate::model::operator::Operator;
use serde::Serialize;

/// Where guarded views send visitors without a session.
pub const SIGN_IN_PATH: &str = "/login";

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum SessionState {
    /// The session check has not answered yet.
    #[default]
    Loading,
    Resolved(Option<Operator>),
}

/// What a guarded view does for the current [`SessionState`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GuardDecision<'a> {
    Wait,
    Redirect(&'static str),
    Render(&'a Operator),
}

/// The state as reported to API clients.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub identity: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Operator> {
        match self {
            SessionState::Resolved(operator) => operator.as_ref(),
            SessionState::Loading => None,
        }
    }

    #[must_use]
    pub fn guard(&self) -> GuardDecision<'_> {
        match self {
            SessionState::Loading => GuardDecision::Wait,
            SessionState::Resolved(None) => GuardDecision::Redirect(SIGN_IN_PATH),
            SessionState::Resolved(Some(operator)) => GuardDecision::Render(operator),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            loading: self.is_loading(),
            identity: self
                .identity()
                .map(|operator| operator.email.get().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::operator::{Operator, OperatorEmail},
        session::{GuardDecision, SIGN_IN_PATH, SessionState},
    };

    fn operator() -> Operator {
        Operator {
            id: 3.into(),
            email: OperatorEmail::new("lorena@example.com").unwrap(),
        }
    }

    #[test]
    fn loading_waits_and_never_redirects() {
        let state = SessionState::default();
        assert!(state.is_loading());
        assert_eq!(state.guard(), GuardDecision::Wait);
        assert_eq!(state.identity(), None);
    }

    #[test]
    fn anonymous_is_redirected_to_sign_in() {
        let state = SessionState::Resolved(None);
        assert_eq!(state.guard(), GuardDecision::Redirect(SIGN_IN_PATH));
        assert_eq!(SIGN_IN_PATH, "/login");
    }

    #[test]
    fn signed_in_renders_with_identity() {
        let operator = operator();
        let state = SessionState::Resolved(Some(operator.clone()));
        assert_eq!(state.guard(), GuardDecision::Render(&operator));

        let snapshot = state.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.identity.as_deref(), Some("lorena@example.com"));
    }
}
