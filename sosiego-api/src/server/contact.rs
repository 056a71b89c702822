use crate::server::mail::{MailRelay, SendError};
use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use indexmap::IndexMap;
use sosiego_common::contact::{ContactWizard, SubmitRefused, format_submission_date};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info};

/// How many recent submission keys are remembered.
pub const LEDGER_CAPACITY: usize = 1024;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Refused(#[from] SubmitRefused),
    #[error(transparent)]
    Send(#[from] SendError),
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Claim {
    /// Nobody has sent this message yet; the claimant sends it.
    Fresh,
    /// Another request is sending it right now.
    Pending,
    /// It already went out.
    Delivered,
}

/// Recent submission keys and whether their message went out.
///
/// Bounded: past capacity the oldest key is forgotten.
#[derive(Debug)]
pub struct SubmissionLedger {
    capacity: usize,
    entries: Mutex<IndexMap<u64, bool>>,
}

impl Default for SubmissionLedger {
    fn default() -> Self {
        Self::with_capacity(LEDGER_CAPACITY)
    }
}

impl SubmissionLedger {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(IndexMap::with_capacity(capacity)),
        }
    }

    fn entries(&self) -> MutexGuard<'_, IndexMap<u64, bool>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks the key as being sent unless someone already is or did.
    pub fn claim(&self, key: u64) -> Claim {
        let mut entries = self.entries();
        match entries.get(&key) {
            Some(true) => Claim::Delivered,
            Some(false) => Claim::Pending,
            None => {
                while entries.len() >= self.capacity {
                    entries.shift_remove_index(0);
                }
                entries.insert(key, false);
                Claim::Fresh
            }
        }
    }

    pub fn delivered(&self, key: u64) {
        if let Some(sent) = self.entries().get_mut(&key) {
            *sent = true;
        }
    }

    /// Gives the key back after a failed send so it can be tried again.
    pub fn release(&self, key: u64) {
        let mut entries = self.entries();
        if entries.get(&key) == Some(&false) {
            entries.shift_remove(&key);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fresh claim that is given back unless its message was delivered, also
/// when the request is dropped mid-send.
struct PendingSend<'a> {
    ledger: &'a SubmissionLedger,
    key: u64,
}

impl Drop for PendingSend<'_> {
    fn drop(&mut self) {
        self.ledger.release(self.key);
    }
}

/// Local wall-clock time, or UTC where the offset cannot be determined.
#[must_use]
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Sends the reviewed message through the relay once and records the outcome
/// on the wizard.
///
/// A repeat of a message that is still on its way is refused as in flight; a
/// repeat of one that already went out succeeds without sending again.
pub async fn submit(
    wizard: &mut ContactWizard,
    relay: &dyn MailRelay,
    ledger: &SubmissionLedger,
    to_name: &str,
) -> Result<(), ContactError> {
    let submission = wizard.begin_submit(format_submission_date(local_now()), to_name)?;
    let key = submission.key;

    let _pending = match ledger.claim(key) {
        Claim::Fresh => PendingSend { ledger, key },
        Claim::Pending => {
            debug!(key, "Contact message already being sent");
            return Err(SubmitRefused::InFlight.into());
        }
        Claim::Delivered => {
            debug!(key, "Contact message already delivered");
            wizard.succeed();
            return Ok(());
        }
    };

    match relay.send(&submission.payload).await {
        Ok(()) => {
            ledger.delivered(key);
            wizard.succeed();
            info!("Contact message delivered");
            Ok(())
        }
        Err(err) => {
            wizard.fail();
            Err(err.into())
        }
    }
}

/// Packs the wizard into the hidden form field that carries it between steps.
pub fn encode_state(wizard: &ContactWizard) -> Result<String, serde_json::Error> {
    Ok(BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(wizard)?))
}

/// Unpacks a posted wizard. Anything unreadable starts over, and a send the
/// page was still waiting on is no longer considered running.
#[must_use]
pub fn decode_state(encoded: &str) -> ContactWizard {
    let decoded = BASE64_URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|err| err.to_string())
        .and_then(|bytes| serde_json::from_slice::<ContactWizard>(&bytes).map_err(|err| err.to_string()));

    match decoded {
        Ok(mut wizard) => {
            wizard.settle();
            wizard
        }
        Err(err) => {
            debug!(error = %err, "Starting over with unreadable contact state");
            ContactWizard::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{
        contact::{Claim, ContactError, SubmissionLedger, decode_state, encode_state, submit},
        tests::RecordingRelay,
    };
    use sosiego_common::contact::{
        ContactField, ContactFields, ContactWizard, Step, SubmitRefused, SubmitStatus,
    };

    fn reviewed() -> ContactWizard {
        ContactWizard::with_fields(ContactFields {
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            message: "Quisiera pedir una cita".to_owned(),
        })
    }

    #[tokio::test]
    async fn success_resets_the_wizard() {
        let relay = RecordingRelay::default();
        let mut wizard = reviewed();

        submit(&mut wizard, &relay, &SubmissionLedger::default(), "Lorena")
            .await
            .unwrap();

        assert_eq!(wizard.status(), SubmitStatus::Succeeded);
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.value(ContactField::Name), "");
        assert_eq!(relay.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failure_keeps_the_values() {
        let relay = RecordingRelay {
            reject: true,
            ..RecordingRelay::default()
        };
        let mut wizard = reviewed();

        let err = submit(&mut wizard, &relay, &SubmissionLedger::default(), "Lorena")
            .await
            .unwrap_err();

        assert!(matches!(err, ContactError::Send(_)));
        assert_eq!(wizard.status(), SubmitStatus::Failed);
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.value(ContactField::Email), "ana@example.com");
    }

    #[tokio::test]
    async fn refuses_before_review() {
        let relay = RecordingRelay::default();
        let mut wizard = ContactWizard::new();

        let err = submit(&mut wizard, &relay, &SubmissionLedger::default(), "Lorena")
            .await
            .unwrap_err();

        assert!(matches!(err, ContactError::Refused(SubmitRefused::NotReviewing)));
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_state_sends_once() {
        let relay = RecordingRelay::default();
        let ledger = SubmissionLedger::default();
        let wizard = reviewed();

        let mut first = wizard.clone();
        submit(&mut first, &relay, &ledger, "Lorena").await.unwrap();
        let mut second = wizard.clone();
        submit(&mut second, &relay, &ledger, "Lorena").await.unwrap();

        assert_eq!(relay.sent.lock().unwrap().len(), 1);
        assert_eq!(second.status(), SubmitStatus::Succeeded);
        assert_eq!(second.step(), Step::Name);
    }

    #[tokio::test]
    async fn send_in_progress_refuses_the_copy() {
        let relay = RecordingRelay::default();
        let ledger = SubmissionLedger::default();
        let mut wizard = reviewed();
        assert_eq!(ledger.claim(wizard.submission_key().unwrap()), Claim::Fresh);

        let err = submit(&mut wizard, &relay, &ledger, "Lorena")
            .await
            .unwrap_err();

        assert!(matches!(err, ContactError::Refused(SubmitRefused::InFlight)));
        assert!(wizard.is_submitting());
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_send_can_be_retried() {
        let ledger = SubmissionLedger::default();
        let wizard = reviewed();

        let rejecting = RecordingRelay {
            reject: true,
            ..RecordingRelay::default()
        };
        let mut first = wizard.clone();
        submit(&mut first, &rejecting, &ledger, "Lorena")
            .await
            .unwrap_err();
        assert!(ledger.is_empty());

        let relay = RecordingRelay::default();
        let mut retry = decode_state(&encode_state(&first).unwrap());
        submit(&mut retry, &relay, &ledger, "Lorena").await.unwrap();
        assert_eq!(relay.sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn ledger_forgets_the_oldest_past_capacity() {
        let ledger = SubmissionLedger::with_capacity(2);
        assert_eq!(ledger.claim(1), Claim::Fresh);
        ledger.delivered(1);
        assert_eq!(ledger.claim(1), Claim::Delivered);
        assert_eq!(ledger.claim(2), Claim::Fresh);
        assert_eq!(ledger.claim(2), Claim::Pending);

        assert_eq!(ledger.claim(3), Claim::Fresh);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.claim(1), Claim::Fresh);

        ledger.delivered(3);
        ledger.release(3);
        assert_eq!(ledger.claim(3), Claim::Delivered);
    }

    #[test]
    fn pending_send_is_not_restored_from_the_form() {
        let mut wizard = reviewed();
        wizard.begin_submit("now".to_owned(), "Lorena").unwrap();

        let restored = decode_state(&encode_state(&wizard).unwrap());
        assert_eq!(restored.status(), SubmitStatus::Idle);
        assert_eq!(restored.submission_key(), wizard.submission_key());
    }

    #[test]
    fn state_survives_the_form() {
        let mut wizard = reviewed();
        wizard.back();

        let encoded = encode_state(&wizard).unwrap();
        assert_eq!(decode_state(&encoded), wizard);
    }

    #[test]
    fn garbage_state_starts_over() {
        assert_eq!(decode_state("not base64!"), ContactWizard::new());
        assert_eq!(decode_state("e30"), ContactWizard::new());
    }
}
