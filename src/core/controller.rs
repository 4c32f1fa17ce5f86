use crate::core::prober::probe_connectivity;
use crate::core::validator::validate_message;
use crate::domain::model::{ConnectionStatus, ContactMessage, Field, SubmitOutcome};
use crate::domain::ports::{ContactEndpoint, Notifier};
use crate::utils::error::{ContactError, Result};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct FormState {
    message: ContactMessage,
    status: ConnectionStatus,
    submitting: bool,
    mounted: bool,
    /// Bumped on every mount; results from an older mount are stale.
    generation: u64,
}

/// Contact form controller: owns the field snapshot, the connection status
/// and the single in-flight gate.
///
/// The lock is never held across an `.await`; results that arrive after
/// [`ContactForm::unmount`] (or after a later remount) are dropped without
/// touching state.
pub struct ContactForm<E: ContactEndpoint, N: Notifier> {
    endpoint: E,
    notifier: N,
    state: Mutex<FormState>,
}

impl<E: ContactEndpoint, N: Notifier> ContactForm<E, N> {
    pub fn new(endpoint: E, notifier: N) -> Self {
        Self {
            endpoint,
            notifier,
            state: Mutex::new(FormState {
                message: ContactMessage::default(),
                status: ConnectionStatus::Checking,
                submitting: false,
                mounted: false,
                generation: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // 狀態只含純資料，poison 後仍可安全使用
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mounts the form and runs the connectivity probe. Calling it again while
    /// mounted returns the current status; mounting after [`ContactForm::unmount`]
    /// is a fresh mount and probes again.
    pub async fn mount(&self) -> ConnectionStatus {
        let generation = {
            let mut state = self.state();
            if state.mounted {
                return state.status;
            }
            state.mounted = true;
            state.generation += 1;
            state.status = ConnectionStatus::Checking;
            state.submitting = false;
            state.generation
        };

        let status = probe_connectivity(&self.endpoint).await;

        let mut state = self.state();
        if !state.mounted || state.generation != generation {
            tracing::debug!("Probe finished for a stale mount, ignoring result ({})", status);
            return state.status;
        }
        state.status = status;
        status
    }

    pub fn unmount(&self) {
        self.state().mounted = false;
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state();
        state.message = state.message.with_field(field, value);
    }

    pub fn message(&self) -> ContactMessage {
        self.state().message.clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state().status
    }

    pub fn is_submitting(&self) -> bool {
        self.state().submitting
    }

    /// Derived on every call from status and the in-flight flag.
    pub fn can_submit(&self) -> bool {
        let state = self.state();
        state.mounted && state.status == ConnectionStatus::Connected && !state.submitting
    }

    /// One submission attempt. Notifies exactly once unless the attempt is disabled
    /// or its result arrives after unmount.
    pub async fn submit(&self) -> SubmitOutcome {
        let (payload, generation) = {
            let mut state = self.state();
            if !state.mounted
                || state.status != ConnectionStatus::Connected
                || state.submitting
            {
                tracing::debug!(
                    "Submit ignored (status: {}, in flight: {})",
                    state.status,
                    state.submitting
                );
                return SubmitOutcome::Disabled;
            }

            let validated = validate_message(&state.message);
            match validated {
                Ok(trimmed) => {
                    state.submitting = true;
                    (trimmed, state.generation)
                }
                Err(failure) => {
                    drop(state);
                    tracing::warn!("Contact form rejected: {}", failure);
                    self.notifier.notify_error(failure.message());
                    return SubmitOutcome::Rejected(failure);
                }
            }
        };

        tracing::debug!("Submitting contact message from {}", payload.email);
        let result = self.endpoint.submit(&payload).await;

        let mut state = self.state();
        if !state.mounted || state.generation != generation {
            tracing::debug!("Submission finished for a stale mount, ignoring result");
            return match result {
                Ok(()) => SubmitOutcome::Sent,
                Err(failure) => SubmitOutcome::Failed(failure),
            };
        }

        state.submitting = false;
        match result {
            Ok(()) => {
                state.message = ContactMessage::default();
                drop(state);
                tracing::info!("✅ Contact message sent");
                self.notifier
                    .notify_success("Message sent successfully! I'll get back to you soon.");
                SubmitOutcome::Sent
            }
            Err(failure) => {
                drop(state);
                tracing::error!("❌ Error sending message: {}", failure);
                self.notifier.notify_error(&failure.user_message());
                SubmitOutcome::Failed(failure)
            }
        }
    }

    /// [`ContactForm::submit`] mapped onto the crate error type.
    pub async fn send(&self) -> Result<()> {
        {
            let state = self.state();
            if state.status != ConnectionStatus::Connected || !state.mounted {
                return Err(ContactError::NotConnected);
            }
        }

        match self.submit().await {
            SubmitOutcome::Sent => Ok(()),
            SubmitOutcome::Rejected(failure) => Err(ContactError::ValidationError(failure)),
            SubmitOutcome::Failed(failure) => Err(ContactError::Submission(failure)),
            SubmitOutcome::Disabled => Err(ContactError::SubmissionInFlight),
        }
    }
}
