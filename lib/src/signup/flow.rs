//! Submission state machine for the signup form.
//!
//! ```text
//! Idle --submit--> Validating --invalid--> ValidationFailed
//!                      |
//!                      +--valid--> Submitting --ok--> Success (navigate to /services)
//!                                      |
//!                                      +--err--> SubmitFailed
//! ```
//!
//! `ValidationFailed` and `SubmitFailed` accept the next submit like `Idle` does. A submit
//! that arrives while a sign-up call is outstanding is dropped. State changes are published
//! on a watch channel so the view can re-render.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{FieldErrors, SIGNUP_FAILED, SignupInput, validate};
use crate::{
    auth::{SignUp, User},
    navigation::{Destination, Navigator},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    ValidationFailed,
    Submitting,
    SubmitFailed,
    Success,
}

/// Everything the signup page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub phase: Phase,
    /// A sign-up call is in flight. The submit control is disabled while this is set.
    pub loading: bool,
    /// Banner text for the last failed sign-up call.
    pub error: Option<String>,
    /// Inline messages from the last validation run.
    pub field_errors: FieldErrors,
    attempted: bool,
}

impl SignupState {
    /// Whether the user has pressed submit at least once.
    pub fn attempted(&self) -> bool {
        self.attempted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight.
    Ignored,
    Invalid(FieldErrors),
    SignedUp(Option<User>),
    /// The sign-up call failed; carries the banner text that was shown.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SignupFlow {
    state: Arc<watch::Sender<SignupState>>,
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFlow {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SignupState::default());
        Self {
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> SignupState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SignupState> {
        self.state.subscribe()
    }

    /// Re-runs validation after a field edit, once the form has been submitted at least once.
    /// Only the inline field errors change.
    pub fn edit(&self, input: &SignupInput) {
        self.state.send_if_modified(|state| {
            if !state.attempted {
                return false;
            }
            let field_errors = validate(input).err().unwrap_or_default();
            if field_errors == state.field_errors {
                return false;
            }
            state.field_errors = field_errors;
            true
        });
    }

    /// Handles one press of the submit control.
    pub async fn submit<A, N>(&self, input: &SignupInput, auth: A, nav: N) -> SubmitOutcome
    where
        A: SignUp,
        N: Navigator,
    {
        let accepted = self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.phase = Phase::Validating;
            state.error = None;
            state.attempted = true;
            true
        });
        if !accepted {
            debug!("submit ignored, sign-up already in flight");
            return SubmitOutcome::Ignored;
        }

        let payload = match validate(input) {
            Ok(payload) => payload,
            Err(field_errors) => {
                debug!(%field_errors, "signup form invalid");
                self.state.send_modify(|state| {
                    state.phase = Phase::ValidationFailed;
                    state.field_errors = field_errors.clone();
                });
                return SubmitOutcome::Invalid(field_errors);
            }
        };

        self.state.send_modify(|state| {
            state.phase = Phase::Submitting;
            state.loading = true;
            state.field_errors = FieldErrors::default();
        });
        debug!(username = %payload.username, "submitting sign-up");

        match auth.sign_up(&payload).await {
            Ok(user) => {
                info!(username = %payload.username, "sign-up succeeded");
                self.state.send_modify(|state| {
                    state.phase = Phase::Success;
                    state.loading = false;
                });
                nav.navigate(Destination::Services);
                SubmitOutcome::SignedUp(user)
            }
            Err(err) => {
                warn!("sign-up failed: {err:#}");
                let message = err.message().unwrap_or(SIGNUP_FAILED).to_string();
                self.state.send_modify(|state| {
                    state.phase = Phase::SubmitFailed;
                    state.loading = false;
                    state.error = Some(message.clone());
                });
                SubmitOutcome::Failed(message)
            }
        }
    }
}
