use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::{AuthClient, AuthError, AuthStatus, Credentials, SignUp, User};
use crate::signup::SignupPayload;

/// The signed-in user as far as this page knows, plus whether that is still being looked up.
#[derive(Debug, Clone)]
pub struct Session {
    client: AuthClient,
    status: Arc<watch::Sender<AuthStatus>>,
}

impl Session {
    /// A session that has not heard from the backend yet (`loading = true`).
    pub fn new(client: AuthClient) -> Self {
        let (status, _) = watch::channel(AuthStatus::pending());
        Self {
            client,
            status: Arc::new(status),
        }
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub fn status(&self) -> AuthStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status.subscribe()
    }

    /// Asks the backend for the current user. Always leaves `loading` cleared.
    ///
    /// A user recorded by a sign-up or sign-in that finished while the lookup was in flight is
    /// kept when the backend reports no session.
    pub async fn restore(&self) {
        let user = match self.client.current_user().await {
            Ok(user) => user,
            Err(err) => {
                warn!("could not restore session: {err:#}");
                None
            }
        };
        debug!(signed_in = user.is_some(), "session restored");
        self.record(user);
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let user = self.client.sign_in(credentials).await?;
        self.record(Some(user.clone()));
        Ok(user)
    }

    fn record(&self, user: Option<User>) {
        self.status.send_modify(|status| {
            if user.is_some() {
                status.user = user;
            }
            status.loading = false;
        });
    }
}

impl SignUp for Session {
    async fn sign_up(&self, payload: &SignupPayload) -> Result<Option<User>, AuthError> {
        let user = self.client.sign_up(payload).await?;
        self.record(user.clone());
        Ok(user)
    }
}
