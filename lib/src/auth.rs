//! Contracts with the authentication backend.
//!
//! The signup flow only needs something that implements [`SignUp`]. The app wires in a
//! [`Session`], which wraps the HTTP [`AuthClient`] and also publishes the `{ user, loading }`
//! [`AuthStatus`] that pages use to gate rendering.

use serde::{Deserialize, Serialize};
use snafu::Snafu;

use crate::signup::SignupPayload;

mod client;
mod session;

pub use self::{client::AuthClient, session::Session};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// What pages observe about the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStatus {
    pub user: Option<User>,
    /// True until the backend has answered whether a session exists.
    pub loading: bool,
}

impl AuthStatus {
    pub fn pending() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, derive_more::Debug)]
pub struct Credentials {
    pub email: String,
    #[debug(skip)]
    pub password: String,
}

/// Failure reported by the auth backend or the transport in front of it.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AuthError {
    /// The backend refused the request and said why.
    #[snafu(display("{message}"))]
    Rejected { message: String },
    #[snafu(display("request to {url} failed"))]
    Request { url: String, source: reqwest::Error },
    #[snafu(display("{url} responded with {status}"))]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[snafu(display("could not decode response from {url}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthError::Rejected {
            message: message.into(),
        }
    }

    /// Human-readable message that is safe to show the user, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { message } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// The sign-up collaborator.
#[allow(async_fn_in_trait)]
pub trait SignUp {
    /// Registers a new account. Resolves with the created user when the backend returns one.
    async fn sign_up(&self, payload: &SignupPayload) -> Result<Option<User>, AuthError>;
}

impl<T: SignUp + ?Sized> SignUp for &T {
    async fn sign_up(&self, payload: &SignupPayload) -> Result<Option<User>, AuthError> {
        (**self).sign_up(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejections_expose_a_message() {
        assert_eq!(
            AuthError::rejected("email taken").message(),
            Some("email taken")
        );
        assert_eq!(AuthError::rejected("   ").message(), None);
        let status = AuthError::Status {
            url: "http://localhost/auth/signup".into(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(status.message(), None);
        assert!(status.to_string().contains("500"));
    }

    #[test]
    fn user_deserializes_without_phone() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","username":"dana","email":"dana@example.com"}"#)
                .unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.username, "dana");
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            email: "dana@example.com".into(),
            password: "hunter22".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter22"));
    }
}
