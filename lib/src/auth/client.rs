use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tracing::{debug, info, warn};

use super::{AuthError, Credentials, DecodeSnafu, RequestSnafu, SignUp, StatusSnafu, User};
use crate::{config::Config, signup::SignupPayload};

/// HTTP client for the MoneyTime auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: Config,
}

impl AuthClient {
    const SIGNUP_PATH: &'static str = "auth/signup";
    const LOGIN_PATH: &'static str = "auth/login";
    const ME_PATH: &'static str = "auth/me";

    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// `POST auth/signup`. A success body that is empty or not a user resolves to `None`.
    pub async fn sign_up(&self, payload: &SignupPayload) -> Result<Option<User>, AuthError> {
        let url = self.config.endpoint(Self::SIGNUP_PATH);
        debug!(%url, username = %payload.username, "signing up");
        let res = self.send(self.http.post(&url).json(payload), &url).await?;
        let body = res.text().await.context(RequestSnafu { url: url.clone() })?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<User>(&body) {
            Ok(user) => {
                info!(user_id = %user.id, "signed up");
                Ok(Some(user))
            }
            Err(err) => {
                debug!(%url, "sign-up response carried no user: {err}");
                Ok(None)
            }
        }
    }

    /// `POST auth/login`.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let url = self.config.endpoint(Self::LOGIN_PATH);
        debug!(%url, email = %credentials.email, "signing in");
        let res = self.send(self.http.post(&url).json(credentials), &url).await?;
        let user: User = decode(res, &url).await?;
        info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// `GET auth/me`. `401 Unauthorized` means there is no session.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let url = self.config.endpoint(Self::ME_PATH);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .context(RequestSnafu { url: url.clone() })?;
        if res.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let res = check_status(res, &url).await?;
        decode(res, &url).await.map(Some)
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<Response, AuthError> {
        let res = req
            .send()
            .await
            .inspect_err(|e| warn!(%url, "auth request failed: {e:#}"))
            .context(RequestSnafu { url })?;
        check_status(res, url).await
    }
}

impl SignUp for AuthClient {
    async fn sign_up(&self, payload: &SignupPayload) -> Result<Option<User>, AuthError> {
        AuthClient::sign_up(self, payload).await
    }
}

async fn check_status(res: Response, url: &str) -> Result<Response, AuthError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let text = match res.text().await {
        Ok(text) => text,
        Err(err) => err.to_string(),
    };
    warn!(%url, "request failed: {status} {text}");
    match rejection_message(&text) {
        Some(message) => Err(AuthError::rejected(message)),
        None => StatusSnafu { url, status }.fail(),
    }
}

async fn decode<T: DeserializeOwned>(res: Response, url: &str) -> Result<T, AuthError> {
    let body = res.text().await.context(RequestSnafu { url })?;
    serde_json::from_str(&body).context(DecodeSnafu { url })
}

/// Pulls a user-facing message out of an error body shaped like `{"message": "..."}`.
fn rejection_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| json.get(*key)?.as_str())
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::rejection_message;

    #[test]
    fn rejection_message_shapes() {
        assert_eq!(
            rejection_message(r#"{"message":"email taken"}"#).as_deref(),
            Some("email taken")
        );
        assert_eq!(
            rejection_message(r#"{"error":"username taken"}"#).as_deref(),
            Some("username taken")
        );
        assert_eq!(rejection_message(r#"{"message":"  "}"#), None);
        assert_eq!(rejection_message(r#"{"message":42}"#), None);
        assert_eq!(rejection_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(rejection_message(""), None);
    }
}
