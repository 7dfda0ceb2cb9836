use std::{cell::RefCell, net::SocketAddr};

use n0_error::{Result, StdResultExt};
use n0_tracing_test::traced_test;
use url::Url;

use crate::{
    AuthClient, Config, Credentials, Destination, Navigator, Phase, Session, SignUp, SignupFlow,
    SignupInput, SubmitOutcome, signup::SIGNUP_FAILED,
};

use self::backend::{Backend, Reply};

#[derive(Default)]
struct RecordingNav(RefCell<Vec<Destination>>);

impl Navigator for RecordingNav {
    fn navigate(&self, to: Destination) {
        self.0.borrow_mut().push(to);
    }
}

fn config_for(addr: SocketAddr) -> Result<Config> {
    let api_url = Url::parse(&format!("http://{addr}/api")).anyerr()?;
    Ok(Config { api_url })
}

fn dana() -> SignupInput {
    SignupInput {
        username: "dana".into(),
        email: "dana@example.com".into(),
        phone: "0521234567".into(),
        password: "correct-horse".into(),
        confirm_password: "correct-horse".into(),
    }
}

const DANA_JSON: &str =
    r#"{"id":"u-1","username":"dana","email":"dana@example.com","phone":"0521234567"}"#;

#[tokio::test]
#[traced_test]
async fn signup_through_session_records_user_and_navigates() -> Result<()> {
    let backend = Backend::default().signup(Reply::json(201, DANA_JSON));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    let flow = SignupFlow::new();
    let nav = RecordingNav::default();

    let outcome = flow.submit(&dana(), &session, &nav).await;

    let user = match outcome {
        SubmitOutcome::SignedUp(Some(user)) => user,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(user.id, "u-1");
    assert_eq!(session.status().user, Some(user));
    assert!(!session.status().loading);
    assert_eq!(*nav.0.borrow(), vec![Destination::Services]);
    assert_eq!(flow.state().phase, Phase::Success);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let (path, body) = &requests[0];
    assert_eq!(path, "/api/auth/signup");
    let body = body.as_object().expect("json object");
    let mut keys: Vec<_> = body.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["email", "password", "phone", "username"]);
    assert_eq!(body["phone"], "0521234567");
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn signup_with_empty_success_body() -> Result<()> {
    let backend = Backend::default().signup(Reply::empty(204));
    let addr = backend.spawn().await?;
    let client = AuthClient::new(config_for(addr)?);

    let payload = crate::validate(&dana()).expect("valid");
    let user = client.sign_up(&payload).await.anyerr()?;
    assert_eq!(user, None);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn duplicate_email_is_shown_verbatim() -> Result<()> {
    let backend = Backend::default().signup(Reply::json(409, r#"{"message":"email taken"}"#));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    let flow = SignupFlow::new();
    let nav = RecordingNav::default();

    let outcome = flow.submit(&dana(), &session, &nav).await;

    assert_eq!(outcome, SubmitOutcome::Failed("email taken".into()));
    let state = flow.state();
    assert_eq!(state.phase, Phase::SubmitFailed);
    assert_eq!(state.error.as_deref(), Some("email taken"));
    assert!(!state.loading);
    assert!(nav.0.borrow().is_empty());
    assert_eq!(session.status().user, None);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn server_error_without_message_falls_back() -> Result<()> {
    let backend = Backend::default().signup(Reply::html(502, "<h1>Bad Gateway</h1>"));
    let addr = backend.spawn().await?;
    let client = AuthClient::new(config_for(addr)?);
    let flow = SignupFlow::new();

    let outcome = flow.submit(&dana(), &client, RecordingNav::default()).await;

    assert_eq!(outcome, SubmitOutcome::Failed(SIGNUP_FAILED.into()));
    assert_eq!(flow.state().error.as_deref(), Some(SIGNUP_FAILED));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn unreachable_backend_falls_back() -> Result<()> {
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        listener.local_addr()?
    };
    let client = AuthClient::new(config_for(addr)?);
    let flow = SignupFlow::new();

    let err = client
        .sign_up(&crate::validate(&dana()).expect("valid"))
        .await
        .expect_err("nothing is listening");
    assert_eq!(err.message(), None);

    let outcome = flow.submit(&dana(), &client, RecordingNav::default()).await;
    assert_eq!(outcome, SubmitOutcome::Failed(SIGNUP_FAILED.into()));
    assert!(!flow.state().loading);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn restore_without_session() -> Result<()> {
    let backend = Backend::default().me(Reply::json(401, r#"{"message":"no session"}"#));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    assert!(session.status().loading);

    session.restore().await;

    let status = session.status();
    assert!(!status.loading);
    assert_eq!(status.user, None);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn restore_with_session() -> Result<()> {
    let backend = Backend::default().me(Reply::json(200, DANA_JSON));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    let mut rx = session.subscribe();

    session.restore().await;

    assert!(rx.has_changed().anyerr()?);
    let status = rx.borrow_and_update().clone();
    assert!(!status.loading);
    assert_eq!(status.user.map(|u| u.username).as_deref(), Some("dana"));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn restore_keeps_user_recorded_by_sign_in() -> Result<()> {
    let backend = Backend::default()
        .login(Reply::json(200, DANA_JSON))
        .me(Reply::json(401, r#"{"message":"no session"}"#));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    let creds = Credentials {
        email: "dana@example.com".into(),
        password: "correct-horse".into(),
    };

    let user = session.sign_in(&creds).await.anyerr()?;
    session.restore().await;

    let status = session.status();
    assert!(!status.loading);
    assert_eq!(status.user, Some(user));
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn restore_failure_still_clears_loading() -> Result<()> {
    let backend = Backend::default().me(Reply::html(500, "oops"));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));

    session.restore().await;

    assert!(!session.status().loading);
    assert_eq!(session.status().user, None);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn sign_in_records_user() -> Result<()> {
    let backend = Backend::default().login(Reply::json(200, DANA_JSON));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));

    let creds = Credentials {
        email: "dana@example.com".into(),
        password: "correct-horse".into(),
    };
    let user = session.sign_in(&creds).await.anyerr()?;

    assert_eq!(user.email, "dana@example.com");
    assert_eq!(session.status().user, Some(user));
    let requests = backend.requests();
    assert_eq!(requests[0].0, "/api/auth/login");
    assert_eq!(requests[0].1["email"], "dana@example.com");
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn sign_in_rejection_and_garbage() -> Result<()> {
    let backend =
        Backend::default().login(Reply::json(401, r#"{"error":"wrong email or password"}"#));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    let creds = Credentials {
        email: "dana@example.com".into(),
        password: "nope".into(),
    };
    let err = session.sign_in(&creds).await.expect_err("rejected");
    assert_eq!(err.message(), Some("wrong email or password"));
    assert_eq!(session.status().user, None);

    let backend = Backend::default().login(Reply::json(200, r#"{"ok":true}"#));
    let addr = backend.spawn().await?;
    let client = AuthClient::new(config_for(addr)?);
    let err = client.sign_in(&creds).await.expect_err("not a user");
    assert!(matches!(err, crate::AuthError::Decode { .. }));
    assert_eq!(err.message(), None);
    Ok(())
}

#[tokio::test]
async fn session_is_a_sign_up_collaborator() -> Result<()> {
    async fn call(auth: impl SignUp, input: &SignupInput) -> bool {
        let payload = crate::validate(input).expect("valid");
        auth.sign_up(&payload).await.is_ok()
    }

    let backend = Backend::default().signup(Reply::json(201, DANA_JSON));
    let addr = backend.spawn().await?;
    let session = Session::new(AuthClient::new(config_for(addr)?));
    assert!(call(&session, &dana()).await);
    assert!(call(session.client(), &dana()).await);
    assert_eq!(backend.requests().len(), 2);
    Ok(())
}

/// A scripted stand-in for the MoneyTime auth API.
mod backend {
    use std::{
        net::SocketAddr,
        sync::{Arc, Mutex},
    };

    use axum::{
        Json, Router,
        extract::State,
        http::{StatusCode, Uri, header},
        response::{IntoResponse, Response},
        routing::{get, post},
    };
    use serde_json::Value;
    use tokio::net::TcpListener;
    use tracing::debug;

    #[derive(Debug, Clone)]
    pub struct Reply {
        status: u16,
        content_type: &'static str,
        body: String,
    }

    impl Reply {
        pub fn json(status: u16, body: &str) -> Self {
            Self {
                status,
                content_type: "application/json",
                body: body.to_string(),
            }
        }

        pub fn html(status: u16, body: &str) -> Self {
            Self {
                status,
                content_type: "text/html",
                body: body.to_string(),
            }
        }

        pub fn empty(status: u16) -> Self {
            Self {
                status,
                content_type: "text/plain",
                body: String::new(),
            }
        }
    }

    impl IntoResponse for Reply {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
            (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
        }
    }

    #[derive(Debug, Clone)]
    pub struct Backend {
        signup: Reply,
        login: Reply,
        me: Reply,
        requests: Arc<Mutex<Vec<(String, Value)>>>,
    }

    impl Default for Backend {
        fn default() -> Self {
            Self {
                signup: Reply::empty(404),
                login: Reply::empty(404),
                me: Reply::empty(401),
                requests: Default::default(),
            }
        }
    }

    impl Backend {
        pub fn signup(mut self, reply: Reply) -> Self {
            self.signup = reply;
            self
        }

        pub fn login(mut self, reply: Reply) -> Self {
            self.login = reply;
            self
        }

        pub fn me(mut self, reply: Reply) -> Self {
            self.me = reply;
            self
        }

        pub fn requests(&self) -> Vec<(String, Value)> {
            self.requests.lock().unwrap().clone()
        }

        /// Serves the scripted replies on an ephemeral localhost port.
        pub async fn spawn(&self) -> std::io::Result<SocketAddr> {
            let app = Router::new()
                .route("/api/auth/signup", post(signup))
                .route("/api/auth/login", post(login))
                .route("/api/auth/me", get(me))
                .with_state(self.clone());
            let listener = TcpListener::bind("127.0.0.1:0").await?;
            let addr = listener.local_addr()?;
            debug!(%addr, "spawned auth backend");
            tokio::spawn(async move {
                let _ = axum::serve(listener, app).await;
            });
            Ok(addr)
        }

        fn record(&self, uri: &Uri, body: Value) {
            self.requests
                .lock()
                .unwrap()
                .push((uri.path().to_string(), body));
        }
    }

    async fn signup(State(backend): State<Backend>, uri: Uri, Json(body): Json<Value>) -> Reply {
        backend.record(&uri, body);
        backend.signup.clone()
    }

    async fn login(State(backend): State<Backend>, uri: Uri, Json(body): Json<Value>) -> Reply {
        backend.record(&uri, body);
        backend.login.clone()
    }

    async fn me(State(backend): State<Backend>) -> Reply {
        backend.me.clone()
    }
}
