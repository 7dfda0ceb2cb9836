use dioxus::prelude::*;
use moneytime::{AuthClient, Config, Session};
use n0_error::Result;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AppState {
    session: Session,
}

impl AppState {
    pub fn load() -> Result<Self> {
        let config = Config::from_env()?;
        info!(api_url = %config.api_url, "loaded config");
        let session = Session::new(AuthClient::new(config));
        Ok(AppState { session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Mirrors a watch channel into a signal so components re-render on every publish.
pub fn use_watch<T: Clone + 'static>(subscribe: impl FnOnce() -> watch::Receiver<T>) -> Signal<T> {
    let rx = use_hook(subscribe);
    let mut value = use_signal(|| rx.borrow().clone());
    use_hook(move || {
        let mut rx = rx;
        spawn(async move {
            loop {
                value.set(rx.borrow_and_update().clone());
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    });
    value
}
