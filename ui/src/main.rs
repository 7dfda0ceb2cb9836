use dioxus::prelude::*;
use dioxus::router::Navigator;
use moneytime::Destination;
use tracing::{error, warn};

use crate::components::{Head, Splash};
use crate::state::AppState;
use crate::views::{Home, Login, Services, Signup};

mod components;
mod state;
mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
///
/// Each variant represents a different URL pattern that can be matched by the router. If that pattern is matched,
/// the components for that route will be rendered.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Home => Route::Home {},
            Destination::Services => Route::Services {},
            Destination::Signup => Route::Signup {},
            Destination::Login => Route::Login {},
        }
    }
}

/// Hands the core's navigation requests to the router.
#[derive(Clone, Copy)]
struct RouterNavigator(Navigator);

impl moneytime::Navigator for RouterNavigator {
    fn navigate(&self, to: Destination) {
        if self.0.push(Route::from(to)).is_some() {
            warn!(destination = %to, "navigation failed");
        }
    }
}

fn main() {
    #[cfg(feature = "desktop")]
    dotenv::dotenv().ok();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut app_state_ready = use_signal(|| false);
    let mut load_error = use_signal(|| None::<String>);
    use_future(move || async move {
        let state = match AppState::load() {
            Ok(state) => state,
            Err(err) => {
                error!("failed to load app state: {err:#}");
                load_error.set(Some(err.to_string()));
                return;
            }
        };
        let session = state.session().clone();
        provide_context(state);
        app_state_ready.set(true);
        session.restore().await;
    });

    if let Some(err) = load_error() {
        return rsx! {
            Head {  }
            div { class: "banner banner-error", "{err}" }
        };
    }

    if !app_state_ready() {
        return rsx! {
            Head {  }
            Splash {}
        };
    }

    rsx! {
        Head {  }
        Router::<Route> {}
    }
}
