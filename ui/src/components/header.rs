use dioxus::prelude::*;
use moneytime::AuthStatus;

use crate::{
    components::{Button, ButtonKind},
    state::{use_watch, AppState},
    Route,
};

/// Top bar with the brand and either a greeting or the sign-in links.
#[component]
pub fn Header() -> Element {
    let state = consume_context::<AppState>();
    let status = use_watch(|| state.session().subscribe());
    let AuthStatus { user, loading } = status();

    rsx! {
        header { class: "header", dir: "rtl",
            Link { to: Route::Home {}, class: "brand", "{moneytime::BRAND_NAME}" }
            div { class: "header-actions",
                if let Some(user) = user {
                    span { class: "greeting", "שלום, {user.username}" }
                } else if !loading {
                    Button {
                        to: Some(Route::Login {}),
                        kind: ButtonKind::Ghost,
                        text: "התחברות",
                    }
                    Button {
                        to: Some(Route::Signup {}),
                        kind: ButtonKind::Primary,
                        text: "הרשמה",
                    }
                }
            }
        }
    }
}
