use dioxus::prelude::*;
use moneytime::{AuthError, Credentials};
use tracing::{info, warn};

use crate::{
    components::{Button, IconKind, Input},
    state::AppState,
    Route,
};

const LOGIN_FAILED: &str = "שגיאה בהתחברות. אנא נסה שוב.";

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let mut login = use_action(move |credentials: Credentials| async move {
        let state = consume_context::<AppState>();
        let user = state
            .session()
            .sign_in(&credentials)
            .await
            .inspect_err(|err| warn!("sign in failed: {err:#}"))?;
        info!(user = %user.id, "signed in");
        nav.push(Route::Services {});
        Ok::<_, AuthError>(())
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        login.call(Credentials {
            email: email(),
            password: password(),
        });
    };

    let failure = match login.value() {
        Some(Err(err)) => Some(
            err.downcast_ref::<AuthError>()
                .and_then(AuthError::message)
                .unwrap_or(LOGIN_FAILED)
                .to_string(),
        ),
        _ => None,
    };

    rsx! {
        div { class: "auth-page", dir: "rtl",
            div { class: "auth-column",
                div { class: "auth-heading",
                    h1 { class: "brand brand-large", "{moneytime::BRAND_NAME}" }
                    p { class: "tagline", "ברוכים השבים! התחברו לחשבון שלכם" }
                }
                div { class: "card",
                    form { class: "form", novalidate: true, onsubmit: onsubmit,
                        Input {
                            leading_icon: Some(IconKind::Mail),
                            name: "email",
                            r#type: "email",
                            placeholder: "אימייל",
                            dir: "rtl",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            leading_icon: Some(IconKind::Lock),
                            name: "password",
                            r#type: "password",
                            placeholder: "סיסמה",
                            dir: "rtl",
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(message) = failure {
                            div { class: "banner banner-error", role: "alert", "{message}" }
                        }
                        Button {
                            submit: true,
                            disabled: login.pending(),
                            class: Some("btn-block".to_string()),
                            leading_icon: if login.pending() { Some(IconKind::LoaderCircle) } else { None },
                            text: if login.pending() { "מתחבר...".to_string() } else { "התחבר".to_string() },
                        }
                        p { class: "switch-auth",
                            "אין לך חשבון? "
                            Link { to: Route::Signup {}, class: "link", "הירשם כאן" }
                        }
                    }
                }
            }
        }
    }
}
