use dioxus::prelude::*;
use moneytime::{Field, SignupFlow, SignupInput};

use crate::{
    components::{Button, IconKind, Input},
    state::{use_watch, AppState},
    Route, RouterNavigator,
};

/// Input type, placeholder and icon for each form field.
fn presentation(field: Field) -> (&'static str, &'static str, IconKind) {
    match field {
        Field::Username => ("text", "שם משתמש", IconKind::User),
        Field::Email => ("email", "אימייל", IconKind::Mail),
        Field::Phone => ("tel", "טלפון (05xxxxxxxx)", IconKind::Phone),
        Field::Password => ("password", "סיסמה", IconKind::Lock),
        Field::ConfirmPassword => ("password", "אימות סיסמה", IconKind::Lock),
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let app = consume_context::<AppState>();
    let flow = use_hook(SignupFlow::new);
    let form = use_watch(|| flow.subscribe());
    let mut input = use_signal(SignupInput::default);

    let on_edit = use_callback({
        let flow = flow.clone();
        move |(field, value): (Field, String)| {
            *input.write().field_mut(field) = value;
            flow.edit(&input.read());
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let flow = flow.clone();
        let session = app.session().clone();
        let data = input.read().clone();
        spawn(async move {
            flow.submit(&data, &session, RouterNavigator(nav)).await;
        });
    };

    let view = form.read().clone();

    rsx! {
        div { class: "auth-page", dir: "rtl",
            div { class: "auth-column",
                div { class: "auth-heading",
                    h1 { class: "brand brand-large", "{moneytime::BRAND_NAME}" }
                    p { class: "tagline", "הצטרפו אלינו! צרו חשבון חדש" }
                }
                div { class: "card",
                    form { class: "form", novalidate: true, onsubmit: onsubmit,
                        for field in Field::ALL {
                            {
                                let (kind, placeholder, icon) = presentation(field);
                                rsx! {
                                    Input {
                                        key: "{field}",
                                        leading_icon: Some(icon),
                                        error: view.field_errors.get(field).map(str::to_string),
                                        name: field.name(),
                                        r#type: kind,
                                        placeholder,
                                        dir: "rtl",
                                        value: "{input.read().field(field)}",
                                        oninput: move |evt: FormEvent| on_edit.call((field, evt.value())),
                                    }
                                }
                            }
                        }
                        if let Some(ref error) = view.error {
                            div { class: "banner banner-error", role: "alert", "{error}" }
                        }
                        Button {
                            submit: true,
                            disabled: view.loading,
                            class: Some("btn-block".to_string()),
                            text: if view.loading { "נרשם...".to_string() } else { "הרשם".to_string() },
                        }
                        p { class: "switch-auth",
                            "כבר יש לך חשבון? "
                            Link { to: Route::Login {}, class: "link", "התחבר כאן" }
                        }
                    }
                }
            }
        }
    }
}
