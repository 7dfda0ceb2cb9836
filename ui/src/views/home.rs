use dioxus::prelude::*;

use crate::{
    components::{Button, ButtonKind, Header, Navigation},
    Route,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            Header {}
            main { class: "container", dir: "rtl",
                Navigation {}
                section { class: "hero",
                    h1 { class: "brand brand-large", "{moneytime::BRAND_NAME}" }
                    p { class: "tagline", "הזמן שלך שווה כסף" }
                    div { class: "hero-actions",
                        Button { to: Some(Route::Signup {}), text: "הצטרפו עכשיו" }
                        Button {
                            to: Some(Route::Services {}),
                            kind: ButtonKind::Outline,
                            text: "לשירותים",
                        }
                    }
                }
            }
        }
    }
}
