use dioxus::prelude::*;

use crate::components::{Icon, IconKind};

/// Shown while the app state is being put together.
#[component]
pub fn Splash() -> Element {
    rsx! {
        div { class: "splash",
            h1 { class: "brand", "{moneytime::BRAND_NAME}" }
            Icon { kind: IconKind::LoaderCircle, size: 28 }
        }
    }
}
