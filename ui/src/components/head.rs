use dioxus::prelude::*;

// The asset macro also minifies some assets like CSS and JS to make bundled smaller
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[component]
pub fn Head() -> Element {
    rsx! {
        document::Title { "{moneytime::BRAND_NAME}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Stylesheet { rel: "stylesheet", href: MAIN_CSS }
    }
}
