use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Navigation() -> Element {
    let current: Route = use_route();
    let class_for = |route: &Route| {
        if *route == current {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };
    let home = Route::Home {};
    let services = Route::Services {};

    rsx! {
        nav { class: "navigation", dir: "rtl",
            Link { to: home.clone(), class: class_for(&home), "דף הבית" }
            Link { to: services.clone(), class: class_for(&services), "שירותים" }
        }
    }
}
