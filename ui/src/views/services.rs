use dioxus::prelude::*;

use crate::{
    components::{Header, Navigation},
    state::{use_watch, AppState},
};

/// Gates on the session lookup, then renders the page chrome around the services pane.
#[component]
pub fn Services() -> Element {
    let state = consume_context::<AppState>();
    let status = use_watch(|| state.session().subscribe());

    if status.read().loading {
        return rsx! {
            div { "טוען..." }
        };
    }

    rsx! {
        div { class: "page",
            Header {}
            div { class: "container", dir: "rtl",
                Navigation {}
                div { class: "pane",
                    div { class: "pane-backdrop" }
                    div { class: "pane-content",
                        h2 { class: "pane-title", "שירותים" }
                        p { class: "muted", "כאן יופיעו השירותים שתוכלו להציע ולהזמין." }
                    }
                }
            }
        }
    }
}
