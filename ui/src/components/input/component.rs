use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[component]
pub fn Input(
    /// Optional icon drawn inside the field at its start edge.
    #[props(default = None)]
    leading_icon: Option<IconKind>,
    /// Inline validation message shown under the field.
    #[props(default = None)]
    error: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends=GlobalAttributes)]
    #[props(extends=input)]
    attributes: Vec<Attribute>,
) -> Element {
    let field_class = if error.is_some() {
        "field field-invalid"
    } else {
        "field"
    };

    rsx! {
        div { class: "field-group",
            div { class: "{field_class}",
                if let Some(kind) = leading_icon {
                    span { class: "field-icon",
                        Icon { kind, size: 18 }
                    }
                }
                input {
                    class: "field-input",
                    aria_invalid: error.is_some(),
                    oninput: move |e| _ = oninput.map(|callback| callback(e)),
                    ..attributes,
                }
            }
            if let Some(ref message) = error {
                p { class: "field-error", role: "alert", {message.clone()} }
            }
        }
    }
}
