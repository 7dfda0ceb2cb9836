use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::Route;

#[derive(PartialEq, Clone, Copy)]
pub enum ButtonKind {
    Primary,
    Outline,
    Ghost,
}

#[derive(PartialEq, Clone, Props)]
pub struct ButtonProps {
    text: String,
    to: Option<Route>,
    #[props(default = ButtonKind::Primary)]
    kind: ButtonKind,
    /// Renders a form submit button instead of a plain one.
    #[props(default)]
    submit: bool,
    #[props(default)]
    disabled: bool,
    #[props(default = None)]
    leading_icon: Option<IconKind>,
    /// Additional classes appended to the base button classes
    #[props(default = None)]
    class: Option<String>,
}

fn class_for(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Primary => "btn btn-primary",
        ButtonKind::Outline => "btn btn-outline",
        ButtonKind::Ghost => "btn btn-ghost",
    }
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = class_for(props.kind);
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    };
    let leading_content = rsx! {
        if let Some(kind) = props.leading_icon {
            span { class: "btn-icon",
                Icon { kind, size: 16 }
            }
        }
    };
    let button_type = if props.submit { "submit" } else { "button" };

    match props.to.clone() {
        Some(to) => {
            rsx! {
                Link { to, class: "{class}",
                    {leading_content}
                    span { "{props.text}" }
                }
            }
        }
        None => {
            rsx! {
                button {
                    class: "{class}",
                    r#type: button_type,
                    disabled: props.disabled,
                    {leading_content}
                    span { "{props.text}" }
                }
            }
        }
    }
}
