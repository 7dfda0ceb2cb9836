//! Inline SVG icons drawn with `currentColor` so they follow the surrounding text color.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    User,
    Mail,
    Phone,
    Lock,
    LoaderCircle,
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    #[props(default = 20)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let mut class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon {extra}"),
        _ => "icon".to_string(),
    };
    if props.kind == IconKind::LoaderCircle {
        class.push_str(" spin");
    }

    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class: "{class}",
            {match props.kind {
                IconKind::User => rsx! {
                    path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
                    circle { cx: "12", cy: "7", r: "4" }
                },
                IconKind::Mail => rsx! {
                    rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
                    path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
                },
                IconKind::Phone => rsx! {
                    path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
                },
                IconKind::Lock => rsx! {
                    rect { x: "3", y: "11", width: "18", height: "11", rx: "2", ry: "2" }
                    path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
                },
                IconKind::LoaderCircle => rsx! {
                    path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
                },
            }}
        }
    }
}
