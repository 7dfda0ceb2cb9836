//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, form fields and page chrome.

mod button;
mod head;
mod header;
mod icon;
mod input;
mod navigation;
mod splash;

pub use button::{Button, ButtonKind};
pub use head::Head;
pub use header::Header;
pub use icon::{Icon, IconKind};
pub use input::Input;
pub use navigation::Navigation;
pub use splash::Splash;
