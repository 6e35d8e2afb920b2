//! Single-page layout: nav, hero, sections, and the Lover popup.

use dioxus::prelude::*;

pub mod actions;
mod components;
mod effects;
mod shell;

pub use shell::PageShell;

#[component]
pub fn LoverPage() -> Element {
    rsx! {
        PageShell {}
    }
}
