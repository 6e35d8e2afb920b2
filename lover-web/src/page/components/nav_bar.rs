use dioxus::prelude::*;

/// Inline display for the nav links. Desktop leaves it to the stylesheet;
/// on mobile the toggle flips between hidden and a flex column.
pub fn nav_links_style(is_mobile: bool, expanded: bool) -> &'static str {
    match (is_mobile, expanded) {
        (false, _) => "",
        (true, true) => "display: flex;",
        (true, false) => "display: none;",
    }
}

#[component]
pub fn NavBar(is_mobile: bool, on_open_lover: Callback<()>) -> Element {
    let mut expanded = use_signal(|| false);
    let links_style = nav_links_style(is_mobile, expanded());

    rsx! {
        nav {
            class: "nav",
            a { class: "brand", href: "#top", "Ovi" }

            if is_mobile {
                button {
                    id: "mobile-toggle",
                    class: "mobile-toggle",
                    "aria-expanded": if expanded() { "true" } else { "false" },
                    onclick: move |_| expanded.set(!expanded()),
                    "☰"
                }
            }

            div {
                id: "nav-links",
                class: "nav-links",
                style: "{links_style}",
                a { href: "#about", "About" }
                a { href: "#moments", "Moments" }
                button {
                    id: "lover-btn",
                    class: "nav-cta",
                    onclick: move |_| on_open_lover.call(()),
                    "Lover"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_ignores_toggle() {
        assert_eq!(nav_links_style(false, false), "");
        assert_eq!(nav_links_style(false, true), "");
    }

    #[test]
    fn mobile_toggle_flips_display() {
        assert_eq!(nav_links_style(true, false), "display: none;");
        assert_eq!(nav_links_style(true, true), "display: flex;");
    }
}
