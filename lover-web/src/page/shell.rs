use dioxus::prelude::*;
use lover_types::{Gallery, PageConfig, PopupWidget, Size};

use crate::interop::{current_viewport_size, load_page_config};
use crate::page::actions;
use crate::page::components::hero::Hero;
use crate::page::components::mini_preview::MiniPreview;
use crate::page::components::nav_bar::NavBar;
use crate::page::components::sections::{AboutSection, Footer, MomentsSection};
use crate::page::effects;
use crate::popup_window::LoverPopup;
use crate::styles::PAGE_STYLES;

#[component]
pub fn PageShell() -> Element {
    let config: PageConfig = use_hook(load_page_config);

    let popup = use_signal({
        let focus_delay_ms = config.focus_delay_ms;
        move || PopupWidget::new(focus_delay_ms)
    });
    let gallery = use_signal({
        let config = config.clone();
        move || {
            Gallery::new(
                config.thumbnails.clone(),
                config.initial_image(),
                config.fade_delay_ms,
            )
        }
    });
    let viewport = use_signal(|| current_viewport_size().unwrap_or(Size::new(0.0, 0.0)));

    use_hook(move || {
        effects::track_viewport(viewport);
        effects::install_escape_listener(popup);
    });

    // A dragged placement must stay on screen when the viewport shrinks.
    let drag_margin = config.drag_margin;
    use_effect(move || effects::reclamp_on_resize(*viewport.read(), popup, drag_margin));

    // Runs after the first render so the observed sections exist.
    let reveal_threshold = config.reveal_threshold;
    use_effect(move || effects::observe_reveal(reveal_threshold));

    let open_lover = use_callback(move |_| actions::open_popup(popup));
    let restore_lover = use_callback(move |_| actions::restore_popup(popup));

    let is_mobile = viewport.read().width <= config.mobile_breakpoint as f64;
    let mini_visible = popup.read().mini_preview_visible();
    let (main_source, hero_source) = {
        let gallery = gallery.read();
        (gallery.main().source.clone(), gallery.hero_source().to_string())
    };

    rsx! {
        style { {PAGE_STYLES} }

        NavBar { is_mobile, on_open_lover: open_lover }

        main {
            Hero {
                hero_text: config.hero_text.clone(),
                typing_step_ms: config.typing_step_ms,
                profile_source: hero_source,
                on_open_lover: open_lover,
            }
            AboutSection {}
            MomentsSection { moments: config.thumbnails.clone() }
        }

        Footer {}

        LoverPopup {
            popup,
            gallery,
            viewport,
            drag_margin: config.drag_margin,
        }

        MiniPreview {
            visible: mini_visible,
            source: main_source,
            on_restore: restore_lover,
        }
    }
}
