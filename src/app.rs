//! Root layout controller.
//!
//! Owns the "assets ready" flag: the loading view shows first, and after
//! a fixed hold the main content mounts for the rest of the session.
//! Also provides the theme and pointer context and hosts the root pointer
//! handlers that feed the cursor overlay.

use dioxus::prelude::*;
use folio_core::{motion, PointerState, Theme};

use crate::components::{
    About, Contact, CursorOverlay, Footer, Hero, Loader, Navbar, Projects, Skills,
};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the theme flag, and the pointer state to all
/// child components.
#[component]
pub fn App() -> Element {
    let theme: Signal<Theme> = use_signal(|| crate::startup_config().theme);
    let mut pointer: Signal<PointerState> = use_signal(PointerState::default);
    let mut ready = use_signal(|| false);

    use_context_provider(|| theme);
    use_context_provider(|| pointer);

    // Unconditional hold before the main content mounts. The task is
    // scope-bound, so it cannot fire after teardown.
    use_future(move || async move {
        tokio::time::sleep(motion::LOADER_HOLD).await;
        ready.set(true);
        tracing::debug!("loading view released");
    });

    // Static for the whole session; narrow viewports keep the handlers
    // inert and the overlay unrendered.
    let track_pointer = crate::context::cursor_overlay_enabled();

    let content_style = format!(
        "animation: fade-in {}ms {} {}ms both;",
        motion::CONTENT_ENTER.duration_ms,
        motion::CONTENT_ENTER.easing.css(),
        motion::CONTENT_ENTER.delay_ms,
    );

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "page {theme().class_name()}",
            onmousemove: move |e| {
                if track_pointer {
                    let point = e.client_coordinates();
                    pointer.write().move_to(point.x, point.y);
                }
            },
            onmousedown: move |_| {
                if track_pointer {
                    pointer.write().set_pressed(true);
                }
            },
            onmouseup: move |_| {
                if track_pointer {
                    pointer.write().set_pressed(false);
                }
            },
            onmouseenter: move |_| {
                if track_pointer {
                    pointer.write().set_hidden(false);
                }
            },
            onmouseleave: move |_| {
                if track_pointer {
                    pointer.write().set_hidden(true);
                }
            },

            CursorOverlay {}

            if !ready() {
                Loader {}
            } else {
                div { class: "content", style: "{content_style}",
                    Navbar {}
                    main {
                        Hero {}
                        About {}
                        Skills {}
                        Projects {}
                        Contact {}
                    }
                    Footer {}
                }
            }
        }
    }
}
