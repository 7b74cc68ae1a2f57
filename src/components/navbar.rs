//! Navigation bar.
//!
//! Fixed header with logo, section links, theme toggle, and a mobile
//! hamburger menu. Turns translucent-solid once the page scrolls past a
//! sentinel element at the top of the document.

use dioxus::prelude::*;
use folio_core::content::{NAV_ITEMS, OWNER_INITIALS, OWNER_NAME};

use crate::context::{use_pointer, use_theme};

/// Header class for the current scroll state.
fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar navbar-scrolled"
    } else {
        "navbar"
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let mut pointer = use_pointer();
    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    rsx! {
        // Scrolls with the document; the header turns solid exactly when
        // this leaves the viewport.
        div {
            class: "scroll-sentinel",
            onvisible: move |e| {
                let visible = e.data().is_intersecting().unwrap_or(true);
                scrolled.set(!visible);
            },
        }

        header { class: header_class(scrolled()),
            div { class: "navbar-inner",
                // Logo
                a {
                    href: "#home",
                    class: "navbar-brand",
                    onmouseenter: move |_| pointer.write().set_hovering(true),
                    onmouseleave: move |_| pointer.write().set_hovering(false),

                    span { class: "logo-badge", "{OWNER_INITIALS}" }
                    span { class: "logo-name", "{OWNER_NAME}" }
                }

                // Desktop links
                nav { class: "nav-links",
                    for item in NAV_ITEMS {
                        a {
                            key: "{item.anchor}",
                            href: "{item.anchor}",
                            class: "nav-link",
                            onmouseenter: move |_| pointer.write().set_hovering(true),
                            onmouseleave: move |_| pointer.write().set_hovering(false),
                            "{item.label}"
                        }
                    }
                }

                div { class: "navbar-actions",
                    // Theme toggle
                    button {
                        r#type: "button",
                        class: "icon-button",
                        "aria-label": "Switch to {theme().toggle().label()} mode",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        onclick: move |_| {
                            let next = theme().toggle();
                            tracing::debug!(theme = %next, "theme toggled");
                            theme.set(next);
                        },
                        {theme_icon(theme())}
                    }

                    // Hamburger (hidden on desktop via CSS)
                    button {
                        r#type: "button",
                        class: "icon-button menu-button",
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            {close_icon()}
                        } else {
                            {menu_icon()}
                        }
                    }
                }
            }
        }

        // Mobile menu panel
        if menu_open() {
            div { class: "mobile-menu",
                nav { class: "mobile-menu-links",
                    for item in NAV_ITEMS {
                        a {
                            key: "{item.anchor}",
                            href: "{item.anchor}",
                            class: "mobile-menu-link",
                            onclick: move |_| menu_open.set(false),
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Lucide sun/moon icon for the current theme's toggle.
fn theme_icon(theme: folio_core::Theme) -> Element {
    match theme {
        folio_core::Theme::Dark => rsx! {
            // Lucide sun icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "4" }
                path { d: "M12 2v2" }
                path { d: "M12 20v2" }
                path { d: "m4.93 4.93 1.41 1.41" }
                path { d: "m17.66 17.66 1.41 1.41" }
                path { d: "M2 12h2" }
                path { d: "M20 12h2" }
                path { d: "m6.34 17.66-1.41 1.41" }
                path { d: "m19.07 4.93-1.41 1.41" }
            }
        },
        folio_core::Theme::Light => rsx! {
            // Lucide moon icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
            }
        },
    }
}

/// Lucide menu icon
fn menu_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

/// Lucide x icon
fn close_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class_follows_scroll_state() {
        assert_eq!(header_class(false), "navbar");
        assert_eq!(header_class(true), "navbar navbar-scrolled");
    }
}
