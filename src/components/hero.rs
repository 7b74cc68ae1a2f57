//! Hero section.
//!
//! Name, the typewriter role line, a short pitch, call-to-action anchors,
//! social links, and the bobbing scroll indicator.

use dioxus::prelude::*;
use folio_core::content::{OWNER_NAME, RESUME_PATH, SOCIAL_LINKS, TYPING_PHRASES};
use folio_core::Typewriter;

use crate::context::use_pointer;

#[component]
pub fn Hero() -> Element {
    let mut pointer = use_pointer();
    let mut typewriter = use_signal(|| Typewriter::new(TYPING_PHRASES.iter().copied()));

    // Drives the cycler forever. The task is scope-bound: unmounting the
    // hero drops it along with the pending sleep.
    use_future(move || async move {
        loop {
            let delay = typewriter.write().step();
            tokio::time::sleep(delay).await;
        }
    });

    let typed = typewriter.read().text().to_string();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-name", "{OWNER_NAME}" }

                div { class: "hero-role-line",
                    h2 { class: "hero-role",
                        span { class: "hero-role-prefix", "I'm a " }
                        span { class: "gradient-text", "{typed}" }
                        span { class: "caret", "|" }
                    }
                }

                p { class: "hero-pitch",
                    "Building sleek apps with "
                    span { class: "accent-term", "MERN" }
                    ", "
                    span { class: "accent-term", "Spring Boot" }
                    ", & "
                    span { class: "accent-term", "FastAPI" }
                    ". DevOps-savvy. Problem solver. Code meets clarity."
                }

                div { class: "hero-actions",
                    a {
                        href: "#contact",
                        class: "btn btn-primary",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        "Let's Connect"
                    }
                    a {
                        href: "#projects",
                        class: "btn btn-secondary",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        "View Projects"
                    }
                }

                div { class: "hero-socials",
                    for link in SOCIAL_LINKS {
                        button {
                            key: "{link.label}",
                            r#type: "button",
                            class: "social-button",
                            "aria-label": "{link.label}",
                            onmouseenter: move |_| pointer.write().set_hovering(true),
                            onmouseleave: move |_| pointer.write().set_hovering(false),
                            onclick: move |_| {
                                if let Err(e) = open::that(link.url) {
                                    tracing::warn!(url = link.url, error = %e, "failed to open link");
                                }
                            },
                            {social_icon(link.label)}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "social-button",
                        "aria-label": "Download resume",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        onclick: move |_| {
                            if let Err(e) = open::that(RESUME_PATH) {
                                tracing::warn!(path = RESUME_PATH, error = %e, "failed to open resume");
                            }
                        },
                        {download_icon()}
                    }
                }
            }

            div { class: "scroll-indicator",
                a { href: "#about", "aria-label": "Scroll to about",
                    {chevron_down_icon()}
                }
            }
        }
    }
}

/// Lucide icon for a social link, by label.
fn social_icon(label: &str) -> Element {
    match label {
        "GitHub" => rsx! {
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
                path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
                path { d: "M9 18c-4.51 2-5-2-7-2" }
            }
        },
        "LinkedIn" => rsx! {
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
                path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
                rect { x: "2", y: "9", width: "4", height: "12" }
                circle { cx: "4", cy: "4", r: "2" }
            }
        },
        _ => rsx! {
            // Lucide twitter icon
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
                path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
            }
        },
    }
}

/// Lucide download-cloud icon
fn download_icon() -> Element {
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
            path { d: "M4.393 15.269A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.436 8.284" }
            path { d: "M12 12v9" }
            path { d: "m8 17 4 4 4-4" }
        }
    }
}

/// Lucide chevron-down icon
fn chevron_down_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "32",
            height: "32",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}
