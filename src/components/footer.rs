//! Page footer.
//!
//! Brand blurb, section links, contact links, the current copyright
//! year, and the back-to-top control.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::content::{EMAIL, LOCATION, NAV_ITEMS, OWNER_INITIALS, OWNER_NAME, SOCIAL_LINKS};

use crate::context::use_pointer;

#[component]
pub fn Footer() -> Element {
    let mut pointer = use_pointer();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        div { class: "footer-brand-row",
                            span { class: "logo-badge", "{OWNER_INITIALS}" }
                            span { class: "footer-brand-name", "{OWNER_NAME}" }
                        }
                        p { class: "footer-blurb",
                            "Creating innovative software solutions with a focus on quality, \
                             performance, and user experience."
                        }
                        div { class: "footer-socials",
                            for link in SOCIAL_LINKS {
                                button {
                                    key: "{link.label}",
                                    r#type: "button",
                                    class: "footer-social-link",
                                    "aria-label": "{link.label}",
                                    onmouseenter: move |_| pointer.write().set_hovering(true),
                                    onmouseleave: move |_| pointer.write().set_hovering(false),
                                    onclick: move |_| {
                                        if let Err(e) = open::that(link.url) {
                                            tracing::warn!(url = link.url, error = %e, "failed to open link");
                                        }
                                    },
                                    "{link.label}"
                                }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h3 { class: "footer-column-title", "Navigation" }
                        ul { class: "footer-list",
                            for item in NAV_ITEMS {
                                li { key: "{item.anchor}",
                                    a {
                                        href: "{item.anchor}",
                                        class: "footer-link",
                                        onmouseenter: move |_| pointer.write().set_hovering(true),
                                        onmouseleave: move |_| pointer.write().set_hovering(false),
                                        "{item.label}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h3 { class: "footer-column-title", "Contact" }
                        ul { class: "footer-list",
                            li {
                                span { class: "footer-muted", "Email:" }
                                button {
                                    r#type: "button",
                                    class: "footer-link footer-email",
                                    onmouseenter: move |_| pointer.write().set_hovering(true),
                                    onmouseleave: move |_| pointer.write().set_hovering(false),
                                    onclick: move |_| {
                                        if let Err(e) = open::that(format!("mailto:{EMAIL}")) {
                                            tracing::warn!(error = %e, "failed to open mail client");
                                        }
                                    },
                                    "{EMAIL}"
                                }
                            }
                            li {
                                span { class: "footer-muted", "{LOCATION}" }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { class: "footer-copyright",
                        "\u{00A9} {year} {OWNER_NAME}. All rights reserved."
                    }
                    a {
                        href: "#home",
                        class: "back-to-top",
                        "aria-label": "Back to top",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        {arrow_up_icon()}
                    }
                }
            }
        }
    }
}

/// Lucide arrow-up icon
fn arrow_up_icon() -> Element {
    rsx! {
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
            path { d: "m5 12 7-7 7 7" }
            path { d: "M12 19V5" }
        }
    }
}
