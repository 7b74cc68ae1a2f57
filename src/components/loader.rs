//! Loading view.
//!
//! Shown for the fixed hold while the app "prepares": monogram badge, a
//! row of bobbing icons, and a caption. Purely cosmetic - the root
//! controller owns the timer.

use dioxus::prelude::*;
use folio_core::content::{OWNER_INITIALS, OWNER_NAME};
use folio_core::motion::{stagger, LOADER_BOB_MS, LOADER_BOB_STAGGER_MS};

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader",
            div { class: "loader-stack",
                div { class: "loader-badge",
                    span { class: "loader-monogram", "{OWNER_INITIALS}" }
                }

                h1 { class: "loader-heading",
                    "You are about to visit"
                    br {}
                    "{OWNER_NAME}'s Portfolio"
                }

                div { class: "loader-icons",
                    for (index, icon) in loader_icons().into_iter().enumerate() {
                        {
                            let style = format!(
                                "animation: bob {}ms ease-in-out {}ms infinite;",
                                LOADER_BOB_MS,
                                stagger(index, LOADER_BOB_STAGGER_MS),
                            );
                            rsx! {
                                div { key: "{index}", class: "loader-icon", style: "{style}",
                                    {icon}
                                }
                            }
                        }
                    }
                }

                p { class: "loader-caption", "Loading ..." }
            }
        }
    }
}

/// The four bobbing icons: code, terminal, server, database.
fn loader_icons() -> Vec<Element> {
    vec![
        rsx! {
            // Lucide code icon
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
                path { d: "m16 18 6-6-6-6" }
                path { d: "m8 6-6 6 6 6" }
            }
        },
        rsx! {
            // Lucide terminal icon
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
                path { d: "m4 17 6-6-6-6" }
                path { d: "M12 19h8" }
            }
        },
        rsx! {
            // Lucide server icon
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
                rect { x: "2", y: "2", width: "20", height: "8", rx: "2", ry: "2" }
                rect { x: "2", y: "14", width: "20", height: "8", rx: "2", ry: "2" }
                line { x1: "6", y1: "6", x2: "6.01", y2: "6" }
                line { x1: "6", y1: "18", x2: "6.01", y2: "18" }
            }
        },
        rsx! {
            // Lucide database icon
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
                ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
                path { d: "M3 5V19A9 3 0 0 0 21 19V5" }
                path { d: "M3 12A9 3 0 0 0 21 12" }
            }
        },
    ]
}
