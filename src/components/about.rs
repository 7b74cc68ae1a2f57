//! About section.
//!
//! Theme-matched illustration, a short narrative, and the staggered
//! achievements grid.

use dioxus::prelude::*;
use folio_core::content::ACHIEVEMENTS;
use folio_core::motion::{stagger, ACHIEVEMENT_STAGGER_MS};

use crate::components::Reveal;
use crate::context::use_theme;

#[component]
pub fn About() -> Element {
    let theme = use_theme();

    rsx! {
        section { id: "about", class: "section",
            Reveal {
                div { class: "section-heading",
                    h2 { class: "section-title", "About Me" }
                    p { class: "section-lead",
                        "I'm a passionate software developer with expertise in building \
                         scalable full-stack applications, managing DevOps workflows, and \
                         implementing CMS solutions."
                    }
                }
            }

            div { class: "about-grid",
                Reveal { class: "about-figure",
                    div { class: "about-illustration",
                        img {
                            src: "{theme().hero_image()}",
                            alt: "Abstract illustration",
                        }
                    }
                }

                Reveal { delay_ms: 100,
                    h3 { class: "about-headline gradient-text",
                        "Crafting Digital Experiences with Precision"
                    }
                    p { class: "about-paragraph",
                        "I thrive on building seamless systems that connect intuitive user \
                         interfaces with high-performing APIs, balancing front-end finesse \
                         with backend reliability."
                    }
                    p { class: "about-paragraph",
                        "Whether working in teams or leading projects independently, I focus \
                         on performance, clarity, and writing code that's built to last."
                    }

                    div { class: "achievement-grid",
                        for (index, achievement) in ACHIEVEMENTS.iter().enumerate() {
                            Reveal {
                                key: "{achievement.title}",
                                delay_ms: stagger(index, ACHIEVEMENT_STAGGER_MS),
                                class: "achievement-card",
                                div { class: "achievement-icon", {achievement_icon(achievement.icon)} }
                                h4 { class: "achievement-title", "{achievement.title}" }
                                p { class: "achievement-detail", "{achievement.detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Lucide icon for an achievement card, by name.
fn achievement_icon(name: &str) -> Element {
    match name {
        "medal" => rsx! {
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
                path { d: "M7.21 15 2.66 7.14a2 2 0 0 1 .13-2.2L4.4 2.8A2 2 0 0 1 6 2h12a2 2 0 0 1 1.6.8l1.6 2.14a2 2 0 0 1 .14 2.2L16.79 15" }
                path { d: "M11 12 5.12 2.2" }
                path { d: "m13 12 5.88-9.8" }
                path { d: "M8 7h8" }
                circle { cx: "12", cy: "17", r: "5" }
                path { d: "M12 18v-2h-.5" }
            }
        },
        "calendar" => rsx! {
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
                path { d: "M8 2v4" }
                path { d: "M16 2v4" }
                rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
                path { d: "M3 10h18" }
            }
        },
        "award" => rsx! {
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
                circle { cx: "12", cy: "8", r: "6" }
                path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
            }
        },
        _ => rsx! {
            // Lucide graduation-cap icon
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
                path { d: "M21.42 10.922a1 1 0 0 0-.019-1.838L12.83 5.18a2 2 0 0 0-1.66 0L2.6 9.08a1 1 0 0 0 0 1.832l8.57 3.908a2 2 0 0 0 1.66 0z" }
                path { d: "M22 10v6" }
                path { d: "M6 12.5V16a6 3 0 0 0 12 0v-3.5" }
            }
        },
    }
}
