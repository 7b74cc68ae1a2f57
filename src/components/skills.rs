//! Skills section.
//!
//! Grouped proficiency bars plus the flat technology chip cloud. The bar
//! fills and chip pops key off the section's own in-view latch so they
//! run exactly once, when the visitor first scrolls here.

use dioxus::prelude::*;
use folio_core::content::{SKILL_GROUPS, TECHNOLOGIES};
use folio_core::motion::{stagger, CHIP_POP, CHIP_STAGGER_MS, SECTION_STAGGER_MS};
use folio_ui::SkillMeter;

use crate::components::Reveal;

#[component]
pub fn Skills() -> Element {
    let mut in_view = use_signal(|| false);

    rsx! {
        section {
            id: "skills",
            class: "section section-alt",
            onvisible: move |e| {
                if matches!(e.data().is_intersecting(), Ok(true)) {
                    in_view.set(true);
                }
            },

            Reveal {
                div { class: "section-heading",
                    h2 { class: "section-title", "Skills & Expertise" }
                    p { class: "section-lead",
                        "I've worked with a diverse range of technologies across multiple \
                         domains, allowing me to approach problems with a comprehensive \
                         perspective."
                    }
                }
            }

            div { class: "skill-grid",
                for (index, group) in SKILL_GROUPS.iter().enumerate() {
                    Reveal {
                        key: "{group.name}",
                        delay_ms: stagger(index, SECTION_STAGGER_MS),
                        class: "card skill-card",
                        h3 { class: "skill-group-name",
                            span { class: "skill-group-dot" }
                            "{group.name}"
                        }
                        div {
                            for skill in group.skills {
                                SkillMeter { key: "{skill.name}", skill: *skill, filled: in_view() }
                            }
                        }
                    }
                }
            }

            Reveal { class: "tech-cloud-card card",
                h3 { class: "tech-cloud-title gradient-text", "Technology Experience" }
                div { class: "tech-cloud",
                    for (index, tech) in TECHNOLOGIES.iter().enumerate() {
                        {
                            let pop = CHIP_POP.delayed_by(stagger(index, CHIP_STAGGER_MS));
                            let style = format!("transition: {};", pop.css("all"));
                            rsx! {
                                span {
                                    key: "{tech}",
                                    class: if in_view() { "tech-chip tech-chip-in" } else { "tech-chip" },
                                    style: "{style}",
                                    "{tech}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

