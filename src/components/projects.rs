//! Project gallery with category filter.
//!
//! Category pills over a card grid. Filtering is exact label equality in
//! the core crate; this file only holds the active label and renders the
//! selection with a per-card reveal stagger.

use dioxus::prelude::*;
use folio_core::content::{Project, CATEGORIES, PROJECTS};
use folio_core::gallery::{filter_projects, ALL_CATEGORY};
use folio_core::motion::{stagger, SECTION_STAGGER_MS};
use folio_ui::CategoryPills;

use crate::components::Reveal;
use crate::context::use_pointer;

/// How many tech tags a card shows before collapsing into "+n".
const VISIBLE_TAGS: usize = 3;

#[component]
pub fn Projects() -> Element {
    let mut pointer = use_pointer();
    let mut active = use_signal(|| ALL_CATEGORY.to_string());

    let category = active();
    let visible = filter_projects(PROJECTS, &category);

    rsx! {
        section { id: "projects", class: "section",
            Reveal {
                div { class: "section-heading",
                    h2 { class: "section-title", "Featured Projects" }
                    p { class: "section-lead",
                        "Explore a selection of my recent work across various domains and \
                         technologies."
                    }
                }
            }

            Reveal {
                CategoryPills {
                    categories: CATEGORIES.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                    selected: category.clone(),
                    on_select: move |label| active.set(label),
                    on_hover: move |hovering| pointer.write().set_hovering(hovering),
                }
            }

            div { class: "project-grid",
                for (index, project) in visible.iter().enumerate() {
                    Reveal {
                        key: "{project.id}",
                        delay_ms: stagger(index, SECTION_STAGGER_MS),
                        ProjectCard { project: **project }
                    }
                }
            }

            Reveal { class: "section-footer",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onmouseenter: move |_| pointer.write().set_hovering(true),
                    onmouseleave: move |_| pointer.write().set_hovering(false),
                    onclick: move |_| {
                        if let Err(e) = open::that("https://github.com/Rohit-R-Sahu") {
                            tracing::warn!(error = %e, "failed to open profile");
                        }
                    },
                    "View More Projects"
                }
            }
        }
    }
}

/// One project card: image with tag overlay, description, and the
/// demo/source links.
#[component]
fn ProjectCard(project: Project) -> Element {
    let mut pointer = use_pointer();
    let extra_tags = project.tech.len().saturating_sub(VISIBLE_TAGS);

    rsx! {
        article { class: "card project-card",
            div { class: "project-media",
                img { src: "{project.image}", alt: "{project.title}", class: "project-image" }
                div { class: "project-media-overlay",
                    div { class: "project-tags",
                        for tag in project.tech.iter().take(VISIBLE_TAGS) {
                            span { key: "{tag}", class: "project-tag", "{tag}" }
                        }
                        if extra_tags > 0 {
                            span { class: "project-tag", "+{extra_tags}" }
                        }
                    }
                }
            }

            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }

                div { class: "project-links",
                    button {
                        r#type: "button",
                        class: "project-link",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        onclick: move |_| {
                            if let Err(e) = open::that(project.demo_url) {
                                tracing::warn!(url = project.demo_url, error = %e, "failed to open demo");
                            }
                        },
                        "Live Demo"
                        {arrow_up_right_icon()}
                    }
                    button {
                        r#type: "button",
                        class: "project-link project-link-muted",
                        "aria-label": "Source code for {project.title}",
                        onmouseenter: move |_| pointer.write().set_hovering(true),
                        onmouseleave: move |_| pointer.write().set_hovering(false),
                        onclick: move |_| {
                            if let Err(e) = open::that(project.source_url) {
                                tracing::warn!(url = project.source_url, error = %e, "failed to open source");
                            }
                        },
                        {github_icon()}
                    }
                }
            }
        }
    }
}

/// Lucide arrow-up-right icon
fn arrow_up_right_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M7 7h10v10" }
            path { d: "M7 17 17 7" }
        }
    }
}

/// Lucide github icon
fn github_icon() -> Element {
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
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_overflow_count() {
        // First sample project carries five tags: three shown, two folded
        let project = PROJECTS[0];
        assert_eq!(project.tech.len().saturating_sub(VISIBLE_TAGS), 2);

        let short: &[&str] = &["Rust"];
        assert_eq!(short.len().saturating_sub(VISIBLE_TAGS), 0);
    }
}
