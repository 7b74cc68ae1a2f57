//! Category Pills Component
//!
//! Horizontal row of filter pills for the project gallery. The selected
//! pill gets the filled accent background.

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// List of selectable labels, rendered in order
    pub categories: Vec<String>,
    /// Currently selected label
    pub selected: String,
    /// Handler called with the clicked label
    pub on_select: EventHandler<String>,
    /// Optional hover tracking (true on enter, false on leave)
    #[props(default)]
    pub on_hover: Option<EventHandler<bool>>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "All".to_string());
///
/// rsx! {
///     CategoryPills {
///         categories: vec!["All".to_string(), "Backend".to_string()],
///         selected: selected(),
///         on_select: move |label| selected.set(label),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-row",
            role: "radiogroup",
            "aria-label": "Project category",
            for category in props.categories.iter() {
                {
                    let label = category.clone();
                    let is_selected = selected == *category;
                    let on_select = props.on_select;
                    let on_hover = props.on_hover;
                    rsx! {
                        button {
                            key: "{category}",
                            r#type: "button",
                            class: if is_selected { "category-pill category-pill-active" } else { "category-pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onmouseenter: move |_| {
                                if let Some(handler) = &on_hover {
                                    handler.call(true);
                                }
                            },
                            onmouseleave: move |_| {
                                if let Some(handler) = &on_hover {
                                    handler.call(false);
                                }
                            },
                            onclick: move |_| {
                                on_select.call(label.clone());
                            },
                            "{category}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn selected_pill_class() {
        let is_selected = true;
        let class = if is_selected {
            "category-pill category-pill-active"
        } else {
            "category-pill"
        };
        assert_eq!(class, "category-pill category-pill-active");
    }
}
