//! Pointer-following cursor overlay.
//!
//! Renders a circle that trails the mouse, growing over interactive
//! elements and shrinking while pressed. Inert below the viewport-width
//! gate: nothing is rendered and no state is consumed.

use dioxus::prelude::*;
use folio_core::{motion, CursorVariant, PointerState};

use crate::context::{cursor_overlay_enabled, use_pointer};

/// Inline style for the indicator at the current pointer position.
fn overlay_style(state: &PointerState) -> String {
    let geometry = state.variant().geometry();
    format!(
        "transform: translate({}px, {}px) scale({}); width: {}px; height: {}px; opacity: {}; transition: {}, {}, {};",
        state.x - geometry.offset(),
        state.y - geometry.offset(),
        geometry.scale,
        geometry.size,
        geometry.size,
        geometry.opacity,
        motion::CURSOR_MORPH.css("width"),
        motion::CURSOR_MORPH.css("height"),
        motion::CURSOR_MORPH.css("opacity"),
    )
}

#[component]
pub fn CursorOverlay() -> Element {
    let pointer = use_pointer();

    // Presentation policy decided once at startup, stable for the session.
    if !cursor_overlay_enabled() {
        return VNode::empty();
    }

    let state = pointer();
    let variant = state.variant();
    let style = overlay_style(&state);

    rsx! {
        div { class: "cursor-overlay {variant.class_name()}", style: "{style}",
            if variant == CursorVariant::Hovering {
                div { class: "cursor-dots",
                    for index in 0..5u64 {
                        span {
                            key: "{index}",
                            class: "cursor-dot",
                            style: "animation-delay: {index * 100}ms;",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_style_centers_on_pointer() {
        let mut state = PointerState::default();
        state.move_to(100.0, 60.0);
        let style = overlay_style(&state);
        // Default variant is 24px, so the circle's corner sits 12px off
        assert!(style.contains("translate(88px, 48px)"), "{style}");
        assert!(style.contains("width: 24px"));
        assert!(style.contains("opacity: 1"));
    }

    #[test]
    fn test_overlay_style_hidden_fades_out() {
        let mut state = PointerState::default();
        state.set_hidden(true);
        assert!(overlay_style(&state).contains("opacity: 0"));
    }

    #[test]
    fn test_overlay_style_grows_on_hover() {
        let mut state = PointerState::default();
        state.set_hovering(true);
        let style = overlay_style(&state);
        assert!(style.contains("width: 32px"), "{style}");
    }
}
