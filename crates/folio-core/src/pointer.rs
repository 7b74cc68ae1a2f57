//! Pointer state for the cursor overlay.
//!
//! The overlay renders a circle that trails the mouse. Every pointer
//! event rewrites part of this state; the overlay derives a visual
//! variant from it each render. Below [`POINTER_MIN_VIEWPORT_WIDTH`] the
//! overlay does not exist at all - that check happens once at startup
//! against the configured window width and is a presentation policy, not
//! an invariant.

/// Minimum viewport width (logical px) for the overlay to be active.
pub const POINTER_MIN_VIEWPORT_WIDTH: f64 = 768.0;

/// Whether the overlay should exist for a viewport of the given width.
pub fn overlay_enabled(viewport_width: f64) -> bool {
    viewport_width > POINTER_MIN_VIEWPORT_WIDTH
}

/// Everything the overlay knows about the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Viewport x coordinate of the last pointer event.
    pub x: f64,
    /// Viewport y coordinate of the last pointer event.
    pub y: f64,
    /// A button is held down.
    pub pressed: bool,
    /// The pointer is over an interactive element that opted in.
    pub hovering: bool,
    /// The pointer left the window.
    pub hidden: bool,
}

impl PointerState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Visual variant, precedence: hidden > pressed > hovering > default.
    pub fn variant(&self) -> CursorVariant {
        if self.hidden {
            CursorVariant::Hidden
        } else if self.pressed {
            CursorVariant::Pressed
        } else if self.hovering {
            CursorVariant::Hovering
        } else {
            CursorVariant::Default
        }
    }
}

/// Visual variant of the overlay indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorVariant {
    Default,
    Hovering,
    Pressed,
    Hidden,
}

impl CursorVariant {
    /// CSS modifier class for the variant.
    pub fn class_name(self) -> &'static str {
        match self {
            CursorVariant::Default => "cursor-default",
            CursorVariant::Hovering => "cursor-hovering",
            CursorVariant::Pressed => "cursor-pressed",
            CursorVariant::Hidden => "cursor-hidden",
        }
    }

    /// Size/opacity/scale table for the indicator.
    pub fn geometry(self) -> CursorGeometry {
        match self {
            CursorVariant::Default => CursorGeometry {
                size: 24.0,
                scale: 1.0,
                opacity: 1.0,
            },
            CursorVariant::Hovering => CursorGeometry {
                size: 32.0,
                scale: 1.0,
                opacity: 1.0,
            },
            CursorVariant::Pressed => CursorGeometry {
                size: 24.0,
                scale: 0.8,
                opacity: 1.0,
            },
            CursorVariant::Hidden => CursorGeometry {
                size: 24.0,
                scale: 1.0,
                opacity: 0.0,
            },
        }
    }
}

/// Rendered geometry of the indicator circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGeometry {
    /// Diameter in px.
    pub size: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CursorGeometry {
    /// Offset from the pointer position to the circle's top-left corner.
    pub fn offset(&self) -> f64 {
        self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_updates_exact_coordinates() {
        let mut state = PointerState::default();
        state.move_to(431.5, 92.0);
        assert_eq!((state.x, state.y), (431.5, 92.0));
    }

    #[test]
    fn test_variant_precedence() {
        let mut state = PointerState::default();
        assert_eq!(state.variant(), CursorVariant::Default);

        state.set_hovering(true);
        assert_eq!(state.variant(), CursorVariant::Hovering);

        state.set_pressed(true);
        assert_eq!(state.variant(), CursorVariant::Pressed);

        state.set_hidden(true);
        assert_eq!(state.variant(), CursorVariant::Hidden);
    }

    #[test]
    fn test_overlay_gate_at_threshold() {
        assert!(!overlay_enabled(320.0));
        assert!(!overlay_enabled(POINTER_MIN_VIEWPORT_WIDTH));
        assert!(overlay_enabled(769.0));
        assert!(overlay_enabled(1280.0));
    }

    #[test]
    fn test_hover_geometry_is_larger() {
        let default = CursorVariant::Default.geometry();
        let hover = CursorVariant::Hovering.geometry();
        assert!(hover.size > default.size);
        assert_eq!(hover.offset(), 16.0);
        assert_eq!(CursorVariant::Hidden.geometry().opacity, 0.0);
    }
}
