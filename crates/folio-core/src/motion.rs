//! Declarative animation timing table.
//!
//! Every entrance animation, stagger, and hold in the app is defined here
//! as data. Components translate entries into inline CSS transition
//! strings; nothing else in the codebase hardcodes a duration.

use std::time::Duration;

/// How long the loading view holds before the main content mounts.
///
/// The delay is unconditional - it is not tied to any real asset signal.
pub const LOADER_HOLD: Duration = Duration::from_millis(2000);

/// Content fade-in once the loading view clears.
pub const CONTENT_ENTER: Transition = Transition::new(200, 500, Easing::EaseOut);

/// Default rise-in for revealed sections and their children.
pub const ITEM_RISE: Transition = Transition::new(0, 500, Easing::EaseOut);

/// Vertical offset a revealed element rises from.
pub const RISE_OFFSET_PX: f64 = 20.0;

/// Stagger step between sibling children of a revealed section.
pub const SECTION_STAGGER_MS: u64 = 100;

/// Stagger step between achievement cards in the about section.
pub const ACHIEVEMENT_STAGGER_MS: u64 = 200;

/// Per-chip delay step in the technology cloud.
pub const CHIP_STAGGER_MS: u64 = 50;

/// Pop-in for a single technology chip.
pub const CHIP_POP: Transition = Transition::new(0, 300, Easing::EaseOut);

/// Skill bar fill once the skills section is in view.
pub const BAR_FILL: Transition = Transition::new(200, 1000, Easing::EaseOut);

/// One bob of a loader icon.
pub const LOADER_BOB_MS: u64 = 1500;

/// Stagger step between bobbing loader icons.
pub const LOADER_BOB_STAGGER_MS: u64 = 200;

/// Size/opacity morph of the cursor overlay between variants.
pub const CURSOR_MORPH: Transition = Transition::new(0, 200, Easing::EaseOut);

/// Timing curve names, resolved to CSS keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// One animation contract: wait `delay_ms`, then run for `duration_ms`
/// along `easing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(delay_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            delay_ms,
            duration_ms,
            easing,
        }
    }

    /// The same transition pushed back by `extra_ms` (stagger slot).
    pub fn delayed_by(self, extra_ms: u64) -> Self {
        Self {
            delay_ms: self.delay_ms + extra_ms,
            ..self
        }
    }

    /// CSS `transition` value for one property.
    pub fn css(&self, property: &str) -> String {
        format!(
            "{} {}ms {} {}ms",
            property,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }

    /// Delay plus duration.
    pub fn total_ms(&self) -> u64 {
        self.delay_ms + self.duration_ms
    }
}

/// Delay for the `index`-th sibling under a fixed stagger step.
pub fn stagger(index: usize, step_ms: u64) -> u64 {
    index as u64 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css_string() {
        let t = Transition::new(200, 500, Easing::EaseOut);
        assert_eq!(t.css("opacity"), "opacity 500ms ease-out 200ms");
    }

    #[test]
    fn test_delayed_by_adds_to_delay_only() {
        let t = ITEM_RISE.delayed_by(300);
        assert_eq!(t.delay_ms, ITEM_RISE.delay_ms + 300);
        assert_eq!(t.duration_ms, ITEM_RISE.duration_ms);
        assert_eq!(t.total_ms(), ITEM_RISE.duration_ms + ITEM_RISE.delay_ms + 300);
    }

    #[test]
    fn test_stagger_arithmetic() {
        assert_eq!(stagger(0, SECTION_STAGGER_MS), 0);
        assert_eq!(stagger(3, SECTION_STAGGER_MS), 300);
        assert_eq!(stagger(4, CHIP_STAGGER_MS), 200);
    }
}
