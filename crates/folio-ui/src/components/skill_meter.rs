//! Skill Meter Component
//!
//! Labeled proficiency bar. The fill stays at zero until `filled` flips
//! on, then animates to the skill's level along the motion table's fill
//! transition - the owning section decides when that happens (first
//! scroll into view).

use dioxus::prelude::*;
use folio_core::motion::BAR_FILL;
use folio_core::Skill;

/// Fill percentage for the bar: zero until the section has been seen.
pub fn fill_width(skill: &Skill, filled: bool) -> u8 {
    if filled {
        skill.level
    } else {
        0
    }
}

/// Properties for the SkillMeter component
#[derive(Clone, PartialEq, Props)]
pub struct SkillMeterProps {
    /// The skill to display
    pub skill: Skill,
    /// Whether the bar has been released to fill
    pub filled: bool,
}

#[component]
pub fn SkillMeter(props: SkillMeterProps) -> Element {
    let width = fill_width(&props.skill, props.filled);
    let fill_style = format!("width: {}%; transition: {};", width, BAR_FILL.css("width"));

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-bar-header",
                span { class: "skill-bar-name", "{props.skill.name}" }
                span { class: "skill-bar-level", "{props.skill.level}%" }
            }
            div { class: "skill-bar-track",
                div { class: "skill-bar-fill", style: "{fill_style}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_follows_the_latch() {
        let skill = Skill { name: "React", level: 90 };
        assert_eq!(fill_width(&skill, false), 0);
        assert_eq!(fill_width(&skill, true), 90);
    }

    #[test]
    fn fill_width_caps_at_level() {
        let skill = Skill { name: "Tailwind", level: 100 };
        assert_eq!(fill_width(&skill, true), 100);
    }
}
