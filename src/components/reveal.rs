//! One-shot entrance reveal.
//!
//! Wraps a block in a container that rises into view the first time it
//! becomes visible. The flag latches: scrolling away and back does not
//! replay the entrance.

use dioxus::prelude::*;
use folio_core::motion;

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    /// Extra delay in milliseconds (stagger slot within the section).
    #[props(default = 0)]
    pub delay_ms: u64,
    /// Extra classes on the wrapper.
    #[props(default = String::new())]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut seen = use_signal(|| false);

    let transition = motion::ITEM_RISE.delayed_by(props.delay_ms);
    let style = format!(
        "transition: {}, {};",
        transition.css("opacity"),
        transition.css("transform"),
    );

    rsx! {
        div {
            class: if seen() { "reveal reveal-in {props.class}" } else { "reveal {props.class}" },
            style: "{style}",
            onvisible: move |e| {
                if matches!(e.data().is_intersecting(), Ok(true)) {
                    seen.set(true);
                }
            },
            {props.children}
        }
    }
}
