//! Folio UI Components
//!
//! Reusable Dioxus components shared by the desktop app: the widgets
//! here are presentation-only, take their data and handlers through
//! props, and never reach into app context. Anything that owns real
//! state stays in the app's own component tree.

pub mod components;

pub use components::*;
