//! Shared UI context for Folio.
//!
//! The theme flag and the pointer state are provided at the app root and
//! read by every section through these hooks. Startup configuration
//! (resolved once from the command line) is exposed through plain
//! getters.
//!
//! ## Usage
//!
//! ```ignore
//! // In a component
//! let mut theme = use_theme();
//! theme.set(theme().toggle());
//! ```

use dioxus::prelude::*;
use folio_core::{pointer, PointerState, Theme};

/// Hook to access the shared theme flag.
///
/// Toggling writes through this signal; every subscribed view re-renders
/// with the new palette.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the shared pointer state.
///
/// The app root rewrites it on every pointer event; interactive elements
/// opt in to hover tracking by writing the `hovering` flag from their own
/// enter/leave handlers. Handlers are removed with their elements, so
/// nothing outlives its view.
pub fn use_pointer() -> Signal<PointerState> {
    use_context::<Signal<PointerState>>()
}

/// Form-relay endpoint resolved at startup (default or `--relay-url`).
pub fn relay_endpoint() -> String {
    crate::startup_config().relay_endpoint
}

/// Whether the cursor overlay exists for this session.
///
/// The configured window width is read once at startup; resizing does not
/// re-evaluate the gate.
pub fn cursor_overlay_enabled() -> bool {
    pointer::overlay_enabled(crate::startup_config().window_width)
}
