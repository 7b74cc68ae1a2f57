//! Color constants for the Folio palette.
//!
//! Indigo/purple accent over neutral greys, in a light and a dark
//! rendition. The stylesheet mirrors these as CSS custom properties; the
//! constants exist for the few places Rust code needs a literal color.

#![allow(dead_code)]

// === ACCENT ===
pub const INDIGO: &str = "#4f46e5";
pub const INDIGO_SOFT: &str = "#818cf8";
pub const PURPLE: &str = "#9333ea";
pub const CURSOR_ACCENT: &str = "rgba(97, 114, 249, 0.4)";
pub const CURSOR_ACCENT_STRONG: &str = "rgba(97, 114, 249, 0.8)";

// === LIGHT SURFACES ===
pub const LIGHT_BG: &str = "#ffffff";
pub const LIGHT_BG_ALT: &str = "#f9fafb";
pub const LIGHT_CARD: &str = "#ffffff";
pub const LIGHT_TEXT: &str = "#111827";
pub const LIGHT_TEXT_SOFT: &str = "#4b5563";
pub const LIGHT_BORDER: &str = "#e5e7eb";

// === DARK SURFACES ===
pub const DARK_BG: &str = "#111827";
pub const DARK_BG_ALT: &str = "#1f2937";
pub const DARK_CARD: &str = "#1f2937";
pub const DARK_TEXT: &str = "#f3f4f6";
pub const DARK_TEXT_SOFT: &str = "#9ca3af";
pub const DARK_BORDER: &str = "#374151";

// === SEMANTIC ===
pub const SUCCESS: &str = "#15803d";
pub const SUCCESS_BG: &str = "rgba(34, 197, 94, 0.15)";
pub const DANGER: &str = "#b91c1c";
pub const DANGER_BG: &str = "rgba(239, 68, 68, 0.15)";
