//! Folio Core Library
//!
//! Presentation-free logic for the Folio portfolio app.
//!
//! ## Overview
//!
//! Folio is a single-page portfolio: biography, skills, a filterable
//! project gallery, and a contact form, wrapped in animated transitions.
//! Everything that is not markup lives here so it can be tested without a
//! window:
//!
//! - **Content** - the build-time records every section renders from
//! - **Theme** - the light/dark flag and its theme-matched assets
//! - **Typewriter** - the typing/deleting phrase cycler as an explicit
//!   state machine
//! - **Pointer** - cursor overlay state and its visual variant table
//! - **Motion** - the declarative animation timing table
//! - **Gallery** - category filtering over the project list
//! - **Relay** - the contact form draft, submission status, and the HTTP
//!   client for the external form-relay endpoint
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{filter_projects, ContactDraft, RelayClient, Typewriter};
//! use folio_core::content::{PROJECTS, TYPING_PHRASES};
//!
//! // Drive the hero typewriter one step at a time
//! let mut typewriter = Typewriter::new(TYPING_PHRASES.iter().copied());
//! let next_step_in = typewriter.step();
//! println!("{} (next step in {:?})", typewriter.text(), next_step_in);
//!
//! // Filter the gallery
//! let backend = filter_projects(PROJECTS, "Backend");
//!
//! // Submit the contact form
//! # async fn submit() -> folio_core::FolioResult<()> {
//! let client = RelayClient::new();
//! client.submit(&ContactDraft::default()).await
//! # }
//! ```

pub mod content;
pub mod error;
pub mod gallery;
pub mod motion;
pub mod pointer;
pub mod relay;
pub mod theme;
pub mod typewriter;

// Re-exports
pub use content::{Achievement, ContactChannel, NavItem, Project, Skill, SkillGroup, SocialLink};
pub use error::{FolioError, FolioResult};
pub use gallery::{filter_projects, ALL_CATEGORY};
pub use motion::{Easing, Transition, LOADER_HOLD};
pub use pointer::{CursorGeometry, CursorVariant, PointerState, POINTER_MIN_VIEWPORT_WIDTH};
pub use relay::{ContactDraft, RelayClient, SubmissionStatus, FORM_RELAY_URL, SUCCESS_RESET};
pub use theme::Theme;
pub use typewriter::{Typewriter, TypewriterPhase};
