//! UI Components for Folio.
//!
//! One file per section of the page, plus the loading view, the cursor
//! overlay, and the reveal wrapper they share.

mod about;
mod contact;
mod cursor;
mod footer;
mod hero;
mod loader;
mod navbar;
mod projects;
mod reveal;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use cursor::CursorOverlay;
pub use footer::Footer;
pub use hero::Hero;
pub use loader::Loader;
pub use navbar::Navbar;
pub use projects::Projects;
pub use reveal::Reveal;
pub use skills::Skills;
