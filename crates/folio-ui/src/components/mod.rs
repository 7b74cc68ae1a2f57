//! Reusable, stateless UI widgets.

mod category_pills;
mod skill_meter;

pub use category_pills::*;
pub use skill_meter::*;
