//! Go source generation from the schema model.
//!
//! [`naming`] and [`types`] are pure functions over single names and types;
//! [`render`] composes them over whole tables.

pub mod naming;
pub mod render;
pub mod types;

pub use naming::normalize;
pub use render::{render_document, render_table};
pub use types::map_type;
