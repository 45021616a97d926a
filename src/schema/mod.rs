//! Schema model types populated from catalog introspection.
//!
//! These mirror the shape of the introspection result and are consumed by
//! the renderer. They are built once per run and never mutated afterwards.

mod column;
mod snapshot;
mod table;

pub use column::Column;
pub use snapshot::SchemaSnapshot;
pub use table::Table;
