//! Adapter implementations of the port traits.
//!
//! - `live`: real database, disk, clock, and processes.
//! - `snapshot`: catalog data served from a recorded snapshot file.

pub mod live;
pub mod snapshot;
