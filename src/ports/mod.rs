//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between generation and an external
//! system (catalog, time, filesystem, processes). Implementations live in
//! `src/adapters/`.

pub mod catalog;
pub mod clock;
pub mod filesystem;
pub mod shell;

pub use catalog::Catalog;
pub use clock::Clock;
pub use filesystem::FileSystem;
pub use shell::{ShellExecutor, ShellOutput};
