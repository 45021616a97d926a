//! Live adapters for real external interactions.

pub mod catalog;
pub mod clock;
pub mod filesystem;
pub mod shell;

pub use catalog::LiveCatalog;
pub use clock::SystemClock;
pub use filesystem::DiskFileSystem;
pub use shell::ProcessExecutor;
