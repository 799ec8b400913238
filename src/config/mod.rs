#[cfg(feature = "cli")]
pub mod cli;
pub mod store_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use store_file::{FileStore, StoreFile};
