pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FailingSource, MemoryStore, SequenceSource};
pub use config::{FileStore, StoreFile};
pub use crate::core::{checked_modulo, modulo, resolve, try_resolve, LookupSource, SENTINEL};
pub use domain::model::{Outcome, OutputCell};
pub use utils::error::{LookupError, Result};
