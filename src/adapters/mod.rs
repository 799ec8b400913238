// Adapters layer: concrete lookup sources behind the domain port.
// The TOML-backed store lives under config::store_file.

pub mod memory;
pub mod sequence;

pub use memory::MemoryStore;
pub use sequence::{FailingSource, SequenceSource};
