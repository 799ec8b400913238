pub mod modulo;
pub mod resolver;

pub use crate::domain::model::{Outcome, OutputCell, SENTINEL};
pub use crate::domain::ports::LookupSource;
pub use crate::utils::error::Result;
pub use modulo::{checked_modulo, modulo};
pub use resolver::{resolve, try_resolve};
