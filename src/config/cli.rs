use crate::adapters::MemoryStore;
use crate::config::store_file::FileStore;
use crate::core::{checked_modulo, modulo, resolve, try_resolve, LookupSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-lookup")]
#[command(about = "Integer remainder and keyed lookup with a -1 sentinel")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML store file used by `get`")]
    pub store: Option<PathBuf>,

    #[arg(long, global = true, help = "Fail with an error instead of printing -1")]
    pub strict: bool,

    #[arg(long, global = true, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Remainder of A divided by B
    Mod {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Value stored under KEY
    Get { key: String },
}

impl CliConfig {
    /// Source for `get`: the store file when given, otherwise an empty table.
    pub fn open_source(&self) -> Result<Box<dyn LookupSource>> {
        match &self.store {
            Some(path) => {
                let store = FileStore::open(path)?;
                tracing::debug!("Store '{}' dsn: {}", store.name(), store.dsn());
                Ok(Box::new(store))
            }
            None => {
                tracing::debug!("No --store given, using an empty table");
                Ok(Box::new(MemoryStore::new()))
            }
        }
    }

    /// Runs the selected command and returns the integer to print.
    pub fn execute(&self) -> Result<i64> {
        match &self.command {
            Command::Mod { a, b } => {
                tracing::debug!("mod {} {}", a, b);
                if self.strict {
                    checked_modulo(*a, *b)
                } else {
                    Ok(modulo(*a, *b))
                }
            }
            Command::Get { key } => {
                let source = self.open_source()?;
                tracing::debug!("get {}", key);
                if self.strict {
                    try_resolve(&source, key)
                } else {
                    Ok(resolve(&source, key))
                }
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.store {
            validate_path("store", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
