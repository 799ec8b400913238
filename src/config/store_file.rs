use crate::adapters::MemoryStore;
use crate::domain::ports::LookupSource;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_keys, validate_non_empty_string, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

pub const DSN_ENV_VAR: &str = "DATABASE_DNS";
pub const DEFAULT_DSN: &str = "root:123456@tcp(localhost:3306)/?charset=utf8&parseTime=True&loc=Local";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub values: HashMap<String, i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub name: Option<String>,
    pub dsn: Option<String>,
}

impl StoreFile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn name(&self) -> &str {
        self.store.name.as_deref().unwrap_or("default")
    }

    /// Connection string for the store: the file's own entry, then
    /// `DATABASE_DNS`, then the built-in default. Informational only.
    pub fn dsn(&self) -> String {
        if let Some(dsn) = &self.store.dsn {
            return dsn.clone();
        }
        match std::env::var(DSN_ENV_VAR) {
            Ok(dsn) if !dsn.is_empty() => dsn,
            _ => DEFAULT_DSN.to_string(),
        }
    }
}

impl Validate for StoreFile {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.store.name {
            validate_non_empty_string("store.name", name)?;
        }
        if let Some(dsn) = &self.store.dsn {
            validate_non_empty_string("store.dsn", dsn)?;
        }
        validate_keys("values", self.values.keys())
    }
}

/// Replaces `${VAR}` with the variable's value; unset variables stay as-is.
fn substitute_env_vars(content: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env pattern: {}", e))
    });

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

/// A [`MemoryStore`] loaded from a TOML store file.
#[derive(Debug, Clone)]
pub struct FileStore {
    name: String,
    dsn: String,
    inner: MemoryStore,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = StoreFile::from_file(path)?;
        let store = Self::from_store_file(file)?;
        tracing::debug!(
            "Loaded store '{}' from {} ({} keys)",
            store.name,
            path.display(),
            store.len()
        );
        Ok(store)
    }

    pub fn from_store_file(file: StoreFile) -> Result<Self> {
        file.validate()?;
        Ok(Self {
            name: file.name().to_string(),
            dsn: file.dsn(),
            inner: MemoryStore::from(file.values),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl LookupSource for FileStore {
    fn get(&self, key: &str) -> Result<i64> {
        self.inner.get(key)
    }
}
