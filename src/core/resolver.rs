use crate::domain::model::SENTINEL;
use crate::domain::ports::LookupSource;
use crate::utils::error::Result;

/// Value stored under `key`, or `-1` if the source fails for any reason.
pub fn resolve<S: LookupSource + ?Sized>(source: &S, key: &str) -> i64 {
    try_resolve(source, key).unwrap_or(SENTINEL)
}

/// Like [`resolve`] but hands back the source's error untouched.
pub fn try_resolve<S: LookupSource + ?Sized>(source: &S, key: &str) -> Result<i64> {
    source.get(key)
}
