use crate::utils::error::Result;
use std::sync::Arc;

/// A key/value source the resolver reads from.
///
/// Implementations decide what a failure means (missing key, I/O, a
/// scripted error); the resolver only sees `Ok` or `Err`.
pub trait LookupSource: Send + Sync {
    fn get(&self, key: &str) -> Result<i64>;
}

impl<T: LookupSource + ?Sized> LookupSource for &T {
    fn get(&self, key: &str) -> Result<i64> {
        (**self).get(key)
    }
}

impl<T: LookupSource + ?Sized> LookupSource for Box<T> {
    fn get(&self, key: &str) -> Result<i64> {
        (**self).get(key)
    }
}

impl<T: LookupSource + ?Sized> LookupSource for Arc<T> {
    fn get(&self, key: &str) -> Result<i64> {
        (**self).get(key)
    }
}
