//! String key-value store abstraction.

use crate::error::Result;

/// A durable, string-keyed store of string values.
///
/// Implementations decide where the bytes live (memory, files, ...). The
/// contract is deliberately small: values are opaque to the store.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if it was never set or has been removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a key that does not exist is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
