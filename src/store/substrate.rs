use crate::errors::AppResult;

/// Minimal string key-value storage the session store writes through.
///
/// One key holds one blob; there are no transactions and no partial keys.
pub trait KeyValueSubstrate {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> AppResult<()>;
}

impl<T: KeyValueSubstrate + ?Sized> KeyValueSubstrate for &mut T {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        (**self).delete(key)
    }
}
