use super::substrate::KeyValueSubstrate;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// In-process substrate, optionally limited to a byte quota like browser storage.
#[derive(Debug, Default, Clone)]
pub struct MemorySubstrate {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemorySubstrate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes whose key + value exceed `bytes` fail with a quota error.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(bytes),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueSubstrate for MemorySubstrate {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = key.len() + value.len();
            if needed > quota {
                return Err(AppError::Other(format!(
                    "storage quota exceeded ({needed} > {quota} bytes)"
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
