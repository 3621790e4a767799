use std::collections::HashMap;

use crate::error::StorageError;
use crate::mock_behaviour::MockBehaviour;
use crate::traits::KeyValueStore;

/// An in-memory key-value store, that behaves like a browser local storage.
///
/// It can be given a byte quota, that is shared by every slot (keys included).
/// Writes that would exceed it fail with [`StorageError::QuotaExceeded`].
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
    quota: Option<usize>,
    write_count: usize,
    mock_behaviour: Option<MockBehaviour>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that will refuse to hold more than `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self { quota: Some(quota), ..Self::default() }
    }

    /// Create a backend whose reads and writes fail according to `behaviour`
    pub fn with_mock_behaviour(behaviour: MockBehaviour) -> Self {
        Self { mock_behaviour: Some(behaviour), ..Self::default() }
    }

    pub fn mock_behaviour_mut(&mut self) -> Option<&mut MockBehaviour> {
        self.mock_behaviour.as_mut()
    }

    /// How many successful writes this backend has received
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Peek at a slot, without going through the (possibly mocked) store API
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(|value| value.as_str())
    }

    /// Overwrite a slot, without going through the (possibly mocked) store API. This is useful to simulate corrupted data
    pub fn insert_raw<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.slots.insert(key.into(), value.into());
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.slots.iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryBackend {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        if let Some(behaviour) = &mut self.mock_behaviour {
            behaviour.can_get()?;
        }
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(behaviour) = &mut self.mock_behaviour {
            behaviour.can_set()?;
        }
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_string(), needed, quota });
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.write_count += 1;
        Ok(())
    }
}
