use crate::error::StorageError;

/// A durable medium that maps string keys to string values, such as a browser local storage.
pub trait KeyValueStore {
    /// Returns the value of a slot, or `None` if this slot has never been written
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value of a slot
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
