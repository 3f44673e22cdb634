//! Session store port: flat, durable key-value persistence between steps.
//!
//! Each wizard screen writes its own keys and later screens read them; no
//! transactions, no expiry, no namespacing beyond flat string keys.

/// Trait for the local key-value session store.
///
/// All data stays on this machine and is never transmitted.
pub trait SessionStore: Send + Sync {
    /// Error type for store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a string value under `key`, overwriting any previous value.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// The last written string value, or `None` if absent.
    ///
    /// # Errors
    /// Returns error if the store operation fails, or if the stored value is
    /// not valid UTF-8 (it was written with [`SessionStore::set_bytes`]).
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Persist raw bytes under `key` (captured media artifacts).
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), Self::Error>;

    /// The last written bytes, or `None` if absent.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Delete `key` if present. Deleting an absent key is not an error.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;

    /// Whether `key` currently holds a value.
    ///
    /// # Errors
    /// Returns error if the store operation fails.
    fn contains(&self, key: &str) -> Result<bool, Self::Error>;
}
