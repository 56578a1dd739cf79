pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod key_value_store;
pub(crate) mod memory_store;

pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;

/// Storage key the authorization token is kept under.
pub const TOKEN_KEY: &str = "token";
