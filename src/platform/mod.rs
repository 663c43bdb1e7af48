//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Key/value storage (files on native, LocalStorage on web)
//! - The browser entry point and frame hook

pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use storage::{KeyValueStore, MemoryStore, StorageError};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
