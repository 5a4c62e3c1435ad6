//! timequiz-store — File-backed local storage.
//!
//! Provides [`FileStore`], a [`KeyValueStore`](timequiz_core::KeyValueStore)
//! that keeps every key in one JSON file, the terminal equivalent of a
//! browser's local storage.

pub mod file_store;

pub use file_store::FileStore;
