//! Repository Layer
//!
//! Key-value storage backends and typed JSON accessors on top of them.

mod traits;
mod memory;
mod slot;
mod storage;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use slot::StorageSlot;
pub use storage::StorageService;
pub use crate::domain::StorageError;
