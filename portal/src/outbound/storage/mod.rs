//! Durable store adapters.

mod directory;
mod memory;

pub use directory::DirectoryDurableStore;
pub use memory::InMemoryDurableStore;
