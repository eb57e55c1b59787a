//! Session persistence: a tagged JSON codec over a single-key substrate.

pub mod codec;
pub mod memory;
pub mod sqlite;
pub mod substrate;

pub use codec::SessionStore;
pub use memory::MemorySubstrate;
pub use sqlite::SqliteSubstrate;
pub use substrate::KeyValueSubstrate;
