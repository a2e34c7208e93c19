//! In-memory backend for the Roster record store.
//!
//! The whole collection lives behind one [`tokio::sync::RwLock`]; nothing is
//! persisted across restarts.

mod store;

pub use store::MemoryStore;
