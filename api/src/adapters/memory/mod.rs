//! In-memory adapters
//!
//! Used when no `DATABASE_URL` is configured, and as the store in tests.

pub mod item_repo;

pub use item_repo::InMemoryItemRepository;
