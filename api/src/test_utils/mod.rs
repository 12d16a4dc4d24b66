//! Test utilities
//!
//! Test fixtures and manual mock implementations of the store port.
//!
//! The in-memory store itself lives in `adapters::memory` since the binary
//! also runs on it; the mocks here wrap or replace it to observe and break
//! store behavior.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
