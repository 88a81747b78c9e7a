//! # Persistence Port
//!
//! [`SnippetStorage`] is the boundary between the engine and wherever the
//! collection lives durably. The store loads once at startup and writes the
//! whole collection back after every successful mutation.
//!
//! - [`fs::FileStorage`]: one JSON array on disk, written atomically.
//! - [`memory::MemStorage`]: in-memory, for tests; counts saves and can be told
//!   to fail.

use crate::error::Result;
use crate::model::Snippet;

pub mod fs;
pub mod memory;

/// Raw load/save of the whole collection.
pub trait SnippetStorage {
    /// Returns the persisted collection. A backend with nothing stored yet
    /// returns an empty vector, not an error.
    fn load(&self) -> Result<Vec<Snippet>>;

    /// Replaces the persisted collection. MUST be all-or-nothing.
    fn save(&self, items: &[Snippet]) -> Result<()>;
}
