//! Pivot Registry - Per-run deduplication of belongs-to-many declarations
//!
//! An explicit set of `(owning_table, partner_table)` pairs. One registry is
//! created per inference run; both directions of a many-to-many pair are
//! distinct entries, so `posts → tags` never suppresses `tags → posts`.

use std::collections::HashSet;

/// Tracks which (owner, partner) pivot pairs have already been emitted
/// within a single inference run
#[derive(Debug, Default)]
pub struct PivotRegistry {
    registered: HashSet<(String, String)>,
}

impl PivotRegistry {
    /// Create an empty registry for a fresh run
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an (owner, partner) pair. Returns true if the pair was new,
    /// false if a belongs-to-many for it was already emitted this run.
    pub fn register(&mut self, owner: &str, partner: &str) -> bool {
        self.registered
            .insert((owner.to_string(), partner.to_string()))
    }

    /// Whether the pair has already been registered this run
    pub fn contains(&self, owner: &str, partner: &str) -> bool {
        self.registered
            .contains(&(owner.to_string(), partner.to_string()))
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// True when nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}
