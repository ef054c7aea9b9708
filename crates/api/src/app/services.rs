//! Shared-state wiring for the HTTP layer.
//!
//! The ledger store itself is synchronous and single-owner; axum serves
//! requests from multiple worker threads, so every handler goes through
//! one process-wide lock. Mutating handlers take the write lock, reads
//! take the read lock for strict consistency.

use std::sync::{Arc, RwLock};

use budgetd_ledger::LedgerStore;

/// Handle the router carries as an `Extension`.
pub type SharedStore = Arc<RwLock<LedgerStore>>;

/// Fresh, empty store: zero budget, no envelopes.
pub fn build_store() -> SharedStore {
    Arc::new(RwLock::new(LedgerStore::new()))
}
