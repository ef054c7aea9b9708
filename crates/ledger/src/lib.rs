//! `budgetd-ledger` — the in-memory envelope ledger.
//!
//! Holds the total budget and the ordered set of named envelopes, and
//! enforces budget conservation: the sum of all envelope amounts never
//! exceeds the total budget. All operations validate before they mutate,
//! so a failed call leaves the store untouched.

pub mod store;

pub use store::{Envelope, LedgerStore};
