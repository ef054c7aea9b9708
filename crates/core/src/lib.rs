//! `budgetd-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP or runtime
//! concerns). Today that is just the shared error model.

pub mod error;

pub use error::{DomainError, DomainResult};
