//! Collection repositories over the key-value store.
//!
//! # Responsibility
//! - Load, mutate and persist whole collection arrays.
//! - Map storage and decoding failures into semantic errors.
//!
//! # Invariants
//! - Every write validates the records it persists.
//! - Reads reject corrupt or inconsistent state instead of masking it.

pub mod list_repo;
