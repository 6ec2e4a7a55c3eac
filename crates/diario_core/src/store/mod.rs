//! Local key-value storage.
//!
//! # Responsibility
//! - Persist opaque string blobs under fixed collection keys.
//! - Keep SQL out of the collection repositories.
//!
//! # Invariants
//! - `set` replaces the whole blob; there are no partial writes.
//! - A missing key reads as `None`, never as an empty string.

pub mod kv_store;
