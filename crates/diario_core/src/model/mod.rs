//! Record shapes for the three diary collections.
//!
//! # Invariants
//! - Ids are unique within their own collection.
//! - Collections are independent; no record references another.
//! - Serialized field names match the on-device storage layout.

pub mod audio;
pub mod diary;
pub mod record;
pub mod task;
