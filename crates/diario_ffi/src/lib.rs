//! Flutter-facing bindings for the Diario core.

pub mod api;
