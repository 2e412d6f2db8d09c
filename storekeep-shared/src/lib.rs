//! Shared wire models for the Storekeep admin dashboard.
//!
//! Everything in this crate mirrors the JSON shapes produced and consumed
//! by the storefront backend. Models are plain serde structs; no entity is
//! cached between calls, so each one is a snapshot replaced wholesale on
//! every fetch.

pub mod models;
