//! Flat domain records and the request payloads that create them.
//!
//! # Invariants
//! - Every entity is identified by an application-generated short ID.
//! - IDs are assigned once at construction and never change.

pub mod note;
pub mod user;
