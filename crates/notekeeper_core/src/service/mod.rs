//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls inside transaction scopes.
//! - Keep API layers decoupled from storage details and raw driver errors.

pub mod notes_service;
