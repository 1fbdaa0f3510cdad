//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Context: the immutable bot identity and the command enricher
//! - Errors: Domain-specific errors
//! - Messaging: Controller, parsing and dispatch

pub mod context;
pub mod errors;
pub mod messaging;
