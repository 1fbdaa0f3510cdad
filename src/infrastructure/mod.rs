//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Plugins: Skill catalog and loader
//! - Server: Healthcheck and webhook endpoints
//! - Adapters: Platform integrations

pub mod config;
pub mod plugins;
pub mod server;
pub mod adapters;
