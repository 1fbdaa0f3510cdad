//! Domain layer - Core business objects
//!
//! This layer contains:
//! - Entities: Message, RoomType, Command
//! - Traits: Abstractions for infrastructure (Bot)

pub mod entities;
pub mod traits;
