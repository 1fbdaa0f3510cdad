//! Built-in skills
//!
//! Each skill exposes a `register` function taking the controller.
//! `utils` holds shared helpers and is intentionally absent from the catalog.

pub mod about;
pub mod fallback;
pub mod help;
pub mod utils;

use crate::infrastructure::plugins::{Skill, SkillCatalog};

/// Catalog of every skill compiled into the binary
pub fn catalog() -> SkillCatalog {
    SkillCatalog::new()
        .with(Skill::new("about", about::register).with_description("bot metadata"))
        .with(Skill::new("help", help::register).with_description("command listing"))
        .with(Skill::new("fallback", fallback::register).with_description("reply to unknown commands"))
}
