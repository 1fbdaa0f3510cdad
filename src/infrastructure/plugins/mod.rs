//! Skill plugin system
//!
//! Skills are compiled into the binary and listed in a [`SkillCatalog`].
//! At startup the [`SkillLoader`] resolves a list of entries (a directory
//! listing or the whole catalog) and lets each skill register its commands
//! on the shared controller.

pub mod loader;
pub mod registry;

pub use loader::{LoadOutcome, LoadReport, SkillEntry, SkillLoader};
pub use registry::{Registrar, Skill, SkillCatalog};
